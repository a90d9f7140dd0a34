//! HTTP API types

pub mod error;
pub mod export;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use export::{ExportDefaults, ExportRequestBody, FormatOption};
pub use json::Json;
