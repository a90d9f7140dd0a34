//! Domain layer - Core export logic and entities

pub mod error;
pub mod export;

pub use error::DomainError;
pub use export::{
    parse_filter, Cell, ConnectionParams, DocumentSource, ExportFile, ExportFormat, ExportOutcome,
    ExportRequest, Table, TableWriter,
};
