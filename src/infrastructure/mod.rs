//! Infrastructure layer - External service implementations

pub mod export;
pub mod logging;
pub mod mongo;
pub mod observability;
pub mod services;
