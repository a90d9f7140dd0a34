use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    #[error("Connection timeout: {message}")]
    ConnectionTimeout { message: String },

    #[error("Operation failure: {message}")]
    Operation { message: String },

    #[error("Export error: {format} - {message}")]
    Export { format: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    pub fn connection_timeout(message: impl Into<String>) -> Self {
        Self::ConnectionTimeout {
            message: message.into(),
        }
    }

    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation {
            message: message.into(),
        }
    }

    pub fn export(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Short label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::InvalidFilter { .. } => "invalid_filter",
            Self::ConnectionTimeout { .. } => "connection_timeout",
            Self::Operation { .. } => "operation_failure",
            Self::Export { .. } => "export",
            Self::Internal { .. } => "internal",
        }
    }
}
