//! JSON error envelope returned by the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::export::NO_RECORDS_MESSAGE;
use crate::domain::DomainError;

pub const CONNECTION_TIMEOUT_MESSAGE: &str =
    "Connection Timeout: Could not connect to MongoDB host. Check your VPN or Host settings.";
pub const OPERATION_FAILURE_MESSAGE: &str = "Authentication or Database Error.";

/// Broad error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    UpstreamError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::UpstreamError => write!(f, "upstream_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Underlying driver or parser message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    code: None,
                    details: None,
                },
            },
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.response.error.details = Some(details.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    /// The filter matched nothing
    pub fn no_records() -> Self {
        Self::not_found(NO_RECORDS_MESSAGE).with_code("no_records")
    }

    pub fn code(&self) -> Option<&str> {
        self.response.error.code.as_deref()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => {
                Self::bad_request(message).with_code("validation_error")
            }
            DomainError::InvalidFilter { message } => Self::bad_request(format!(
                "Invalid JSON format in Filter Criteria: {}",
                message
            ))
            .with_code("invalid_filter"),
            DomainError::ConnectionTimeout { message } => Self::new(
                StatusCode::GATEWAY_TIMEOUT,
                ApiErrorType::UpstreamError,
                CONNECTION_TIMEOUT_MESSAGE,
            )
            .with_code("connection_timeout")
            .with_details(message),
            DomainError::Operation { message } => Self::new(
                StatusCode::BAD_GATEWAY,
                ApiErrorType::UpstreamError,
                OPERATION_FAILURE_MESSAGE,
            )
            .with_code("operation_failure")
            .with_details(message),
            DomainError::Export { format, message } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorType::InvalidRequestError,
                format!("Could not generate {} export: {}", format, message),
            )
            .with_code("export_error"),
            DomainError::Internal { message } => {
                Self::internal(format!("An unexpected error occurred: {}", message))
                    .with_code("internal_error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}
