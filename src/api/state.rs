//! Application state for shared services

use std::sync::Arc;

use crate::api::types::ExportDefaults;
use crate::domain::{DocumentSource, DomainError, ExportOutcome, ExportRequest};
use crate::infrastructure::services::ExportService;

#[cfg(test)]
use mockall::automock;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub export_service: Arc<dyn ExportServiceTrait>,
    pub defaults: Arc<ExportDefaults>,
}

impl AppState {
    pub fn new(export_service: Arc<dyn ExportServiceTrait>, defaults: ExportDefaults) -> Self {
        Self {
            export_service,
            defaults: Arc::new(defaults),
        }
    }
}

/// Trait for export service operations
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ExportServiceTrait: Send + Sync {
    async fn export(&self, request: ExportRequest) -> Result<ExportOutcome, DomainError>;
}

#[async_trait::async_trait]
impl<S: DocumentSource + 'static> ExportServiceTrait for ExportService<S> {
    async fn export(&self, request: ExportRequest) -> Result<ExportOutcome, DomainError> {
        ExportService::export(self, request).await
    }
}
