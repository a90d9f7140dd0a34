//! Mongo Data Extractor
//!
//! Filters a MongoDB collection and turns the matching documents into a
//! downloadable report:
//! - Extended JSON filter criteria
//! - CSV and Excel (XLSX) exports
//! - Browser UI, JSON API and a headless CLI

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use api::types::ExportDefaults;
use infrastructure::mongo::MongoDocumentSource;
use infrastructure::services::ExportService;

/// Build the export service backed by MongoDB
pub fn create_export_service(config: &AppConfig) -> ExportService<MongoDocumentSource> {
    ExportService::new(Arc::new(MongoDocumentSource::new(&config.mongo)))
}

/// Create application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    AppState::new(
        Arc::new(create_export_service(config)),
        ExportDefaults::from(config),
    )
}
