//! Export API request/response types

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::domain::{ConnectionParams, ExportFormat, ExportRequest};

/// Body of `POST /api/export`. Omitted fields fall back to configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRequestBody {
    pub uri: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
    /// Filter criteria as JSON text
    pub filter: Option<String>,
    pub format: Option<ExportFormat>,
}

impl ExportRequestBody {
    pub fn into_request(self, defaults: &ExportDefaults) -> ExportRequest {
        ExportRequest {
            connection: ConnectionParams::new(
                self.uri.unwrap_or_else(|| defaults.uri.clone()),
                self.database.unwrap_or_else(|| defaults.database.clone()),
                self.collection.unwrap_or_else(|| defaults.collection.clone()),
            ),
            filter: self.filter.unwrap_or_else(|| defaults.filter.clone()),
            format: self.format.unwrap_or(defaults.format),
        }
    }
}

/// Values pre-filled into the UI form
#[derive(Debug, Clone, Serialize)]
pub struct ExportDefaults {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub filter: String,
    pub format: ExportFormat,
    pub formats: Vec<FormatOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatOption {
    pub value: ExportFormat,
    pub label: &'static str,
    pub file_name: String,
}

impl From<&AppConfig> for ExportDefaults {
    fn from(config: &AppConfig) -> Self {
        Self {
            uri: config.mongo.default_uri.clone(),
            database: config.mongo.default_database.clone(),
            collection: config.mongo.default_collection.clone(),
            filter: config.export.default_filter.clone(),
            format: config.export.default_format,
            formats: ExportFormat::ALL
                .iter()
                .map(|format| FormatOption {
                    value: *format,
                    label: format.label(),
                    file_name: format.file_name(),
                })
                .collect(),
        }
    }
}
