use serde::Deserialize;

use crate::domain::export::{ConnectionParams, ExportFormat, DEFAULT_FILTER};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub mongo: MongoConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the browser UI
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// MongoDB connection defaults and client tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub default_uri: String,
    pub default_database: String,
    pub default_collection: String,
    pub server_selection_timeout_ms: u64,
    pub app_name: String,
    /// Upper bound on fetched documents, unlimited when unset
    pub max_documents: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub default_filter: String,
    pub default_format: ExportFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub tracing: TracingConfig,
    pub metrics: MetricsConfig,
}

/// OTLP span export, off unless a collector is configured
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    pub enabled: bool,
    pub otlp_endpoint: String,
    pub service_name: String,
    /// Fraction of root spans kept, clamped to 0.0..=1.0
    pub sampling_ratio: f64,
}

/// Prometheus scrape endpoint for export and HTTP counters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            static_dir: "public".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            default_uri: "mongodb://chewy.marketmedium.net:27085/".to_string(),
            default_database: "effiser".to_string(),
            default_collection: "efsr_transactions_archive".to_string(),
            server_selection_timeout_ms: 5000,
            app_name: "mongo-extractor".to_string(),
            max_documents: None,
        }
    }
}

impl MongoConfig {
    pub fn default_connection(&self) -> ConnectionParams {
        ConnectionParams::new(
            self.default_uri.clone(),
            self.default_database.clone(),
            self.default_collection.clone(),
        )
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            default_format: ExportFormat::Csv,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            service_name: "mongo-extractor".to_string(),
            sampling_ratio: 1.0,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_binds_all_interfaces_on_8501() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn test_default_mongo_settings() {
        let config = MongoConfig::default();
        assert_eq!(config.server_selection_timeout_ms, 5000);
        assert_eq!(config.default_database, "effiser");
        assert_eq!(config.default_collection, "efsr_transactions_archive");
        assert!(config.max_documents.is_none());
        assert!(config.default_connection().validate().is_ok());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[mongo]\ndefault_database = \"reports\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.mongo.default_database, "reports");
        assert_eq!(config.mongo.server_selection_timeout_ms, 5000);
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.export.default_format, ExportFormat::Csv);
        assert!(config.observability.metrics.enabled);
    }

    #[test]
    fn test_default_observability_exports_metrics_only() {
        let config = ObservabilityConfig::default();

        assert!(!config.tracing.enabled);
        assert_eq!(config.tracing.service_name, "mongo-extractor");
        assert_eq!(config.tracing.sampling_ratio, 1.0);
        assert_eq!(config.metrics.path, "/metrics");
    }

    #[test]
    fn test_partial_observability_section() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[observability.tracing]\nenabled = true\nsampling_ratio = 0.25\n\n[observability.metrics]\npath = \"/internal/metrics\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.observability.tracing.enabled);
        assert_eq!(config.observability.tracing.sampling_ratio, 0.25);
        assert_eq!(config.observability.tracing.otlp_endpoint, "http://localhost:4317");
        assert_eq!(config.observability.metrics.path, "/internal/metrics");
        assert!(config.observability.metrics.enabled);
    }
}
