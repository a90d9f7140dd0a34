//! Export command - one export written straight to disk

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::export::NO_RECORDS_MESSAGE;
use crate::domain::{ConnectionParams, ExportFormat, ExportOutcome, ExportRequest};
use crate::infrastructure::logging::init_cli_logging;

/// Arguments for the export command. Omitted values use the configured defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    /// MongoDB connection string
    #[arg(long)]
    pub uri: Option<String>,

    #[arg(long)]
    pub database: Option<String>,

    #[arg(long)]
    pub collection: Option<String>,

    /// Filter criteria as JSON text
    #[arg(long, conflicts_with = "filter_file")]
    pub filter: Option<String>,

    /// File containing the filter criteria
    #[arg(long)]
    pub filter_file: Option<PathBuf>,

    /// csv or excel
    #[arg(long)]
    pub format: Option<ExportFormat>,

    /// Output path; defaults to the standard export file name
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run a single export
pub async fn run(args: ExportArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_cli_logging(&config.logging);

    let request = build_request(&args, &config)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(request.format.file_name()));

    let service = crate::create_export_service(&config);

    match service.export(request).await? {
        ExportOutcome::File(file) => {
            write_output(&output, &file.bytes).await?;
            println!(
                "Successfully fetched {} records -> {}",
                file.record_count,
                output.display()
            );
        }
        ExportOutcome::Empty => {
            warn!("{}", NO_RECORDS_MESSAGE);
            println!("{}", NO_RECORDS_MESSAGE);
        }
    }

    Ok(())
}

fn build_request(args: &ExportArgs, config: &AppConfig) -> anyhow::Result<ExportRequest> {
    let filter = match (&args.filter, &args.filter_file) {
        (Some(filter), _) => filter.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read filter file {}", path.display()))?,
        (None, None) => config.export.default_filter.clone(),
    };

    Ok(ExportRequest {
        connection: ConnectionParams::new(
            args.uri.clone().unwrap_or_else(|| config.mongo.default_uri.clone()),
            args.database
                .clone()
                .unwrap_or_else(|| config.mongo.default_database.clone()),
            args.collection
                .clone()
                .unwrap_or_else(|| config.mongo.default_collection.clone()),
        ),
        filter,
        format: args.format.unwrap_or(config.export.default_format),
    })
}

async fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_uses_defaults() {
        let request = build_request(&ExportArgs::default(), &AppConfig::default()).unwrap();

        assert_eq!(request.connection.database, "effiser");
        assert_eq!(request.format, ExportFormat::Csv);
        assert!(request.filter.contains("JOB_INTG_NAME"));
    }

    #[test]
    fn test_build_request_prefers_arguments() {
        let args = ExportArgs {
            collection: Some("orders".to_string()),
            filter: Some(r#"{"status": "open"}"#.to_string()),
            format: Some(ExportFormat::Excel),
            ..ExportArgs::default()
        };

        let request = build_request(&args, &AppConfig::default()).unwrap();
        assert_eq!(request.connection.collection, "orders");
        assert_eq!(request.filter, r#"{"status": "open"}"#);
        assert_eq!(request.format, ExportFormat::Excel);
    }

    #[test]
    fn test_build_request_reads_filter_file() {
        let path = std::env::temp_dir().join(format!("filter-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{"BUYING_SOURCE": "DC"}"#).unwrap();

        let args = ExportArgs {
            filter_file: Some(path.clone()),
            ..ExportArgs::default()
        };
        let request = build_request(&args, &AppConfig::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(request.filter, r#"{"BUYING_SOURCE": "DC"}"#);
    }

    #[test]
    fn test_build_request_missing_filter_file() {
        let args = ExportArgs {
            filter_file: Some(PathBuf::from("/nonexistent/filter.json")),
            ..ExportArgs::default()
        };

        assert!(build_request(&args, &AppConfig::default()).is_err());
    }
}
