//! Export service - filter, fetch, tabulate and render a download

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument, warn};

use crate::domain::export::NO_RECORDS_MESSAGE;
use crate::domain::{
    parse_filter, DocumentSource, DomainError, ExportFile, ExportFormat, ExportOutcome,
    ExportRequest, Table, TableWriter,
};
use crate::infrastructure::export::{CsvTableWriter, XlsxTableWriter};
use crate::infrastructure::observability::{record_export, ExportMetricParams};

/// Runs exports against a document source
#[derive(Debug)]
pub struct ExportService<S: DocumentSource> {
    source: Arc<S>,
}

impl<S: DocumentSource> ExportService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Run one export. An empty match is reported as `ExportOutcome::Empty`.
    #[instrument(
        skip(self, request),
        fields(
            database = %request.connection.database,
            collection = %request.connection.collection,
            format = %request.format
        )
    )]
    pub async fn export(&self, request: ExportRequest) -> Result<ExportOutcome, DomainError> {
        let start = Instant::now();
        let format = request.format;
        let result = self.run(request).await;

        let (status, records) = match &result {
            Ok(ExportOutcome::File(file)) => ("success", file.record_count),
            Ok(ExportOutcome::Empty) => ("empty", 0),
            Err(e) => (e.kind(), 0),
        };

        record_export(ExportMetricParams {
            format: &format.to_string(),
            status,
            records,
            duration: start.elapsed(),
        });

        result
    }

    async fn run(&self, request: ExportRequest) -> Result<ExportOutcome, DomainError> {
        request.connection.validate()?;

        let filter = parse_filter(&request.filter).inspect_err(|e| {
            error!("Invalid JSON input: {}", e);
        })?;

        let documents = self
            .source
            .fetch(&request.connection, filter)
            .await
            .inspect_err(|e| error!(kind = e.kind(), "Fetch failed: {}", e))?;

        if documents.is_empty() {
            warn!("{}", NO_RECORDS_MESSAGE);
            return Ok(ExportOutcome::Empty);
        }

        info!("Retrieved {} records.", documents.len());

        let record_count = documents.len();
        let table = Table::from_documents(&documents);
        drop(documents);

        let bytes = render(request.format, table).await?;

        info!(
            bytes = bytes.len(),
            file_name = %request.format.file_name(),
            "Export file generated successfully."
        );

        Ok(ExportOutcome::File(ExportFile::new(
            request.format,
            bytes,
            record_count,
        )))
    }
}

fn writer_for(format: ExportFormat) -> Arc<dyn TableWriter> {
    match format {
        ExportFormat::Csv => Arc::new(CsvTableWriter::new()),
        ExportFormat::Excel => Arc::new(XlsxTableWriter::new()),
    }
}

/// Serialization is CPU bound, so it runs off the async workers
async fn render(format: ExportFormat, table: Table) -> Result<Vec<u8>, DomainError> {
    let writer = writer_for(format);

    tokio::task::spawn_blocking(move || writer.write(&table))
        .await
        .map_err(|e| DomainError::internal(format!("Export task failed: {}", e)))?
}
