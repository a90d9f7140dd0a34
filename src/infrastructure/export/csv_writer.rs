//! CSV table writer

use crate::domain::{DomainError, Table, TableWriter};

/// Writes a header row followed by one record per row, without an index column
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvTableWriter;

impl CsvTableWriter {
    pub fn new() -> Self {
        Self
    }
}

impl TableWriter for CsvTableWriter {
    fn write(&self, table: &Table) -> Result<Vec<u8>, DomainError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(&table.columns)
            .map_err(|e| DomainError::export("csv", e.to_string()))?;

        for row in &table.rows {
            writer
                .write_record(row.iter().map(|cell| cell.to_text()))
                .map_err(|e| DomainError::export("csv", e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| DomainError::export("csv", e.to_string()))
    }
}
