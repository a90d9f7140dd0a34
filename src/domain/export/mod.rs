//! Export domain - filters, tables and file formats

mod filter;
mod format;
mod request;
mod source;
mod table;

pub use filter::{parse_filter, DEFAULT_FILTER};
pub use format::ExportFormat;
pub use request::{
    redact_uri, ConnectionParams, ExportFile, ExportOutcome, ExportRequest, NO_RECORDS_MESSAGE,
};
pub use source::{DocumentSource, TableWriter};
pub use table::{Cell, Table};

#[cfg(test)]
pub use source::MockDocumentSource;
