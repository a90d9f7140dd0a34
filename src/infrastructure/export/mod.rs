//! Table writers for the supported export formats

mod csv_writer;
mod xlsx_writer;

pub use csv_writer::CsvTableWriter;
pub use xlsx_writer::XlsxTableWriter;
