//! Excel (XLSX) table writer

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::{Cell, DomainError, Table, TableWriter};

/// Worksheet row limit, header included
const MAX_SHEET_ROWS: usize = 1_048_576;
/// Worksheet column limit
const MAX_SHEET_COLUMNS: usize = 16_384;
/// Longest string a single cell may hold
const MAX_CELL_CHARS: usize = 32_767;

/// Writes a single `Sheet1` worksheet with a bold header row
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxTableWriter;

impl XlsxTableWriter {
    pub fn new() -> Self {
        Self
    }
}

fn xlsx_error(err: XlsxError) -> DomainError {
    DomainError::export("excel", err.to_string())
}

fn fit_cell_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl TableWriter for XlsxTableWriter {
    fn write(&self, table: &Table) -> Result<Vec<u8>, DomainError> {
        if table.len() + 1 > MAX_SHEET_ROWS {
            return Err(DomainError::export(
                "excel",
                format!(
                    "{} records exceed the worksheet limit of {} rows; use CSV instead",
                    table.len(),
                    MAX_SHEET_ROWS - 1
                ),
            ));
        }

        if table.columns.len() > MAX_SHEET_COLUMNS {
            return Err(DomainError::export(
                "excel",
                format!(
                    "{} fields exceed the worksheet limit of {} columns; use CSV instead",
                    table.columns.len(),
                    MAX_SHEET_COLUMNS
                ),
            ));
        }

        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Sheet1").map_err(xlsx_error)?;

        for (col, name) in table.columns.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, fit_cell_text(name), &header)
                .map_err(xlsx_error)?;
        }

        for (idx, row) in table.rows.iter().enumerate() {
            let row_num = (idx + 1) as u32;

            for (col, cell) in row.iter().enumerate() {
                let col_num = col as u16;

                match cell {
                    Cell::Empty => {}
                    Cell::Text(text) => {
                        worksheet
                            .write_string(row_num, col_num, fit_cell_text(text))
                            .map_err(xlsx_error)?;
                    }
                    Cell::Integer(value) => {
                        worksheet
                            .write_number(row_num, col_num, *value as f64)
                            .map_err(xlsx_error)?;
                    }
                    Cell::Float(value) if value.is_finite() => {
                        worksheet
                            .write_number(row_num, col_num, *value)
                            .map_err(xlsx_error)?;
                    }
                    Cell::Float(value) => {
                        worksheet
                            .write_string(row_num, col_num, value.to_string())
                            .map_err(xlsx_error)?;
                    }
                    Cell::Boolean(value) => {
                        worksheet
                            .write_boolean(row_num, col_num, *value)
                            .map_err(xlsx_error)?;
                    }
                }
            }
        }

        workbook.save_to_buffer().map_err(xlsx_error)
    }
}
