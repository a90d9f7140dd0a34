//! Flattening fetched documents into a rectangular table

use std::collections::HashSet;

use bson::{Bson, Document};

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Cell {
    /// Convert a top-level BSON value into a cell
    pub fn from_bson(value: &Bson) -> Self {
        match value {
            Bson::Null | Bson::Undefined => Self::Empty,
            Bson::String(s) => Self::Text(s.clone()),
            Bson::Int32(i) => Self::Integer(i64::from(*i)),
            Bson::Int64(i) => Self::Integer(*i),
            Bson::Double(f) => Self::Float(*f),
            Bson::Boolean(b) => Self::Boolean(*b),
            Bson::ObjectId(oid) => Self::Text(oid.to_hex()),
            Bson::DateTime(dt) => Self::Text(format_datetime(dt)),
            Bson::Symbol(s) => Self::Text(s.clone()),
            other => Self::Text(other.clone().into_relaxed_extjson().to_string()),
        }
    }

    /// Text rendering used by text based formats
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.1}", f),
            Self::Float(f) => f.to_string(),
            Self::Boolean(b) => b.to_string(),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` in UTC, with milliseconds only when present
fn format_datetime(dt: &bson::DateTime) -> String {
    let utc: chrono::DateTime<chrono::Utc> = dt.to_chrono();

    if dt.timestamp_millis().rem_euclid(1000) == 0 {
        utc.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        utc.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }
}

/// Documents laid out as rows under a shared header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Columns are the union of field names in first-seen order.
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for document in documents {
            for key in document.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = documents
            .iter()
            .map(|document| {
                columns
                    .iter()
                    .map(|column| document.get(column).map_or(Cell::Empty, Cell::from_bson))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn test_columns_follow_first_appearance() {
        let docs = vec![
            doc! { "b": 1, "a": 2 },
            doc! { "a": 3, "c": 4 },
        ];

        let table = Table::from_documents(&docs);
        assert_eq!(table.columns, vec!["b", "a", "c"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let docs = vec![doc! { "a": 1 }, doc! { "b": "x" }];

        let table = Table::from_documents(&docs);
        assert_eq!(table.rows[0], vec![Cell::Integer(1), Cell::Empty]);
        assert_eq!(table.rows[1], vec![Cell::Empty, Cell::Text("x".to_string())]);
    }

    #[test]
    fn test_object_id_is_hex_string() {
        let oid = ObjectId::parse_str("65f1a2b3c4d5e6f708192a3b").unwrap();
        let table = Table::from_documents(&[doc! { "_id": oid, "name": "receipt" }]);

        assert_eq!(
            table.rows[0][0],
            Cell::Text("65f1a2b3c4d5e6f708192a3b".to_string())
        );
    }

    #[test]
    fn test_scalar_conversions() {
        let table = Table::from_documents(&[doc! {
            "i32": 7_i32,
            "i64": 9_000_000_000_i64,
            "f": 1.5,
            "ok": true,
            "none": Bson::Null,
        }]);

        assert_eq!(
            table.rows[0],
            vec![
                Cell::Integer(7),
                Cell::Integer(9_000_000_000),
                Cell::Float(1.5),
                Cell::Boolean(true),
                Cell::Empty,
            ]
        );
    }

    #[test]
    fn test_datetime_formatting() {
        let whole = bson::DateTime::from_millis(1_709_251_200_000);
        let fractional = bson::DateTime::from_millis(1_709_251_200_250);

        assert_eq!(
            Cell::from_bson(&Bson::DateTime(whole)).to_text(),
            "2024-03-01 00:00:00"
        );
        assert_eq!(
            Cell::from_bson(&Bson::DateTime(fractional)).to_text(),
            "2024-03-01 00:00:00.250"
        );
    }

    #[test]
    fn test_nested_values_become_json() {
        let table = Table::from_documents(&[doc! {
            "lines": [1, 2],
            "vendor": { "code": "V1" },
        }]);

        assert_eq!(table.rows[0][0].to_text(), "[1,2]");
        assert_eq!(table.rows[0][1].to_text(), r#"{"code":"V1"}"#);
    }

    #[test]
    fn test_whole_floats_keep_decimal_point() {
        assert_eq!(Cell::Float(1.0).to_text(), "1.0");
        assert_eq!(Cell::Float(-250.0).to_text(), "-250.0");
        assert_eq!(Cell::Float(1.5).to_text(), "1.5");
        assert_eq!(Cell::Integer(1).to_text(), "1");
        assert_eq!(Cell::Float(f64::NAN).to_text(), "NaN");
    }

    #[test]
    fn test_repeated_keys_across_many_documents() {
        let docs: Vec<Document> = (0..100)
            .map(|i| doc! { "_id": i, "QTY": i * 2, "note": "x" })
            .collect();

        let table = Table::from_documents(&docs);
        assert_eq!(table.columns, vec!["_id", "QTY", "note"]);
        assert_eq!(table.len(), 100);
    }

    #[test]
    fn test_empty_input() {
        let table = Table::from_documents(&[]);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
