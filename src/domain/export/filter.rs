//! Filter criteria parsing
//!
//! Filters are entered as JSON text. MongoDB Extended JSON wrappers such as
//! `{"$oid": ...}` or `{"$date": ...}` are converted to their BSON types so
//! that ObjectIds and dates can be matched exactly.

use bson::{Bson, Document};

use crate::domain::DomainError;

/// Default filter shown in the UI when nothing is configured
pub const DEFAULT_FILTER: &str = r#"{
    "JOB_INTG_NAME": "STOCKRECEIPT_INTF",
    "BUYING_SOURCE": ""
}"#;

/// Parse filter text into a query document. Blank text matches everything.
pub fn parse_filter(text: &str) -> Result<Document, DomainError> {
    if text.trim().is_empty() {
        return Ok(Document::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DomainError::invalid_filter(e.to_string()))?;

    if !value.is_object() {
        return Err(DomainError::invalid_filter(
            "Filter criteria must be a JSON object",
        ));
    }

    match Bson::try_from(value) {
        Ok(Bson::Document(document)) => Ok(document),
        Ok(other) => Err(DomainError::invalid_filter(format!(
            "Filter criteria must be a document, got {:?}",
            other.element_type()
        ))),
        Err(e) => Err(DomainError::invalid_filter(e.to_string())),
    }
}
