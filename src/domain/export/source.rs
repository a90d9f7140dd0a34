//! Seams between the export pipeline and its collaborators

use async_trait::async_trait;
use bson::Document;

use super::{ConnectionParams, Table};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Reads documents matching a filter from a collection
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches every document in `connection.collection` matching `filter`
    async fn fetch(
        &self,
        connection: &ConnectionParams,
        filter: Document,
    ) -> Result<Vec<Document>, DomainError>;
}

/// Serializes a table into the bytes of a downloadable file
pub trait TableWriter: Send + Sync {
    fn write(&self, table: &Table) -> Result<Vec<u8>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn test_mock_document_source() {
        let mut mock = MockDocumentSource::new();

        mock.expect_fetch()
            .returning(|_, _| Ok(vec![doc! { "a": 1 }]));

        let params = ConnectionParams::new("mongodb://localhost", "db", "coll");
        let result = mock.fetch(&params, Document::new()).await;
        assert_eq!(result.unwrap().len(), 1);
    }
}
