//! MongoDB-backed document source

use std::time::Duration;

use async_trait::async_trait;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client};
use tracing::{debug, info, warn};

use super::error::map_mongo_error;
use crate::config::MongoConfig;
use crate::domain::{ConnectionParams, DocumentSource, DomainError};

/// Opens a fresh client per fetch and always shuts it down afterwards
#[derive(Debug, Clone)]
pub struct MongoDocumentSource {
    server_selection_timeout: Duration,
    app_name: String,
    max_documents: Option<i64>,
}

impl MongoDocumentSource {
    pub fn new(config: &MongoConfig) -> Self {
        Self {
            server_selection_timeout: Duration::from_millis(config.server_selection_timeout_ms),
            app_name: config.app_name.clone(),
            max_documents: config.max_documents.filter(|limit| *limit > 0),
        }
    }

    async fn connect(&self, connection: &ConnectionParams) -> Result<Client, DomainError> {
        let mut options = ClientOptions::parse(connection.uri.trim())
            .await
            .map_err(map_mongo_error)?;

        options.server_selection_timeout = Some(self.server_selection_timeout);
        options.app_name = Some(self.app_name.clone());

        Client::with_options(options).map_err(map_mongo_error)
    }

    async fn query(
        &self,
        client: &Client,
        connection: &ConnectionParams,
        filter: Document,
    ) -> Result<Vec<Document>, DomainError> {
        // Server selection is lazy; ping forces it so unreachable hosts fail fast
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;

        info!("Connection successful.");

        let collection = client
            .database(&connection.database)
            .collection::<Document>(&connection.collection);

        info!(
            collection = %connection.collection,
            filter = %filter,
            "Querying collection"
        );

        let mut find = collection.find(filter);

        if let Some(limit) = self.max_documents {
            debug!(limit, "Applying document limit");
            find = find.limit(limit);
        }

        let cursor = find.await.map_err(map_mongo_error)?;
        let documents: Vec<Document> = cursor.try_collect().await.map_err(map_mongo_error)?;

        if self.max_documents == Some(documents.len() as i64) {
            warn!(
                limit = documents.len(),
                "Result reached the configured document limit and may be truncated"
            );
        }

        Ok(documents)
    }
}

#[async_trait]
impl DocumentSource for MongoDocumentSource {
    async fn fetch(
        &self,
        connection: &ConnectionParams,
        filter: Document,
    ) -> Result<Vec<Document>, DomainError> {
        info!("Attempting to connect to {}...", connection.redacted_uri());

        let client = self.connect(connection).await?;
        let result = self.query(&client, connection, filter).await;

        client.shutdown().await;
        info!("MongoDB connection closed.");

        result
    }
}
