//! MongoDB client setup and lifecycle.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::info;

use super::budget::MongoBudgetRepository;
use crate::db::{DbError, DbResult, StorageHealth};

/// Connected MongoDB database.
///
/// Clones share the same pooled client.
#[derive(Debug, Clone)]
pub struct MongoDatabase {
    client: Client,
    database: Database,
}

impl MongoDatabase {
    /// Connect and ping, failing if either step exceeds `timeout`.
    pub async fn connect(uri: &str, db_name: &str, timeout: Duration) -> DbResult<Self> {
        let connect = async {
            let mut options = ClientOptions::parse(uri).await?;
            options.connect_timeout = Some(timeout);
            options.server_selection_timeout = Some(timeout);
            options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

            let client = Client::with_options(options)?;
            let database = client.database(db_name);
            database.run_command(doc! { "ping": 1 }).await?;
            Ok::<_, mongodb::error::Error>(Self { client, database })
        };

        let db = tokio::time::timeout(timeout, connect)
            .await
            .map_err(|_| DbError::Connection {
                message: format!("no response from MongoDB within {timeout:?}"),
            })?
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        info!(database = db_name, "connected to MongoDB");
        Ok(db)
    }

    /// Repository over the named collection.
    pub fn budgets(&self, collection: &str) -> MongoBudgetRepository {
        MongoBudgetRepository::new(self.database.collection(collection))
    }

    /// Close the client's connection pools.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }

    #[cfg(test)]
    pub(crate) fn database(&self) -> &Database {
        &self.database
    }
}

impl StorageHealth for MongoDatabase {
    async fn ping(&self) -> DbResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
