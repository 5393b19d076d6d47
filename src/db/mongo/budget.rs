//! MongoDB BudgetRepository implementation.

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{self, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::context::RequestContext;
use crate::db::{Budget, BudgetRepository, DbError, DbResult};

/// Budget as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub amount: f64,
    pub currency: String,
    pub last_updated: bson::DateTime,
}

impl TryFrom<BudgetDocument> for Budget {
    type Error = DbError;

    fn try_from(d: BudgetDocument) -> DbResult<Self> {
        let millis = d.last_updated.timestamp_millis();
        let last_updated =
            DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| DbError::Storage {
                message: format!("budget {}: last_updated out of range ({millis} ms)", d.id),
            })?;

        Ok(Self {
            id: d.id.to_hex(),
            name: d.name,
            amount: d.amount,
            currency: d.currency,
            last_updated,
        })
    }
}

/// Collection-backed budget repository.
///
/// Cheap to clone; the driver pools connections behind the collection handle.
#[derive(Debug, Clone)]
pub struct MongoBudgetRepository {
    collection: Option<Collection<BudgetDocument>>,
}

impl MongoBudgetRepository {
    pub fn new(collection: Collection<BudgetDocument>) -> Self {
        Self {
            collection: Some(collection),
        }
    }

    /// A repository whose storage handle was never established.
    pub fn disconnected() -> Self {
        Self { collection: None }
    }
}

impl BudgetRepository for MongoBudgetRepository {
    #[instrument(skip_all)]
    async fn get_all_budget(&self, ctx: &RequestContext) -> DbResult<Vec<Budget>> {
        let collection = self
            .collection
            .as_ref()
            .ok_or(DbError::ConnectionUnavailable)?;

        // Dropping the cursor (including when the context wins) kills it server-side.
        let query = async {
            let cursor = collection.find(doc! {}).await?;
            let documents: Vec<BudgetDocument> = cursor.try_collect().await?;
            Ok::<_, DbError>(documents)
        };
        let documents = ctx.run(query).await??;

        let budgets = documents
            .into_iter()
            .map(Budget::try_from)
            .collect::<DbResult<Vec<_>>>()?;

        debug!(
            collection = collection.name(),
            count = budgets.len(),
            "loaded budgets"
        );
        Ok(budgets)
    }
}
