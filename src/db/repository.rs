//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use crate::context::RequestContext;
use crate::db::{DbResult, models::Budget};

/// Read access to budgets.
pub trait BudgetRepository: Send + Sync + 'static {
    /// Get every stored budget in the engine's natural order.
    ///
    /// Honors `ctx`: an already-dead context fails without querying, and a
    /// context that ends mid-query abandons the query.
    fn get_all_budget(
        &self,
        ctx: &RequestContext,
    ) -> impl Future<Output = DbResult<Vec<Budget>>> + Send;
}

/// Liveness probe for the storage connection.
pub trait StorageHealth: Send + Sync + 'static {
    /// Round-trip to the storage engine.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;
}
