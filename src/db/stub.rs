//! In-memory stand-ins for the storage traits, shared by layer tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};

use crate::context::RequestContext;
use crate::db::{Budget, BudgetRepository, DbError, DbResult, StorageHealth};

/// Repository returning a canned result and counting calls.
pub struct StubRepository {
    result: DbResult<Vec<Budget>>,
    calls: Arc<AtomicUsize>,
}

impl StubRepository {
    /// Returns the stub and a handle to its call counter.
    pub fn returning(result: DbResult<Vec<Budget>>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                result,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    pub fn with_budgets(budgets: Vec<Budget>) -> (Self, Arc<AtomicUsize>) {
        Self::returning(Ok(budgets))
    }

    pub fn failing(err: DbError) -> (Self, Arc<AtomicUsize>) {
        Self::returning(Err(err))
    }
}

impl BudgetRepository for StubRepository {
    async fn get_all_budget(&self, _ctx: &RequestContext) -> DbResult<Vec<Budget>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.result.clone()
    }
}

/// Health probe with a fixed answer.
pub struct StubHealth(pub DbResult<()>);

impl StubHealth {
    pub fn up() -> Self {
        Self(Ok(()))
    }
}

impl StorageHealth for StubHealth {
    async fn ping(&self) -> DbResult<()> {
        self.0.clone()
    }
}

/// `n` distinct budgets with predictable fields.
pub fn sample_budgets(n: usize) -> Vec<Budget> {
    (0..n)
        .map(|i| Budget {
            id: format!("{:024x}", i + 1),
            name: format!("Budget {i}"),
            amount: 100.0 + i as f64 * 12.5,
            currency: if i % 2 == 0 { "EUR" } else { "USD" }.to_string(),
            last_updated: Utc
                .with_ymd_and_hms(2025, 1, 1 + (i % 28) as u32, 8, 30, 0)
                .unwrap(),
        })
        .collect()
}
