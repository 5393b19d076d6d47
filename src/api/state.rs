//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::db::StorageHealth;
use crate::usecase::BudgetUsecase;

/// Shared application state.
///
/// Generic over `U: BudgetUsecase` and `H: StorageHealth` so tests can swap
/// in stubs. Dependencies are injected via constructor, not created internally.
pub struct AppState<U: BudgetUsecase, H: StorageHealth> {
    usecase: Arc<U>,
    health: Arc<H>,
    clock: Arc<dyn Clock>,
    request_timeout: Duration,
}

// Manual Clone impl - only the Arcs are cloned, U and H need not be Clone
impl<U: BudgetUsecase, H: StorageHealth> Clone for AppState<U, H> {
    fn clone(&self) -> Self {
        Self {
            usecase: Arc::clone(&self.usecase),
            health: Arc::clone(&self.health),
            clock: Arc::clone(&self.clock),
            request_timeout: self.request_timeout,
        }
    }
}

impl<U: BudgetUsecase, H: StorageHealth> AppState<U, H> {
    /// Create state using the system clock.
    pub fn new(usecase: Arc<U>, health: Arc<H>, request_timeout: Duration) -> Self {
        Self::with_clock(usecase, health, Arc::new(SystemClock), request_timeout)
    }

    pub fn with_clock(
        usecase: Arc<U>,
        health: Arc<H>,
        clock: Arc<dyn Clock>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            usecase,
            health,
            clock,
            request_timeout,
        }
    }

    pub fn usecase(&self) -> &U {
        &self.usecase
    }

    pub fn health(&self) -> &H {
        &self.health
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Deadline applied to each request's context.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
