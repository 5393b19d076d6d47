//! Budget listing use case.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::{UsecaseError, UsecaseResult};
use crate::context::RequestContext;
use crate::db::{Budget, BudgetRepository};

/// Empty for now; reserved for future filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllBudgetRequest {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAllBudgetResponse {
    /// In storage iteration order.
    pub budgets: Vec<Budget>,
}

/// What the transports call.
pub trait BudgetUsecase: Send + Sync + 'static {
    fn get_all_budget(
        &self,
        ctx: &RequestContext,
        request: GetAllBudgetRequest,
    ) -> impl Future<Output = UsecaseResult<GetAllBudgetResponse>> + Send;
}

/// Use case backed by a [`BudgetRepository`].
pub struct Usecase<R: BudgetRepository> {
    repo: Arc<R>,
}

impl<R: BudgetRepository> Clone for Usecase<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: BudgetRepository> Usecase<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<R: BudgetRepository> BudgetUsecase for Usecase<R> {
    #[instrument(skip(self, ctx))]
    async fn get_all_budget(
        &self,
        ctx: &RequestContext,
        _request: GetAllBudgetRequest,
    ) -> UsecaseResult<GetAllBudgetResponse> {
        if let Some(err) = ctx.err() {
            let err = UsecaseError::from(err);
            debug!(%err, "request context already done, skipping repository");
            return Err(err);
        }

        let budgets = self.repo.get_all_budget(ctx).await?;
        Ok(GetAllBudgetResponse { budgets })
    }
}
