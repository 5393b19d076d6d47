//! `budget.v1.BudgetService` handler.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{error, instrument, warn};

use super::proto::{self, ListBudgetsRequest, ListBudgetsResponse};
use super::timeout::call_timeout;
use crate::clock::{Clock, SystemClock};
use crate::context::{ContextError, RequestContext};
use crate::usecase::{BudgetUsecase, GetAllBudgetRequest, UsecaseError};

/// Handler behind the gRPC service wrapper.
pub struct BudgetServer<U: BudgetUsecase> {
    usecase: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U: BudgetUsecase> BudgetServer<U> {
    pub fn new(usecase: Arc<U>) -> Self {
        Self::with_clock(usecase, Arc::new(SystemClock))
    }

    pub fn with_clock(usecase: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { usecase, clock }
    }

    /// List every budget.
    #[instrument(skip_all)]
    pub async fn list_budgets(
        &self,
        request: Request<ListBudgetsRequest>,
    ) -> Result<Response<ListBudgetsResponse>, Status> {
        // The call's deadline is fixed by the client when the request is received.
        let mut ctx = RequestContext::new();
        if let Some(timeout) = call_timeout(request.metadata()) {
            ctx = ctx.with_timeout(timeout);
        }
        // tonic drops this future when the client resets the stream.
        let disconnect = ctx.cancel_on_drop();

        if let Some(err) = ctx.err() {
            disconnect.disarm();
            return Err(context_status(err));
        }

        let result = self
            .usecase
            .get_all_budget(&ctx, GetAllBudgetRequest::default())
            .await;
        disconnect.disarm();

        let resp = result.map_err(usecase_status)?;
        Ok(Response::new(ListBudgetsResponse {
            budgets: resp.budgets.into_iter().map(proto::Budget::from).collect(),
            server_time: Some(proto::timestamp(self.clock.now())),
        }))
    }
}

/// Translate a dead call context into a status.
pub fn context_status(err: ContextError) -> Status {
    match err {
        ContextError::Cancelled => Status::cancelled("client canceled request"),
        ContextError::DeadlineExceeded => Status::deadline_exceeded("deadline exceeded"),
    }
}

/// Map use-case errors to gRPC status codes.
pub fn usecase_status(err: UsecaseError) -> Status {
    match err {
        UsecaseError::ContextCancelled => {
            warn!("client canceled request");
            context_status(ContextError::Cancelled)
        }
        UsecaseError::TimedOut => {
            warn!("deadline exceeded");
            context_status(ContextError::DeadlineExceeded)
        }
        other => {
            error!(error = %other, "listing budgets failed");
            Status::internal(other.to_string())
        }
    }
}
