//! Tonic service wrapper for [`BudgetServer`].
//!
//! Routes `/budget.v1.BudgetService/*` requests the way generated server code
//! would, without a protoc build step.

use std::convert::Infallible;
use std::sync::Arc;

use tonic::codec::ProstCodec;
use tonic::codegen::{Body, BoxFuture, Context, Poll, Service, StdError, http};
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::{Request, Response, Status};

use super::proto::{ListBudgetsRequest, ListBudgetsResponse};
use super::server::BudgetServer;
use crate::usecase::BudgetUsecase;

pub const SERVICE_NAME: &str = "budget.v1.BudgetService";
pub const LIST_BUDGETS_PATH: &str = "/budget.v1.BudgetService/ListBudgets";

/// Routable gRPC service.
pub struct BudgetServiceServer<U: BudgetUsecase> {
    inner: Arc<BudgetServer<U>>,
}

impl<U: BudgetUsecase> BudgetServiceServer<U> {
    pub fn new(server: BudgetServer<U>) -> Self {
        Self {
            inner: Arc::new(server),
        }
    }
}

impl<U: BudgetUsecase> Clone for BudgetServiceServer<U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<U: BudgetUsecase> NamedService for BudgetServiceServer<U> {
    const NAME: &'static str = SERVICE_NAME;
}

/// Adapts `list_budgets` to tonic's unary call machinery.
struct ListBudgetsSvc<U: BudgetUsecase>(Arc<BudgetServer<U>>);

impl<U: BudgetUsecase> UnaryService<ListBudgetsRequest> for ListBudgetsSvc<U> {
    type Response = ListBudgetsResponse;
    type Future = BoxFuture<Response<Self::Response>, Status>;

    fn call(&mut self, request: Request<ListBudgetsRequest>) -> Self::Future {
        let inner = Arc::clone(&self.0);
        Box::pin(async move { inner.list_budgets(request).await })
    }
}

impl<U, B> Service<http::Request<B>> for BudgetServiceServer<U>
where
    U: BudgetUsecase,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        match req.uri().path() {
            LIST_BUDGETS_PATH => {
                let method = ListBudgetsSvc(Arc::clone(&self.inner));
                Box::pin(async move {
                    let mut grpc = Grpc::new(ProstCodec::default());
                    Ok(grpc.unary(method, req).await)
                })
            }
            path => {
                tracing::debug!(path, "unknown gRPC method");
                Box::pin(async move { Ok(Status::unimplemented("").into_http()) })
            }
        }
    }
}
