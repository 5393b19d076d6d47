//! gRPC transport.
//!
//! Serves `budget.v1.BudgetService/ListBudgets` with tonic. Message types are
//! written by hand in [`proto`] rather than generated from a `.proto` file.

pub mod proto;
mod server;
mod service;
mod timeout;

#[cfg(test)]
mod timeout_test;

use std::future::Future;

use axum::Router;
use miette::Diagnostic;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use server::{BudgetServer, context_status, usecase_status};
pub use service::{BudgetServiceServer, LIST_BUDGETS_PATH, SERVICE_NAME};
pub use timeout::{GRPC_TIMEOUT_HEADER, parse_grpc_timeout};

use crate::usecase::BudgetUsecase;

/// gRPC server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum RpcError {
    #[error("Failed to bind gRPC listener: {0}")]
    #[diagnostic(code(budgets::rpc::bind), help("Is another process using this address?"))]
    Bind(#[source] std::io::Error),

    #[error("gRPC server error: {0}")]
    #[diagnostic(code(budgets::rpc::serve))]
    Serve(#[source] std::io::Error),
}

/// Serve the budget service on `listener` until `shutdown` resolves.
///
/// Runs on the same hyper stack as the HTTP API (HTTP/2 via prior knowledge).
/// The handler owns the `grpc-timeout` deadline, so tonic's transport server
/// and its timeout middleware stay out of the stack.
pub async fn serve<U, F>(
    listener: TcpListener,
    server: BudgetServer<U>,
    shutdown: F,
) -> Result<(), RpcError>
where
    U: BudgetUsecase,
    F: Future<Output = ()> + Send + 'static,
{
    let app = Router::new()
        .fallback_service(BudgetServiceServer::new(server))
        .layer(TraceLayer::new_for_grpc());

    if let Ok(addr) = listener.local_addr() {
        info!("gRPC server listening on {}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(RpcError::Serve)?;

    info!("gRPC server stopped");
    Ok(())
}
