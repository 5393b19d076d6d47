//! HTTP transport.
//!
//! `GET /budgets` lists every budget as JSON; `/health` pings storage and
//! `/docs` serves the OpenAPI document.

mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod mod_test;

use std::future::Future;

use miette::Diagnostic;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::{
    BudgetResponse, CLIENT_CLOSED_REQUEST, ErrorResponse, HealthResponse, ListBudgetsResponse,
};
pub use routes::{ApiDoc, create_router};
pub use state::AppState;

use crate::db::StorageHealth;
use crate::usecase::BudgetUsecase;

/// HTTP server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind HTTP listener: {0}")]
    #[diagnostic(code(budgets::api::bind), help("Is another process using this address?"))]
    Bind(#[source] std::io::Error),

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(budgets::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained after `shutdown` fires; bounding that
/// drain is the caller's job.
pub async fn serve<U, H, F>(
    listener: TcpListener,
    state: AppState<U, H>,
    shutdown: F,
) -> Result<(), ApiError>
where
    U: BudgetUsecase,
    H: StorageHealth,
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state).layer(TraceLayer::new_for_http());

    if let Ok(addr) = listener.local_addr() {
        info!("HTTP server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ApiError::Serve)?;

    info!("HTTP server stopped");
    Ok(())
}
