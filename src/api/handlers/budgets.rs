//! Budget listing handler.

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::context::RequestContext;
use crate::db::{Budget, StorageHealth};
use crate::usecase::{BudgetUsecase, GetAllBudgetRequest, UsecaseError};

use super::ErrorResponse;

/// Non-standard "client closed request" status popularised by nginx.
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Budget response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BudgetResponse {
    /// Storage-assigned identifier
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Groceries")]
    pub name: String,
    #[schema(example = 420.5)]
    pub amount: f64,
    /// Currency code
    #[schema(example = "EUR")]
    pub currency: String,
    /// Last modification time (RFC 3339)
    pub last_updated: DateTime<Utc>,
}

impl From<Budget> for BudgetResponse {
    fn from(b: Budget) -> Self {
        Self {
            id: b.id,
            name: b.name,
            amount: b.amount,
            currency: b.currency,
            last_updated: b.last_updated,
        }
    }
}

/// List budgets response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListBudgetsResponse {
    pub budgets: Vec<BudgetResponse>,
    /// Server time when the response was produced (RFC 3339)
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all budgets
///
/// Returns every stored budget. Only GET is accepted.
#[utoipa::path(
    get,
    path = "/budgets",
    tag = "budgets",
    responses(
        (status = 200, description = "All budgets", body = ListBudgetsResponse),
        (status = 405, description = "Method other than GET", body = String, content_type = "text/plain"),
        (status = 499, description = "Client cancelled the request", body = ErrorResponse),
        (status = 500, description = "Storage or internal error", body = String, content_type = "text/plain"),
        (status = 504, description = "Request deadline exceeded", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
pub async fn list_budgets<U: BudgetUsecase, H: StorageHealth>(
    method: Method,
    State(state): State<AppState<U, H>>,
) -> Response {
    if method != Method::GET {
        return method_not_allowed();
    }

    let ctx = RequestContext::new().with_timeout(state.request_timeout());
    // Fires only if axum drops this future, i.e. the client went away.
    let disconnect = ctx.cancel_on_drop();
    let result = state
        .usecase()
        .get_all_budget(&ctx, GetAllBudgetRequest::default())
        .await;
    disconnect.disarm();

    match result {
        Ok(resp) => {
            let body = ListBudgetsResponse {
                budgets: resp.budgets.into_iter().map(BudgetResponse::from).collect(),
                timestamp: state.clock().now(),
            };
            ([(header::CACHE_CONTROL, "no-store")], Json(body)).into_response()
        }
        Err(e) => usecase_error_response(e),
    }
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET")],
        "Method Not Allowed",
    )
        .into_response()
}

/// Map a use-case error to its HTTP response.
pub fn usecase_error_response(e: UsecaseError) -> Response {
    match e {
        UsecaseError::ContextCancelled => {
            warn!("client cancelled request");
            let status =
                StatusCode::from_u16(CLIENT_CLOSED_REQUEST).unwrap_or(StatusCode::REQUEST_TIMEOUT);
            (
                status,
                Json(ErrorResponse {
                    error: "client cancelled request".to_string(),
                }),
            )
                .into_response()
        }
        UsecaseError::TimedOut => {
            warn!("request timed out");
            (StatusCode::GATEWAY_TIMEOUT, "request timed out").into_response()
        }
        other => {
            error!(error = %other, "listing budgets failed");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
        }
    }
}
