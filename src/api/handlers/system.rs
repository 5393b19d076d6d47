//! System health and status handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::StorageHealth;
use crate::usecase::BudgetUsecase;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
    /// Why storage is unreachable, if it is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint
///
/// Pings the storage connection
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Storage reachable", body = HealthResponse),
        (status = 503, description = "Storage unreachable", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<U: BudgetUsecase, H: StorageHealth>(
    State(state): State<AppState<U, H>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.health().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                error: None,
            }),
        ),
        Err(e) => {
            warn!(error = %e, "storage ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
