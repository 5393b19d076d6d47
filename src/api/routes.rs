//! API route configuration.

use axum::Router;
use axum::routing::{any, get};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, BudgetResponse, ErrorResponse, HealthResponse, ListBudgetsResponse};
use super::state::AppState;
use crate::db::StorageHealth;
use crate::usecase::BudgetUsecase;

/// Build routes with generic use case and health types.
///
/// Applies the turbofish to each handler so the route table stays readable.
macro_rules! routes {
    ($U:ty, $H:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$U, $H>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Budgets API",
        version = "0.1.0",
        description = "Read-only budget listing",
        license(name = "GPL-2.0")
    ),
    paths(handlers::health, handlers::list_budgets),
    components(schemas(HealthResponse, BudgetResponse, ListBudgetsResponse, ErrorResponse)),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "budgets", description = "Budget listing")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation.
///
/// `/budgets` is registered for every method; the handler itself rejects
/// anything but GET so HEAD is refused too.
pub fn create_router<U: BudgetUsecase, H: StorageHealth>(state: AppState<U, H>) -> Router {
    let api = ApiDoc::openapi();

    let routes = routes!(U, H => {
        get "/health" => handlers::health,
        any "/budgets" => handlers::list_budgets,
    });

    routes.merge(Scalar::with_url("/docs", api)).with_state(state)
}
