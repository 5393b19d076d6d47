//! HTTP handlers.

mod budgets;
mod system;


use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use budgets::*;
pub use system::*;

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "client cancelled request")]
    pub error: String,
}
