//! Domain models for the budgets database.
//!
//! These models are storage-agnostic; each backend maps its native records
//! into them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named monetary allocation.
///
/// `id` is opaque and assigned by the storage engine on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// Short currency code, e.g. "EUR".
    pub currency: String,
    pub last_updated: DateTime<Utc>,
}
