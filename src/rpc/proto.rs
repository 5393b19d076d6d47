//! Wire types for `budget.v1`.
//!
//! Hand-written prost messages equivalent to:
//!
//! ```proto
//! syntax = "proto3";
//! package budget.v1;
//!
//! import "google/protobuf/timestamp.proto";
//!
//! service BudgetService {
//!   rpc ListBudgets(ListBudgetsRequest) returns (ListBudgetsResponse);
//! }
//!
//! message ListBudgetsRequest {}
//!
//! message Budget {
//!   string id = 1;
//!   string name = 2;
//!   double amount = 3;
//!   string currency = 4;
//!   google.protobuf.Timestamp last_updated = 5;
//! }
//!
//! message ListBudgetsResponse {
//!   repeated Budget budgets = 1;
//!   google.protobuf.Timestamp server_time = 2;
//! }
//! ```

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct ListBudgetsRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Budget {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(double, tag = "3")]
    pub amount: f64,
    #[prost(string, tag = "4")]
    pub currency: String,
    #[prost(message, optional, tag = "5")]
    pub last_updated: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListBudgetsResponse {
    #[prost(message, repeated, tag = "1")]
    pub budgets: Vec<Budget>,
    #[prost(message, optional, tag = "2")]
    pub server_time: Option<Timestamp>,
}

/// Convert a UTC instant into a protobuf timestamp.
pub fn timestamp(t: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: t.timestamp(),
        nanos: t.timestamp_subsec_nanos() as i32,
    }
}

impl From<crate::db::Budget> for Budget {
    fn from(b: crate::db::Budget) -> Self {
        Self {
            id: b.id,
            name: b.name,
            amount: b.amount,
            currency: b.currency,
            last_updated: Some(timestamp(b.last_updated)),
        }
    }
}
