//! Database abstraction layer.
//!
//! Trait-based abstractions for data access so the storage backend can be
//! swapped without touching the use case or the transports.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Budget)
//! - `repository`: Trait definitions for data access
//! - `mongo`: MongoDB implementation

mod error;
mod models;
pub mod mongo;
mod repository;

#[cfg(test)]
pub(crate) mod stub;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use mongo::{MongoBudgetRepository, MongoDatabase};
pub use repository::*;
