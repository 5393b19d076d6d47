//! Database error types.
//!
//! Storage-backend agnostic errors with miette diagnostics. Driver errors are
//! flattened into [`DbError::Storage`] carrying the driver's message verbatim.

use miette::Diagnostic;
use thiserror::Error;

use crate::context::ContextError;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DbError {
    #[error("storage connection unavailable")]
    #[diagnostic(
        code(budgets::db::connection_unavailable),
        help("The storage handle was never established or has been closed.")
    )]
    ConnectionUnavailable,

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(budgets::db::connection_error),
        help("Check MONGO_URI and that the MongoDB server is reachable.")
    )]
    Connection { message: String },

    #[error("context cancelled")]
    #[diagnostic(code(budgets::db::context_cancelled))]
    ContextCancelled,

    #[error("timed out")]
    #[diagnostic(code(budgets::db::timed_out))]
    TimedOut,

    #[error("{message}")]
    #[diagnostic(code(budgets::db::storage))]
    Storage { message: String },
}

impl From<ContextError> for DbError {
    fn from(e: ContextError) -> Self {
        match e {
            ContextError::Cancelled => DbError::ContextCancelled,
            ContextError::DeadlineExceeded => DbError::TimedOut,
        }
    }
}

impl From<mongodb::error::Error> for DbError {
    fn from(e: mongodb::error::Error) -> Self {
        DbError::Storage {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
