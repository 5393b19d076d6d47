//! Use-case error vocabulary.
//!
//! Transports only need to tell apart the two context outcomes from
//! everything else. Everything else keeps the repository error intact.

use miette::Diagnostic;
use thiserror::Error;

use crate::context::ContextError;
use crate::db::DbError;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum UsecaseError {
    #[error("context cancelled")]
    #[diagnostic(code(budgets::usecase::context_cancelled))]
    ContextCancelled,

    #[error("timed out")]
    #[diagnostic(code(budgets::usecase::timed_out))]
    TimedOut,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Repository(DbError),
}

impl From<ContextError> for UsecaseError {
    fn from(e: ContextError) -> Self {
        match e {
            ContextError::Cancelled => UsecaseError::ContextCancelled,
            ContextError::DeadlineExceeded => UsecaseError::TimedOut,
        }
    }
}

impl From<DbError> for UsecaseError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::ContextCancelled => UsecaseError::ContextCancelled,
            DbError::TimedOut => UsecaseError::TimedOut,
            other => UsecaseError::Repository(other),
        }
    }
}

pub type UsecaseResult<T> = Result<T, UsecaseError>;
