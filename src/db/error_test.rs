//! Tests for database error types.

use crate::context::ContextError;
use crate::db::DbError;

#[test]
fn connection_unavailable_displays_correctly() {
    assert_eq!(
        DbError::ConnectionUnavailable.to_string(),
        "storage connection unavailable"
    );
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "server selection timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: server selection timeout");
}

#[test]
fn storage_error_is_verbatim() {
    let err = DbError::Storage {
        message: "cursor killed".to_string(),
    };
    assert_eq!(err.to_string(), "cursor killed");
}

#[test]
fn context_errors_map_to_sentinels() {
    assert_eq!(
        DbError::from(ContextError::Cancelled),
        DbError::ContextCancelled
    );
    assert_eq!(
        DbError::from(ContextError::DeadlineExceeded),
        DbError::TimedOut
    );
}

#[test]
fn sentinel_messages() {
    assert_eq!(DbError::ContextCancelled.to_string(), "context cancelled");
    assert_eq!(DbError::TimedOut.to_string(), "timed out");
}
