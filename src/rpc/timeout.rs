//! `grpc-timeout` header parsing.
//!
//! Format: up to 8 ASCII digits followed by one unit character
//! (`H`, `M`, `S`, `m`, `u`, `n`).

use std::time::Duration;

use tonic::metadata::MetadataMap;

pub const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

const MAX_DIGITS: usize = 8;

/// Parse a `grpc-timeout` value. Returns `None` for malformed input.
pub fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    if value.len() < 2 || value.len() > MAX_DIGITS + 1 || !value.is_ascii() {
        return None;
    }
    let (digits, unit) = value.split_at(value.len() - 1);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let amount: u64 = digits.parse().ok()?;

    match unit {
        "H" => Some(Duration::from_secs(amount * 60 * 60)),
        "M" => Some(Duration::from_secs(amount * 60)),
        "S" => Some(Duration::from_secs(amount)),
        "m" => Some(Duration::from_millis(amount)),
        "u" => Some(Duration::from_micros(amount)),
        "n" => Some(Duration::from_nanos(amount)),
        _ => None,
    }
}

/// Timeout the client attached to a call, if any and well-formed.
pub fn call_timeout(metadata: &MetadataMap) -> Option<Duration> {
    let raw = metadata.get(GRPC_TIMEOUT_HEADER)?.to_str().ok()?;
    let parsed = parse_grpc_timeout(raw);
    if parsed.is_none() {
        tracing::debug!(value = raw, "ignoring malformed grpc-timeout");
    }
    parsed
}
