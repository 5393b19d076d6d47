use std::time::Duration;

use tonic::metadata::MetadataMap;

use crate::rpc::timeout::{call_timeout, parse_grpc_timeout};

#[test]
fn parses_every_unit() {
    assert_eq!(parse_grpc_timeout("2H"), Some(Duration::from_secs(7200)));
    assert_eq!(parse_grpc_timeout("3M"), Some(Duration::from_secs(180)));
    assert_eq!(parse_grpc_timeout("10S"), Some(Duration::from_secs(10)));
    assert_eq!(parse_grpc_timeout("250m"), Some(Duration::from_millis(250)));
    assert_eq!(parse_grpc_timeout("99u"), Some(Duration::from_micros(99)));
    assert_eq!(parse_grpc_timeout("0n"), Some(Duration::ZERO));
}

#[test]
fn rejects_malformed_values() {
    for raw in ["", "S", "10", "10s", "-1S", "1.5S", "123456789S", "١S"] {
        assert_eq!(parse_grpc_timeout(raw), None, "{raw:?}");
    }
}

#[test]
fn accepts_eight_digits() {
    assert_eq!(
        parse_grpc_timeout("99999999m"),
        Some(Duration::from_millis(99_999_999))
    );
}

#[test]
fn reads_timeout_from_metadata() {
    let mut metadata = MetadataMap::new();
    assert_eq!(call_timeout(&metadata), None);

    metadata.insert("grpc-timeout", "5S".parse().unwrap());
    assert_eq!(call_timeout(&metadata), Some(Duration::from_secs(5)));

    metadata.insert("grpc-timeout", "soon".parse().unwrap());
    assert_eq!(call_timeout(&metadata), None);
}
