//! Integration tests for sotaog-client.
//!
//! These tests verify the client API surface without requiring a running server.

use sotaog_client::{
    Client, ClientConfig, ClientError, DatapointQuery, FinancialsQuery, StrappingTable,
    TypeCurveQuery,
};

#[test]
fn test_client_invalid_url() {
    // Missing protocol
    let result = Client::connect("localhost:8080", "id", "secret", None);

    match result {
        Err(ClientError::InvalidUrl(msg)) => {
            assert!(msg.contains("http://"));
        }
        other => panic!("Expected InvalidUrl error, got {other:?}"),
    }
}

#[test]
fn test_client_unreachable_server() {
    let result = Client::connect("http://127.0.0.1:1", "id", "secret", None);

    match result {
        Err(ClientError::Transport { operation, .. }) => {
            assert_eq!(operation, "authenticate to API");
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
}

#[test]
fn test_from_config_validates_url() {
    let config = ClientConfig::new("ftp://example.com", "id", "secret");
    assert!(matches!(
        Client::from_config(&config),
        Err(ClientError::InvalidUrl(_))
    ));
}

#[test]
fn test_error_display() {
    let error = ClientError::Auth { status: 401 };
    assert_eq!(error.to_string(), "unable to authenticate to API (status 401)");
    assert!(error.is_auth());
    assert_eq!(error.status(), Some(401));

    let error = ClientError::Status {
        operation: "retrieve truck tickets".to_string(),
        status: 500,
        body: "boom".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "unable to retrieve truck tickets (status 500)"
    );
    assert!(!error.is_auth());

    let error = ClientError::InvalidUrl("bad".to_string());
    assert_eq!(error.to_string(), "Invalid URL: bad");
    assert_eq!(error.status(), None);
}

#[test]
fn test_query_defaults() {
    let window = DatapointQuery::default();
    assert_eq!(window.sort.as_deref(), Some("desc"));
    assert_eq!(window.limit, Some(100));

    assert!(TypeCurveQuery::default().combine);

    let financials = FinancialsQuery::default();
    assert_eq!(financials.asset_type, "wells");
    assert_eq!(financials.kind, "production");
}

#[test]
fn test_strapping_table_public_api() {
    let table = StrappingTable::parse("0.0,0\n1.5,100\n3.0,250\n").unwrap();

    let rows: Vec<_> = table.iter().collect();
    assert_eq!(rows, vec![(0.0, 0.0), (1.5, 100.0), (3.0, 250.0)]);
    assert!(StrappingTable::parse("1.5;100").is_err());
}
