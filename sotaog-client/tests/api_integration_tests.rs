//! Integration tests for sotaog-client API operations.
//!
//! These tests use wiremock to simulate server responses. The client is
//! blocking, so it is built, used, and dropped inside `spawn_blocking` while
//! the mock server runs on the test runtime.

use serde_json::json;
use sotaog_client::{
    Client, ClientError, DatapointQuery, TruckTicketQuery, TypeCurveQuery, WellQuery,
    CUSTOMER_ID_HEADER, DEFAULT_ASSET_KIND,
};
use wiremock::matchers::{basic_auth, body_bytes, body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a server that accepts `id`/`secret` and issues token `T`.
async fn server_with_auth() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/authenticate"))
        .and(basic_auth("id", "secret"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "T"
        })))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Connect to `mock_server` and run `f` on a blocking thread.
async fn with_client<F, R>(mock_server: &MockServer, customer_id: Option<&'static str>, f: F) -> R
where
    F: FnOnce(Client) -> R + Send + 'static,
    R: Send + 'static,
{
    let uri = mock_server.uri();
    tokio::task::spawn_blocking(move || {
        let client = Client::connect(&uri, "id", "secret", customer_id).unwrap();
        f(client)
    })
    .await
    .unwrap()
}

/// Requests received after authentication.
async fn api_requests(mock_server: &MockServer) -> Vec<wiremock::Request> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() != "/v1/authenticate")
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authenticate_and_send_bearer() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/facilities"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "F1"}])))
        .mount(&mock_server)
        .await;

    let facilities = with_client(&mock_server, None, |client| client.get_facilities()).await;
    assert_eq!(facilities.unwrap(), json!([{"id": "F1"}]));

    let requests = api_requests(&mock_server).await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get(CUSTOMER_ID_HEADER).is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authentication_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/authenticate"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || Client::connect(&uri, "id", "bad", None))
        .await
        .unwrap();

    match result {
        Err(ClientError::Auth { status }) => assert_eq!(status, 401),
        other => panic!("Expected Auth error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authentication_without_token_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "bearer"})))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || Client::connect(&uri, "id", "secret", None))
        .await
        .unwrap();

    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tenant_header_is_sent() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(header("authorization", "Bearer T"))
        .and(header(CUSTOMER_ID_HEADER, "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let customers = with_client(&mock_server, Some("acme"), |client| client.get_customers()).await;
    assert_eq!(customers.unwrap(), json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_trailing_slash_in_base_url() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/leases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let uri = format!("{}//", mock_server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let client = Client::connect(&uri, "id", "secret", None)?;
        client.get_leases()
    })
    .await
    .unwrap();

    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_absent_filters_send_no_query() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/truck-tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.get_truck_tickets(&TruckTicketQuery::default())
    })
    .await;
    assert!(result.is_ok());

    let requests = api_requests(&mock_server).await;
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_single_filter_sends_single_key() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/truck-tickets"))
        .and(query_param("facility", "F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "TT1"}])))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.get_truck_tickets(&TruckTicketQuery {
            facility: Some("F1".to_string()),
            kind: Some(String::new()),
            ..Default::default()
        })
    })
    .await;
    assert_eq!(result.unwrap(), json!([{"id": "TT1"}]));

    let requests = api_requests(&mock_server).await;
    let pairs: Vec<_> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("facility".to_string(), "F1".to_string())]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_filters_repeat_keys() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/wells/production"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.list_well_production(&WellQuery {
            well_ids: vec!["W1".to_string(), "W2".to_string()],
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        })
    })
    .await;
    assert!(result.is_ok());

    let requests = api_requests(&mock_server).await;
    assert_eq!(
        requests[0].url.query(),
        Some("well_ids=W1&well_ids=W2&start_date=2024-01-31")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_type_curves_always_send_combine() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/type-curves"))
        .and(query_param("combine", "True"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.get_type_curves(&TypeCurveQuery::default())
    })
    .await;
    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_refresh_flag_only_when_set() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/wells/W1/tpr-ipr-curve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.get_well_tpr_ipr_curve("W1", false)?;
        client.get_well_tpr_ipr_curve("W1", true)
    })
    .await;
    assert!(result.is_ok());

    let requests = api_requests(&mock_server).await;
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[1].url.query(), Some("refresh=True"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_critical_rate_dates_need_both_ends() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/wells/W1/critical-rate-analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1);
    let end = chrono::NaiveDate::from_ymd_opt(2024, 2, 1);
    let result = with_client(&mock_server, None, move |client| {
        client.get_critical_rate_analysis("W1", false, start, None)?;
        client.get_critical_rate_analysis("W1", false, start, end)
    })
    .await;
    assert!(result.is_ok());

    let requests = api_requests(&mock_server).await;
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(
        requests[1].url.query(),
        Some("start_date=2024-01-01&end_date=2024-02-01")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_created_operation_rejects_ok() {
    let mock_server = server_with_auth().await;

    Mock::given(method("PUT"))
        .and(path("/v1/facilities/F1/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.put_facility_config("F1", &json!({"threshold": 5}))
    })
    .await;

    match result {
        Err(ClientError::Status {
            operation, status, ..
        }) => {
            assert_eq!(status, 200);
            assert_eq!(operation, "put facility config");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_created_operation_accepts_created() {
    let mock_server = server_with_auth().await;

    Mock::given(method("PUT"))
        .and(path("/v1/facilities/F1/config"))
        .and(body_json(json!({"threshold": 5})))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.put_facility_config("F1", &json!({"threshold": 5}))
    })
    .await;
    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_keeps_body() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/compressors"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| client.get_compressors()).await;

    match result {
        Err(ClientError::Status { status, body, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_json_is_decode_error() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/platforms"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| client.get_platforms()).await;
    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_filtered_by_facility() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "a", "facility": "F1", "asset_type": "tank"},
            {"id": "b", "facility": "F2", "asset_type": "tank"},
            {"id": "c", "facility": "F1", "asset_type": "well"}
        ])))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        let by_facility = client.get_assets(DEFAULT_ASSET_KIND, Some("F1"), None)?;
        let by_both = client.get_assets(DEFAULT_ASSET_KIND, Some("F1"), Some("well"))?;
        let all = client.get_assets(DEFAULT_ASSET_KIND, None, None)?;
        Ok::<_, ClientError>((by_facility, by_both, all))
    })
    .await;
    let (by_facility, by_both, all) = result.unwrap();

    let ids = |assets: &[serde_json::Value]| -> Vec<String> {
        assets.iter().map(|a| a["id"].as_str().unwrap().to_string()).collect()
    };
    assert_eq!(ids(&by_facility), vec!["a", "c"]);
    assert_eq!(ids(&by_both), vec!["c"]);
    assert_eq!(all.len(), 3);

    let requests = api_requests(&mock_server).await;
    assert!(requests.iter().all(|request| request.url.query().is_none()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_swd_networks_filtered_by_facility() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/swd-networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "n1", "facilities": ["F1", "F2"]},
            {"id": "n2", "facilities": ["F3"]},
            {"id": "n3", "facilities": ["F2"]}
        ])))
        .mount(&mock_server)
        .await;

    let networks = with_client(&mock_server, None, |client| client.get_swd_networks(Some("F2")))
        .await
        .unwrap();

    let ids: Vec<_> = networks.iter().map(|n| n["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["n1", "n3"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_strapping_table_decoded() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/tanks/T1/strapping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("0.0,0\n1.5,100\n3.0,250"))
        .mount(&mock_server)
        .await;

    let table = with_client(&mock_server, None, |client| {
        client.get_strapping_table("T1", "tanks")
    })
    .await
    .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0.0), Some(0.0));
    assert_eq!(table.get(1.5), Some(100.0));
    assert_eq!(table.get(3.0), Some(250.0));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_strapping_table_rejects_bad_rows() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/tanks/T1/strapping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("level,volume\n1.5,100"))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.get_strapping_table("T1", "tanks")
    })
    .await;

    assert!(matches!(result, Err(ClientError::InvalidResponse { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_truck_ticket_image_upload() {
    let mock_server = server_with_auth().await;
    let image = vec![0x89, b'P', b'N', b'G', 0x00, 0xff];

    Mock::given(method("PUT"))
        .and(path("/v1/truck-tickets/TT1/1700000000/image"))
        .and(header("content-type", "image/png"))
        .and(header("authorization", "Bearer T"))
        .and(body_bytes(image.clone()))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, Some("acme"), move |client| {
        client.put_truck_ticket_image("TT1", 1_700_000_000, image, "image/png")
    })
    .await;
    assert!(result.is_ok());

    let requests = api_requests(&mock_server).await;
    assert_eq!(requests[0].headers.get_all("content-type").iter().count(), 1);
    assert_eq!(requests[0].headers.get(CUSTOMER_ID_HEADER).unwrap(), "acme");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_truck_ticket_image_requires_no_content() {
    let mock_server = server_with_auth().await;

    Mock::given(method("PUT"))
        .and(path("/v1/truck-tickets/TT1/1700000000/image"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.put_truck_ticket_image("TT1", 1_700_000_000, vec![1, 2, 3], "image/jpeg")
    })
    .await;

    assert_eq!(result.unwrap_err().status(), Some(200));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_put_truck_ticket_uses_post() {
    let mock_server = server_with_auth().await;

    Mock::given(method("POST"))
        .and(path("/v1/truck-tickets/TT1/1700000000"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.put_truck_ticket("TT1", 1_700_000_000, &json!({"volume": 120}))
    })
    .await;
    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_datapoints_expects_accepted() {
    let mock_server = server_with_auth().await;

    Mock::given(method("POST"))
        .and(path("/v1/datapoints/W1"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.post_datapoints("W1", &json!([{"ts": 1, "value": 2.5}]))
    })
    .await;
    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_datapoints_body() {
    let mock_server = server_with_auth().await;

    Mock::given(method("POST"))
        .and(path("/v1/datapoints"))
        .and(body_json(json!({
            "asset_datatypes": [{"asset": "W1", "datatype": "pressure"}],
            "start_ts": 10,
            "sort": "desc",
            "limit": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"W1": []})))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.get_datapoints(
            &json!([{"asset": "W1", "datatype": "pressure"}]),
            &DatapointQuery {
                start_ts: Some(10),
                ..Default::default()
            },
        )
    })
    .await;
    assert_eq!(result.unwrap(), json!({"W1": []}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_sms_body() {
    let mock_server = server_with_auth().await;

    Mock::given(method("POST"))
        .and(path("/v1/sms"))
        .and(body_json(json!({"to_numbers": ["+15550100"], "text": "Tank T1 high"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sent": 1})))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| {
        client.send_sms(&["+15550100".to_string()], "Tank T1 high")
    })
    .await;
    assert_eq!(result.unwrap(), json!({"sent": 1}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_path_segments_are_encoded() {
    let mock_server = server_with_auth().await;

    Mock::given(method("GET"))
        .and(path("/v1/facilities/North%2FSouth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "North/South"})))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, None, |client| client.get_facility("North/South")).await;
    assert_eq!(result.unwrap(), json!({"id": "North/South"}));
}
