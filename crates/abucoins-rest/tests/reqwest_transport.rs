//! End-to-end tests through `ReqwestTransport` against a local mock server

mod common;

use abucoins_rest::{AbucoinsRestClient, ClientConfig, OrderRequest, RestError};
use common::*;
use httpmock::prelude::*;
use rust_decimal_macros::dec;

fn client_for(server: &MockServer) -> AbucoinsRestClient {
    let config = ClientConfig::new()
        .with_base_url(server.base_url())
        .with_timeout(5);
    AbucoinsRestClient::with_config(credentials(), config).unwrap()
}

#[tokio::test]
async fn test_get_with_query_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/orders")
                .query_param("status", "open")
                .header("AC-ACCESS-KEY", API_KEY)
                .header("AC-ACCESS-PASSPHRASE", PASSPHRASE)
                .header("Content-Type", "application/json")
                .header_exists("AC-ACCESS-TIMESTAMP")
                .header_exists("AC-ACCESS-SIGN");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"id": "o-1", "status": "open"}]"#);
        })
        .await;

    let client = client_for(&server);
    let orders = client.list_orders(&[("status", "open")]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id().as_deref(), Some("o-1"));
    assert!(orders[0].is_open());
}

#[tokio::test]
async fn test_post_order_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/orders")
                .body(r#"{"side":"buy","hidden":false,"size":"0.5","price":"0.0321","product_id":"ETH-BTC","type":"limit"}"#)
                .header_exists("AC-ACCESS-SIGN");
            then.status(200).body(ORDER_CREATED);
        })
        .await;

    let client = client_for(&server);
    let order = client
        .create_order(&OrderRequest::buy("ETH-BTC", dec!(0.5), dec!(0.0321)))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(order.id().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_delete_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/orders/xyz");
            then.status(200).body(r#"["xyz"]"#);
        })
        .await;

    let client = client_for(&server);
    let result = client.cancel_order("xyz").await.unwrap();

    mock.assert_async().await;
    assert_eq!(result, serde_json::json!(["xyz"]));
}

#[tokio::test]
async fn test_http_error_carries_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/accounts");
            then.status(401).body(r#"{"message":"Invalid signature"}"#);
        })
        .await;

    let client = client_for(&server);
    let err = client.list_accounts().await.unwrap_err();

    match err {
        RestError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, r#"{"message":"Invalid signature"}"#);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    let config = ClientConfig::new()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(5);
    let client = AbucoinsRestClient::with_config(credentials(), config).unwrap();

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, RestError::Http(_)));
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}
