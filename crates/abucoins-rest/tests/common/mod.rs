//! Common test utilities for integration tests
//!
//! Provides a recording transport that replays canned responses.

#![allow(dead_code)]

use abucoins_rest::{
    AbucoinsRestClient, Credentials, HttpRequest, HttpResponse, RestError, RestResult, Transport,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// base64("abucoins-test-secret")
pub const SECRET: &str = "YWJ1Y29pbnMtdGVzdC1zZWNyZXQ=";
pub const API_KEY: &str = "test-api-key";
pub const PASSPHRASE: &str = "test-passphrase";
pub const BASE_URL: &str = "https://api.test.local";

/// Sample create-order success body
pub const ORDER_CREATED: &str = r#"{
    "id": "abc123",
    "side": "buy",
    "size": "0.5",
    "price": "0.0321",
    "product_id": "ETH-BTC",
    "type": "limit",
    "status": "pending",
    "filled_size": "0",
    "created_at": "2018-01-15T12:00:00Z",
    "hidden": false,
    "post_only": false
}"#;

/// Sample products listing
pub const PRODUCTS: &str = r#"[
    {"id": "ETH-BTC", "base_currency": "ETH", "quote_currency": "BTC", "base_min_size": "0.001", "base_max_size": "10000", "quote_increment": "0.00000001", "display_name": "ETH/BTC"},
    {"id": "BTC-PLN", "base_currency": "BTC", "quote_currency": "PLN", "base_min_size": "0.0001", "base_max_size": "100", "quote_increment": "0.01", "display_name": "BTC/PLN"}
]"#;

/// Sample accounts listing
pub const ACCOUNTS: &str = r#"[
    {"id": "1-BTC", "currency": "BTC", "balance": "1.5", "available": "1.0", "hold": "0.5", "profile_id": 1},
    {"id": "1-ETH", "currency": "ETH", "balance": "10", "available": "10", "hold": "0", "profile_id": 1}
]"#;

/// Sample fills listing
pub const FILLS: &str = r#"[
    {"trade_id": "77", "product_id": "ETH-BTC", "order_id": "abc123", "price": "0.0321", "size": "0.5", "side": "buy", "liquidity": "M", "fee": "0", "settled": true, "created_at": "2018-01-15T12:01:00Z"}
]"#;

/// Transport that records every request and answers from a queue
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a transport that answers once with `status` and `body`
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::new();
        transport.push(status, body);
        transport
    }

    pub fn push(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> RestResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| RestError::Parse("mock transport has no response queued".to_string()))
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(PASSPHRASE, API_KEY, SECRET).unwrap()
}

pub fn client_with(transport: Arc<MockTransport>) -> AbucoinsRestClient {
    AbucoinsRestClient::with_transport(credentials(), BASE_URL, transport)
}

/// Recompute the signature the client should have sent for `request`
pub fn expected_signature(request: &HttpRequest, path: &str) -> String {
    let timestamp: i64 = request
        .header("AC-ACCESS-TIMESTAMP")
        .expect("timestamp header")
        .parse()
        .expect("numeric timestamp");
    let body = request.body.as_deref().unwrap_or("");

    credentials()
        .sign(timestamp, request.method, path, body)
        .unwrap()
}
