//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::types::{Account, Fill, Order, OrderRequest, Product};
use abucoins_auth::{Credentials, Method, RequestSigner};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.abucoins.com";

/// Abucoins REST API client
///
/// Every endpoint is private, so the client always carries credentials. Each
/// call signs a fresh set of headers and performs exactly one round trip.
///
/// # Example
///
/// ```no_run
/// use abucoins_rest::{AbucoinsRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::new("passphrase", "key", "c2VjcmV0")?;
///     let client = AbucoinsRestClient::new(creds)?;
///
///     for account in client.list_accounts().await? {
///         println!("{:?}: {:?}", account.currency(), account.available_decimal());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AbucoinsRestClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    base_url: String,
}

impl AbucoinsRestClient {
    /// Create a new client against the production endpoint
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(&config)?;

        info!(base_url = %config.base_url(), "Created Abucoins REST client");

        Ok(Self::with_transport(credentials, config.base_url(), Arc::new(transport)))
    }

    /// Create a client that sends through the given transport
    pub fn with_transport(
        credentials: Credentials,
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            transport,
            credentials: Arc::new(credentials),
            base_url: trim_base_url(base_url.into()),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials used for signing
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ========================================================================
    // Endpoint Groups
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(self)
    }

    // ========================================================================
    // Convenience Methods
    // ========================================================================

    /// List tradable products
    pub async fn list_products(&self) -> RestResult<Vec<Product>> {
        self.market().list_products().await
    }

    /// List orders, filtered by arbitrary query parameters
    ///
    /// # Arguments
    /// * `filters` - Query parameters sent as-is, e.g. `&[("status", "open")]`
    pub async fn list_orders(&self, filters: &[(&str, &str)]) -> RestResult<Vec<Order>> {
        self.trading().list_orders(filters).await
    }

    /// Get a single order by id
    pub async fn get_order(&self, id: &str) -> RestResult<Order> {
        self.trading().get_order(id).await
    }

    /// List fills
    pub async fn list_fills(&self) -> RestResult<Vec<Fill>> {
        self.account().list_fills().await
    }

    /// Place a new order
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Order> {
        self.trading().create_order(order).await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, id: &str) -> RestResult<serde_json::Value> {
        self.trading().cancel_order(id).await
    }

    /// List currency accounts
    pub async fn list_accounts(&self) -> RestResult<Vec<Account>> {
        self.account().list_accounts().await
    }

    // ========================================================================
    // Signed Requests
    // ========================================================================

    /// Send a signed request and return the unparsed body
    ///
    /// `path` is signed without the query string; `query` is appended to the
    /// URL only. Non-2xx responses become [`RestError::Status`].
    pub async fn request_raw(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> RestResult<String> {
        let signed_body = body.as_deref().unwrap_or("");
        let headers = RequestSigner::new(&self.credentials).sign(method, path, signed_body)?;
        let url = self.url_for(path, query)?;

        debug!("Making authenticated {} request to {}", method, path);

        let request = HttpRequest {
            method,
            url,
            headers: headers
                .to_pairs()
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body,
        };

        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            debug!(status = response.status, "Request to {} failed", path);
            return Err(RestError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }

    /// Signed GET returning the unparsed body
    pub async fn get_raw(&self, path: &str, query: &[(&str, &str)]) -> RestResult<String> {
        self.request_raw(Method::Get, path, query, None).await
    }

    /// Signed GET decoded as JSON
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> RestResult<T> {
        let body = self.get_raw(path, query).await?;
        decode(path, &body)
    }

    /// Signed POST of a JSON payload, decoded as JSON
    ///
    /// The payload is serialized once; the same text is signed and sent.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> RestResult<T> {
        let data = serde_json::to_string(payload)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        let body = self.request_raw(Method::Post, path, &[], Some(data)).await?;
        decode(path, &body)
    }

    /// Signed DELETE decoded as JSON
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let body = self.request_raw(Method::Delete, path, &[], None).await?;
        decode(path, &body)
    }

    fn url_for(&self, path: &str, query: &[(&str, &str)]) -> RestResult<String> {
        let mut url = format!("{}{}", self.base_url, path);

        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query)
                .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }

        Ok(url)
    }
}

/// Decode a JSON body, treating an empty body as `null`
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> RestResult<T> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| RestError::Parse(format!("{}: {}", path, e)))
}

fn trim_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

impl std::fmt::Debug for AbucoinsRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbucoinsRestClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL (defaults to [`DEFAULT_BASE_URL`])
    pub base_url: Option<String>,
    /// Request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Effective base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}
