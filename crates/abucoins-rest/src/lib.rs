//! REST API client for the Abucoins cryptocurrency exchange
//!
//! This crate provides a signed REST client covering market data, order
//! placement and cancellation, and account and fill queries.
//!
//! # Authentication
//!
//! Every endpoint is private. Requests carry `AC-ACCESS-*` headers whose
//! signature is an HMAC-SHA256 over `timestamp + METHOD + path + body`; see
//! [`abucoins_auth`].
//!
//! # Example
//!
//! ```no_run
//! use abucoins_rest::{AbucoinsRestClient, Credentials, OrderRequest};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = AbucoinsRestClient::new(creds)?;
//!
//!     let products = client.list_products().await?;
//!     println!("{} products", products.len());
//!
//!     let order = OrderRequest::buy("ETH-BTC", Decimal::new(1, 1), Decimal::new(32, 3)).post_only();
//!     let placed = client.create_order(&order).await?;
//!     if let Some(id) = placed.id() {
//!         client.cancel_order(&id).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Non-2xx responses come back as [`RestError::Status`] with the raw body.
//! Nothing is retried. An order-creation reply without an `id` becomes
//! [`RestError::CreateOrder`].

pub mod client;
pub mod error;
pub mod endpoints;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{AbucoinsRestClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{RestError, RestResult};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use abucoins_auth::{AuthError, Credentials, Method};

pub use types::{
    // Requests
    OrderRequest, OrderSide, OrderType, TimeInForce, CancelAfter,
    // Responses
    Order, Product, Account, Fill,
};
