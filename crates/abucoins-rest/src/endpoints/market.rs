//! Market data endpoints

use crate::client::AbucoinsRestClient;
use crate::error::RestResult;
use crate::types::Product;
use tracing::{debug, instrument};

const PRODUCTS_PATH: &str = "/products";

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a AbucoinsRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a AbucoinsRestClient) -> Self {
        Self { client }
    }

    /// List tradable products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> RestResult<Vec<Product>> {
        debug!("Fetching products");
        self.client.get_json(PRODUCTS_PATH, &[]).await
    }
}
