//! Account endpoints: balances and fills

use crate::client::AbucoinsRestClient;
use crate::error::RestResult;
use crate::types::{Account, Fill};
use tracing::{debug, instrument};

const ACCOUNTS_PATH: &str = "/accounts";
const FILLS_PATH: &str = "/fills";

/// Account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a AbucoinsRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a AbucoinsRestClient) -> Self {
        Self { client }
    }

    /// List currency accounts
    #[instrument(skip(self))]
    pub async fn list_accounts(&self) -> RestResult<Vec<Account>> {
        debug!("Fetching accounts");
        self.client.get_json(ACCOUNTS_PATH, &[]).await
    }

    /// List fills
    #[instrument(skip(self))]
    pub async fn list_fills(&self) -> RestResult<Vec<Fill>> {
        debug!("Fetching fills");
        self.client.get_json(FILLS_PATH, &[]).await
    }
}
