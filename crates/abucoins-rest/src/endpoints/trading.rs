//! Trading endpoints for order management

use crate::client::AbucoinsRestClient;
use crate::error::{RestError, RestResult};
use crate::types::{Order, OrderRequest};
use serde_json::Value;
use tracing::{debug, instrument, warn};

const ORDERS_PATH: &str = "/orders";

/// Reason reported when a rejected order carries neither `error` nor `message`
pub const UNKNOWN_ORDER_ERROR: &str = "unknown error";

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a AbucoinsRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a AbucoinsRestClient) -> Self {
        Self { client }
    }

    /// List orders
    ///
    /// # Arguments
    /// * `filters` - Query parameters, sent in order and unvalidated
    #[instrument(skip(self), fields(count = filters.len()))]
    pub async fn list_orders(&self, filters: &[(&str, &str)]) -> RestResult<Vec<Order>> {
        debug!("Fetching orders");
        self.client.get_json(ORDERS_PATH, filters).await
    }

    /// Get a single order
    ///
    /// An unknown id surfaces as [`RestError::Status`] with the exchange's body.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &str) -> RestResult<Order> {
        self.client.get_json(&order_path(id), &[]).await
    }

    /// Place a new order
    ///
    /// # Errors
    /// [`RestError::CreateOrder`] if the exchange answers without an order id.
    #[instrument(skip(self, order), fields(product_id = %order.product_id, side = %order.side, order_type = %order.order_type))]
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Order> {
        debug!(
            "Placing {} {} order for {} {} @ {}",
            order.side, order.order_type, order.size, order.product_id, order.price
        );

        let response: Value = self.client.post_json(ORDERS_PATH, order).await?;
        let created = created_order(response)?;

        debug!(id = ?created.id(), "Order accepted");
        Ok(created)
    }

    /// Cancel an order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: &str) -> RestResult<Value> {
        debug!("Cancelling order {}", id);
        self.client.delete_json(&order_path(id)).await
    }
}

/// The id is percent-encoded so the signed path matches the one on the wire
fn order_path(id: &str) -> String {
    format!("{}/{}", ORDERS_PATH, urlencoding::encode(id))
}

/// Turn a 2xx order-creation body into an order, or the exchange's reason
///
/// `error` is checked before `message`. A body with an `id` is always an
/// object, so the conversion to [`Order`] cannot fail on its contents.
fn created_order(response: Value) -> RestResult<Order> {
    if present(response.get("id")).is_none() {
        let reason = present(response.get("error"))
            .or_else(|| present(response.get("message")))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| UNKNOWN_ORDER_ERROR.to_string());

        warn!("Order rejected: {}", reason);
        return Err(RestError::CreateOrder(reason));
    }

    Ok(serde_json::from_value(response)?)
}

/// A field counts only if it is set to something other than `null` or `false`
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !matches!(v, Value::Null | Value::Bool(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reason(response: Value) -> String {
        match created_order(response) {
            Err(RestError::CreateOrder(reason)) => reason,
            other => panic!("expected CreateOrder error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_field_wins() {
        assert_eq!(reason(json!({"error": "insufficient funds"})), "insufficient funds");
        assert_eq!(
            reason(json!({"error": "insufficient funds", "message": "bad request"})),
            "insufficient funds"
        );
    }

    #[test]
    fn test_message_fallback() {
        assert_eq!(reason(json!({"message": "bad request"})), "bad request");
        assert_eq!(reason(json!({"error": null, "message": "bad request"})), "bad request");
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(reason(json!({})), UNKNOWN_ORDER_ERROR);
        assert_eq!(reason(json!([])), UNKNOWN_ORDER_ERROR);
        assert_eq!(reason(json!({"id": null})), UNKNOWN_ORDER_ERROR);
    }

    #[test]
    fn test_non_string_reason_is_rendered() {
        assert_eq!(reason(json!({"error": {"code": 7}})), r#"{"code":7}"#);
    }

    #[test]
    fn test_order_with_id_passes_through() {
        let raw = json!({"id": "abc123", "side": "buy", "size": "1", "price": "2", "product_id": "ETH-BTC"});
        let order = created_order(raw.clone()).unwrap();
        assert_eq!(order.id().as_deref(), Some("abc123"));
        assert_eq!(serde_json::to_value(&order).unwrap(), raw);
    }

    #[test]
    fn test_accepted_order_with_odd_fields_is_not_an_error() {
        let raw = json!({"id": "abc123", "side": "buy", "status": {"code": 1}, "size": false});
        let order = created_order(raw.clone()).unwrap();
        assert_eq!(order.status(), None);
        assert_eq!(serde_json::to_value(&order).unwrap(), raw);
    }

    #[test]
    fn test_order_path() {
        assert_eq!(order_path("xyz"), "/orders/xyz");
        assert_eq!(order_path("a-b_c.1~"), "/orders/a-b_c.1~");
    }

    #[test]
    fn test_order_path_escapes_reserved_characters() {
        assert_eq!(order_path("a b"), "/orders/a%20b");
        assert_eq!(order_path("../accounts"), "/orders/..%2Faccounts");
        assert_eq!(order_path("x?y=1"), "/orders/x%3Fy%3D1");
    }
}
