//! Types for Abucoins REST API requests and responses
//!
//! Response records hold the exchange's JSON object exactly as it arrived.
//! Typed accessors read known fields out of it: numbers may come as strings or
//! JSON numbers, and a field holding anything unexpected reads as `None`
//! rather than failing the whole response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Order Enums
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Parse the exchange's lowercase name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order
    #[default]
    Limit,
    /// Market order
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Market => write!(f, "market"),
        }
    }
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancelled
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Good till time, see [`CancelAfter`]
    #[serde(rename = "GTT")]
    GoodTillTime,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Fill or kill
    #[serde(rename = "FOK")]
    FillOrKill,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoodTillCancelled => write!(f, "GTC"),
            Self::GoodTillTime => write!(f, "GTT"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
            Self::FillOrKill => write!(f, "FOK"),
        }
    }
}

/// Expiry window for [`TimeInForce::GoodTillTime`] orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelAfter {
    /// One minute
    Min,
    /// One hour
    Hour,
    /// One day
    Day,
}

impl std::fmt::Display for CancelAfter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Hour => write!(f, "hour"),
            Self::Day => write!(f, "day"),
        }
    }
}

// ============================================================================
// Order Request
// ============================================================================

/// Parameters for `POST /orders`
///
/// Serializes to the request body in declaration order. `hidden` and `type` are
/// always sent; the trailing options are left out entirely when unset so the
/// exchange applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Order side
    pub side: OrderSide,
    /// Hide the order from the public book
    pub hidden: bool,
    /// Order size in base currency
    pub size: Decimal,
    /// Limit price
    pub price: Decimal,
    /// Product, e.g. "ETH-BTC"
    pub product_id: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry window for GTT orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<CancelAfter>,
    /// Maker only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(product_id: impl Into<String>, side: OrderSide, size: Decimal, price: Decimal) -> Self {
        Self {
            side,
            hidden: false,
            size,
            price,
            product_id: product_id.into(),
            order_type: OrderType::Limit,
            time_in_force: None,
            cancel_after: None,
            post_only: None,
        }
    }

    /// Create a buy limit order
    pub fn buy(product_id: impl Into<String>, size: Decimal, price: Decimal) -> Self {
        Self::limit(product_id, OrderSide::Buy, size, price)
    }

    /// Create a sell limit order
    pub fn sell(product_id: impl Into<String>, size: Decimal, price: Decimal) -> Self {
        Self::limit(product_id, OrderSide::Sell, size, price)
    }

    /// Set order type
    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// Hide the order from the public book
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the expiry window (implies nothing about time in force)
    pub fn with_cancel_after(mut self, cancel_after: CancelAfter) -> Self {
        self.cancel_after = Some(cancel_after);
        self
    }

    /// Set as post-only (maker only)
    pub fn post_only(self) -> Self {
        self.with_post_only(true)
    }

    /// Send an explicit post-only flag
    pub fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = Some(post_only);
        self
    }
}

// ============================================================================
// Response Records
// ============================================================================

/// Generates the shared surface of a response record
///
/// A record is the exchange's JSON object kept as received. Serializing one
/// gives back that object unchanged, and the accessors read a typed view of
/// it without ever failing on an unexpected value.
macro_rules! record {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            fields: Map<String, Value>,
        }

        impl $name {
            /// Raw value of any field
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.fields.get(key)
            }

            /// All fields as sent by the exchange
            pub fn as_map(&self) -> &Map<String, Value> {
                &self.fields
            }

            /// Consume the record, returning the exchange's object
            pub fn into_map(self) -> Map<String, Value> {
                self.fields
            }

            fn text(&self, key: &str) -> Option<String> {
                text(self.fields.get(key))
            }

            fn decimal(&self, key: &str) -> Option<Decimal> {
                decimal(self.fields.get(key))
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(fields: Map<String, Value>) -> Self {
                Self { fields }
            }
        }

        impl From<$name> for Value {
            fn from(record: $name) -> Self {
                Value::Object(record.fields)
            }
        }
    };
}

record! {
    /// An order as reported by the exchange
    Order
}

impl Order {
    /// Exchange order id
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// Order side ("buy" / "sell")
    pub fn side(&self) -> Option<String> {
        self.text("side")
    }

    /// Parsed order side
    pub fn order_side(&self) -> Option<OrderSide> {
        self.side().as_deref().and_then(OrderSide::parse)
    }

    /// Product id
    pub fn product_id(&self) -> Option<String> {
        self.text("product_id")
    }

    /// Order type
    pub fn order_type(&self) -> Option<String> {
        self.text("type")
    }

    /// Order status, e.g. "open", "done"
    pub fn status(&self) -> Option<String> {
        self.text("status")
    }

    /// Creation time
    pub fn created_at(&self) -> Option<String> {
        self.text("created_at")
    }

    /// Parsed order size
    pub fn size_decimal(&self) -> Option<Decimal> {
        self.decimal("size")
    }

    /// Parsed limit price
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.decimal("price")
    }

    /// Parsed filled size
    pub fn filled_size_decimal(&self) -> Option<Decimal> {
        self.decimal("filled_size")
    }

    /// Check if the order is still resting on the book
    pub fn is_open(&self) -> bool {
        matches!(self.status().as_deref(), Some("open") | Some("pending"))
    }
}

record! {
    /// A tradable product
    Product
}

impl Product {
    /// Product id, e.g. "ETH-BTC"
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// Base currency
    pub fn base_currency(&self) -> Option<String> {
        self.text("base_currency")
    }

    /// Quote currency
    pub fn quote_currency(&self) -> Option<String> {
        self.text("quote_currency")
    }

    /// Human readable name
    pub fn display_name(&self) -> Option<String> {
        self.text("display_name")
    }

    /// Minimum order size
    pub fn min_size(&self) -> Option<Decimal> {
        self.decimal("base_min_size")
    }

    /// Maximum order size
    pub fn max_size(&self) -> Option<Decimal> {
        self.decimal("base_max_size")
    }

    /// Price tick size
    pub fn tick_size(&self) -> Option<Decimal> {
        self.decimal("quote_increment")
    }
}

record! {
    /// A currency account
    Account
}

impl Account {
    /// Account id
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// Currency code
    pub fn currency(&self) -> Option<String> {
        self.text("currency")
    }

    /// Owning profile
    pub fn profile_id(&self) -> Option<String> {
        self.text("profile_id")
    }

    /// Total balance
    pub fn balance_decimal(&self) -> Option<Decimal> {
        self.decimal("balance")
    }

    /// Available balance
    pub fn available_decimal(&self) -> Option<Decimal> {
        self.decimal("available")
    }

    /// Balance on hold
    pub fn hold_decimal(&self) -> Option<Decimal> {
        self.decimal("hold")
    }
}

record! {
    /// An executed trade against one of our orders
    Fill
}

impl Fill {
    /// Trade id
    pub fn trade_id(&self) -> Option<String> {
        self.text("trade_id")
    }

    /// Product id
    pub fn product_id(&self) -> Option<String> {
        self.text("product_id")
    }

    /// Order that was filled
    pub fn order_id(&self) -> Option<String> {
        self.text("order_id")
    }

    /// Maker ("M") or taker ("T")
    pub fn liquidity(&self) -> Option<String> {
        self.text("liquidity")
    }

    /// Execution price
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.decimal("price")
    }

    /// Executed size
    pub fn size_decimal(&self) -> Option<Decimal> {
        self.decimal("size")
    }

    /// Fee charged
    pub fn fee_decimal(&self) -> Option<Decimal> {
        self.decimal("fee")
    }

    /// Executed notional (price * size), `None` if it does not fit a `Decimal`
    pub fn notional(&self) -> Option<Decimal> {
        self.price_decimal()?.checked_mul(self.size_decimal()?)
    }

    /// Parsed side of our order
    pub fn order_side(&self) -> Option<OrderSide> {
        self.text("side").as_deref().and_then(OrderSide::parse)
    }
}

/// Strings as-is, numbers in their JSON spelling, anything else is absent
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn decimal(value: Option<&Value>) -> Option<Decimal> {
    let text = text(value)?;
    text.parse()
        .ok()
        .or_else(|| Decimal::from_scientific(&text).ok())
}
