//! Demo 2: Place and Cancel
//!
//! Showcases: signed POST with optional fields, create-order error mapping,
//! signed DELETE
//!
//! Run: cargo run --bin place_order -- ETH-BTC buy 0.01 0.0001

use abucoins_rest::{AbucoinsRestClient, Credentials, OrderRequest, OrderSide, RestError};
use colored::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        eprintln!("usage: place_order <product_id> <buy|sell> <size> <price>");
        std::process::exit(2);
    }

    let side = OrderSide::parse(&args[1]).ok_or("side must be buy or sell")?;
    let size = Decimal::from_str(&args[2])?;
    let price = Decimal::from_str(&args[3])?;

    let client = AbucoinsRestClient::new(Credentials::from_env()?)?;

    // Far from the market and post-only, so it rests on the book
    let request = OrderRequest::limit(&args[0], side, size, price).post_only();

    let order = match client.create_order(&request).await {
        Ok(order) => order,
        Err(RestError::CreateOrder(reason)) => {
            println!("{} Order rejected: {}", "✗".red(), reason);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(id) = order.id() else {
        println!("{} Order accepted without a readable id: {:?}", "✗".red(), order.get("id"));
        return Ok(());
    };
    println!("{} Placed order {}", "✓".green(), id.yellow());

    let fetched = client.get_order(&id).await?;
    println!(
        "  status {}  filled {}",
        fetched.status().unwrap_or_else(|| "?".into()),
        fetched.filled_size_decimal().unwrap_or_default(),
    );

    let cancelled = client.cancel_order(&id).await?;
    println!("{} Cancelled: {}", "✓".green(), cancelled);

    Ok(())
}
