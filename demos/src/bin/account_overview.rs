//! Demo 1: Account Overview
//!
//! Showcases: signed GET requests for products, balances, open orders and fills
//!
//! Run: ABUCOINS_API_KEY=... ABUCOINS_API_SECRET=... ABUCOINS_API_PASSPHRASE=... \
//!      cargo run --bin account_overview

use abucoins_rest::{AbucoinsRestClient, Credentials};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = AbucoinsRestClient::new(Credentials::from_env()?)?;

    let products = client.list_products().await?;
    println!("{} {} products listed", "✓".green(), products.len());
    for product in &products {
        println!(
            "  {:<10} min {:<12} tick {}",
            product.id().unwrap_or_default().yellow(),
            or_dash(product.min_size()),
            or_dash(product.tick_size()),
        );
    }
    println!();

    println!("{}", "Balances".bold());
    for account in client.list_accounts().await? {
        let available = account.available_decimal().unwrap_or_default();
        if available.is_zero() && account.hold_decimal().unwrap_or_default().is_zero() {
            continue;
        }
        println!(
            "  {:<6} available {:>18}  hold {:>18}",
            account.currency().unwrap_or_else(|| "?".into()).yellow(),
            available,
            account.hold_decimal().unwrap_or_default(),
        );
    }
    println!();

    let open = client.list_orders(&[("status", "open")]).await?;
    println!("{} {} open orders", "✓".green(), open.len());
    for order in &open {
        println!(
            "  {} {} {} @ {} ({})",
            or_dash(order.id()),
            or_dash(order.side()),
            or_dash(order.size_decimal()),
            or_dash(order.price_decimal()),
            or_dash(order.product_id()),
        );
    }
    println!();

    let fills = client.list_fills().await?;
    let notional: rust_decimal::Decimal = fills.iter().filter_map(|f| f.notional()).sum();
    println!("{} {} fills, {} total notional", "✓".green(), fills.len(), notional);

    Ok(())
}

fn or_dash(value: Option<impl std::fmt::Display>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
