//! # Shop Demo
//!
//! Drives a scripted shopping session through the stores and prints the
//! cart view after each step as JSON.
//!
//! ## Usage
//! ```bash
//! cargo run -p shop-state --bin shop-demo
//!
//! # Use a specific config file
//! cargo run -p shop-state --bin shop-demo -- --config ./shop.toml
//!
//! # See every dispatch
//! RUST_LOG=shop_state=debug cargo run -p shop-state --bin shop-demo
//! ```

use shop_core::{CartAction, RawAction};
use shop_state::telemetry::init_tracing;
use shop_state::{ShopConfig, ShopContext};
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let config = ShopConfig::load(config_path)?;
    init_tracing(&config);

    info!("Starting Widget Shop demo");

    let mut shop = ShopContext::new(config);

    println!("catalog: {}", serde_json::to_string_pretty(&shop.catalog().view())?);

    let widget = shop
        .catalog()
        .find("item0001")
        .cloned()
        .ok_or("item0001 missing from catalog")?;
    let premium = shop
        .catalog()
        .find("item0002")
        .cloned()
        .ok_or("item0002 missing from catalog")?;

    let steps = [
        ("add premium widget", CartAction::add_product(&premium)),
        ("add widget", CartAction::add_product(&widget)),
        ("add widget again", CartAction::add_product(&widget)),
        ("set widget quantity to 5", CartAction::set_quantity(&widget.sku, 5)),
        ("remove premium widget", CartAction::remove(&premium.sku)),
    ];

    for (label, action) in steps {
        shop.cart_mut().dispatch(action)?;
        print_cart(&shop, label)?;
    }

    // A rejected action is reported and the cart is left as it was.
    if let Err(err) = shop
        .cart_mut()
        .dispatch(CartAction::set_quantity("item0003", 2))
    {
        info!(error = %err, "action rejected, cart unchanged");
    }
    if let Err(err) = shop.cart_mut().dispatch_raw(RawAction::new("REMOTE", None)) {
        info!(error = %err, "action rejected, cart unchanged");
    }
    print_cart(&shop, "after rejected actions")?;

    shop.cart_mut().dispatch_json(r#"{"type":"SUBMIT"}"#)?;
    print_cart(&shop, "submit")?;

    info!("Demo finished");
    Ok(())
}

fn print_cart(shop: &ShopContext, label: &str) -> serde_json::Result<()> {
    println!("{label}: {}", serde_json::to_string(&shop.cart().view())?);
    Ok(())
}
