//! `masala quote` - price a cart and show the order summary.

use anyhow::{bail, Context, Result};
use clap::Args;
use masala_commerce::prelude::*;

use crate::output::{fee_tag, Output};

#[derive(Args)]
pub struct QuoteArgs {
    /// Items as id or id:quantity pairs (e.g. "2:3 1")
    #[arg(required = true, value_name = "ID[:QTY]")]
    pub items: Vec<String>,
}

pub fn run(args: &QuoteArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    let mut cart = Cart::new("cli-session");

    for spec in &args.items {
        let (id, quantity) = parse_item_spec(spec)?;
        if quantity < 1 {
            bail!("quantity must be at least 1 in '{}'", spec);
        }
        let Some(product) = catalog.by_id(id) else {
            bail!("no product with id '{}'", id);
        };
        if !product.in_stock {
            out.warn(&format!("{} is out of stock, skipping", product.name));
            continue;
        }

        let notice = cart.add_item(product.snapshot());
        if quantity > 1 {
            cart.set_quantity(&product.id, quantity);
        }
        out.debug(&format!("{}: {}", notice.title(), notice.description()));
    }

    let summary = OrderSummary::for_cart(&cart);

    if out.is_json() {
        out.json(&serde_json::json!({
            "items": cart.items(),
            "summary": summary,
        }));
        return Ok(());
    }

    out.header(&format!("Your Cart ({} items)", cart.total_items()));
    for item in cart.items() {
        out.list_item(&format!(
            "{} x{} = {}",
            item.name,
            item.quantity,
            item.subtotal()
        ));
    }

    out.header("Order Summary");
    out.kv("Subtotal", &summary.subtotal.display());
    out.kv("Delivery Fee", &fee_tag(summary.delivery_fee));
    if let Some(more) = summary.remaining_for_free_delivery() {
        out.info(&format!("Add {} more for free delivery", more));
    }
    out.kv("Total", &summary.total.display());
    out.success("Quote ready");

    Ok(())
}

/// Parse "id" or "id:quantity" into its parts.
fn parse_item_spec(spec: &str) -> Result<(&str, i64)> {
    match spec.split_once(':') {
        Some((id, qty)) => {
            let quantity: i64 = qty
                .parse()
                .with_context(|| format!("invalid quantity in '{}'", spec))?;
            Ok((id, quantity))
        }
        None => Ok((spec, 1)),
    }
}
