//! `masala featured` - the promotional picks.

use anyhow::Result;
use clap::Args;
use masala_commerce::prelude::*;

use crate::output::{price_tag, Output};

#[derive(Args)]
pub struct FeaturedArgs {}

pub fn run(_args: &FeaturedArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    let featured = catalog.featured();

    if out.is_json() {
        out.json(&featured);
        return Ok(());
    }

    out.header("Featured Products");
    for product in &featured {
        let mut badges = Vec::new();
        if product.is_best_seller {
            badges.push("Best Seller".to_string());
        }
        if product.is_new {
            badges.push("New".to_string());
        }
        if product.discount_percent() > 0 {
            badges.push(format!("{}% OFF", product.discount_percent()));
        }

        out.list_item(&format!(
            "[{}] {} - {} ({})",
            product.id,
            product.name,
            price_tag(product.price, product.original_price),
            badges.join(", "),
        ));
    }

    Ok(())
}
