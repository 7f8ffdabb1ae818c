//! `masala show` - one product in full detail.

use anyhow::{bail, Result};
use clap::Args;
use masala_commerce::prelude::*;

use crate::output::{price_tag, stock_badge, Output};

#[derive(Args)]
pub struct ShowArgs {
    /// Product id
    pub id: String,
}

pub fn run(args: &ShowArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    let Some(product) = catalog.by_id(&args.id) else {
        bail!("no product with id '{}'", args.id);
    };

    if out.is_json() {
        out.json(product);
        return Ok(());
    }

    out.header(&product.name);
    out.info(&product.description);

    let mut price = price_tag(product.price, product.original_price);
    if product.discount_percent() > 0 {
        price.push_str(&format!(
            " ({}% OFF, save {})",
            product.discount_percent(),
            product.savings()
        ));
    }
    out.kv("Price", &price);
    out.kv("Category", product.category.as_str());
    out.kv("Origin", &product.origin);
    out.kv("Weight", &product.weight);
    out.kv(
        "Rating",
        &format!("{}/5 ({} reviews)", product.rating, product.reviews),
    );
    out.kv("Availability", &stock_badge(product.in_stock));

    if !product.uses.is_empty() {
        out.header("Perfect for");
        for use_case in &product.uses {
            out.list_item(use_case);
        }
    }

    if !product.benefits.is_empty() {
        out.header("Health benefits");
        for benefit in &product.benefits {
            out.list_item(benefit);
        }
    }

    Ok(())
}
