//! `masala shop` - the product listing with category filter and sorting.

use anyhow::{bail, Result};
use clap::Args;
use masala_commerce::prelude::*;

use crate::output::{price_tag, stock_badge, Output};

const TABLE_WIDTHS: [usize; 5] = [4, 30, 14, 14, 12];

#[derive(Args)]
pub struct ShopArgs {
    /// Category filter ("All" for the whole catalog)
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Sort key: name, price-low, price-high, rating
    #[arg(short, long, default_value = "name")]
    pub sort: String,
}

pub fn run(args: &ShopArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    let Some(sort) = SortOption::from_str(&args.sort) else {
        bail!(
            "unknown sort key '{}' (expected name, price-low, price-high or rating)",
            args.sort
        );
    };

    let filtered = catalog.by_category(&args.category);
    let products = sorted(&filtered, sort);

    if out.is_json() {
        out.json(&products);
        return Ok(());
    }

    out.header(&format!("Our Spice Collection: {}", args.category));
    out.debug(&format!("sorted by {}", sort.display_name()));

    if products.is_empty() {
        out.info("No products found. Try adjusting your filters or browse all categories.");
        out.info(&format!("Categories: {}", category_menu().join(", ")));
        return Ok(());
    }

    out.table_row(&["ID", "NAME", "PRICE", "RATING", "STOCK"], &TABLE_WIDTHS);
    for product in &products {
        let price = price_tag(product.price, product.original_price);
        let rating = format!("{} ({})", product.rating, product.reviews);
        out.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &price,
                &rating,
                &stock_badge(product.in_stock),
            ],
            &TABLE_WIDTHS,
        );
    }

    Ok(())
}
