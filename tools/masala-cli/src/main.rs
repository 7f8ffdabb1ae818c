//! Masala CLI - Terminal storefront for the Masala spice shop.
//!
//! Commands:
//! - `masala shop` - Browse the product listing with filters and sorting
//! - `masala show` - Show one product in detail
//! - `masala featured` - List the promotional picks
//! - `masala quote` - Price a cart and show the order summary

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use masala_commerce::prelude::*;

use commands::{FeaturedArgs, QuoteArgs, ShopArgs, ShowArgs};

/// Masala CLI - Browse the spice shop from the terminal
#[derive(Parser)]
#[command(name = "masala")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product listing
    Shop(ShopArgs),

    /// Show one product in detail
    Show(ShowArgs),

    /// List the promotional picks
    Featured(FeaturedArgs),

    /// Price a cart and show the order summary
    Quote(QuoteArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // The shop's compiled-in catalog
    let catalog = Catalog::builtin();

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(&args, &catalog, &output),
        Commands::Show(args) => commands::show::run(&args, &catalog, &output),
        Commands::Featured(args) => commands::featured::run(&args, &catalog, &output),
        Commands::Quote(args) => commands::quote::run(&args, &catalog, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
