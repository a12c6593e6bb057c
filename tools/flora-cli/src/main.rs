//! Flora CLI - command line storefront for the Flora catalog and cart.
//!
//! Commands:
//! - `flora catalog` - Browse flowers, categories, and accessories
//! - `flora add` - Add a flower (with accessories) to the cart
//! - `flora cart` - Show the cart
//! - `flora qty` / `flora remove` / `flora drop` / `flora strip` - Edit the cart
//! - `flora clear` - Empty the cart
//! - `flora checkout` - Collect delivery details and produce the dispatch link

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, CartArgs, CatalogArgs, CheckoutArgs, DropArgs, QtyArgs, RemoveArgs, StripArgs};

/// Flora CLI - browse the catalog, build a cart, dispatch the order
#[derive(Parser)]
#[command(name = "flora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse flowers, categories, and accessories
    Catalog(CatalogArgs),

    /// Add a flower to the cart
    Add(AddArgs),

    /// Show the cart
    Cart(CartArgs),

    /// Set the quantity of a cart line
    Qty(QtyArgs),

    /// Remove a cart line
    Remove(RemoveArgs),

    /// Remove the most recently added line of a flower
    Drop(DropArgs),

    /// Strip an accessory from a flower's cart lines
    Strip(StripArgs),

    /// Empty the cart
    Clear,

    /// Collect delivery details and produce the dispatch link
    Checkout(CheckoutArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = output::Output::new(cli.verbose);
    let mut ctx = context::Context::load(cli.config.as_deref(), output)?;

    match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Add(args) => commands::add::run(args, &mut ctx),
        Commands::Cart(args) => commands::cart::show(args, &ctx),
        Commands::Qty(args) => commands::cart::set_quantity(args, &mut ctx),
        Commands::Remove(args) => commands::cart::remove(args, &mut ctx),
        Commands::Drop(args) => commands::cart::drop_most_recent(args, &mut ctx),
        Commands::Strip(args) => commands::cart::strip(args, &mut ctx),
        Commands::Clear => commands::cart::clear(&mut ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &mut ctx),
    }
}
