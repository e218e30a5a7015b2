//! PlayJoy CLI - Inspect and mutate a file-backed cart.
//!
//! # Usage
//!
//! ```bash
//! # Add two bears to the cart
//! pj-cli add --id 1 --name "Bear" --price 19.99 --qty 2
//!
//! # Change the quantity of a line (0 removes it)
//! pj-cli set-qty --id 1 --qty 3
//!
//! # Remove a line
//! pj-cli remove --id 1
//!
//! # List the cart with count and subtotal
//! pj-cli show
//!
//! # Delete the cart entirely
//! pj-cli clear
//! ```
//!
//! # Environment Variables
//!
//! - `PJ_CART_FILE` - Path of the cart slot file
//!   (default: `$HOME/.playjoy/cart.json`)
//! - `PJ_LOG` - Log filter (default: `info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "pj-cli")]
#[command(author, version, about = "PlayJoy cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart (merges with an existing line)
    Add {
        /// Product id
        #[arg(short, long)]
        id: i32,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Unit price (e.g., 19.99)
        #[arg(short, long)]
        price: Decimal,

        /// Quantity to add (default 1)
        #[arg(short, long)]
        qty: Option<u32>,

        /// Pre-discount price, display only
        #[arg(long)]
        original_price: Option<Decimal>,

        /// Display emoji
        #[arg(long)]
        emoji: Option<String>,

        /// Display category
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id
        #[arg(short, long)]
        id: i32,
    },
    /// Set the quantity of an existing line (0 removes it)
    SetQty {
        /// Product id
        #[arg(short, long)]
        id: i32,

        /// New quantity
        #[arg(short, long)]
        qty: u32,
    },
    /// Delete the cart slot entirely
    Clear,
    /// List line items with count and subtotal
    Show,
}

fn main() {
    // .env is optional; ignore a missing file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PJ_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let store = config.open_store();

    match cli.command {
        Commands::Add {
            id,
            name,
            price,
            qty,
            original_price,
            emoji,
            category,
        } => commands::cart::add(&store, id, &name, price, qty, original_price, emoji, category)?,
        Commands::Remove { id } => commands::cart::remove(&store, id)?,
        Commands::SetQty { id, qty } => commands::cart::set_qty(&store, id, qty)?,
        Commands::Clear => commands::cart::clear(&store)?,
        Commands::Show => commands::cart::show(&store),
    }
    Ok(())
}
