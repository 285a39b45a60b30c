//! Basket CLI - inspect and mutate a locally stored cart.
//!
//! # Usage
//!
//! ```bash
//! # Add a product (the first add captures the display fields)
//! basket add prod-001 --name "Espresso Beans 1kg" --price "$18.50"
//!
//! # Same product, different pack size, is a separate entry
//! basket add prod-001 --name "Espresso Beans 250g" --price "$6.20" --variant 250g
//!
//! # Show the cart with totals
//! basket show
//!
//! # Set a quantity (0 removes the entry)
//! basket set-quantity prod-001 3 --variant 250g
//!
//! # Remove an entry / empty the cart
//! basket remove prod-001
//! basket clear
//! ```
//!
//! # Commands
//!
//! - `add` - Add one unit of a product to the cart
//! - `remove` - Remove an entry
//! - `set-quantity` - Set an entry's quantity (0 removes)
//! - `clear` - Empty the cart
//! - `show` - Print the cart contents and totals

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use basket_cart::NewLineItem;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "basket")]
#[command(author, version, about = "Local cart state tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Product identifier
        product_id: String,

        /// Display name captured at add time
        #[arg(short, long)]
        name: String,

        /// Display price captured at add time (e.g. "$18.50")
        #[arg(short, long)]
        price: String,

        /// Variant label (e.g. a pack size)
        #[arg(short, long)]
        variant: Option<String>,

        /// Display image reference
        #[arg(short, long)]
        image: Option<String>,

        /// Pre-discount display price
        #[arg(long)]
        original_price: Option<String>,
    },
    /// Remove an entry from the cart
    Remove {
        /// Product identifier
        product_id: String,

        /// Variant label
        #[arg(short, long)]
        variant: Option<String>,
    },
    /// Set an entry's quantity (0 removes it)
    SetQuantity {
        /// Product identifier
        product_id: String,

        /// New quantity
        quantity: u32,

        /// Variant label
        #[arg(short, long)]
        variant: Option<String>,
    },
    /// Empty the cart
    Clear,
    /// Print the cart contents and totals
    Show,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::CliConfig::from_env()?;

    match cli.command {
        Commands::Add {
            product_id,
            name,
            price,
            variant,
            image,
            original_price,
        } => {
            let mut item = NewLineItem::new(product_id, name, price);
            if let Some(variant) = variant {
                item = item.variant(variant);
            }
            if let Some(image) = image {
                item = item.image(image);
            }
            if let Some(original) = original_price {
                item = item.original_unit_price(original);
            }
            commands::cart::add(&config, item);
        }
        Commands::Remove {
            product_id,
            variant,
        } => commands::cart::remove(&config, &product_id, variant.as_deref()),
        Commands::SetQuantity {
            product_id,
            quantity,
            variant,
        } => commands::cart::set_quantity(&config, &product_id, quantity, variant.as_deref()),
        Commands::Clear => commands::cart::clear(&config),
        Commands::Show => commands::cart::show(&config),
    }
    Ok(())
}
