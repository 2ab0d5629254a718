//! Shopwindow CLI - Browse the catalog, manage cart and favorites.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (no login needed)
//! shopwindow products --search shirt --category "men's clothing" --sort price-asc
//! shopwindow product 7
//! shopwindow categories
//!
//! # Log in against the demo auth API
//! shopwindow login -u mor_2314 -p '83r5^_'
//!
//! # Cart and favorites (login required for mutations)
//! shopwindow cart add 7
//! shopwindow cart set 7 3
//! shopwindow cart show
//! shopwindow favorites toggle 7
//! ```
//!
//! State is kept in a local JSON file (`SHOPWINDOW_DATA_FILE`, default
//! `shopwindow.json`); `logout` wipes it.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's output *is* its stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "shopwindow")]
#[command(author, version, about = "Product gallery, cart, and favorites client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products {
        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category ("all" disables the filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: name-asc, name-desc, price-asc, price-desc
        #[arg(long, default_value = "name-asc")]
        sort: String,
    },
    /// Show a single product
    Product {
        /// Product id
        id: u64,
    },
    /// List catalog categories
    Categories,
    /// Log in against the demo auth API
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new demo user
    Register {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and wipe local cart/favorites state
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add one unit of a product
    Add { id: u64 },
    /// Remove a product entirely
    Remove { id: u64 },
    /// Set the quantity of a product (0 removes it)
    Set { id: u64, quantity: u32 },
    /// Show totals only
    Total,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Show favorite products
    Show,
    /// Toggle a product in or out of favorites
    Toggle { id: u64 },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut ctx = commands::Context::init()?;

    match cli.command {
        Commands::Products {
            search,
            category,
            sort,
        } => {
            commands::catalog::products(&ctx, search.as_deref(), category.as_deref(), &sort)
                .await?;
        }
        Commands::Product { id } => commands::catalog::product(&ctx, id.into()).await?,
        Commands::Categories => commands::catalog::categories(&ctx).await?,
        Commands::Login { username, password } => {
            commands::auth::login(&mut ctx, &username, password.into()).await?;
        }
        Commands::Register {
            username,
            email,
            password,
        } => commands::auth::register(&ctx, &username, &email, password.into()).await?,
        Commands::Logout => commands::auth::logout(&mut ctx)?,
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx).await?,
            CartAction::Add { id } => commands::cart::add(&mut ctx, id.into()).await?,
            CartAction::Remove { id } => commands::cart::remove(&mut ctx, id.into()).await?,
            CartAction::Set { id, quantity } => {
                commands::cart::set(&mut ctx, id.into(), quantity).await?;
            }
            CartAction::Total => commands::cart::total(&ctx).await?,
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::Show => commands::favorites::show(&ctx).await?,
            FavoritesAction::Toggle { id } => {
                commands::favorites::toggle(&mut ctx, id.into()).await?;
            }
        },
    }
    Ok(())
}
