//! Command-line argument definition and dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shopup::app::App;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// ShopUp - catalog search, live search preview and wishlist for the ShopUp grocery store
#[derive(Parser, Debug)]
#[command(name = "shopup")]
#[command(version)]
#[command(about = "Catalog search, live search preview and wishlist for the ShopUp grocery store", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Specify the configuration directory (default: ~/.config/shopup)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Load the product catalog from a JSON file instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level actions.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog by name, category or description
    Search {
        /// Query text (empty lists every product)
        #[arg(default_value = "")]
        query: String,
        /// Category identifier, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
        /// Apply the header dropdown rules (minimum length, preview limit)
        #[arg(long)]
        dropdown: bool,
    },
    /// Read keystrokes line by line from stdin and print settled dropdown results
    Live {
        /// Category identifier, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Maximum number of results per preview
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List categories with their product counts
    Categories,
    /// Show details for one product
    Product {
        /// Product identifier
        id: String,
    },
    /// List the featured products shown on the home page
    Featured,
    /// Manage the wishlist
    Wishlist {
        /// Wishlist action
        #[command(subcommand)]
        action: WishlistAction,
    },
}

/// Wishlist sub-commands.
#[derive(Subcommand, Debug, Clone)]
pub enum WishlistAction {
    /// Show wishlisted products
    List,
    /// Add a product
    Add {
        /// Product identifier
        id: String,
    },
    /// Remove a product
    Remove {
        /// Product identifier
        id: String,
    },
    /// Add the product if absent, remove it if present
    Toggle {
        /// Product identifier
        id: String,
    },
    /// Print the number of wishlisted products
    Count,
    /// Remove every product
    Clear,
}

/// What: Run the requested command against the initialized application.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `app`: Application state built by the entry point
///
/// Output:
/// - `Ok(())` on success.
///
/// # Errors
/// - Propagates I/O errors from the live command's stdin reader.
pub async fn process_args(args: &Args, app: &mut App) -> Result<()> {
    use crate::args::{catalog, live, search, wishlist};

    match &args.command {
        Command::Search {
            query,
            category,
            limit,
            dropdown,
        } => {
            search::handle_search(app, query, category, *limit, *dropdown);
            Ok(())
        }
        Command::Live { category, limit } => live::handle_live(app, category, *limit).await,
        Command::Categories => {
            catalog::handle_categories(app);
            Ok(())
        }
        Command::Product { id } => {
            catalog::handle_product(app, id);
            Ok(())
        }
        Command::Featured => {
            catalog::handle_featured(app);
            Ok(())
        }
        Command::Wishlist { action } => {
            wishlist::handle_wishlist(app, action);
            Ok(())
        }
    }
}
