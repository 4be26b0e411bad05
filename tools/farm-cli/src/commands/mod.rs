//! CLI command implementations.

pub mod categories;
pub mod facets;
pub mod list;
pub mod show;

use clap::Args;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category ("all", "pigs", "pork", "foodstuff", "drinks").
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Minimum price in naira.
    #[arg(long)]
    pub min: Option<i64>,

    /// Maximum price in naira.
    #[arg(long)]
    pub max: Option<i64>,

    /// Size facet values (repeatable).
    #[arg(long)]
    pub size: Vec<String>,

    /// Breed facet values (repeatable).
    #[arg(long)]
    pub breed: Vec<String>,

    /// Type facet values (repeatable).
    #[arg(long = "type")]
    pub kind: Vec<String>,

    /// Show only in-stock products.
    #[arg(long)]
    pub in_stock: bool,

    /// Free-text name search.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Page number (1-based).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// View mode ("grid" or "list"); sets the page size.
    #[arg(long, default_value = "grid")]
    pub view: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id (e.g., "pig-1").
    pub id: String,
}
