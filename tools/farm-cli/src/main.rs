//! Farm CLI - terminal browser for the farm-goods catalog.
//!
//! Commands:
//! - `farm list` - Filter and page through the catalog
//! - `farm show <id>` - Show one product's detail
//! - `farm facets` - List facet values (size, breed, type)
//! - `farm categories` - List the storefront categories

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ListArgs, ShowArgs};

/// Farm CLI - browse the farm-goods catalog from the terminal
#[derive(Parser)]
#[command(name = "farm")]
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
    /// Filter and page through the catalog
    List(ListArgs),

    /// Show one product's detail
    Show(ShowArgs),

    /// List facet values for filter controls
    Facets,

    /// List the storefront categories
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &output),
        Commands::Show(args) => commands::show::run(args, &output),
        Commands::Facets => commands::facets::run(&output),
        Commands::Categories => commands::categories::run(&output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
