//! Catalog CLI - Terminal viewer for a remote product catalog.
//!
//! Commands:
//! - `catalog browse` - Print one page of the filtered, sorted catalog
//! - `catalog show` - Show a single product
//! - `catalog categories` - List categories
//! - `catalog interactive` - Browse with live search
//! - `catalog config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;

use anyhow::Result;
use catalog_observability::{init_logging, LogLevel};
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CategoriesArgs, ConfigArgs, InteractiveArgs, ShowArgs};

/// Catalog CLI - Browse, search and inspect a product catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Override the catalog API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a page of products
    Browse(BrowseArgs),

    /// Show product details
    Show(ShowArgs),

    /// List product categories
    Categories(CategoriesArgs),

    /// Browse interactively with debounced search
    Interactive(InteractiveArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let mut ctx = context::Context::load(config_path, output)?;
    if let Some(api_url) = cli.api_url {
        ctx.config.api.base_url = api_url;
    }

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging.level = logging.level.min(LogLevel::Debug);
    }
    if let Err(e) = init_logging(&logging) {
        ctx.output.warn(&format!("Logging disabled: {}", e));
    }

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Interactive(args) => commands::interactive::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
