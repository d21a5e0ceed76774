//! Minicart - Terminal Shopping Cart
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use minicart::cli::{Cli, Commands};
use minicart::config::ConfigManager;
use minicart::error::CartResult;
use minicart::store::CartStore;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CartResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("minicart=warn"),
        1 => EnvFilter::new("minicart=info"),
        _ => EnvFilter::new("minicart=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    // Resolve the cart snapshot path: flag > config > state dir default
    let store_path = cli
        .store
        .clone()
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(ConfigManager::default_store_path);
    debug!("Using cart snapshot at {}", store_path.display());
    let store = CartStore::new(store_path);

    // Dispatch to command
    match cli.command {
        Commands::Products(args) => minicart::cli::commands::products(args, &config),
        Commands::Add(args) => minicart::cli::commands::add(args, &config, store).await,
        Commands::Set(args) => minicart::cli::commands::set(args, &config, store).await,
        Commands::Remove(args) => minicart::cli::commands::remove(args, &config, store).await,
        Commands::Cart(args) => minicart::cli::commands::cart(args, &config, store).await,
        Commands::Config(args) => {
            minicart::cli::commands::config(args, &config, &config_manager).await
        }
        Commands::Completions(args) => minicart::cli::commands::completions(args),
    }
}
