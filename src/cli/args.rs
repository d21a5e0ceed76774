//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Minicart - Terminal Shopping Cart
///
/// Browse a product catalog and keep a cart that survives across
/// invocations.
#[derive(Parser, Debug)]
#[command(name = "minicart")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MINICART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cart snapshot file path (overrides config)
    #[arg(short, long, global = true, env = "MINICART_STORE")]
    pub store: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the product catalog
    Products(ProductsArgs),

    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Set the quantity of a product already in the cart
    Set(SetArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Show the cart as a checkout table
    Cart(CartArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the products command
#[derive(Parser, Debug)]
pub struct ProductsArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product ID(s) to add, one unit each
    #[arg(required = true)]
    pub ids: Vec<u32>,
}

/// Arguments for the set command
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Product ID
    pub id: u32,

    /// New quantity (zero or negative removes the product)
    #[arg(allow_hyphen_values = true)]
    pub quantity: i64,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Product ID
    pub id: u32,
}

/// Arguments for the cart command
#[derive(Parser, Debug)]
pub struct CartArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_products() {
        let cli = Cli::parse_from(["minicart", "products"]);
        assert!(matches!(cli.command, Commands::Products(_)));
    }

    #[test]
    fn cli_parses_add_multiple() {
        let cli = Cli::parse_from(["minicart", "add", "1", "1", "2"]);
        match cli.command {
            Commands::Add(args) => assert_eq!(args.ids, vec![1, 1, 2]),
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn cli_add_requires_id() {
        assert!(Cli::try_parse_from(["minicart", "add"]).is_err());
    }

    #[test]
    fn cli_parses_set_negative_quantity() {
        let cli = Cli::parse_from(["minicart", "set", "1", "-3"]);
        match cli.command {
            Commands::Set(args) => {
                assert_eq!(args.id, 1);
                assert_eq!(args.quantity, -3);
            }
            _ => panic!("expected Set command"),
        }
    }

    #[test]
    fn cli_parses_store_override() {
        let cli = Cli::parse_from(["minicart", "--store", "/tmp/cart.json", "cart"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/cart.json")));
        assert!(matches!(cli.command, Commands::Cart(_)));
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["minicart", "cart"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["minicart", "-vv", "cart"]);
        assert_eq!(cli.verbose, 2);
    }
}
