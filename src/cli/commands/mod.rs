//! CLI command implementations

pub mod add;
pub mod cart;
pub mod completions;
pub mod config;
pub mod products;
pub mod remove;
pub mod set;

pub use add::execute as add;
pub use cart::execute as cart;
pub use completions::execute as completions;
pub use config::execute as config;
pub use products::execute as products;
pub use remove::execute as remove;
pub use set::execute as set;

/// Format a price with the configured currency symbol
pub(crate) fn format_price(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}
