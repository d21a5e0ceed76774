//! Products command - list the catalog

use crate::catalog::Catalog;
use crate::cli::args::{OutputFormat, ProductsArgs};
use crate::cli::commands::format_price;
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the products command
pub fn execute(args: ProductsArgs, config: &Config) -> CartResult<()> {
    let catalog = Catalog::builtin();

    match args.format {
        OutputFormat::Table => print_table(&catalog, config),
        OutputFormat::Json => print_json(&catalog)?,
        OutputFormat::Plain => print_plain(&catalog),
    }

    Ok(())
}

fn print_table(catalog: &Catalog, config: &Config) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Products");

    println!(
        "{:<6} {:<30} {:<10}",
        style("ID").bold(),
        style("PRODUCT").bold(),
        style("PRICE").bold()
    );
    println!("{}", "-".repeat(46));

    for item in catalog.items() {
        println!(
            "{:<6} {:<30} {:<10}",
            item.id,
            item.name,
            format_price(&config.display.currency, item.price)
        );
    }

    println!();
    println!("{} product(s)", catalog.len());
}

fn print_json(catalog: &Catalog) -> CartResult<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    println!("{}", json);
    Ok(())
}

fn print_plain(catalog: &Catalog) {
    for item in catalog.items() {
        println!("{}", item.name);
    }
}
