//! Cart command - checkout view

use crate::cart::Cart;
use crate::cli::args::{CartArgs, OutputFormat};
use crate::cli::commands::format_price;
use crate::config::Config;
use crate::error::CartResult;
use crate::store::CartStore;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the cart command
pub async fn execute(args: CartArgs, config: &Config, store: CartStore) -> CartResult<()> {
    let cart = Cart::open(store).await;

    if cart.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "Your cart is empty");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&cart, config),
        OutputFormat::Json => print_json(&cart)?,
        OutputFormat::Plain => print_plain(&cart),
    }

    Ok(())
}

fn print_table(cart: &Cart, config: &Config) {
    let ctx = UiContext::detect();
    let currency = &config.display.currency;
    ui::intro(&ctx, "Checkout");

    println!(
        "{:<30} {:<10} {:<6} {:<10}",
        style("ITEM").bold(),
        style("PRICE").bold(),
        style("QTY").bold(),
        style("SUBTOTAL").bold()
    );
    println!("{}", "-".repeat(58));

    for line in cart.lines() {
        println!(
            "{:<30} {:<10} {:<6} {:<10}",
            line.name,
            format_price(currency, line.price),
            line.quantity,
            format_price(currency, line.subtotal())
        );
    }

    println!();
    println!(
        "{} {}",
        style("Total:").bold(),
        format_price(currency, cart.total_price())
    );
    println!("{} item(s)", cart.total_item_count());
}

fn print_json(cart: &Cart) -> CartResult<()> {
    let json = serde_json::to_string_pretty(cart.lines())?;
    println!("{}", json);
    Ok(())
}

fn print_plain(cart: &Cart) {
    for line in cart.lines() {
        println!("{} x{}", line.name, line.quantity);
    }
}
