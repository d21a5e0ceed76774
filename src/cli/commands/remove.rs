//! Remove command - drop a product from the cart
//!
//! Shorthand for `set <id> 0`.

use crate::cart::Cart;
use crate::cli::args::RemoveArgs;
use crate::config::Config;
use crate::error::CartResult;
use crate::store::CartStore;
use crate::ui::{self, UiContext};

/// Execute the remove command
pub async fn execute(args: RemoveArgs, _config: &Config, store: CartStore) -> CartResult<()> {
    let ctx = UiContext::detect();
    let mut cart = Cart::open(store).await;

    let name = cart
        .lines()
        .iter()
        .find(|l| l.id == args.id)
        .map(|l| l.name.clone());

    cart.set_quantity(args.id, 0).await;

    match name {
        Some(name) => ui::step_ok(&ctx, &format!("Removed {}", name)),
        None => ui::step_info(
            &ctx,
            &format!("Product {} is not in the cart, nothing to remove", args.id),
        ),
    }

    ui::key_value(&ctx, "Cart items", &cart.total_item_count().to_string());
    Ok(())
}
