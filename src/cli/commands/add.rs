//! Add command - put products in the cart

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::error::{CartError, CartResult};
use crate::store::CartStore;
use crate::ui::{self, UiContext};

/// Execute the add command
pub async fn execute(args: AddArgs, _config: &Config, store: CartStore) -> CartResult<()> {
    let catalog = Catalog::builtin();
    let ctx = UiContext::detect();

    // Resolve every ID before mutating, so a typo adds nothing
    let mut items = Vec::with_capacity(args.ids.len());
    for id in &args.ids {
        let item = catalog.get(*id).ok_or(CartError::ProductNotFound(*id))?;
        items.push(item);
    }

    let mut cart = Cart::open(store).await;
    for item in items {
        cart.add(item).await;
        ui::step_ok(&ctx, &format!("Added {}", item.name));
    }

    ui::key_value(&ctx, "Cart items", &cart.total_item_count().to_string());
    Ok(())
}
