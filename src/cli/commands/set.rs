//! Set command - change the quantity of a cart line

use crate::cart::Cart;
use crate::cli::args::SetArgs;
use crate::config::Config;
use crate::error::CartResult;
use crate::store::CartStore;
use crate::ui::{self, UiContext};

/// Execute the set command
pub async fn execute(args: SetArgs, _config: &Config, store: CartStore) -> CartResult<()> {
    let ctx = UiContext::detect();
    let mut cart = Cart::open(store).await;

    let name = cart
        .lines()
        .iter()
        .find(|l| l.id == args.id)
        .map(|l| l.name.clone());

    cart.set_quantity(args.id, args.quantity).await;

    match name {
        None => ui::step_info(
            &ctx,
            &format!("Product {} is not in the cart, nothing to update", args.id),
        ),
        Some(name) if args.quantity <= 0 => {
            ui::step_ok(&ctx, &format!("Removed {}", name));
        }
        Some(name) => {
            ui::step_ok(&ctx, &format!("Set {} quantity to {}", name, args.quantity));
        }
    }

    ui::key_value(&ctx, "Cart items", &cart.total_item_count().to_string());
    Ok(())
}
