//! Cart line records

use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// One entry in the cart: a product reference plus a quantity.
///
/// Fields are copied from the catalog item at first add, so the line
/// stays renderable even if the catalog changes between sessions. The
/// quantity is at least 1 for as long as the line exists; a line whose
/// quantity would drop to 0 is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product ID, unique across the cart
    pub id: u32,

    /// Product display name
    pub name: String,

    /// Unit price at time of first add
    pub price: f64,

    /// Image reference carried through for rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Units of this product in the cart, always >= 1
    pub quantity: u32,
}

impl CartLine {
    /// Create a new line for an item being added the first time
    pub fn new(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: 1,
        }
    }

    /// Line subtotal: unit price times quantity
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
