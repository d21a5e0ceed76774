//! The cart: in-memory line collection plus persistence

use crate::cart::line::CartLine;
use crate::catalog::CatalogItem;
use crate::store::CartStore;
use tracing::{debug, warn};

/// The authoritative cart state for one session.
///
/// Owns the line collection; all mutation goes through `add` and
/// `set_quantity`, and every mutation re-persists the full collection
/// before returning. Construction never fails: a missing or unusable
/// snapshot starts the cart empty.
#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    store: CartStore,
}

impl Cart {
    /// Open the cart from its persisted snapshot
    pub async fn open(store: CartStore) -> Self {
        let lines = store.try_load().await.unwrap_or_default();
        debug!("Opened cart with {} line(s)", lines.len());
        Self { lines, store }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same product ID gets its quantity
    /// incremented; otherwise a new line is appended at the end, so
    /// line order is first-add order.
    pub async fn add(&mut self, item: &CatalogItem) {
        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(item)),
        }
        self.persist().await;
    }

    /// Set the quantity of an existing line to an absolute value.
    ///
    /// A quantity of zero or less removes the line; this is the only
    /// operation that shrinks the cart. An ID with no line is a no-op,
    /// not an error.
    pub async fn set_quantity(&mut self, id: u32, quantity: i64) {
        if !self.lines.iter().any(|l| l.id == id) {
            debug!("set_quantity for id {} ignored: not in cart", id);
            return;
        }

        if quantity >= 1 {
            if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
                line.quantity = quantity.try_into().unwrap_or(u32::MAX);
            }
        } else {
            self.lines.retain(|l| l.id != id);
        }
        self.persist().await;
    }

    /// Total units across all lines
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Total price across all lines, recomputed from current state
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Read-only view of the lines, in first-add order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // A failed write is logged and swallowed: in-memory state stays
    // correct and the next mutation rewrites the whole snapshot.
    async fn persist(&self) {
        if let Err(e) = self.store.save(&self.lines).await {
            warn!("Failed to persist cart: {}", e);
        }
    }
}
