//! Product catalog
//!
//! A fixed, read-only list of purchasable products supplied at startup.
//! There is no loading or validation path; the built-in list is the
//! catalog for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// One purchasable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable product ID, unique within the catalog
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unit price, currency amount with two-decimal display
    pub price: f64,

    /// Image reference (path or URL), opaque to the cart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CatalogItem {
    pub fn new(id: u32, name: &str, price: f64, image: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            image: image.map(str::to_string),
        }
    }
}

/// The product catalog, immutable once constructed
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The built-in product list
    pub fn builtin() -> Self {
        Self {
            items: vec![
                CatalogItem::new(
                    1,
                    "Wireless Mouse",
                    14.99,
                    Some("https://m.media-amazon.com/images/I/61LtuGzXeaL._AC_SL1500_.jpg"),
                ),
                CatalogItem::new(
                    2,
                    "Bluetooth Headphones",
                    39.99,
                    Some("https://m.media-amazon.com/images/I/61CGHv6kmWL._AC_SL1500_.jpg"),
                ),
                CatalogItem::new(
                    3,
                    "Mechanical Keyboard",
                    59.99,
                    Some("./images/mechanicalkeyboard.jpg"),
                ),
                CatalogItem::new(4, "Smartwatch", 89.99, Some("./images/smartwatch.jpg")),
            ],
        }
    }

    /// Look up a product by ID
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
