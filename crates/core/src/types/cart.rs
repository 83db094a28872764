//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::Product;

/// A line in the shopping cart: a product snapshot plus a quantity.
///
/// The cart holds at most one line per product id; adding the same product
/// again increments the quantity instead of duplicating the line. A line
/// whose quantity reaches zero is removed, never retained at zero.
///
/// The product fields are flattened into the line in the persisted form,
/// matching the `lumiere-storage` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Units of this product in the cart, >= 1 while the line exists.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant_id: Option<String>,
}

impl CartItem {
    /// Price contribution of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
