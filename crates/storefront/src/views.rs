//! Derived views over store state.
//!
//! Pure, referentially-transparent computations consumed by presentation.
//! Cheap enough at expected catalog/cart sizes to recompute on every
//! render; nothing here is cached.

use rust_decimal::Decimal;

use lumiere_core::{CartItem, Order, Product};

/// Sum of `price x quantity` over all cart lines.
#[must_use]
pub fn cart_subtotal(cart: &[CartItem]) -> Decimal {
    cart.iter().map(CartItem::line_total).sum()
}

/// Total units in the cart (not distinct lines).
#[must_use]
pub fn cart_item_count(cart: &[CartItem]) -> u32 {
    cart.iter().map(|item| item.quantity).sum()
}

/// Profit margin as a fraction of the sale price: `(price - cost) / price`.
///
/// Returns `None` for a zero-priced product, where the margin is undefined.
#[must_use]
pub fn product_margin(product: &Product) -> Option<Decimal> {
    if product.price.is_zero() {
        return None;
    }
    Some((product.price - product.cost_price) / product.price)
}

/// Sum of recorded order totals.
#[must_use]
pub fn total_revenue(orders: &[Order]) -> Decimal {
    orders.iter().map(|order| order.total).sum()
}

/// Number of placed orders.
#[must_use]
pub fn order_count(orders: &[Order]) -> usize {
    orders.len()
}
