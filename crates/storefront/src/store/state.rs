//! The store state aggregate and its pure transitions.
//!
//! Every transition validates its input before touching any field, so a
//! returned error means the state is unchanged. Transitions have no side
//! effects; persistence and subscriber notification live in
//! [`Store`](super::Store), which makes this logic testable without a
//! storage backend.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lumiere_core::{CartItem, Order, OrderStatus, Product, Review, SkinQuizResult};

use crate::error::{Result, StoreError};
use crate::views;

use super::seed::seed_products;

/// The aggregate root: everything the storefront persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    /// Most-recent-first order history.
    pub orders: Vec<Order>,
    pub is_cart_open: bool,
    pub skin_quiz_result: Option<SkinQuizResult>,
}

impl Default for StoreState {
    /// Fresh state with the seeded launch catalog and empty cart/orders.
    fn default() -> Self {
        Self {
            products: seed_products(),
            cart: Vec::new(),
            orders: Vec::new(),
            is_cart_open: false,
            skin_quiz_result: None,
        }
    }
}

impl StoreState {
    /// Append a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the catalog already holds a
    /// product with this id; the catalog is left untouched.
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::DuplicateId(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    /// Replace the product with a matching id in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no product has this id.
    pub fn update_product(&mut self, product: Product) -> Result<()> {
        let existing = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::NotFound(format!("product {}", product.id)))?;
        *existing = product;
        Ok(())
    }

    /// Remove a product from the catalog.
    ///
    /// Does not cascade: cart lines and order items carry their own product
    /// snapshot and keep rendering after the catalog entry is gone.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no product has this id.
    pub fn delete_product(&mut self, id: &str) -> Result<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StoreError::NotFound(format!("product {id}")));
        }
        Ok(())
    }

    /// Add a product to the cart, merging into an existing line.
    ///
    /// If a line for this product id exists its quantity is incremented by
    /// `quantity`; otherwise a new line is inserted. Does not touch the
    /// cart-open flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if `quantity` is zero.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(StoreError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }
        if let Some(line) = self.cart.iter_mut().find(|item| item.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.cart.push(CartItem {
                product: product.clone(),
                quantity,
                selected_variant_id: None,
            });
        }
        Ok(())
    }

    /// Remove a cart line. No-op when the id is absent.
    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.retain(|item| item.product.id != id);
    }

    /// Set a cart line's quantity, clamping negative input to zero.
    ///
    /// A resulting quantity of zero removes the line entirely; the cart
    /// never holds a zero-quantity line. No-op when the id is absent.
    pub fn update_cart_quantity(&mut self, id: &str, quantity: i64) {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if clamped == 0 {
            self.cart.retain(|item| item.product.id != id);
        } else if let Some(line) = self.cart.iter_mut().find(|item| item.product.id == id) {
            line.quantity = clamped;
        }
    }

    /// Set the cart drawer visibility flag.
    pub const fn set_cart_open(&mut self, open: bool) {
        self.is_cart_open = open;
    }

    /// Overwrite the skin quiz result. Last write wins, no history retained.
    pub fn set_quiz_result(&mut self, result: SkinQuizResult) {
        self.skin_quiz_result = Some(result);
    }

    /// Place an order from the current cart.
    ///
    /// Snapshots the cart into the order items and computes the total from
    /// that snapshot, so the "total matches items" invariant holds by
    /// construction. Prepends the order to the history (most recent first)
    /// and clears the cart in the same transition.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the cart is empty.
    pub fn place_order(&mut self, customer_email: &str) -> Result<Order> {
        if self.cart.is_empty() {
            return Err(StoreError::Validation(
                "cannot place an order with an empty cart".to_string(),
            ));
        }

        let items = std::mem::take(&mut self.cart);
        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_email: customer_email.to_string(),
            total: views::cart_subtotal(&items),
            items,
            status: OrderStatus::Pending,
            tracking_number: None,
            created_at: Utc::now(),
        };
        self.orders.insert(0, order.clone());
        Ok(order)
    }

    /// Append a review to a product, creating the review list if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] unless the rating is in 1..=5,
    /// or [`StoreError::NotFound`] if the product id is unknown.
    pub fn add_review(&mut self, product_id: &str, review: Review) -> Result<()> {
        if !(1..=5).contains(&review.rating) {
            return Err(StoreError::Validation(format!(
                "rating must be between 1 and 5, got {}",
                review.rating
            )));
        }
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| StoreError::NotFound(format!("product {product_id}")))?;
        product.reviews.get_or_insert_with(Vec::new).push(review);
        Ok(())
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
