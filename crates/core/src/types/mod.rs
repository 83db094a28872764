//! Domain types for Lumiere.
//!
//! Entity shapes are pure data contracts; invariants (quantity floors,
//! rating bounds, id uniqueness) are enforced by the store, not here.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod quiz;

pub use cart::CartItem;
pub use catalog::{BeforeAfterResult, Category, Product, Review, Routine, Variant};
pub use order::{Order, OrderStatus};
pub use quiz::{ParseSkinTypeError, SkinQuizResult, SkinType};
