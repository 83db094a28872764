//! The application state store.
//!
//! [`Store`] is the sole owner and mutator of application state. It is
//! constructed once at startup and passed by reference to every consumer;
//! there is no ambient global. All reads go through its accessors against
//! current state; all writes go through the mutation operations, each of
//! which applies a pure [`StoreState`] transition and, on success, commits:
//! the state is persisted through the [`StateStore`] backend and every
//! registered subscriber is notified exactly once. A failed transition
//! commits nothing: state, storage, and subscribers stay untouched.

pub mod persistence;
pub mod seed;
pub mod state;

use std::sync::Arc;

use tracing::{info, warn};

use lumiere_core::{CartItem, Order, Product, Review, SkinQuizResult};

use crate::error::Result;

pub use persistence::{JsonFileStore, MemoryStore, PersistenceError, StateStore};
pub use state::StoreState;

/// Callback invoked with the post-mutation state after every commit.
type Subscriber = Box<dyn Fn(&StoreState) + Send + Sync>;

/// The state container.
pub struct Store {
    state: StoreState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    /// Create a store over an explicit initial state, with no persistence.
    ///
    /// Intended for tests and ephemeral sessions; use [`Store::open`] for
    /// the durable store.
    #[must_use]
    pub fn new(state: StoreState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Open the durable store: load persisted state from `backend`, falling
    /// back to the seeded default catalog when nothing is persisted or the
    /// record is corrupt, and persist every subsequent mutation back to it.
    pub fn open(backend: Arc<dyn StateStore>) -> Self {
        let state = match backend.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                info!("no persisted state found, seeding default catalog");
                StoreState::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load persisted state, seeding default catalog");
                StoreState::default()
            }
        };

        let mut store = Self::new(state);
        store.subscribe(move |state| {
            // Save failure is non-fatal: the in-memory transition stands.
            if let Err(e) = backend.save(state) {
                warn!(error = %e, "failed to persist state");
            }
        });
        store
    }

    /// Register a subscriber, called with the new state after each commit.
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreState) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn commit(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The full current state.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// The current catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    /// The current cart lines.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.state.cart
    }

    /// Order history, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.state.orders
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.state.is_cart_open
    }

    /// The latest quiz result, if the quiz has been completed.
    #[must_use]
    pub const fn skin_quiz_result(&self) -> Option<&SkinQuizResult> {
        self.state.skin_quiz_result.as_ref()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.state.product(id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a product to the catalog. See [`StoreState::add_product`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::DuplicateId`] for an existing id.
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        self.state.add_product(product)?;
        self.commit();
        Ok(())
    }

    /// Replace a product in place. See [`StoreState::update_product`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] for an unknown id.
    pub fn update_product(&mut self, product: Product) -> Result<()> {
        self.state.update_product(product)?;
        self.commit();
        Ok(())
    }

    /// Remove a product from the catalog. See [`StoreState::delete_product`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] for an unknown id.
    pub fn delete_product(&mut self, id: &str) -> Result<()> {
        self.state.delete_product(id)?;
        self.commit();
        Ok(())
    }

    /// Add a product to the cart. See [`StoreState::add_to_cart`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Validation`] for a zero quantity.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<()> {
        self.state.add_to_cart(product, quantity)?;
        self.commit();
        Ok(())
    }

    /// Remove a cart line. No-op when the id is absent.
    pub fn remove_from_cart(&mut self, id: &str) {
        self.state.remove_from_cart(id);
        self.commit();
    }

    /// Set a cart line's quantity. See [`StoreState::update_cart_quantity`].
    pub fn update_cart_quantity(&mut self, id: &str, quantity: i64) {
        self.state.update_cart_quantity(id, quantity);
        self.commit();
    }

    /// Set the cart drawer visibility flag.
    pub fn set_cart_open(&mut self, open: bool) {
        self.state.set_cart_open(open);
        self.commit();
    }

    /// Overwrite the skin quiz result.
    pub fn set_quiz_result(&mut self, result: SkinQuizResult) {
        self.state.set_quiz_result(result);
        self.commit();
    }

    /// Place an order from the current cart. See [`StoreState::place_order`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Validation`] when the cart is empty.
    pub fn place_order(&mut self, customer_email: &str) -> Result<Order> {
        let order = self.state.place_order(customer_email)?;
        self.commit();
        Ok(order)
    }

    /// Append a review to a product. See [`StoreState::add_review`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Validation`] for an out-of-range
    /// rating, or [`crate::error::StoreError::NotFound`] for an unknown
    /// product id.
    pub fn add_review(&mut self, product_id: &str, review: Review) -> Result<()> {
        self.state.add_review(product_id, review)?;
        self.commit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend whose saves always fail, for the non-fatal-save contract.
    struct FailingStore;

    impl StateStore for FailingStore {
        fn load(&self) -> std::result::Result<Option<StoreState>, PersistenceError> {
            Ok(None)
        }

        fn save(&self, _state: &StoreState) -> std::result::Result<(), PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_open_seeds_when_nothing_persisted() {
        let store = Store::open(Arc::new(MemoryStore::new()));
        assert_eq!(store.products().len(), 3);
        assert!(store.cart().is_empty());
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_open_falls_back_on_corrupt_record() {
        let backend = Arc::new(MemoryStore::with_record("{definitely not json"));
        let store = Store::open(backend);
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_mutations_persist_through_backend() {
        let backend = Arc::new(MemoryStore::new());
        let mut store = Store::open(Arc::clone(&backend) as Arc<dyn StateStore>);

        let product = store.products()[0].clone();
        store.add_to_cart(&product, 2).expect("add");

        let persisted = backend.load().expect("load").expect("state");
        assert_eq!(persisted.cart.len(), 1);
        assert_eq!(persisted.cart[0].quantity, 2);
        assert_eq!(persisted, *store.state());
    }

    #[test]
    fn test_reopen_restores_persisted_state() {
        let backend = Arc::new(MemoryStore::new());

        let first = {
            let mut store = Store::open(Arc::clone(&backend) as Arc<dyn StateStore>);
            let product = store.products()[0].clone();
            store.add_to_cart(&product, 1).expect("add");
            store.place_order("a@example.com").expect("order");
            store.state().clone()
        };

        let reopened = Store::open(backend);
        assert_eq!(*reopened.state(), first);
        assert_eq!(reopened.orders().len(), 1);
    }

    #[test]
    fn test_save_failure_does_not_fail_mutation() {
        let mut store = Store::open(Arc::new(FailingStore));
        let product = store.products()[0].clone();

        store.add_to_cart(&product, 1).expect("mutation must succeed");
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn test_subscribers_notified_once_per_successful_mutation() {
        let mut store = Store::new(StoreState::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let product = store.products()[0].clone();
        store.add_to_cart(&product, 1).expect("add");
        store.set_cart_open(true);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // A rejected mutation commits nothing.
        let duplicate = store.products()[0].clone();
        assert!(store.add_product(duplicate).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
