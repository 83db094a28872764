//! Shopper journey over a durable file-backed store: seed, shop, order,
//! restart, and pick up where the session left off.

use std::sync::Arc;

use rust_decimal::Decimal;

use lumiere_core::{OrderStatus, SkinQuizResult, SkinType};
use lumiere_integration_tests::temp_storage_path;
use lumiere_storefront::store::{JsonFileStore, StateStore, Store};
use lumiere_storefront::views;

// =============================================================================
// Full Journey
// =============================================================================

#[test]
fn test_full_shopper_journey_survives_restart() {
    let path = temp_storage_path("journey");
    let backend = Arc::new(JsonFileStore::new(&path));

    // First session: browse, quiz, shop, order.
    {
        let mut store = Store::open(Arc::clone(&backend) as Arc<dyn StateStore>);
        assert_eq!(store.products().len(), 3, "fresh store seeds the catalog");

        store.set_quiz_result(SkinQuizResult {
            skin_type: SkinType::Dry,
            concerns: vec!["aging".to_string()],
        });

        let mask = store.product("ali-1").expect("seed product").clone();
        let purifier = store.product("ali-2").expect("seed product").clone();
        store.add_to_cart(&mask, 1).expect("add mask");
        store.add_to_cart(&purifier, 1).expect("add purifier");

        // 129.99 + 49.99
        assert_eq!(views::cart_subtotal(store.cart()), Decimal::new(179_98, 2));

        let order = store.place_order("glow@example.com").expect("place order");
        assert_eq!(order.total, Decimal::new(179_98, 2));
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(store.cart().is_empty(), "ordering clears the cart");
    }

    // Second session: everything is back.
    let store = Store::open(Arc::new(JsonFileStore::new(&path)));
    assert_eq!(store.orders().len(), 1);
    assert_eq!(store.orders()[0].customer_email, "glow@example.com");
    assert_eq!(
        store.skin_quiz_result().map(|r| r.skin_type),
        Some(SkinType::Dry)
    );
    assert!(store.cart().is_empty());

    std::fs::remove_file(&path).expect("cleanup");
}

// =============================================================================
// Snapshot Semantics
// =============================================================================

#[test]
fn test_order_items_survive_catalog_deletion() {
    let path = temp_storage_path("snapshot");
    let mut store = Store::open(Arc::new(JsonFileStore::new(&path)));

    let mask = store.product("ali-1").expect("seed product").clone();
    store.add_to_cart(&mask, 2).expect("add");
    let order = store.place_order("glow@example.com").expect("order");

    store.delete_product("ali-1").expect("delete");
    assert!(store.product("ali-1").is_none());

    // The order still carries the full product snapshot.
    let recorded = &store.orders()[0];
    assert_eq!(recorded.id, order.id);
    assert_eq!(recorded.items[0].product.name, mask.name);
    assert_eq!(recorded.items[0].product.price, mask.price);

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn test_order_total_immune_to_later_price_change() {
    let path = temp_storage_path("pricechange");
    let mut store = Store::open(Arc::new(JsonFileStore::new(&path)));

    let mut mask = store.product("ali-1").expect("seed product").clone();
    store.add_to_cart(&mask, 1).expect("add");
    let order = store.place_order("glow@example.com").expect("order");

    mask.price = Decimal::new(999_99, 2);
    store.update_product(mask).expect("update");

    assert_eq!(store.orders()[0].total, order.total);
    assert_eq!(order.total, Decimal::new(129_99, 2));

    std::fs::remove_file(&path).expect("cleanup");
}

// =============================================================================
// Corrupt Storage
// =============================================================================

#[test]
fn test_corrupt_storage_file_falls_back_to_seed() {
    let path = temp_storage_path("corrupt");
    std::fs::write(&path, "not json at all {{{").expect("write corrupt record");

    let store = Store::open(Arc::new(JsonFileStore::new(&path)));
    assert_eq!(store.products().len(), 3);
    assert!(store.orders().is_empty());

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn test_rejected_mutation_is_not_persisted() {
    let path = temp_storage_path("rejected");
    let backend = Arc::new(JsonFileStore::new(&path));
    let mut store = Store::open(Arc::clone(&backend) as Arc<dyn StateStore>);

    let mask = store.product("ali-1").expect("seed product").clone();
    store.add_to_cart(&mask, 1).expect("add");

    // A duplicate id is rejected; neither memory nor disk changes.
    let duplicate = store.products()[0].clone();
    assert!(store.add_product(duplicate).is_err());
    assert_eq!(store.products().len(), 3);

    let persisted = backend.load().expect("load").expect("state");
    assert_eq!(persisted, *store.state());

    std::fs::remove_file(&path).expect("cleanup");
}
