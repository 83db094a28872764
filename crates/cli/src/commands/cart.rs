//! Shopping cart commands.

use lumiere_storefront::views;

use super::open_store;

/// Add a product to the cart.
pub fn add(id: &str, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store();
    let product = store
        .product(id)
        .ok_or_else(|| format!("No product with id: {id}"))?
        .clone();

    store.add_to_cart(&product, quantity)?;
    println!("Added {quantity} x {} to cart", product.name);
    print_summary(&store);

    Ok(())
}

/// Remove a cart line. Removing an absent line is fine.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store();
    store.remove_from_cart(id);
    println!("Removed {id} from cart");
    print_summary(&store);
    Ok(())
}

/// Set a cart line's quantity. Zero or negative removes the line;
/// unknown ids are ignored.
pub fn set_quantity(id: &str, quantity: i64) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store();
    store.update_cart_quantity(id, quantity);
    print_summary(&store);
    Ok(())
}

/// Show the cart contents and subtotal.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();

    if store.cart().is_empty() {
        println!("Cart is empty");
        return Ok(());
    }

    for item in store.cart() {
        println!(
            "{:<16} {:<36} {:>3} x ${:>8} = ${}",
            item.product.id,
            item.product.name,
            item.quantity,
            item.product.price,
            item.line_total()
        );
    }
    print_summary(&store);

    Ok(())
}

fn print_summary(store: &lumiere_storefront::store::Store) {
    println!(
        "{} items, subtotal ${}",
        views::cart_item_count(store.cart()),
        views::cart_subtotal(store.cart())
    );
}
