//! Order commands.

use lumiere_storefront::views;

use super::open_store;

/// Place an order from the current cart.
pub fn place(email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store();
    let order = store.place_order(email)?;

    println!("Order placed: {}", order.id);
    println!("  Customer: {}", order.customer_email);
    println!("  Items:    {}", order.items.len());
    println!("  Total:    ${}", order.total);
    println!("  Status:   {}", order.status);

    Ok(())
}

/// List order history, most recent first.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();

    if store.orders().is_empty() {
        println!("No orders yet");
        return Ok(());
    }

    for order in store.orders() {
        println!(
            "{}  {}  {}  ${}  ({} items)",
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.id,
            order.status,
            order.total,
            order.items.len()
        );
    }
    println!(
        "{} orders, ${} total revenue",
        views::order_count(store.orders()),
        views::total_revenue(store.orders())
    );

    Ok(())
}
