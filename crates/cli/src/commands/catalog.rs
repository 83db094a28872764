//! Catalog browsing and management commands.

use chrono::Utc;
use lumiere_core::Review;
use lumiere_storefront::views;

use super::open_store;

/// List all products with price, margin, and stock.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();

    println!(
        "{:<16} {:<36} {:<9} {:>8} {:>7} {:>6}",
        "ID", "NAME", "CATEGORY", "PRICE", "MARGIN", "STOCK"
    );
    for product in store.products() {
        let margin = views::product_margin(product).map_or_else(
            || "-".to_string(),
            |m| format!("{}%", (m * rust_decimal::Decimal::ONE_HUNDRED).round()),
        );
        println!(
            "{:<16} {:<36} {:<9} {:>8} {:>7} {:>6}",
            product.id, product.name, product.category, product.price, margin, product.inventory
        );
    }
    println!("{} products", store.products().len());

    Ok(())
}

/// Show one product in detail.
pub fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let product = store
        .product(id)
        .ok_or_else(|| format!("No product with id: {id}"))?;

    println!("{} ({})", product.name, product.id);
    println!("  {}", product.short_description);
    println!();
    println!("{}", product.description);
    println!();
    println!("  Category:  {}", product.category);
    println!("  Price:     ${}", product.price);
    println!("  Cost:      ${}", product.cost_price);
    println!("  Inventory: {}", product.inventory);
    println!("  Routine:   {}", product.routine);
    if product.is_ai_optimized {
        println!("  Listing copy: AI-optimized");
    }
    if !product.benefits.is_empty() {
        println!("  Benefits:");
        for benefit in &product.benefits {
            println!("    - {benefit}");
        }
    }
    for variant in &product.variants {
        println!(
            "  Variant: {} ({}) ${} x{}",
            variant.name, variant.id, variant.price, variant.stock
        );
    }
    if let Some(reviews) = &product.reviews {
        println!("  Reviews:");
        for review in reviews {
            println!("    {}/5 {} - {}", review.rating, review.user_name, review.comment);
        }
    }

    Ok(())
}

/// Delete a product from the catalog.
///
/// Cart lines and order items keep their own product snapshot, so they
/// survive the deletion unchanged.
pub fn delete(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store();
    store.delete_product(id)?;
    println!("Deleted product: {id}");
    Ok(())
}

/// Append a customer review to a product.
pub fn review(
    id: &str,
    name: &str,
    rating: u8,
    comment: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store();

    store.add_review(
        id,
        Review {
            id: uuid::Uuid::new_v4().to_string(),
            user_name: name.to_string(),
            rating,
            comment: comment.to_string(),
            photo_url: None,
            created_at: Utc::now(),
        },
    )?;
    println!("Review added to {id}");

    Ok(())
}
