//! Supplier product import command.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY` - Google Generative Language API key
//! - `LUMIERE_STORAGE_PATH` - Persisted state file

use std::sync::Arc;

use lumiere_storefront::config::StorefrontConfig;
use lumiere_storefront::gemini::GeminiClient;
use lumiere_storefront::services::ProductImporter;
use lumiere_storefront::store::{JsonFileStore, Store};

/// Import the product behind `url` with `margin` percent profit applied,
/// then add it to the catalog.
pub async fn import(url: &str, margin: u32) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let client = GeminiClient::new(&config.gemini);
    let importer = ProductImporter::new(client);

    tracing::info!(url, margin, "Importing supplier product...");
    let product = importer.import(url, margin).await?;

    let mut store = Store::open(Arc::new(JsonFileStore::new(config.storage_path)));
    store.add_product(product.clone())?;

    println!("Imported: {} ({})", product.name, product.id);
    println!("  {}", product.short_description);
    println!("  Price: ${} (cost ${})", product.price, product.cost_price);
    if product.is_ai_optimized {
        println!("  Listing copy: AI-optimized");
    } else {
        println!("  Listing copy: raw supplier text (rewrite unavailable)");
    }

    Ok(())
}
