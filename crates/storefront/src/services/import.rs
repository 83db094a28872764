//! Supplier product import with AI-rewritten listing copy.
//!
//! The importer fetches (here: simulates) a raw supplier listing, asks the
//! rewrite backend for luxury-brand copy, and assembles a catalog-ready
//! [`Product`]. A rewrite failure downgrades to the raw supplier copy with
//! `is_ai_optimized = false` instead of failing the import. The returned
//! product is NOT added to any store; the caller decides whether to keep
//! it, so abandoning an in-flight import is just dropping the future.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use url::Url;

use lumiere_core::{Category, Product, Routine};

use crate::error::{Result, StoreError};
use crate::gemini::{ProductRewrite, TextGeneration};

/// Inclusive bounds for the requested profit margin, in percent.
pub const MIN_PROFIT_MARGIN: u32 = 20;
pub const MAX_PROFIT_MARGIN: u32 = 300;

/// Units placed in inventory for a freshly imported product.
const IMPORT_INVENTORY: u32 = 100;

/// How long the simulated supplier scrape takes.
const SCRAPE_DELAY: Duration = Duration::from_secs(2);

/// Supplier cost used for every simulated listing.
fn supplier_cost() -> Decimal {
    Decimal::new(25_00, 2)
}

/// Raw listing data as scraped from the supplier page.
#[derive(Debug, Clone)]
struct SupplierListing {
    name: String,
    description: String,
    image: String,
}

/// Imports supplier products into catalog-ready form.
pub struct ProductImporter<G> {
    backend: G,
    scrape_delay: Duration,
}

impl<G: TextGeneration> ProductImporter<G> {
    /// Create an importer over `backend`.
    #[must_use]
    pub const fn new(backend: G) -> Self {
        Self {
            backend,
            scrape_delay: SCRAPE_DELAY,
        }
    }

    /// Override the simulated scrape delay (tests use zero).
    #[must_use]
    pub const fn with_scrape_delay(mut self, delay: Duration) -> Self {
        self.scrape_delay = delay;
        self
    }

    /// Import the product behind `supplier_url` with the given profit
    /// margin applied on top of the supplier cost.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the URL is malformed or the
    /// margin falls outside [`MIN_PROFIT_MARGIN`]..=[`MAX_PROFIT_MARGIN`].
    /// Backend failures do not error; they downgrade to the raw copy.
    #[instrument(skip(self), fields(margin_percent))]
    pub async fn import(&self, supplier_url: &str, margin_percent: u32) -> Result<Product> {
        if !(MIN_PROFIT_MARGIN..=MAX_PROFIT_MARGIN).contains(&margin_percent) {
            return Err(StoreError::Validation(format!(
                "profit margin must be between {MIN_PROFIT_MARGIN}% and {MAX_PROFIT_MARGIN}%, got {margin_percent}%"
            )));
        }
        Url::parse(supplier_url)
            .map_err(|e| StoreError::Validation(format!("invalid supplier URL: {e}")))?;

        let listing = self.scrape(supplier_url).await;
        let cost = supplier_cost();

        let margin = Decimal::from(margin_percent) / Decimal::ONE_HUNDRED;
        let price = (cost * (Decimal::ONE + margin)).round_dp(2);

        let rewrite = match self
            .backend
            .rewrite_product(&listing.name, &listing.description)
            .await
        {
            Ok(rewrite) => {
                info!(name = %rewrite.name, "supplier copy rewritten");
                Some(rewrite)
            }
            Err(e) => {
                warn!(error = %e, "rewrite failed, keeping raw supplier copy");
                None
            }
        };

        Ok(Self::assemble(&listing, supplier_url, price, cost, rewrite))
    }

    /// Simulated supplier scrape. Stands in for a real fetch-and-parse of
    /// the listing page.
    async fn scrape(&self, supplier_url: &str) -> SupplierListing {
        info!(url = %supplier_url, "fetching supplier listing");
        tokio::time::sleep(self.scrape_delay).await;

        let lot = rand::rng().random_range(0..1000);
        SupplierListing {
            name: format!("AliExpress Beauty Tool {lot}"),
            description: "High quality professional skin care tool for home use. 100% brand new."
                .to_string(),
            image: format!("https://picsum.photos/seed/tool{lot}/800/800"),
        }
    }

    fn assemble(
        listing: &SupplierListing,
        supplier_url: &str,
        price: Decimal,
        cost: Decimal,
        rewrite: Option<ProductRewrite>,
    ) -> Product {
        let is_ai_optimized = rewrite.is_some();
        let (name, short_description, description, benefits, routine) = match rewrite {
            Some(r) => (r.name, r.tagline, r.description, r.benefits, r.routine),
            None => (
                listing.name.clone(),
                "Professional beauty solution.".to_string(),
                listing.description.clone(),
                vec![
                    "Easy to use".to_string(),
                    "Durable".to_string(),
                    "Effective".to_string(),
                ],
                Routine::Both,
            ),
        };

        Product {
            id: format!("imported-{}", Utc::now().timestamp_millis()),
            name,
            description,
            short_description,
            price,
            cost_price: cost,
            category: Category::Tools,
            images: vec![listing.image.clone()],
            variants: Vec::new(),
            ali_express_url: supplier_url.to_string(),
            inventory: IMPORT_INVENTORY,
            is_ai_optimized,
            benefits,
            routine,
            ingredients: None,
            results: None,
            reviews: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::{ChatTurn, GeminiError};

    struct RewriteBackend {
        succeed: bool,
    }

    impl TextGeneration for RewriteBackend {
        async fn chat(
            &self,
            _history: &[ChatTurn],
            _system_instruction: &str,
        ) -> std::result::Result<String, GeminiError> {
            Err(GeminiError::Parse("not used".to_string()))
        }

        async fn rewrite_product(
            &self,
            _name: &str,
            _raw_description: &str,
        ) -> std::result::Result<ProductRewrite, GeminiError> {
            if self.succeed {
                Ok(ProductRewrite {
                    name: "Sculpt Elysee Lifting Wand".to_string(),
                    tagline: "Lift, sculpt, glow.".to_string(),
                    description: "An elegant ritual for firmer skin.".to_string(),
                    benefits: vec!["Firms contours".to_string(), "Boosts radiance".to_string()],
                    routine: Routine::Pm,
                })
            } else {
                Err(GeminiError::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                })
            }
        }
    }

    fn importer(succeed: bool) -> ProductImporter<RewriteBackend> {
        ProductImporter::new(RewriteBackend { succeed }).with_scrape_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_import_applies_margin_to_supplier_cost() {
        let product = importer(true)
            .import("https://supplier.example/item/123", 150)
            .await
            .expect("import");

        // 25.00 * 2.5
        assert_eq!(product.price, Decimal::new(62_50, 2));
        assert_eq!(product.cost_price, Decimal::new(25_00, 2));
        assert_eq!(product.category, Category::Tools);
        assert_eq!(product.inventory, 100);
        assert!(product.id.starts_with("imported-"));
        assert_eq!(product.ali_express_url, "https://supplier.example/item/123");
    }

    #[tokio::test]
    async fn test_import_uses_rewritten_copy_when_backend_succeeds() {
        let product = importer(true)
            .import("https://supplier.example/item/123", 20)
            .await
            .expect("import");

        assert!(product.is_ai_optimized);
        assert_eq!(product.name, "Sculpt Elysee Lifting Wand");
        assert_eq!(product.short_description, "Lift, sculpt, glow.");
        assert_eq!(product.routine, Routine::Pm);
    }

    #[tokio::test]
    async fn test_import_falls_back_to_raw_copy_on_backend_failure() {
        let product = importer(false)
            .import("https://supplier.example/item/123", 20)
            .await
            .expect("import");

        assert!(!product.is_ai_optimized);
        assert!(product.name.starts_with("AliExpress Beauty Tool"));
        assert_eq!(product.short_description, "Professional beauty solution.");
        assert_eq!(product.routine, Routine::Both);
        assert_eq!(
            product.benefits,
            vec!["Easy to use", "Durable", "Effective"]
        );
        // Pricing is unaffected by the fallback.
        assert_eq!(product.price, Decimal::new(30_00, 2));
    }

    #[tokio::test]
    async fn test_import_rejects_margin_out_of_range() {
        let err = importer(true)
            .import("https://supplier.example/item/123", 19)
            .await
            .expect_err("margin below minimum");
        assert!(matches!(err, StoreError::Validation(_)));

        let err = importer(true)
            .import("https://supplier.example/item/123", 301)
            .await
            .expect_err("margin above maximum");
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_import_rejects_malformed_url() {
        let err = importer(true)
            .import("not a url", 50)
            .await
            .expect_err("malformed URL");
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_margin_boundaries_are_inclusive() {
        let importer = importer(true);
        assert!(importer
            .import("https://supplier.example/item/1", MIN_PROFIT_MARGIN)
            .await
            .is_ok());
        assert!(importer
            .import("https://supplier.example/item/1", MAX_PROFIT_MARGIN)
            .await
            .is_ok());
    }
}
