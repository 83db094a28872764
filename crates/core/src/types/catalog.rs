//! Catalog entities: products, variants, reviews, and their enumerations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category.
///
/// Closed enumeration; the persisted form is the display string
/// (e.g. `"Skincare"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Skincare,
    Makeup,
    Tools,
    Hair,
    Body,
}

impl Category {
    /// Display string, identical to the persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skincare => "Skincare",
            Self::Makeup => "Makeup",
            Self::Tools => "Tools",
            Self::Hair => "Hair",
            Self::Body => "Body",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested usage routine for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Routine {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
    #[default]
    Both,
}

impl Routine {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
            Self::Both => "Both",
        }
    }
}

impl std::fmt::Display for Routine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable sub-option of a product (e.g. a color).
///
/// `stock` is a non-negative ceiling on sellable units; it is carried as
/// data and not enforced by cart operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

/// A before/after photo pair shown on a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeforeAfterResult {
    pub before: String,
    pub after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A customer review. Appended to a product's review list; never mutated
/// or removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    /// Star rating, 1..=5 inclusive (validated on submission).
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A catalog entry.
///
/// Owned exclusively by the store. Cart lines and order items carry their
/// own copy, so a product may be deleted from the catalog while historical
/// references to it remain renderable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable id (`ali-*` for seed data, `imported-*` for imports).
    pub id: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    /// Sale price, >= 0.
    pub price: Decimal,
    /// Supplier cost, >= 0.
    pub cost_price: Decimal,
    pub category: Category,
    /// Ordered, non-empty list of image URIs.
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Supplier reference URL.
    pub ali_express_url: String,
    /// Units on hand.
    #[serde(default)]
    pub inventory: u32,
    /// Whether the listing copy came from the AI rewrite service.
    #[serde(default)]
    pub is_ai_optimized: bool,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub routine: Routine,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<BeforeAfterResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_uses_display_strings() {
        let json = serde_json::to_string(&Category::Skincare).expect("serialize");
        assert_eq!(json, "\"Skincare\"");
        let parsed: Category = serde_json::from_str("\"Tools\"").expect("deserialize");
        assert_eq!(parsed, Category::Tools);
    }

    #[test]
    fn test_routine_serde_uses_am_pm_strings() {
        assert_eq!(
            serde_json::to_string(&Routine::Am).expect("serialize"),
            "\"AM\""
        );
        let parsed: Routine = serde_json::from_str("\"Both\"").expect("deserialize");
        assert_eq!(parsed, Routine::Both);
    }

    #[test]
    fn test_product_loads_older_persisted_shape() {
        // A minimal shape, as an older app version might have written it:
        // no variants, no AI fields, no optional lists.
        let json = r#"{
            "id": "ali-9",
            "name": "Jade Roller",
            "description": "Cooling facial massage roller.",
            "shortDescription": "Classic ritual tool.",
            "price": "19.99",
            "costPrice": "4.50",
            "category": "Tools",
            "images": ["https://example.com/jade.jpg"],
            "aliExpressUrl": "https://aliexpress.com/item/1.html"
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, "ali-9");
        assert!(product.variants.is_empty());
        assert_eq!(product.inventory, 0);
        assert!(!product.is_ai_optimized);
        assert_eq!(product.routine, Routine::Both);
        assert!(product.reviews.is_none());
    }

    #[test]
    fn test_product_camel_case_keys() {
        let product = Product {
            id: "p1".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            short_description: String::new(),
            price: Decimal::new(4999, 2),
            cost_price: Decimal::new(1850, 2),
            category: Category::Tools,
            images: vec!["img".to_string()],
            variants: Vec::new(),
            ali_express_url: "url".to_string(),
            inventory: 10,
            is_ai_optimized: true,
            benefits: Vec::new(),
            routine: Routine::Pm,
            ingredients: None,
            results: None,
            reviews: None,
        };

        let json = serde_json::to_string(&product).expect("serialize");
        assert!(json.contains("\"shortDescription\""));
        assert!(json.contains("\"costPrice\""));
        assert!(json.contains("\"aliExpressUrl\""));
        assert!(json.contains("\"isAiOptimized\""));
        // Optional fields absent from the persisted record entirely.
        assert!(!json.contains("\"reviews\""));
    }
}
