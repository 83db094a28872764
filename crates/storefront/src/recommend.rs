//! Skin-quiz product recommendations.
//!
//! A pure, deterministic mapping from quiz answers to a catalog subset.
//! Same inputs, same ordered output; no state is read or written here.

use lumiere_core::{Category, Product, SkinQuizResult};

/// High-confidence concern-to-product pairings, consulted before the
/// category fallback.
const CONCERN_AFFINITY: &[(&str, &str)] = &[("aging", "ali-1"), ("cleaning", "ali-2")];

/// Recommend products for a completed quiz.
///
/// A product is selected when the affinity table pairs one of the quiz
/// concerns with its id, or as a fallback when it is a Tools product.
/// Catalog order is preserved. If neither rule matches anything (an
/// unrecognized concern against a Tools-free catalog), the whole catalog
/// is returned, so the result is non-empty whenever the catalog is.
#[must_use]
pub fn recommend(products: &[Product], quiz: &SkinQuizResult) -> Vec<Product> {
    let affinity_ids: Vec<&str> = CONCERN_AFFINITY
        .iter()
        .filter(|(concern, _)| quiz.concerns.iter().any(|c| c == concern))
        .map(|(_, id)| *id)
        .collect();

    let matched: Vec<Product> = products
        .iter()
        .filter(|p| affinity_ids.contains(&p.id.as_str()) || p.category == Category::Tools)
        .cloned()
        .collect();

    if matched.is_empty() {
        products.to_vec()
    } else {
        matched
    }
}
