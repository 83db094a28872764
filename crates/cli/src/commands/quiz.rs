//! Skin quiz and recommendation commands.

use lumiere_core::{Product, SkinQuizResult, SkinType};
use lumiere_storefront::recommend;

use super::open_store;

/// Submit quiz answers, store the result, and show recommendations.
pub fn submit(skin_type: &str, concerns: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let skin_type: SkinType = skin_type.parse()?;

    let mut store = open_store();
    let result = SkinQuizResult {
        skin_type,
        concerns,
    };
    let picks = recommend::recommend(store.products(), &result);

    store.set_quiz_result(result);
    print_recommendations(&picks);

    Ok(())
}

/// Show recommendations for the stored quiz result.
pub fn recommendations() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let Some(result) = store.skin_quiz_result() else {
        println!("No quiz result stored. Run `lumiere quiz submit` first.");
        return Ok(());
    };

    println!(
        "Quiz result: {} skin, concerns: {}",
        result.skin_type,
        result.concerns.join(", ")
    );
    let picks = recommend::recommend(store.products(), result);
    print_recommendations(&picks);

    Ok(())
}

fn print_recommendations(picks: &[Product]) {
    println!("Your personalized ritual:");
    for product in picks {
        println!(
            "  {:<16} {:<36} ${:>8}  {}",
            product.id, product.name, product.price, product.short_description
        );
    }
}
