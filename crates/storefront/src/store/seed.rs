//! Default catalog seed data.
//!
//! Used when no persisted state exists or the persisted record cannot be
//! read. Prices are the launch catalog values; ids are stable and referenced
//! by the recommendation affinity table.

use rust_decimal::Decimal;

use lumiere_core::{BeforeAfterResult, Category, Product, Routine, Variant};

/// Build the default launch catalog.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "ali-1".to_string(),
            name: "LumiGlow LED Therapy Mask".to_string(),
            description: "Advanced 7-color light therapy for salon-quality skincare at home. \
                          Target acne, wrinkles, and hyperpigmentation with medical-grade LEDs."
                .to_string(),
            short_description: "The future of facial rejuvenation.".to_string(),
            price: Decimal::new(12999, 2),
            cost_price: Decimal::new(4500, 2),
            category: Category::Tools,
            images: vec![
                "https://picsum.photos/seed/ledmask/800/800".to_string(),
                "https://picsum.photos/seed/led2/800/800".to_string(),
            ],
            variants: vec![Variant {
                id: "v1".to_string(),
                name: "Original White".to_string(),
                price: Decimal::new(12999, 2),
                stock: 50,
            }],
            ali_express_url: "https://aliexpress.com/item/1005008626035616.html".to_string(),
            inventory: 50,
            is_ai_optimized: true,
            benefits: vec![
                "Reduces fine lines".to_string(),
                "Kills acne bacteria".to_string(),
                "Brightens skin tone".to_string(),
            ],
            routine: Routine::Pm,
            ingredients: None,
            results: Some(vec![
                BeforeAfterResult {
                    before: "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?auto=format&fit=crop&q=80&w=400&h=400".to_string(),
                    after: "https://images.unsplash.com/photo-1512431119117-4124962ca4d0?auto=format&fit=crop&q=80&w=400&h=400".to_string(),
                    caption: Some(
                        "Visible reduction in redness after 4 weeks of daily PM use.".to_string(),
                    ),
                },
                BeforeAfterResult {
                    before: "https://images.unsplash.com/photo-1509967419530-da38b4704bc6?auto=format&fit=crop&q=80&w=400&h=400".to_string(),
                    after: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?auto=format&fit=crop&q=80&w=400&h=400".to_string(),
                    caption: Some(
                        "Texture refinement and tone evening reported after 15 sessions."
                            .to_string(),
                    ),
                },
            ]),
            reviews: None,
        },
        Product {
            id: "ali-2".to_string(),
            name: "Sonic Makeup Brush Purifier".to_string(),
            description: "Keep your brushes pristine with our ultrasonic cleaning technology. \
                          Removes 99% of bacteria and makeup residue in seconds."
                .to_string(),
            short_description: "Professional brush hygiene made simple.".to_string(),
            price: Decimal::new(4999, 2),
            cost_price: Decimal::new(1850, 2),
            category: Category::Tools,
            images: vec!["https://picsum.photos/seed/cleaner/800/800".to_string()],
            variants: vec![Variant {
                id: "v2".to_string(),
                name: "Pearl Pink".to_string(),
                price: Decimal::new(4999, 2),
                stock: 120,
            }],
            ali_express_url: "https://aliexpress.com/item/1005007336014767.html".to_string(),
            inventory: 120,
            is_ai_optimized: true,
            benefits: vec![
                "Extends brush life".to_string(),
                "Prevents breakouts".to_string(),
                "Easy USB charging".to_string(),
            ],
            routine: Routine::Both,
            ingredients: None,
            results: None,
            reviews: None,
        },
        Product {
            id: "ali-3".to_string(),
            name: "Atelier Rotating Vanity Organizer".to_string(),
            description: "360-degree silent rotation storage for your entire collection. \
                          Crystal-clear luxury design to display your favorite serums and palettes."
                .to_string(),
            short_description: "Elegance for your dressing table.".to_string(),
            price: Decimal::new(6499, 2),
            cost_price: Decimal::new(2200, 2),
            category: Category::Body,
            images: vec!["https://picsum.photos/seed/vanity/800/800".to_string()],
            variants: vec![Variant {
                id: "v3".to_string(),
                name: "Clear Crystal".to_string(),
                price: Decimal::new(6499, 2),
                stock: 85,
            }],
            ali_express_url: "https://aliexpress.com/item/1005007449621980.html".to_string(),
            inventory: 85,
            is_ai_optimized: true,
            benefits: vec![
                "Space saving".to_string(),
                "Adjustable layers".to_string(),
                "Waterproof design".to_string(),
            ],
            routine: Routine::Both,
            ingredients: None,
            results: None,
            reviews: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_prices() {
        let products = seed_products();
        assert_eq!(products.len(), 3);
        for product in &products {
            assert!(product.price > Decimal::ZERO);
            assert!(product.cost_price > Decimal::ZERO);
            assert!(product.price > product.cost_price);
            assert!(!product.images.is_empty());
        }
    }
}
