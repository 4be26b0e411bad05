//! The static product catalog.
//!
//! Stands in for a real catalog API. Order is load order and is the
//! order every listing preserves.

use crate::catalog::{Measure, Product, ProductDetails};
use crate::ids::ProductId;
use crate::money::Naira;

fn pig(id: &str, name: &str, image: &str, price: i64, breed: &str, size: &str, in_stock: bool) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        image: image.to_string(),
        price: Naira::new(price),
        in_stock,
        details: ProductDetails::Pigs {
            breed: breed.to_string(),
            size: size.to_string(),
        },
    }
}

fn pork(id: &str, name: &str, image: &str, price: i64, cut: &str, weight: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        image: image.to_string(),
        price: Naira::new(price),
        in_stock: true,
        details: ProductDetails::Pork {
            cut: cut.to_string(),
            weight: weight.to_string(),
        },
    }
}

fn foodstuff(id: &str, name: &str, image: &str, price: i64, kind: &str, measure: Measure) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        image: image.to_string(),
        price: Naira::new(price),
        in_stock: true,
        details: ProductDetails::Foodstuff {
            kind: kind.to_string(),
            measure,
        },
    }
}

fn drink(id: &str, name: &str, image: &str, price: i64, kind: &str, volume: &str, in_stock: bool) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        image: image.to_string(),
        price: Naira::new(price),
        in_stock,
        details: ProductDetails::Drinks {
            kind: kind.to_string(),
            volume: volume.to_string(),
        },
    }
}

fn weight(w: &str) -> Measure {
    Measure::Weight(w.to_string())
}

fn volume(v: &str) -> Measure {
    Measure::Volume(v.to_string())
}

/// The full catalog, in display order.
pub fn catalog() -> Vec<Product> {
    vec![
        pig(
            "pig-1",
            "Hampshire Pig (Medium)",
            "/hampshire-boar.jpg",
            45_000,
            "Hampshire",
            "Medium",
            true,
        ),
        pig(
            "pig-2",
            "Yorkshire Pig (Large)",
            "https://images.pexels.com/photos/110820/pexels-photo-110820.jpeg",
            65_000,
            "Yorkshire",
            "Large",
            true,
        ),
        pig("pig-3", "Duroc Pig (Small)", "/duroc.jpg", 30_000, "Duroc", "Small", true),
        pig(
            "pig-4",
            "Berkshire Pig (Medium)",
            "https://images.pexels.com/photos/2218481/pexels-photo-2218481.jpeg",
            48_000,
            "Berkshire",
            "Medium",
            false,
        ),
        pork(
            "pork-1",
            "Premium Pork Belly (1kg)",
            "https://images.pexels.com/photos/6861257/pexels-photo-6861257.jpeg",
            3_500,
            "Belly",
            "1kg",
        ),
        pork(
            "pork-2",
            "Pork Loin Chops (500g)",
            "https://images.pexels.com/photos/5774154/pexels-photo-5774154.jpeg",
            2_800,
            "Loin",
            "500g",
        ),
        pork(
            "pork-3",
            "Ground Pork (1kg)",
            "https://images.pexels.com/photos/4969887/pexels-photo-4969887.jpeg",
            3_000,
            "Ground",
            "1kg",
        ),
        pork(
            "pork-4",
            "Pork Ribs (1.5kg)",
            "https://images.pexels.com/photos/7988252/pexels-photo-7988252.jpeg",
            4_200,
            "Ribs",
            "1.5kg",
        ),
        foodstuff(
            "food-1",
            "Rice (5kg)",
            "https://images.pexels.com/photos/4110251/pexels-photo-4110251.jpeg",
            5_500,
            "Grains",
            weight("5kg"),
        ),
        foodstuff(
            "food-2",
            "Palm Oil (2L)",
            "https://images.pexels.com/photos/4033636/pexels-photo-4033636.jpeg",
            3_800,
            "Oil",
            volume("2L"),
        ),
        foodstuff(
            "food-3",
            "Beans (2kg)",
            "https://images.pexels.com/photos/6097872/pexels-photo-6097872.jpeg",
            2_500,
            "Legumes",
            weight("2kg"),
        ),
        foodstuff(
            "food-4",
            "Garri (5kg)",
            "https://images.pexels.com/photos/6248853/pexels-photo-6248853.jpeg",
            3_200,
            "Processed",
            weight("5kg"),
        ),
        drink(
            "drink-1",
            "Fresh Palm Wine (2L)",
            "https://images.pexels.com/photos/1089930/pexels-photo-1089930.jpeg",
            1_500,
            "Traditional",
            "2L",
            true,
        ),
        drink(
            "drink-2",
            "Zobo Drink (1L)",
            "https://images.pexels.com/photos/1292862/pexels-photo-1292862.jpeg",
            800,
            "Traditional",
            "1L",
            true,
        ),
        drink(
            "drink-3",
            "Chapman Mix (75cl)",
            "https://images.pexels.com/photos/2109099/pexels-photo-2109099.jpeg",
            1_200,
            "Cocktail",
            "75cl",
            true,
        ),
        drink(
            "drink-4",
            "Tigernut Milk (50cl)",
            "https://images.pexels.com/photos/1446320/pexels-photo-1446320.jpeg",
            1_000,
            "Smoothie",
            "50cl",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_catalog_ids_are_unique() {
        let products = catalog();
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_catalog_covers_every_category() {
        let products = catalog();
        for cat in Category::ALL {
            assert!(
                products.iter().any(|p| p.category() == cat),
                "no products in {}",
                cat
            );
        }
    }

    #[test]
    fn test_berkshire_pig_is_out_of_stock() {
        let products = catalog();
        let pig4 = products.iter().find(|p| p.id.as_str() == "pig-4").unwrap();
        assert!(!pig4.in_stock);
        assert_eq!(pig4.details.breed(), Some("Berkshire"));
        assert_eq!(pig4.details.size(), Some("Medium"));
    }
}
