//! The filtering pipeline.
//!
//! All predicates are conjunctive and the pipeline is stable: the result
//! preserves catalog order, never re-ranks.

use crate::catalog::Product;
use crate::search::{CategoryFilter, FilterCriteria};
use serde::{Deserialize, Serialize};

/// A product attribute usable as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetAttribute {
    Size,
    Breed,
    /// The `type` attribute of foodstuff and drinks.
    Kind,
}

impl FacetAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetAttribute::Size => "size",
            FacetAttribute::Breed => "breed",
            FacetAttribute::Kind => "type",
        }
    }

    /// The attribute's value on a product, when the product carries it.
    pub fn value_of<'a>(&self, product: &'a Product) -> Option<&'a str> {
        match self {
            FacetAttribute::Size => product.details.size(),
            FacetAttribute::Breed => product.details.breed(),
            FacetAttribute::Kind => product.details.kind(),
        }
    }
}

/// Apply the filter pipeline to the product list.
///
/// Stages run in a fixed order: category, price range, size set, breed
/// set, type set, in-stock, then the free-text query. A product lacking
/// a faceted attribute is excluded whenever that facet's inclusion set
/// is non-empty, even under the "all categories" selector.
pub fn apply_filters<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    query: &str,
) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = products.iter().collect();

    if let CategoryFilter::Only(category) = criteria.category {
        filtered.retain(|p| p.category() == category);
    }

    filtered.retain(|p| criteria.price.contains(p.price));

    if !criteria.sizes.is_empty() {
        filtered.retain(|p| member_of(p.details.size(), &criteria.sizes));
    }

    if !criteria.breeds.is_empty() {
        filtered.retain(|p| member_of(p.details.breed(), &criteria.breeds));
    }

    if !criteria.kinds.is_empty() {
        filtered.retain(|p| member_of(p.details.kind(), &criteria.kinds));
    }

    if criteria.in_stock_only {
        filtered.retain(|p| p.in_stock);
    }

    if !query.is_empty() {
        filtered.retain(|p| p.name_matches(query));
    }

    filtered
}

fn member_of(value: Option<&str>, set: &[String]) -> bool {
    value.is_some_and(|v| set.iter().any(|s| s == v))
}

/// Distinct values of a faceted attribute across the entire unfiltered
/// catalog, in first-seen order. Facet checkboxes always list every
/// possible value, not just those left after filtering.
pub fn distinct_facet_values(products: &[Product], attribute: FacetAttribute) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for product in products {
        if let Some(value) = attribute.value_of(product) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, Category};
    use crate::money::Naira;
    use crate::search::PriceRange;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.as_str().to_string()).collect()
    }

    #[test]
    fn test_default_criteria_pass_everything_through() {
        let products = catalog();
        let filtered = apply_filters(&products, &FilterCriteria::default(), "");
        assert_eq!(filtered.len(), products.len());
        // Same order as the input.
        for (kept, original) in filtered.iter().zip(products.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_category_filter_keeps_only_that_category() {
        let products = catalog();
        let criteria = FilterCriteria::for_category(Category::Pork);
        let filtered = apply_filters(&products, &criteria, "");
        assert!(!filtered.is_empty());
        for p in filtered {
            assert_eq!(p.category(), Category::Pork);
        }
    }

    #[test]
    fn test_price_filter_is_inclusive_at_both_ends() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Pork),
            price: PriceRange::new(Naira::zero(), Naira::new(3000)).unwrap(),
            ..FilterCriteria::default()
        };
        // Pork prices are 3500, 2800, 3000, 4200; only 2800 and 3000 fit.
        let filtered = apply_filters(&products, &criteria, "");
        assert_eq!(ids(&filtered), vec!["pork-2", "pork-3"]);
        for p in filtered {
            assert!(p.price >= criteria.price.min && p.price <= criteria.price.max);
        }
    }

    #[test]
    fn test_in_stock_filter_excludes_berkshire_pig() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Pigs),
            in_stock_only: true,
            ..FilterCriteria::default()
        };
        let filtered = apply_filters(&products, &criteria, "");
        assert_eq!(ids(&filtered), vec!["pig-1", "pig-2", "pig-3"]);
    }

    #[test]
    fn test_in_stock_filter_is_idempotent() {
        let products = catalog();
        let criteria = FilterCriteria {
            in_stock_only: true,
            ..FilterCriteria::default()
        };
        let once: Vec<Product> = apply_filters(&products, &criteria, "")
            .into_iter()
            .cloned()
            .collect();
        let twice = apply_filters(&once, &criteria, "");
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice) {
            assert_eq!(&a.id, &b.id);
        }
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let products = catalog();
        let filtered = apply_filters(&products, &FilterCriteria::default(), "pork");
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"Pork Loin Chops (500g)"));
        assert!(names.contains(&"Ground Pork (1kg)"));
        assert!(!names.iter().any(|n| n.contains("Garri")));
        for name in names {
            assert!(name.to_lowercase().contains("pork"));
        }
    }

    #[test]
    fn test_size_set_excludes_products_without_a_size() {
        // Under "all categories" a non-empty size set hides everything
        // that has no size attribute, pork included.
        let products = catalog();
        let criteria = FilterCriteria {
            sizes: vec!["Medium".to_string()],
            ..FilterCriteria::default()
        };
        let filtered = apply_filters(&products, &criteria, "");
        assert_eq!(ids(&filtered), vec!["pig-1", "pig-4"]);
    }

    #[test]
    fn test_breed_set_filters_pigs() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Pigs),
            breeds: vec!["Duroc".to_string(), "Yorkshire".to_string()],
            ..FilterCriteria::default()
        };
        let filtered = apply_filters(&products, &criteria, "");
        assert_eq!(ids(&filtered), vec!["pig-2", "pig-3"]);
    }

    #[test]
    fn test_kind_set_spans_foodstuff_and_drinks() {
        let products = catalog();
        let criteria = FilterCriteria {
            kinds: vec!["Traditional".to_string(), "Grains".to_string()],
            ..FilterCriteria::default()
        };
        let filtered = apply_filters(&products, &criteria, "");
        assert_eq!(ids(&filtered), vec!["food-1", "drink-1", "drink-2"]);
    }

    #[test]
    fn test_facet_values_come_from_full_catalog_in_first_seen_order() {
        let products = catalog();
        assert_eq!(
            distinct_facet_values(&products, FacetAttribute::Size),
            vec!["Medium", "Large", "Small"]
        );
        assert_eq!(
            distinct_facet_values(&products, FacetAttribute::Breed),
            vec!["Hampshire", "Yorkshire", "Duroc", "Berkshire"]
        );
        let kinds = distinct_facet_values(&products, FacetAttribute::Kind);
        assert_eq!(
            kinds,
            vec!["Grains", "Oil", "Legumes", "Processed", "Traditional", "Cocktail", "Smoothie"]
        );
    }

    #[test]
    fn test_empty_result_is_a_normal_state() {
        let products = catalog();
        let filtered = apply_filters(&products, &FilterCriteria::default(), "no such product");
        assert!(filtered.is_empty());
    }
}
