//! Filter criteria owned by the catalog view.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::money::Naira;
use serde::{Deserialize, Serialize};

/// Upper bound of the price slider.
pub const PRICE_SLIDER_MAX: i64 = 100_000;

/// An inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Naira,
    pub max: Naira,
}

impl PriceRange {
    /// Create a range, rejecting min > max.
    pub fn new(min: Naira, max: Naira) -> Result<Self, CommerceError> {
        if min > max {
            return Err(CommerceError::InvalidPriceRange {
                min: min.amount(),
                max: max.amount(),
            });
        }
        Ok(Self { min, max })
    }

    /// Inclusive containment at both ends.
    pub fn contains(&self, price: Naira) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    /// The full slider range.
    fn default() -> Self {
        Self {
            min: Naira::zero(),
            max: Naira::new(PRICE_SLIDER_MAX),
        }
    }
}

/// Category selector: a single category or no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a selector value ("all" or a category name).
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(cat) => cat.as_str(),
        }
    }
}

/// The full set of active filter selections.
///
/// Owned by the catalog view and mutated only through discrete user
/// actions. The free-text query is tracked separately by the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Category selector.
    pub category: CategoryFilter,
    /// Inclusive price range.
    pub price: PriceRange,
    /// Size facet inclusion set; empty means no restriction.
    pub sizes: Vec<String>,
    /// Breed facet inclusion set.
    pub breeds: Vec<String>,
    /// Type facet inclusion set.
    pub kinds: Vec<String>,
    /// Keep only in-stock products when set.
    pub in_stock_only: bool,
}

impl FilterCriteria {
    /// Criteria seeded with an initial category (from the route query
    /// parameter).
    pub fn for_category(category: Category) -> Self {
        Self {
            category: CategoryFilter::Only(category),
            ..Self::default()
        }
    }

    /// Toggle a size facet value in or out of the inclusion set.
    pub fn toggle_size(&mut self, size: &str) {
        toggle(&mut self.sizes, size);
    }

    /// Toggle a breed facet value.
    pub fn toggle_breed(&mut self, breed: &str) {
        toggle(&mut self.breeds, breed);
    }

    /// Toggle a type facet value.
    pub fn toggle_kind(&mut self, kind: &str) {
        toggle(&mut self.kinds, kind);
    }

    /// Back to no restriction.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn toggle(set: &mut Vec<String>, value: &str) {
    if let Some(pos) = set.iter().position(|v| v == value) {
        set.remove(pos);
    } else {
        set.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(Naira::new(1000), Naira::new(3000)).unwrap();
        assert!(range.contains(Naira::new(1000)));
        assert!(range.contains(Naira::new(3000)));
        assert!(!range.contains(Naira::new(999)));
        assert!(!range.contains(Naira::new(3001)));
    }

    #[test]
    fn test_price_range_rejects_inverted_bounds() {
        assert!(PriceRange::new(Naira::new(5000), Naira::new(100)).is_err());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("pork"),
            Some(CategoryFilter::Only(Category::Pork))
        );
        assert_eq!(CategoryFilter::parse("poultry"), None);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_size("Medium");
        assert_eq!(criteria.sizes, vec!["Medium"]);
        criteria.toggle_size("Large");
        assert_eq!(criteria.sizes, vec!["Medium", "Large"]);
        criteria.toggle_size("Medium");
        assert_eq!(criteria.sizes, vec!["Large"]);
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut criteria = FilterCriteria::for_category(Category::Pigs);
        criteria.toggle_breed("Duroc");
        criteria.in_stock_only = true;
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
