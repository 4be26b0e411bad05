//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of storefront categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Live pigs, sold by breed and size.
    Pigs,
    /// Fresh pork cuts.
    Pork,
    /// Staple food ingredients.
    Foodstuff,
    /// Beverages and refreshments.
    Drinks,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Category; 4] = [
        Category::Pigs,
        Category::Pork,
        Category::Foodstuff,
        Category::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pigs => "pigs",
            Category::Pork => "pork",
            Category::Foodstuff => "foodstuff",
            Category::Drinks => "drinks",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pigs" => Some(Category::Pigs),
            "pork" => Some(Category::Pork),
            "foodstuff" => Some(Category::Foodstuff),
            "drinks" => Some(Category::Drinks),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Pigs => "Pigs",
            Category::Pork => "Pork",
            Category::Foodstuff => "Foodstuff",
            Category::Drinks => "Drinks",
        }
    }

    /// Short blurb shown under the category heading.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Pigs => "Live pigs available in different sizes and breeds",
            Category::Pork => "Fresh pork cuts processed under hygienic conditions",
            Category::Foodstuff => "Essential food ingredients for your kitchen",
            Category::Drinks => "Beverages and refreshments for all occasions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Category::from_str("Pork"), Some(Category::Pork));
        assert_eq!(Category::from_str("DRINKS"), Some(Category::Drinks));
        assert_eq!(Category::from_str("poultry"), None);
    }
}
