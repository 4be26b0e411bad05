//! Product types.
//!
//! Category-specific attributes live in the [`ProductDetails`] union rather
//! than a loose property bag, so attribute access is checked by the
//! compiler. The serialized form still matches the storefront's flat JSON
//! shape (`category` discriminant plus the variant's own fields).

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Naira;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Immutable once constructed; the static catalog is the only source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image URL or asset path.
    pub image: String,
    /// Price in whole naira.
    pub price: Naira,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Category-specific attributes.
    #[serde(flatten)]
    pub details: ProductDetails,
}

impl Product {
    /// The category this product belongs to.
    pub fn category(&self) -> Category {
        self.details.category()
    }

    /// Case-insensitive substring match against the product name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Quantity attribute for foodstuff rows, which carry either a weight
/// or a volume depending on the item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// e.g., "5kg"
    Weight(String),
    /// e.g., "2L"
    Volume(String),
}

impl Measure {
    pub fn as_str(&self) -> &str {
        match self {
            Measure::Weight(s) | Measure::Volume(s) => s,
        }
    }
}

/// Category-specific product attributes, keyed by the category
/// discriminant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ProductDetails {
    Pigs {
        breed: String,
        size: String,
    },
    Pork {
        cut: String,
        weight: String,
    },
    Foodstuff {
        #[serde(rename = "type")]
        kind: String,
        #[serde(flatten)]
        measure: Measure,
    },
    Drinks {
        #[serde(rename = "type")]
        kind: String,
        volume: String,
    },
}

impl ProductDetails {
    /// The category discriminant.
    pub fn category(&self) -> Category {
        match self {
            ProductDetails::Pigs { .. } => Category::Pigs,
            ProductDetails::Pork { .. } => Category::Pork,
            ProductDetails::Foodstuff { .. } => Category::Foodstuff,
            ProductDetails::Drinks { .. } => Category::Drinks,
        }
    }

    /// The `size` facet value, present only for pigs.
    pub fn size(&self) -> Option<&str> {
        match self {
            ProductDetails::Pigs { size, .. } => Some(size),
            _ => None,
        }
    }

    /// The `breed` facet value, present only for pigs.
    pub fn breed(&self) -> Option<&str> {
        match self {
            ProductDetails::Pigs { breed, .. } => Some(breed),
            _ => None,
        }
    }

    /// The `type` facet value, present for foodstuff and drinks.
    pub fn kind(&self) -> Option<&str> {
        match self {
            ProductDetails::Foodstuff { kind, .. } | ProductDetails::Drinks { kind, .. } => {
                Some(kind)
            }
            _ => None,
        }
    }

    /// Primary badge text on product cards: breed for pigs, cut for
    /// pork, type otherwise.
    pub fn badge(&self) -> &str {
        match self {
            ProductDetails::Pigs { breed, .. } => breed,
            ProductDetails::Pork { cut, .. } => cut,
            ProductDetails::Foodstuff { kind, .. } | ProductDetails::Drinks { kind, .. } => kind,
        }
    }

    /// Secondary badge text, shown only for pigs (the size).
    pub fn secondary_badge(&self) -> Option<&str> {
        self.size()
    }

    /// Descriptive line for list-view cards.
    pub fn summary(&self) -> String {
        match self {
            ProductDetails::Pigs { breed, size } => format!("{} breed, {} size", breed, size),
            ProductDetails::Pork { cut, weight } => format!("{}, {}", cut, weight),
            ProductDetails::Foodstuff { kind, measure } => {
                format!("{}, {}", kind, measure.as_str())
            }
            ProductDetails::Drinks { kind, volume } => format!("{}, {}", kind, volume),
        }
    }
}

/// Find a product by id, preserving the "missing product is a 404, not an
/// error" behavior of the detail route.
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|p| &p.id == id)
}
