//! Featured-products section state (home page tabs).

use farm_commerce::catalog::{Category, Product};
use farm_commerce::ids::ProductId;
use std::collections::HashSet;

/// Number of products shown per featured tab.
const FEATURED_PER_TAB: usize = 4;

/// Tabbed featured-products strip: one tab per highlighted category,
/// with its own ephemeral favorites set.
#[derive(Debug, Clone)]
pub struct FeaturedTabs {
    products: Vec<Product>,
    active: Category,
    favorites: HashSet<ProductId>,
}

impl FeaturedTabs {
    /// Tabs shown on the home page, in order.
    pub const TABS: [Category; 3] = [Category::Pigs, Category::Pork, Category::Foodstuff];

    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            active: Category::Pigs,
            favorites: HashSet::new(),
        }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    /// The active tab's products, capped at the featured count.
    pub fn items(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == self.active)
            .take(FEATURED_PER_TAB)
            .collect()
    }

    pub fn toggle_favorite(&mut self, id: &ProductId) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.clone());
        }
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }
}
