//! Catalog page view state.
//!
//! Owns the filter criteria, search text, pagination cursor, view mode,
//! and the session-only favorites set. Every input change recomputes the
//! visible slice synchronously; the slice is always a pure function of
//! (catalog, criteria, query, page, items-per-page).

use farm_commerce::catalog::{Category, Product};
use farm_commerce::ids::ProductId;
use farm_commerce::search::{
    apply_filters, distinct_facet_values, paginate, CategoryFilter, FacetAttribute,
    FilterCriteria, Pagination, PriceRange,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Grid or list presentation of the result slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Page size is derived from the view mode, not stored.
    pub fn items_per_page(&self) -> usize {
        match self {
            ViewMode::Grid => 12,
            ViewMode::List => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// State for the filterable catalog page.
///
/// Criteria are mutated only through the methods here; every filter or
/// search mutation resets the page cursor to 1. Switching the view mode
/// changes the page size but keeps the cursor.
#[derive(Debug, Clone)]
pub struct CatalogView {
    products: Vec<Product>,
    criteria: FilterCriteria,
    query: String,
    page: usize,
    view_mode: ViewMode,
    favorites: HashSet<ProductId>,
}

impl CatalogView {
    /// Create a view over the full catalog with no restrictions.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            criteria: FilterCriteria::default(),
            query: String::new(),
            page: 1,
            view_mode: ViewMode::default(),
            favorites: HashSet::new(),
        }
    }

    /// Create a view seeded with an initial category, as when the page
    /// is opened through a `?category=` link.
    pub fn with_category(products: Vec<Product>, category: Category) -> Self {
        let mut view = Self::new(products);
        view.criteria = FilterCriteria::for_category(category);
        view
    }

    // --- filter mutations (each resets the page cursor) ---

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.page = 1;
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.criteria.price = range;
        self.page = 1;
    }

    pub fn toggle_size(&mut self, size: &str) {
        self.criteria.toggle_size(size);
        self.page = 1;
    }

    pub fn toggle_breed(&mut self, breed: &str) {
        self.criteria.toggle_breed(breed);
        self.page = 1;
    }

    pub fn toggle_kind(&mut self, kind: &str) {
        self.criteria.toggle_kind(kind);
        self.page = 1;
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.criteria.in_stock_only = in_stock_only;
        self.page = 1;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// The reset affordance: clears criteria and search text together.
    pub fn reset_filters(&mut self) {
        self.criteria.reset();
        self.query.clear();
        self.page = 1;
    }

    // --- pagination and view mode ---

    /// Jump to a page, clamped to the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Switch grid/list. Changes the derived page size; keeps the cursor.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    // --- derived state ---

    /// The full filtered list, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        apply_filters(&self.products, &self.criteria, &self.query)
    }

    /// The slice of products for the current page.
    pub fn visible(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        paginate(&filtered, self.page, self.view_mode.items_per_page()).to_vec()
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.page,
            self.view_mode.items_per_page(),
            self.filtered().len(),
        )
    }

    pub fn result_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination().total_pages
    }

    /// Drives the "no products found" placeholder.
    pub fn is_empty(&self) -> bool {
        self.result_count() == 0
    }

    /// Facet options come from the entire catalog, never the filtered
    /// subset; the checkboxes always show all possible values.
    pub fn facet_options(&self, attribute: FacetAttribute) -> Vec<String> {
        distinct_facet_values(&self.products, attribute)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    // --- favorites (ephemeral, session-only) ---

    pub fn toggle_favorite(&mut self, id: &ProductId) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.clone());
        }
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }
}
