//! Domain types and catalog logic for the farm-goods storefront.
//!
//! This crate provides the data model and the filtering core:
//!
//! - **Catalog**: categories, products with per-category attributes, the
//!   static product list
//! - **Search**: the conjunctive filter pipeline, pagination, facet value
//!   lists
//! - **Orders**: forward-declared order/user/payment shapes (no order
//!   processing ships yet)
//!
//! # Example
//!
//! ```rust
//! use farm_commerce::prelude::*;
//!
//! let products = catalog();
//! let criteria = FilterCriteria {
//!     category: CategoryFilter::Only(Category::Pigs),
//!     in_stock_only: true,
//!     ..FilterCriteria::default()
//! };
//!
//! let filtered = apply_filters(&products, &criteria, "");
//! let page = paginate(&filtered, 1, 12);
//! assert!(page.iter().all(|p| p.in_stock));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod orders;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Naira;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Naira;

    // Catalog
    pub use crate::catalog::{catalog, find_product, Category, Measure, Product, ProductDetails};

    // Orders
    pub use crate::orders::{
        Address, CartItem, Order, OrderStatus, PaymentMethod, PaymentStatus, User,
    };

    // Search
    pub use crate::search::{
        apply_filters, distinct_facet_values, paginate, CategoryFilter, FacetAttribute,
        FilterCriteria, Pagination, PriceRange, PRICE_SLIDER_MAX,
    };
}
