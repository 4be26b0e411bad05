//! Catalog filtering and pagination.
//!
//! The visible product slice is a pure function of (catalog, criteria,
//! query, page, items-per-page); nothing here holds hidden state.

mod criteria;
mod filter;
mod pagination;

pub use criteria::{CategoryFilter, FilterCriteria, PriceRange, PRICE_SLIDER_MAX};
pub use filter::{apply_filters, distinct_facet_values, FacetAttribute};
pub use pagination::{paginate, Pagination};
