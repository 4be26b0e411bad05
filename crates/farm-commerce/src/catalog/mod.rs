//! Product catalog module.
//!
//! Contains the category enumeration, product types, and the static
//! catalog data.

mod category;
mod data;
mod product;

pub use category::Category;
pub use data::catalog;
pub use product::{find_product, Measure, Product, ProductDetails};
