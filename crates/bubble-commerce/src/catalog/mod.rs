//! Product catalog module.
//!
//! Contains types for products, variants, categories, and the in-memory
//! catalog container.

mod category;
mod container;
mod product;

pub use category::Category;
pub use container::Catalog;
pub use product::{Product, Variant};
