//! Catalog filtering and sorting.

mod query;
mod sort;

pub use query::SearchQuery;
pub use sort::SortOption;
