//! Catalog sort orders.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How a product listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Most popular first.
    #[default]
    Popular,
    /// Cheapest first, keyed on the minimum variant price.
    PriceAsc,
    /// Most expensive first, keyed on the minimum variant price.
    PriceDesc,
    /// Alphabetical by product name.
    NameAsc,
    /// Newest first.
    Newest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Popular => "popular",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Popular => "Most Popular",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A to Z",
            SortOption::Newest => "Newest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "popular" => Some(SortOption::Popular),
            "price_asc" => Some(SortOption::PriceAsc),
            "price_desc" => Some(SortOption::PriceDesc),
            "name_asc" => Some(SortOption::NameAsc),
            "newest" => Some(SortOption::Newest),
            _ => None,
        }
    }

    /// Compare two products under this order.
    ///
    /// Price orders compare minimum variant prices; products with no
    /// variants sort last in both directions. Equal keys compare as
    /// equal, so a stable sort preserves their original listing order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Popular => b.popularity.cmp(&a.popularity),
            SortOption::PriceAsc => match (a.min_price(), b.min_price()) {
                (Some(pa), Some(pb)) => pa.amount.cmp(&pb.amount),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortOption::PriceDesc => match (a.min_price(), b.min_price()) {
                (Some(pa), Some(pb)) => pb.amount.cmp(&pa.amount),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortOption::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::Newest => b.created_at.cmp(&a.created_at),
        }
    }

    /// Sort products in place, stably.
    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;
    use crate::money::Money;

    fn product(id: &str, name: &str, min_price: i64, popularity: i64) -> Product {
        Product::new(id, name, "", "streaming")
            .with_popularity(popularity)
            .with_variant(Variant::new("v", "V", "1 bulan", Money::idr(min_price), 10))
    }

    #[test]
    fn test_price_asc() {
        let mut products = vec![
            product("spotify", "Spotify", 15000, 5),
            product("netflix", "Netflix", 20000, 9),
            product("canva", "Canva", 10000, 7),
        ];
        SortOption::PriceAsc.sort(&mut products);

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["canva", "spotify", "netflix"]);
    }

    #[test]
    fn test_price_desc() {
        let mut products = vec![
            product("spotify", "Spotify", 15000, 5),
            product("netflix", "Netflix", 20000, 9),
        ];
        SortOption::PriceDesc.sort(&mut products);
        assert_eq!(products[0].id.as_str(), "netflix");
    }

    #[test]
    fn test_variantless_products_sort_last() {
        let mut products = vec![
            Product::new("empty", "Empty", "", "streaming"),
            product("netflix", "Netflix", 20000, 9),
        ];
        SortOption::PriceAsc.sort(&mut products);
        assert_eq!(products.last().map(|p| p.id.as_str()), Some("empty"));

        SortOption::PriceDesc.sort(&mut products);
        assert_eq!(products.last().map(|p| p.id.as_str()), Some("empty"));
    }

    #[test]
    fn test_popular_default() {
        let mut products = vec![
            product("spotify", "Spotify", 15000, 5),
            product("netflix", "Netflix", 20000, 9),
        ];
        SortOption::default().sort(&mut products);
        assert_eq!(products[0].id.as_str(), "netflix");
    }

    #[test]
    fn test_name_asc_ignores_case() {
        let mut products = vec![
            product("spotify", "spotify", 15000, 5),
            product("canva", "Canva", 10000, 7),
        ];
        SortOption::NameAsc.sort(&mut products);
        assert_eq!(products[0].id.as_str(), "canva");
    }

    #[test]
    fn test_equal_keys_preserve_order() {
        let mut products = vec![
            product("a", "A", 10000, 5),
            product("b", "B", 10000, 5),
            product("c", "C", 10000, 5),
        ];
        SortOption::PriceAsc.sort(&mut products);

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(SortOption::from_str("price_asc"), Some(SortOption::PriceAsc));
        assert_eq!(SortOption::from_str("bogus"), None);
    }
}
