//! Catalog browsing helpers: search, category filter, sorting.
//!
//! Pure functions over a fetched product list; the view layer composes
//! them however it re-renders.

use shopwindow_core::Product;

/// Sort order for a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Title A→Z (the default).
    #[default]
    NameAsc,
    /// Title Z→A.
    NameDesc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortKey {
    /// Parse a sort key from its CLI/query form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            _ => None,
        }
    }
}

/// Keep products whose title contains `search` (case-insensitive) and whose
/// category equals `category`. `None` (or `"all"` for category) disables
/// that filter.
#[must_use]
pub fn filter_products(
    products: Vec<Product>,
    search: Option<&str>,
    category: Option<&str>,
) -> Vec<Product> {
    let search = search.map(str::to_lowercase);
    let category = category.filter(|c| *c != "all");

    products
        .into_iter()
        .filter(|product| {
            search
                .as_ref()
                .is_none_or(|term| product.title.to_lowercase().contains(term))
        })
        .filter(|product| category.is_none_or(|c| product.category == c))
        .collect()
}

/// Sort products in place by the given key.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::NameAsc => products.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::NameDesc => products.sort_by(|a, b| b.title.cmp(&a.title)),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopwindow_core::{ProductId, Rating};

    fn product(id: u64, title: &str, price: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: price.parse().expect("valid decimal"),
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Backpack", "109.95", "men's clothing"),
            product(2, "Gold Ring", "168.00", "jewelery"),
            product(3, "Slim Shirt", "22.30", "men's clothing"),
        ]
    }

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let filtered = filter_products(sample(), Some("BACK"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().map(|p| p.id), Some(ProductId::new(1)));
    }

    #[test]
    fn test_filter_by_category() {
        let filtered = filter_products(sample(), None, Some("jewelery"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().map(|p| p.id), Some(ProductId::new(2)));
    }

    #[test]
    fn test_filter_category_all_disables_filter() {
        assert_eq!(filter_products(sample(), None, Some("all")).len(), 3);
        assert_eq!(filter_products(sample(), None, None).len(), 3);
    }

    #[test]
    fn test_filter_combines_search_and_category() {
        let filtered = filter_products(sample(), Some("shirt"), Some("men's clothing"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().map(|p| p.id), Some(ProductId::new(3)));
    }

    #[test]
    fn test_sort_by_price() {
        let mut products = sample();
        sort_products(&mut products, SortKey::PriceAsc);
        let ids: Vec<u64> = products.iter().map(|p| p.id.as_u64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        sort_products(&mut products, SortKey::PriceDesc);
        let ids: Vec<u64> = products.iter().map(|p| p.id.as_u64()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_name_default() {
        let mut products = sample();
        sort_products(&mut products, SortKey::default());
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Backpack", "Gold Ring", "Slim Shirt"]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price-desc"), Some(SortKey::PriceDesc));
        assert_eq!(SortKey::parse("rating"), None);
    }
}
