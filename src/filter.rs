//! Filter and paginate the catalog into the visible menu listing.

use crate::model::{Catalog, Category, MenuItem};

/// Items shown per page; load-more reveals one more page of this size.
pub const PAGE_SIZE: usize = 6;

/// Items of `category` whose name contains `query`, ignoring case.
/// An empty query keeps the whole category in catalog order.
pub fn filtered_items<'a>(catalog: &'a Catalog, category: Category, query: &str) -> Vec<&'a MenuItem> {
    let items = catalog.items(category);
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// One page of `items`. Pages are 1-based; a page past the end is empty.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Everything revealed after `page_number` load steps (pages 1 through `page_number`).
pub fn revealed<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let end = page_number.saturating_mul(page_size).min(items.len());
    &items[..end]
}

pub fn has_more(len: usize, page_number: usize, page_size: usize) -> bool {
    page_number.saturating_mul(page_size) < len
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&MenuItem]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn empty_query_returns_category_in_order() {
        let catalog = Catalog::generate();
        let all = filtered_items(&catalog, Category::Drink, "");
        let expected: Vec<_> = catalog.items(Category::Drink).iter().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn query_matches_case_insensitively() {
        let catalog = Catalog::generate();
        let hits = filtered_items(&catalog, Category::Fav, "menu favorit 1");
        assert_eq!(
            names(&hits),
            ["Menu Favorit 1", "Menu Favorit 10", "Menu Favorit 11", "Menu Favorit 12"]
        );
        let upper = filtered_items(&catalog, Category::Snack, "SNACK 2");
        assert_eq!(names(&upper), ["Snack 2"]);
    }

    #[test]
    fn filter_keeps_exactly_matching_items() {
        let catalog = Catalog::generate();
        for category in Category::ALL {
            for query in ["1", "a", "Menu", "zzz", "2"] {
                let hits = filtered_items(&catalog, category, query);
                let expected: Vec<_> = catalog
                    .items(category)
                    .iter()
                    .filter(|i| i.name.to_lowercase().contains(&query.to_lowercase()))
                    .collect();
                assert_eq!(hits, expected, "{category:?} / {query}");
            }
        }
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let catalog = Catalog::generate();
        assert!(filtered_items(&catalog, Category::Drink, "rendang").is_empty());
    }

    #[test]
    fn pages_partition_the_sequence() {
        for len in [0usize, 1, 5, 6, 7, 12, 13] {
            let items: Vec<usize> = (0..len).collect();
            let pages = page_count(len, PAGE_SIZE);
            let mut rebuilt = Vec::new();
            for p in 1..=pages {
                rebuilt.extend_from_slice(page(&items, p, PAGE_SIZE));
                assert_eq!(has_more(len, p, PAGE_SIZE), p < pages, "len {len} page {p}");
            }
            assert_eq!(rebuilt, items);
        }
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<u8> = (0..12).collect();
        assert!(page(&items, 3, PAGE_SIZE).is_empty());
        assert!(page(&items, 100, PAGE_SIZE).is_empty());
        assert_eq!(page(&items, 2, PAGE_SIZE), &[6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn revealed_accumulates_pages() {
        let items: Vec<u8> = (0..12).collect();
        assert_eq!(revealed(&items, 1, PAGE_SIZE).len(), 6);
        assert_eq!(revealed(&items, 2, PAGE_SIZE), items.as_slice());
        assert_eq!(revealed(&items, 5, PAGE_SIZE), items.as_slice());
    }
}
