// Category/search/page state behind the menu listing
use crate::filter::{PAGE_SIZE, filtered_items, has_more, revealed};
use crate::model::{Catalog, Category, MenuItem};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub category: Category,
    /// 1-based count of revealed pages.
    pub page: usize,
    /// Trimmed search text; empty shows the whole category.
    pub query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            category: Category::default(),
            page: 1,
            query: String::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum ViewAction {
    SelectCategory(Category),
    Search(String),
    LoadMore,
}

/// What the grid shows for a given state.
#[derive(Debug, PartialEq)]
pub struct Listing<'a> {
    pub items: Vec<&'a MenuItem>,
    pub has_more: bool,
    pub total: usize,
}

impl ViewState {
    pub fn listing<'a>(&self, catalog: &'a Catalog) -> Listing<'a> {
        let filtered = filtered_items(catalog, self.category, &self.query);
        Listing {
            items: revealed(&filtered, self.page, PAGE_SIZE).to_vec(),
            has_more: has_more(filtered.len(), self.page, PAGE_SIZE),
            total: filtered.len(),
        }
    }

    fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SelectCategory(category) => {
                self.category = category;
                self.page = 1;
                self.query.clear();
            }
            ViewAction::Search(text) => {
                self.query = text.trim().to_string();
                self.page = 1;
            }
            ViewAction::LoadMore => {
                self.page = self.page.saturating_add(1);
            }
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        log::debug!(
            "view: {} page={} query={:?}",
            new.category.key(),
            new.page,
            new.query
        );
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ViewState, action: ViewAction) -> ViewState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn names(listing: &Listing<'_>) -> Vec<String> {
        listing.items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn initial_listing_shows_first_page() {
        let catalog = Catalog::generate();
        let listing = ViewState::default().listing(&catalog);
        assert_eq!(listing.items.len(), 6);
        assert_eq!(listing.items[0].name, "Menu Favorit 1");
        assert_eq!(listing.items[5].name, "Menu Favorit 6");
        assert!(listing.has_more);
    }

    #[test]
    fn load_more_reveals_rest_and_hides_button() {
        let catalog = Catalog::generate();
        let state = reduce(ViewState::default(), ViewAction::LoadMore);
        let listing = state.listing(&catalog);
        assert_eq!(state.page, 2);
        assert_eq!(listing.items.len(), 12);
        assert_eq!(listing.items[11].name, "Menu Favorit 12");
        assert!(!listing.has_more);
    }

    #[test]
    fn tab_switch_clears_search_and_page() {
        let catalog = Catalog::generate();
        let searched = reduce(
            ViewState::default(),
            ViewAction::Search("Menu Favorit 1".to_string()),
        );
        assert_eq!(
            names(&searched.listing(&catalog)),
            ["Menu Favorit 1", "Menu Favorit 10", "Menu Favorit 11", "Menu Favorit 12"]
        );
        let switched = reduce(searched, ViewAction::SelectCategory(Category::Drink));
        assert_eq!(switched.query, "");
        assert_eq!(switched.page, 1);
        let listing = switched.listing(&catalog);
        assert_eq!(listing.items.len(), 6);
        assert_eq!(listing.items[0].name, "Minuman 1");
    }

    #[test]
    fn search_trims_and_resets_page() {
        let state = reduce(ViewState::default(), ViewAction::LoadMore);
        let state = reduce(state, ViewAction::Search("  snack  ".to_string()));
        assert_eq!(state.query, "snack");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn search_without_hits_is_empty_listing() {
        let catalog = Catalog::generate();
        let state = reduce(ViewState::default(), ViewAction::Search("sate".to_string()));
        let listing = state.listing(&catalog);
        assert!(listing.items.is_empty());
        assert!(!listing.has_more);
        assert_eq!(listing.total, 0);
    }

    #[test]
    fn same_state_lists_same_items() {
        let catalog = Catalog::generate();
        let state = reduce(ViewState::default(), ViewAction::Search("1".to_string()));
        assert_eq!(state.listing(&catalog), state.clone().listing(&catalog));
    }
}
