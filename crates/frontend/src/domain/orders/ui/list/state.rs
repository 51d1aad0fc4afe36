use contracts::domain::orders::{OrderQuery, OrderStatus, SortDir, SortKey};
use leptos::prelude::*;
use std::collections::HashSet;

/// View state of the order list.
///
/// Filter, search and sort-key changes pull the user back to page 1.
/// Flipping the direction of the already active sort key keeps the page.
/// Selection is keyed by row uid and survives any reordering or paging.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderListState {
    pub search: String,
    pub status_filter: Option<OrderStatus>,
    pub date_filter: Option<String>,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    /// 1-based requested page; the pipeline clamps the effective one.
    pub page: usize,
    pub selected: HashSet<u32>,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_filter: None,
            date_filter: None,
            sort_key: SortKey::Date,
            sort_dir: SortDir::Asc,
            page: 1,
            selected: HashSet::new(),
        }
    }
}

impl OrderListState {
    pub fn set_search(&mut self, value: String) {
        self.search = value;
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.status_filter = status;
        self.page = 1;
    }

    pub fn set_date_filter(&mut self, date: Option<String>) {
        self.date_filter = date;
        self.page = 1;
    }

    /// Repeated key flips the direction and stays on the page; a new key
    /// starts ascending from page 1.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Asc;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn to_query(&self) -> OrderQuery {
        OrderQuery {
            search: self.search.clone(),
            status_filter: self.status_filter,
            date_filter: self.date_filter.clone(),
            sort_key: self.sort_key,
            sort_dir: self.sort_dir,
            page: self.page,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sort_by_date_ascending_on_page_one() {
        let state = OrderListState::default();
        assert_eq!(state.sort_key, SortKey::Date);
        assert_eq!(state.sort_dir, SortDir::Asc);
        assert_eq!(state.page, 1);
        assert!(state.selected.is_empty());
        assert!(state.status_filter.is_none());
        assert!(state.date_filter.is_none());
    }

    #[test]
    fn search_and_filter_changes_reset_the_page() {
        let mut state = OrderListState::default();

        state.page = 4;
        state.set_search("landing".to_string());
        assert_eq!(state.page, 1);

        state.page = 4;
        state.set_status_filter(Some(OrderStatus::Pending));
        assert_eq!(state.page, 1);

        state.page = 4;
        state.set_date_filter(Some("Yesterday".to_string()));
        assert_eq!(state.page, 1);

        state.page = 4;
        state.set_status_filter(None);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn switching_sort_key_resets_direction_and_page() {
        let mut state = OrderListState::default();
        state.page = 3;
        state.sort_dir = SortDir::Desc;

        state.toggle_sort(SortKey::User);
        assert_eq!(state.sort_key, SortKey::User);
        assert_eq!(state.sort_dir, SortDir::Asc);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn flipping_direction_keeps_the_page() {
        let mut state = OrderListState::default();
        state.page = 3;

        state.toggle_sort(SortKey::Date);
        assert_eq!(state.sort_dir, SortDir::Desc);
        assert_eq!(state.page, 3);

        state.toggle_sort(SortKey::Date);
        assert_eq!(state.sort_dir, SortDir::Asc);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn selection_is_untouched_by_query_changes() {
        let mut state = OrderListState::default();
        state.selected.extend([3, 17, 42]);

        state.set_search("cm98".to_string());
        state.set_status_filter(Some(OrderStatus::Complete));
        state.toggle_sort(SortKey::Project);
        state.set_page(2);

        assert_eq!(state.selected.len(), 3);
        assert!(state.selected.contains(&17));
    }

    #[test]
    fn query_mirrors_the_view_state() {
        let mut state = OrderListState::default();
        state.set_status_filter(Some(OrderStatus::Complete));
        state.set_search("cm98".to_string());
        state.set_page(2);

        let query = state.to_query();
        assert_eq!(query.search, "cm98");
        assert_eq!(query.status_filter, Some(OrderStatus::Complete));
        assert_eq!(query.date_filter, None);
        assert_eq!(query.sort_key, state.sort_key);
        assert_eq!(query.sort_dir, state.sort_dir);
        assert_eq!(query.page, 2);
    }
}
