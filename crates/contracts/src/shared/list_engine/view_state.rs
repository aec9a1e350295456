//! View-state controller of a list page.
//!
//! Holds the collection, the tab table and `{ active_tab, search_text,
//! current_page }`. Every transition is synchronous and total: tab/search
//! changes reset to page 1, page requests outside the current view are
//! ignored, and a replaced collection clamps the page instead of resetting it.

use crate::shared::list_engine::error::ListError;
use crate::shared::list_engine::filter::filter_records;
use crate::shared::list_engine::paginator::{paginate, total_pages, PageMarker};
use crate::shared::list_engine::record::{without_record, ListRecord, Searchable};
use crate::shared::list_engine::tab_counts::{tab_badges, TabBadge};
use crate::shared::list_engine::tabs::{TabSet, TAB_ALL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    pub active_tab: String,
    pub search_text: String,
    /// 1-based
    pub current_page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            active_tab: TAB_ALL.to_string(),
            search_text: String::new(),
            current_page: 1,
        }
    }
}

/// Событие списка
#[derive(Debug, Clone)]
pub enum ListEvent<R> {
    SetTab(String),
    SetSearch(String),
    SetPage(usize),
    MutateCollection(Vec<R>),
}

/// Готовые данные для отрисовки страницы списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R> {
    pub items: Vec<R>,
    pub page_numbers: Vec<PageMarker>,
    pub start_item: usize,
    pub end_item: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub tab_badges: Vec<TabBadge>,
}

impl<R> ListView<R> {
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

#[derive(Debug, Clone)]
pub struct ListController<R> {
    collection: Vec<R>,
    tabs: TabSet<R>,
    page_size: usize,
    state: ListViewState,
}

impl<R> ListController<R>
where
    R: ListRecord + Searchable,
{
    /// `page_size == 0` is rejected: there is no meaningful page layout for it.
    pub fn new(collection: Vec<R>, tabs: TabSet<R>, page_size: usize) -> Result<Self, ListError> {
        if page_size == 0 {
            return Err(ListError::InvalidPageSize);
        }
        Ok(Self {
            collection,
            tabs,
            page_size,
            state: ListViewState::default(),
        })
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn collection(&self) -> &[R] {
        &self.collection
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn tabs(&self) -> &TabSet<R> {
        &self.tabs
    }

    /// Apply one event
    pub fn dispatch(&mut self, event: ListEvent<R>) {
        match event {
            ListEvent::SetTab(key) => self.set_tab(key),
            ListEvent::SetSearch(text) => self.set_search(text),
            ListEvent::SetPage(page) => self.set_page(page),
            ListEvent::MutateCollection(collection) => self.mutate_collection(collection),
        }
    }

    pub fn set_tab(&mut self, key: impl Into<String>) {
        self.state.active_tab = key.into();
        self.state.current_page = 1;
        log::debug!("list tab -> '{}', page reset", self.state.active_tab);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.current_page = 1;
        log::debug!("list search -> '{}', page reset", self.state.search_text);
    }

    /// Accepted only within `1..=total_pages` of the current filtered view
    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        if page == 0 || page > total {
            log::warn!("ignoring page {} outside 1..={}", page, total);
            return;
        }
        self.state.current_page = page;
    }

    /// Replace the collection and clamp the page to the new filtered view
    pub fn mutate_collection(&mut self, collection: Vec<R>) {
        self.collection = collection;
        let total = self.total_pages();
        if self.state.current_page > total {
            log::debug!(
                "clamping list page {} -> {} after collection change",
                self.state.current_page,
                total
            );
            self.state.current_page = total;
        }
    }

    /// Drop one record by id; the rest of the state follows `mutate_collection`
    pub fn delete_record(&mut self, id: &str) {
        let next = without_record(&self.collection, id);
        self.mutate_collection(next);
    }

    /// Records of the active tab matching the search, in collection order
    pub fn filtered(&self) -> Vec<R> {
        filter_records(
            &self.collection,
            &self.tabs,
            &self.state.active_tab,
            &self.state.search_text,
        )
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn view(&self) -> ListView<R> {
        let filtered = self.filtered();
        let badges = tab_badges(&self.collection, &self.tabs, &self.state.active_tab);

        // current_page держится в границах всеми переходами
        let page = match paginate(&filtered, self.page_size, self.state.current_page) {
            Ok(page) => page,
            Err(err) => {
                log::warn!("list view fell back to the last page: {}", err);
                let last = total_pages(filtered.len(), self.page_size);
                match paginate(&filtered, self.page_size, last) {
                    Ok(page) => page,
                    Err(_) => return ListView::empty(badges),
                }
            }
        };

        ListView {
            items: page.items,
            page_numbers: page.page_numbers,
            start_item: page.start_item,
            end_item: page.end_item,
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: page.current_page,
            tab_badges: badges,
        }
    }
}

impl<R> ListView<R> {
    fn empty(tab_badges: Vec<TabBadge>) -> Self {
        Self {
            items: Vec::new(),
            page_numbers: vec![PageMarker::Page(1)],
            start_item: 0,
            end_item: 0,
            total_items: 0,
            total_pages: 1,
            current_page: 1,
            tab_badges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_engine::tabs::TabDefinition;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        flagged: bool,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                id: format!("r-{:03}", i),
                name: if i % 2 == 0 { format!("even {}", i) } else { format!("odd {}", i) },
                flagged: i % 3 == 0,
            })
            .collect()
    }

    fn tabs() -> TabSet<Row> {
        TabSet::new(vec![
            TabDefinition::all("All"),
            TabDefinition::filtered("flagged", "Flagged", |r: &Row| r.flagged).with_count(),
        ])
    }

    fn controller(n: usize) -> ListController<Row> {
        ListController::new(rows(n), tabs(), 10).unwrap()
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(matches!(
            ListController::new(rows(3), tabs(), 0),
            Err(ListError::InvalidPageSize)
        ));
    }

    #[test]
    fn test_set_page_within_range() {
        let mut c = controller(23);
        c.set_page(3);
        let view = c.view();
        assert_eq!(view.current_page, 3);
        assert_eq!((view.start_item, view.end_item, view.total_items), (21, 23, 23));
        assert_eq!(view.items.len(), 3);
    }

    #[test]
    fn test_set_page_out_of_range_is_noop() {
        let mut c = controller(23);
        c.set_page(2);
        c.set_page(4);
        assert_eq!(c.state().current_page, 2);
        c.set_page(0);
        assert_eq!(c.state().current_page, 2);
    }

    #[test]
    fn test_tab_change_resets_page() {
        let mut c = controller(40);
        c.set_page(4);
        c.set_tab("flagged");
        assert_eq!(c.state().current_page, 1);
        assert_eq!(c.view().total_items, 13);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut c = controller(40);
        c.set_page(3);
        c.dispatch(ListEvent::SetSearch("even".to_string()));
        assert_eq!(c.state().current_page, 1);
        assert_eq!(c.view().total_items, 20);
    }

    #[test]
    fn test_delete_only_item_on_last_page_clamps() {
        let mut c = controller(21);
        c.set_page(3);
        assert_eq!(c.total_pages(), 3);
        c.delete_record("r-021");
        assert_eq!(c.total_pages(), 2);
        assert_eq!(c.state().current_page, 2);
        assert_eq!(c.view().items.len(), 10);
    }

    #[test]
    fn test_mutation_keeps_page_when_still_valid() {
        let mut c = controller(30);
        c.set_page(2);
        c.delete_record("r-001");
        assert_eq!(c.state().current_page, 2);
    }

    #[test]
    fn test_clamp_respects_search() {
        let mut c = controller(40);
        c.set_search("odd");
        c.set_page(2);
        // 20 odd rows -> 2 pages; removing 11 odd rows leaves one page
        let remaining: Vec<Row> = rows(40)
            .into_iter()
            .filter(|r| r.name.starts_with("even") || r.id.as_str() > "r-021")
            .collect();
        c.dispatch(ListEvent::MutateCollection(remaining));
        assert_eq!(c.total_pages(), 1);
        assert_eq!(c.state().current_page, 1);
    }

    #[test]
    fn test_mutation_to_empty_keeps_page_one() {
        let mut c = controller(15);
        c.set_page(2);
        c.mutate_collection(Vec::new());
        assert_eq!(c.state().current_page, 1);
        let view = c.view();
        assert!(view.items.is_empty());
        assert_eq!((view.start_item, view.end_item), (0, 0));
        assert!(!view.shows_pagination());
    }

    #[test]
    fn test_badges_ignore_active_filter() {
        let mut c = controller(30);
        let before = c.view().tab_badges;
        c.set_tab("flagged");
        c.set_search("even");
        let after = c.view().tab_badges;
        assert_eq!(before[1].count, Some(10));
        assert_eq!(after[1].count, Some(10));
        assert!(after[1].active);
    }

    #[test]
    fn test_unknown_tab_acts_as_all() {
        let mut c = controller(12);
        c.set_tab("archived");
        assert_eq!(c.view().total_items, 12);
    }
}
