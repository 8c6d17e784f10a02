// crates/worldlens-core/src/session.rs

//! # Explorer Session
//!
//! The orchestrator the view layer talks to. It owns the fetcher, the
//! current query, pagination state, the favorites set, and the preference
//! store, and enforces the one cross-cutting rule of the pipeline: the
//! current page snaps back to 1 whenever the effective result set could
//! change size (any query change, or a page-size change). Everything it
//! exposes is either a fetch-state flag or a pure derivation over the
//! in-memory snapshot.

use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::favorites;
use crate::fetch::{DatasetFetcher, FetchState, Transport};
use crate::model::Country;
use crate::page;
use crate::prefs::{PrefStore, REGION_KEY, SORT_FIELD_KEY, SORT_ORDER_KEY};
use crate::query::{self, Query, RegionFilter, SortField, SortOrder, REGIONS};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Default page size (the grid's default choice).
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Page-size choices offered by the pagination control.
pub const PAGE_SIZES: [usize; 4] = [8, 12, 24, 48];

/// The visible page of the current result set.
#[derive(Clone, Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a Country>,
    pub total_pages: usize,
}

impl PageView<'_> {
    /// Controls are hidden entirely at a single page.
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

pub struct ExplorerSession<S: PrefStore> {
    fetcher: DatasetFetcher,
    store: S,
    dataset: Vec<Country>,
    query: Query,
    search_input: Debouncer<String>,
    current_page: usize,
    page_size: usize,
    favorites: HashSet<String>,
}

impl<S: PrefStore> ExplorerSession<S> {
    /// Build a session over `transport` and `store`, restoring the
    /// persisted region, sort, and favorites. No fetch is issued here;
    /// call [`fetch`](Self::fetch) when the view is ready for data.
    pub fn new(transport: Arc<dyn Transport>, store: S) -> Self {
        Self::with_debounce(transport, store, SEARCH_DEBOUNCE)
    }

    /// As [`new`](Self::new), with an explicit search-debounce interval.
    /// One-shot callers (the CLI, tests) pass `Duration::ZERO`.
    pub fn with_debounce(transport: Arc<dyn Transport>, store: S, debounce: Duration) -> Self {
        let query = Query {
            search: String::new(),
            region: store.get(REGION_KEY, RegionFilter::All),
            sort_field: store.get(SORT_FIELD_KEY, SortField::Name),
            sort_order: store.get(SORT_ORDER_KEY, SortOrder::Asc),
        };
        let favorites = favorites::load(&store);
        Self {
            fetcher: DatasetFetcher::new(transport),
            store,
            dataset: Vec::new(),
            query,
            search_input: Debouncer::new(debounce),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            favorites,
        }
    }

    // -------------------------------------------------------------------------
    // Fetch lifecycle
    // -------------------------------------------------------------------------

    /// Issue (or re-issue, for manual retry) the dataset fetch.
    pub fn fetch(&self) {
        self.fetcher.fetch();
    }

    /// Block until outstanding fetches settle, then absorb the snapshot.
    pub fn wait_ready(&mut self) {
        self.fetcher.wait();
        self.absorb();
    }

    pub fn loading(&self) -> bool {
        self.fetcher.state().is_loading()
    }

    /// The user-facing fetch error, if the latest attempt failed.
    pub fn error(&self) -> Option<String> {
        match self.fetcher.state() {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn absorb(&mut self) {
        if let FetchState::Ready(data) = self.fetcher.state() {
            self.dataset = data;
        }
    }

    // -------------------------------------------------------------------------
    // Query (search input flows through the debouncer)
    // -------------------------------------------------------------------------

    /// Feed one search-input change; it takes effect via [`tick`](Self::tick)
    /// once it has been stable for the debounce interval.
    pub fn type_search(&mut self, text: impl Into<String>) {
        self.search_input.update(text.into());
    }

    /// Advance time-driven state: absorb a newly ready snapshot and settle
    /// the debouncer. Returns true if the visible query changed.
    pub fn tick(&mut self) -> bool {
        self.absorb();
        if let Some(search) = self.search_input.poll() {
            if search != self.query.search {
                self.query.search = search;
                self.current_page = 1;
                return true;
            }
        }
        false
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.store.set(REGION_KEY, &region);
        self.query.region = region;
        self.current_page = 1;
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.store.set(SORT_FIELD_KEY, &field);
        self.query.sort_field = field;
        self.current_page = 1;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.store.set(SORT_ORDER_KEY, &order);
        self.query.sort_order = order;
        self.current_page = 1;
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Canonical regions for the filter control, without the sentinel.
    pub fn regions(&self) -> &'static [&'static str] {
        &REGIONS
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn set_page(&mut self, page: usize) {
        if page >= 1 {
            self.current_page = page;
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        if size >= 1 {
            self.page_size = size;
            self.current_page = 1;
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// The filtered, sorted result set for the current query.
    pub fn results(&self) -> Vec<&Country> {
        query::apply(&self.dataset, &self.query)
    }

    /// The slice of [`results`](Self::results) for the current page.
    pub fn page(&self) -> PageView<'_> {
        let results = self.results();
        let sliced = page::slice(&results, self.current_page, self.page_size);
        PageView {
            items: sliced.items.to_vec(),
            total_pages: sliced.total_pages,
        }
    }

    /// Detail lookup for the overlay: the record behind a `cca3` code.
    pub fn find(&self, cca3: &str) -> Option<&Country> {
        self.dataset
            .iter()
            .find(|c| c.cca3.eq_ignore_ascii_case(cca3))
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    pub fn toggle_favorite(&mut self, cca3: &str) {
        self.favorites = favorites::toggle(&self.favorites, cca3);
        favorites::save(&mut self.store, &self.favorites);
    }

    pub fn is_favorite(&self, cca3: &str) -> bool {
        self.favorites.contains(cca3)
    }

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    /// Hand the store back (tests use this to inspect persistence).
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::fetch::{Response, Transport};
    use crate::prefs::{MemoryStore, FAVORITES_KEY};

    /// Serves a fixed dataset to every request.
    struct FixedTransport(Vec<u8>);

    impl Transport for FixedTransport {
        fn get(&self, _url: &str) -> Result<Response> {
            Ok(Response {
                status: 200,
                body: self.0.clone(),
            })
        }
    }

    fn dataset() -> Vec<u8> {
        serde_json::to_vec(&serde_json::json!([
            {
                "cca3": "PRT",
                "name": { "common": "Portugal", "official": "Portuguese Republic" },
                "population": 10_000_000u64,
                "area": 92212.0,
                "region": "Europe"
            },
            {
                "cca3": "ESP",
                "name": { "common": "Spain", "official": "Kingdom of Spain" },
                "population": 47_000_000u64,
                "area": 505990.0,
                "region": "Europe"
            },
            {
                "cca3": "BRA",
                "name": { "common": "Brazil", "official": "Federative Republic of Brazil" },
                "population": 214_000_000u64,
                "area": 8515767.0,
                "region": "Americas"
            }
        ]))
        .unwrap()
    }

    fn ready_session(store: MemoryStore) -> ExplorerSession<MemoryStore> {
        let mut session = ExplorerSession::with_debounce(
            Arc::new(FixedTransport(dataset())),
            store,
            Duration::ZERO,
        );
        session.fetch();
        session.wait_ready();
        session
    }

    fn names(session: &ExplorerSession<MemoryStore>) -> Vec<String> {
        session
            .results()
            .iter()
            .map(|c| c.name.common.clone())
            .collect()
    }

    #[test]
    fn absorbs_the_snapshot_after_fetch() {
        let session = ready_session(MemoryStore::new());
        assert_eq!(session.error(), None);
        assert!(!session.loading());
        assert_eq!(names(&session), ["Brazil", "Portugal", "Spain"]);
    }

    #[test]
    fn restores_persisted_preferences() {
        let mut store = MemoryStore::new();
        store.set(REGION_KEY, &RegionFilter::Only("Europe".to_string()));
        store.set(SORT_FIELD_KEY, &SortField::Population);
        store.set(SORT_ORDER_KEY, &SortOrder::Desc);
        store.set(FAVORITES_KEY, &vec!["PRT".to_string()]);

        let session = ready_session(store);
        assert_eq!(names(&session), ["Spain", "Portugal"]);
        assert!(session.is_favorite("PRT"));
    }

    #[test]
    fn setters_persist_for_the_next_session() {
        let mut session = ready_session(MemoryStore::new());
        session.set_region(RegionFilter::Only("Americas".to_string()));
        session.set_sort_order(SortOrder::Desc);
        session.toggle_favorite("BRA");

        let next = ready_session(session.into_store());
        assert_eq!(next.query().region, RegionFilter::Only("Americas".to_string()));
        assert_eq!(next.query().sort_order, SortOrder::Desc);
        assert!(next.is_favorite("BRA"));
    }

    #[test]
    fn query_changes_reset_the_page() {
        let mut session = ready_session(MemoryStore::new());
        session.set_page(3);
        session.set_region(RegionFilter::Only("Europe".to_string()));
        assert_eq!(session.current_page(), 1);

        session.set_page(2);
        session.set_sort_field(SortField::Area);
        assert_eq!(session.current_page(), 1);

        session.set_page(2);
        session.set_page_size(8);
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn debounced_search_applies_on_tick_and_resets_the_page() {
        let mut session = ready_session(MemoryStore::new());
        session.set_page(2);
        session.type_search("pain");
        assert!(session.tick());
        assert_eq!(session.current_page(), 1);
        assert_eq!(names(&session), ["Spain"]);

        // Same settled text again is not a query change.
        session.type_search("pain");
        assert!(!session.tick());
    }

    #[test]
    fn page_view_slices_the_results() {
        let mut session = ready_session(MemoryStore::new());
        session.set_page_size(2);
        let view = session.page();
        assert_eq!(view.total_pages, 2);
        assert!(view.is_paged());
        assert_eq!(view.items.len(), 2);

        session.set_page(5);
        assert!(session.page().items.is_empty());
    }

    #[test]
    fn finds_detail_records_case_insensitively() {
        let session = ready_session(MemoryStore::new());
        assert_eq!(session.find("prt").unwrap().name.common, "Portugal");
        assert!(session.find("XYZ").is_none());
    }

    #[test]
    fn favorite_toggle_round_trips() {
        let mut session = ready_session(MemoryStore::new());
        session.toggle_favorite("ESP");
        assert!(session.is_favorite("ESP"));
        session.toggle_favorite("ESP");
        assert!(!session.is_favorite("ESP"));
    }

    #[test]
    fn invalid_pagination_inputs_are_ignored() {
        let mut session = ready_session(MemoryStore::new());
        session.set_page(0);
        assert_eq!(session.current_page(), 1);
        session.set_page_size(0);
        assert_eq!(session.page_size(), DEFAULT_PAGE_SIZE);
    }
}
