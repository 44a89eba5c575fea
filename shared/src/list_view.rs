//! What the article list shows: the latest accepted page, loading and error
//! flags, and the pager controls derived from them.

use crate::{
    article::{Article, ArticlePage, PaginationMeta},
    error::ApiError,
    query::{FetchParams, QueryState, FIRST_PAGE},
};

/// Hands out request ids in issue order.
#[derive(Debug, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Id for the next request.
    pub fn next_id(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Id of the most recently issued request.
    pub fn latest(&self) -> u64 {
        self.0
    }
}

/// State of the pager below the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerControls {
    /// Page to display as current.
    pub page: u32,
    /// Page count for the current filter.
    pub total_pages: u32,
    /// Whether "Previous" is clickable.
    pub prev_enabled: bool,
    /// Whether "Next" is clickable.
    pub next_enabled: bool,
}

/// Rendering model of the article list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    latest: u64,
    key: Option<FetchParams>,
    loading: bool,
    page: Option<ArticlePage>,
    page_key: Option<FetchParams>,
    error: Option<String>,
}

impl ListView {
    /// Record that request `seq` for `params` has been issued.
    ///
    /// Older ids are ignored so a late `begin` cannot resurrect a superseded
    /// request.
    pub fn begin(&mut self, seq: u64, params: FetchParams) -> bool {
        if seq <= self.latest {
            return false;
        }
        self.latest = seq;
        self.key = Some(params);
        self.loading = true;
        self.error = None;
        true
    }

    /// Apply the outcome of request `seq`.
    ///
    /// Returns `false` when a newer request has been issued since; the
    /// outcome is dropped and nothing changes. On failure the last successful
    /// page stays on screen next to the error.
    pub fn resolve(&mut self, seq: u64, outcome: Result<ArticlePage, ApiError>) -> bool {
        if seq != self.latest {
            tracing::debug!(seq, latest = self.latest, "dropping superseded list response");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.page = Some(page);
                self.page_key = self.key.clone();
                self.error = None;
            },
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    /// A request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the latest failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch key of the latest issued request.
    pub fn key(&self) -> Option<&FetchParams> {
        self.key.as_ref()
    }

    /// Articles of the last accepted page.
    pub fn items(&self) -> &[Article] {
        self.page.as_ref().map(|page| page.items.as_slice()).unwrap_or_default()
    }

    /// Pagination of the last accepted page.
    pub fn meta(&self) -> Option<&PaginationMeta> {
        self.page.as_ref().map(|page| &page.meta)
    }

    /// Fetch key and pagination of the last accepted page.
    pub fn loaded(&self) -> Option<(&FetchParams, &PaginationMeta)> {
        Some((self.page_key.as_ref()?, self.meta()?))
    }

    /// Loaded, and the server has nothing to show for this page.
    pub fn is_empty(&self) -> bool {
        if self.loading {
            return false;
        }
        match &self.page {
            Some(page) => page.meta.total == 0 || page.items.is_empty(),
            None => false,
        }
    }

    /// Pager state, preferring the server's `page` and `has_next` over the
    /// locally requested page. Server values are only trusted when they answer
    /// `state`'s fetch key. Both directions are disabled while loading.
    pub fn controls(&self, state: &QueryState) -> PagerControls {
        let current = state.fetch_params();
        let meta = self
            .loaded()
            .filter(|(key, _)| **key == current)
            .map(|(_, meta)| meta);
        let page = meta.map_or(state.page, |meta| meta.page).max(FIRST_PAGE);
        let total_pages = meta.map_or(FIRST_PAGE, PaginationMeta::total_pages);
        let has_next = meta.is_some_and(|meta| meta.has_next);
        PagerControls {
            page,
            total_pages,
            prev_enabled: !self.loading && page > FIRST_PAGE,
            next_enabled: !self.loading && has_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleStatus;

    fn article(id: u64) -> Article {
        Article {
            id,
            title: format!("Article number {id} with a long title"),
            content: "body".repeat(60),
            category: "General".to_string(),
            status: ArticleStatus::Publish,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn page_of(ids: std::ops::Range<u64>, page: u32, total: u64) -> ArticlePage {
        ArticlePage {
            items: ids.map(article).collect(),
            meta: PaginationMeta {
                limit: 10,
                page,
                total,
                has_next: u64::from(page) * 10 < total,
            },
        }
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut seq = RequestSeq::default();
        let mut view = ListView::default();
        let state_a = QueryState::initialize("title=a");
        let state_b = QueryState::initialize("title=ab");

        let first = seq.next_id();
        view.begin(first, state_a.fetch_params());
        let second = seq.next_id();
        view.begin(second, state_b.fetch_params());

        assert!(view.resolve(second, Ok(page_of(1..3, 1, 2))));
        assert!(!view.resolve(first, Ok(page_of(10..20, 1, 40))));
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.key(), Some(&state_b.fetch_params()));
    }

    #[test]
    fn late_begin_is_ignored() {
        let mut view = ListView::default();
        assert!(view.begin(2, QueryState::default().fetch_params()));
        assert!(!view.begin(1, QueryState::initialize("page=5").fetch_params()));
        assert_eq!(view.key().map(|key| key.page), Some(1));
    }

    #[test]
    fn error_keeps_last_successful_page() {
        let mut view = ListView::default();
        view.begin(1, QueryState::default().fetch_params());
        view.resolve(1, Ok(page_of(1..11, 1, 25)));
        view.begin(2, QueryState::initialize("page=2").fetch_params());
        view.resolve(2, Err(ApiError::Network("offline".to_string())));

        assert_eq!(view.error(), Some("Network error: offline"));
        assert_eq!(view.items().len(), 10);
        assert!(!view.is_loading());
        assert_eq!(
            view.loaded().map(|(key, _)| key.page),
            Some(1),
            "the kept page still belongs to the first request"
        );

        let controls = view.controls(&QueryState::initialize("page=2"));
        assert_eq!(controls.page, 2);
        assert!(!controls.next_enabled, "no pagination known for page 2");
    }

    #[test]
    fn controls_walk_through_three_pages() {
        let mut view = ListView::default();
        let mut state = QueryState::default();
        let mut seq = RequestSeq::default();

        for (page, ids) in [(1, 1..11), (2, 11..21), (3, 21..26)] {
            state.page = page;
            let id = seq.next_id();
            view.begin(id, state.fetch_params());
            let loading = view.controls(&state);
            assert!(!loading.next_enabled && !loading.prev_enabled);

            view.resolve(id, Ok(page_of(ids, page, 25)));
            let controls = view.controls(&state);
            assert_eq!(controls.total_pages, 3);
            assert_eq!(controls.page, page);
            assert_eq!(controls.prev_enabled, page > 1);
            assert_eq!(controls.next_enabled, page < 3);
        }
    }

    #[test]
    fn controls_prefer_server_page() {
        let mut view = ListView::default();
        let state = QueryState::initialize("page=9");
        view.begin(1, state.fetch_params());
        view.resolve(1, Ok(page_of(1..3, 2, 12)));
        let controls = view.controls(&state);
        assert_eq!(controls.page, 2);
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn deleting_last_item_on_last_page_shows_empty_page() {
        let mut view = ListView::default();
        let state = QueryState::initialize("page=3");
        view.begin(1, state.fetch_params());
        view.resolve(1, Ok(page_of(25..26, 3, 25)));
        assert!(!view.is_empty());

        // Refetch after delete: the server still answers page 3, now empty.
        view.begin(2, state.fetch_params());
        view.resolve(2, Ok(page_of(0..0, 3, 24)));
        assert!(view.is_empty());
        let controls = view.controls(&state);
        assert_eq!(controls.page, 3);
        assert_eq!(controls.total_pages, 3);
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn zero_total_is_empty() {
        let mut view = ListView::default();
        view.begin(1, QueryState::default().fetch_params());
        assert!(!view.is_empty(), "loading is not empty");
        view.resolve(1, Ok(page_of(0..0, 1, 0)));
        assert!(view.is_empty());
        assert_eq!(view.controls(&QueryState::default()).total_pages, 1);
    }
}
