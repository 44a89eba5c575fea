//! The single owner of the listing's address-bar query.
//!
//! [`QuerySync`] keeps three things in step: the committed [`QueryState`],
//! the query string in the address bar, and the parameters of the next list
//! request. Operator actions flow state → URL; [`QueryAction::Navigated`]
//! flows URL → state. Every action is applied to the latest committed state,
//! so two edits arriving back to back can never overwrite each other.

use crate::{
    article::PaginationMeta,
    query::{self, FetchParams, FilterField, PageLimit, QueryState, Transition, FIRST_PAGE},
};

/// How a URL write lands in the browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New history entry.
    Push,
    /// Overwrite the current entry.
    Replace,
}

/// A pending address-bar update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlWrite {
    /// Canonical query string, without `?`.
    pub query: String,
    /// The same query as ordered key/value pairs, ready for a router.
    pub pairs: Vec<(&'static str, String)>,
    /// History behaviour.
    pub mode: HistoryMode,
    /// Revision that produced this write. Distinguishes two identical
    /// queries written at different times.
    pub revision: u64,
}

/// Something that may move the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// The operator typed into or picked a filter.
    EditFilter {
        /// Which filter.
        field: FilterField,
        /// Raw input value; empty clears the filter.
        value: String,
    },
    /// The operator picked a page size.
    ChangeLimit(PageLimit),
    /// Jump to a page.
    ChangePage(u32),
    /// "Next" control.
    NextPage,
    /// "Previous" control.
    PrevPage,
    /// Clear all filters.
    Reset,
    /// The address bar changed outside this synchronizer.
    Navigated(String),
    /// A list response arrived for `params`.
    PageLoaded {
        /// Fetch key the response answers.
        params: FetchParams,
        /// Server pagination view.
        meta: PaginationMeta,
    },
}

/// Committed listing state plus the address-bar write it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySync {
    committed: QueryState,
    meta: Option<PaginationMeta>,
    pending: Option<UrlWrite>,
    revision: u64,
}

impl QuerySync {
    /// Start from the address bar: the URL is authoritative at load time.
    pub fn new(raw_query: &str) -> Self {
        Self {
            committed: QueryState::initialize(raw_query),
            meta: None,
            pending: None,
            revision: 0,
        }
    }

    /// Latest committed state.
    pub fn state(&self) -> &QueryState {
        &self.committed
    }

    /// Server pagination for the committed fetch key, once it has loaded.
    pub fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }

    /// The most recent address-bar write, if any.
    pub fn pending_write(&self) -> Option<&UrlWrite> {
        self.pending.as_ref()
    }

    /// Increases on every committed change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Page the "Next" control would move to, when it is allowed.
    pub fn next_page(&self) -> Option<u32> {
        let meta = self.meta?;
        meta.has_next.then(|| meta.page.max(FIRST_PAGE).saturating_add(1))
    }

    /// Page the "Previous" control would move to, when it is allowed.
    pub fn prev_page(&self) -> Option<u32> {
        let current = self.meta.map_or(self.committed.page, |meta| meta.page);
        (current > FIRST_PAGE).then(|| current - 1)
    }

    /// Apply one action to the latest committed state.
    ///
    /// Returns `true` when state or the pending write changed.
    pub fn dispatch(&mut self, action: QueryAction) -> bool {
        let current = &self.committed;
        match action {
            QueryAction::EditFilter {
                field,
                value,
            } => {
                let history = match field {
                    FilterField::Title | FilterField::Category => HistoryMode::Replace,
                    FilterField::Status => HistoryMode::Push,
                };
                let transition = query::apply_filter_edit(current, field, &value);
                self.commit(transition, history)
            },
            QueryAction::ChangeLimit(limit) => {
                let transition = query::apply_limit_change(current, limit);
                self.commit(transition, HistoryMode::Push)
            },
            QueryAction::ChangePage(page) => {
                let transition = query::apply_page_change(current, page);
                self.commit(transition, HistoryMode::Push)
            },
            QueryAction::NextPage => match self.next_page() {
                Some(page) => {
                    let transition = query::apply_page_change(current, page);
                    self.commit(transition, HistoryMode::Push)
                },
                None => false,
            },
            QueryAction::PrevPage => match self.prev_page() {
                Some(page) => {
                    let transition = query::apply_page_change(current, page);
                    self.commit(transition, HistoryMode::Push)
                },
                None => false,
            },
            QueryAction::Reset => {
                let transition = query::reset(current);
                self.commit(transition, HistoryMode::Push)
            },
            QueryAction::Navigated(raw) => self.navigated(&raw),
            QueryAction::PageLoaded {
                params,
                meta,
            } => {
                if params != self.committed.fetch_params() {
                    tracing::debug!(page = meta.page, "ignoring pagination for a superseded request");
                    return false;
                }
                if self.meta == Some(meta) {
                    return false;
                }
                self.meta = Some(meta);
                self.revision += 1;
                true
            },
        }
    }

    fn commit(&mut self, transition: Transition, mode: HistoryMode) -> bool {
        if transition.state == self.committed {
            return false;
        }
        tracing::debug!(query = %transition.query, ?mode, "committing listing query");
        self.replace_state(transition.state);
        self.write(transition.query, mode);
        true
    }

    fn navigated(&mut self, raw: &str) -> bool {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let Transition {
            state,
            query,
        } = query::on_external_navigation(raw);

        let changed = state != self.committed;
        if changed {
            tracing::debug!(query = %query, "address bar overrides listing state");
            self.replace_state(state);
        }

        if raw != query {
            self.write(query, HistoryMode::Replace);
            return true;
        }
        if changed {
            self.revision += 1;
        }
        changed
    }

    fn replace_state(&mut self, state: QueryState) {
        if state.fetch_params() != self.committed.fetch_params() {
            self.meta = None;
        }
        self.committed = state;
    }

    fn write(&mut self, query: String, mode: HistoryMode) {
        self.revision += 1;
        self.pending = Some(UrlWrite {
            pairs: self.committed.query_pairs(),
            query,
            mode,
            revision: self.revision,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleStatus;

    fn meta(page: u32, total: u64, has_next: bool) -> PaginationMeta {
        PaginationMeta {
            limit: 10,
            page,
            total,
            has_next,
        }
    }

    fn loaded(sync: &mut QuerySync, total: u64) {
        let params = sync.state().fetch_params();
        let page = params.page;
        let has_next = u64::from(page) * u64::from(params.limit) < total;
        sync.dispatch(QueryAction::PageLoaded {
            params,
            meta: meta(page, total, has_next),
        });
    }

    fn written(sync: &QuerySync) -> &str {
        sync.pending_write().map(|write| write.query.as_str()).unwrap_or_default()
    }

    #[test]
    fn url_and_state_agree_after_every_edit() {
        let mut sync = QuerySync::new("limit=20&page=3");
        let edits = [
            (FilterField::Title, "B"),
            (FilterField::Title, "Bu"),
            (FilterField::Category, "Finance"),
            (FilterField::Status, "draft"),
            (FilterField::Title, ""),
        ];
        for (field, value) in edits {
            assert!(sync.dispatch(QueryAction::EditFilter {
                field,
                value: value.to_string(),
            }));
            assert_eq!(QueryState::initialize(written(&sync)), *sync.state());
            assert_eq!(sync.state().page, 1);
            assert_eq!(sync.state().limit.get(), 20);
        }
        assert_eq!(written(&sync), "category=Finance&status=draft&limit=20&page=1");
    }

    #[test]
    fn consecutive_edits_build_on_the_latest_state() {
        let mut sync = QuerySync::new("");
        sync.dispatch(QueryAction::EditFilter {
            field: FilterField::Category,
            value: "Finance".to_string(),
        });
        sync.dispatch(QueryAction::EditFilter {
            field: FilterField::Title,
            value: "Budget".to_string(),
        });
        assert_eq!(sync.state().filters.category.as_deref(), Some("Finance"));
        assert_eq!(sync.state().filters.title.as_deref(), Some("Budget"));
    }

    #[test]
    fn typing_replaces_history_while_paging_pushes() {
        let mut sync = QuerySync::new("");
        sync.dispatch(QueryAction::EditFilter {
            field: FilterField::Title,
            value: "x".to_string(),
        });
        assert_eq!(sync.pending_write().map(|w| w.mode), Some(HistoryMode::Replace));

        sync.dispatch(QueryAction::ChangePage(2));
        assert_eq!(sync.pending_write().map(|w| w.mode), Some(HistoryMode::Push));
    }

    #[test]
    fn next_is_gated_by_has_next() {
        let mut sync = QuerySync::new("");
        assert!(!sync.dispatch(QueryAction::NextPage), "no meta yet");

        loaded(&mut sync, 25);
        assert_eq!(sync.next_page(), Some(2));
        assert!(sync.dispatch(QueryAction::NextPage));
        assert_eq!(sync.state().page, 2);
        assert!(sync.meta().is_none(), "meta belongs to the previous page");
        assert!(!sync.dispatch(QueryAction::NextPage), "page 2 has not loaded");

        loaded(&mut sync, 25);
        assert!(sync.dispatch(QueryAction::NextPage));
        loaded(&mut sync, 25);
        assert_eq!(sync.state().page, 3);
        assert_eq!(sync.meta().map(PaginationMeta::total_pages), Some(3));
        assert_eq!(sync.next_page(), None);
        assert!(!sync.dispatch(QueryAction::NextPage));
        assert!(sync.state().filters.is_empty());
    }

    #[test]
    fn next_advances_from_the_server_page() {
        let mut sync = QuerySync::new("page=4");
        let params = sync.state().fetch_params();
        sync.dispatch(QueryAction::PageLoaded {
            params,
            meta: meta(2, 50, true),
        });
        assert!(sync.dispatch(QueryAction::NextPage));
        assert_eq!(sync.state().page, 3);
    }

    #[test]
    fn prev_stops_at_the_first_page() {
        let mut sync = QuerySync::new("page=2");
        assert_eq!(sync.prev_page(), Some(1));
        assert!(sync.dispatch(QueryAction::PrevPage));
        assert_eq!(sync.state().page, 1);
        assert!(!sync.dispatch(QueryAction::PrevPage));
    }

    #[test]
    fn stale_pagination_is_ignored() {
        let mut sync = QuerySync::new("");
        let old_params = sync.state().fetch_params();
        sync.dispatch(QueryAction::EditFilter {
            field: FilterField::Status,
            value: "publish".to_string(),
        });
        assert!(!sync.dispatch(QueryAction::PageLoaded {
            params: old_params,
            meta: meta(1, 40, true),
        }));
        assert!(sync.meta().is_none());
        assert!(!sync.dispatch(QueryAction::NextPage));
    }

    #[test]
    fn reset_preserves_limit() {
        let mut sync = QuerySync::new("title=a&category=b&status=thrash&limit=20&page=2");
        assert!(sync.dispatch(QueryAction::Reset));
        assert!(sync.state().filters.is_empty());
        assert_eq!(written(&sync), "limit=20&page=1");
    }

    #[test]
    fn page_change_leaves_filters_alone() {
        let mut sync = QuerySync::new("title=a&status=draft&limit=5");
        let before = sync.state().clone();
        sync.dispatch(QueryAction::ChangePage(7));
        assert_eq!(sync.state().filters, before.filters);
        assert_eq!(sync.state().limit, before.limit);
        assert_eq!(sync.state().page, 7);
    }

    #[test]
    fn limit_change_goes_back_to_page_one() {
        let mut sync = QuerySync::new("title=a&page=6");
        let limit = PageLimit::new(5).expect("allowed");
        assert!(sync.dispatch(QueryAction::ChangeLimit(limit)));
        assert_eq!(sync.state().page, 1);
        assert_eq!(sync.state().filters.title.as_deref(), Some("a"));
        assert_eq!(written(&sync), "title=a&limit=5&page=1");
    }

    #[test]
    fn navigation_overrides_local_state() {
        let mut sync = QuerySync::new("");
        sync.dispatch(QueryAction::EditFilter {
            field: FilterField::Title,
            value: "local".to_string(),
        });

        assert!(sync.dispatch(QueryAction::Navigated("?status=draft&limit=5&page=2".to_string())));
        assert_eq!(sync.state().filters.title, None);
        assert_eq!(sync.state().filters.status, Some(ArticleStatus::Draft));
        assert_eq!(sync.state().page, 2);
    }

    #[test]
    fn echo_of_own_write_is_a_no_op() {
        let mut sync = QuerySync::new("");
        sync.dispatch(QueryAction::ChangePage(2));
        let echo = format!("?{}", written(&sync));
        let revision = sync.revision();
        assert!(!sync.dispatch(QueryAction::Navigated(echo)));
        assert_eq!(sync.revision(), revision);
    }

    #[test]
    fn non_canonical_urls_are_normalized_in_place() {
        let mut sync = QuerySync::new("page=0&status=bogus&utm=1");
        assert!(sync.dispatch(QueryAction::Navigated("page=0&status=bogus&utm=1".to_string())));
        let write = sync.pending_write().expect("canonical rewrite");
        assert_eq!(write.mode, HistoryMode::Replace);
        assert_eq!(write.query, "limit=10&page=1");
        assert_eq!(sync.state(), &QueryState::default());
    }

    #[test]
    fn pending_pairs_match_the_query() {
        let mut sync = QuerySync::new("");
        sync.dispatch(QueryAction::EditFilter {
            field: FilterField::Category,
            value: "R&D".to_string(),
        });
        let write = sync.pending_write().expect("write");
        assert_eq!(write.pairs, sync.state().query_pairs());
        assert_eq!(write.query, "category=R%26D&limit=10&page=1");
    }

    #[test]
    fn router_encoding_of_pairs_echoes_as_a_no_op() {
        let mut sync = QuerySync::new("");
        sync.dispatch(QueryAction::EditFilter {
            field: FilterField::Title,
            value: "Q1 plan: 50% + more".to_string(),
        });
        let write = sync.pending_write().cloned().expect("write");
        let routed = serde_urlencoded::to_string(&write.pairs).expect("encodable pairs");
        assert_eq!(routed, write.query);

        let revision = sync.revision();
        assert!(!sync.dispatch(QueryAction::Navigated(format!("?{routed}"))));
        assert_eq!(sync.revision(), revision);
    }

    #[test]
    fn deep_link_on_the_root_path_keeps_its_filters() {
        let raw = "?status=draft&page=2";
        let mut sync = QuerySync::new(raw);
        assert_eq!(sync.state().filters.status, Some(ArticleStatus::Draft));
        assert_eq!(sync.state().page, 2);

        assert!(sync.dispatch(QueryAction::Navigated(raw.to_string())));
        assert_eq!(sync.state().filters.status, Some(ArticleStatus::Draft));
        assert_eq!(sync.state().page, 2);
        let write = sync.pending_write().expect("canonical rewrite");
        assert_eq!(write.mode, HistoryMode::Replace);
        assert_eq!(write.query, "status=draft&limit=10&page=2");
    }
}
