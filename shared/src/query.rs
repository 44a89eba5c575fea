//! Filter and pagination state for the article listing, and its URL form.
//!
//! [`QueryState`] is the single source of truth for the listing. Both the
//! address-bar query string ([`QueryState::to_query`]) and the parameters of
//! the next list request ([`QueryState::fetch_params`]) are projections of it.
//! The functions at the bottom of this module are the pure transitions; the
//! stateful owner of the address bar lives in [`crate::sync`].

use std::fmt;

use url::form_urlencoded;

use crate::article::ArticleStatus;

/// Query keys the listing understands.
pub mod keys {
    /// Title substring filter.
    pub const TITLE: &str = "title";
    /// Category substring filter.
    pub const CATEGORY: &str = "category";
    /// Exact status filter.
    pub const STATUS: &str = "status";
    /// Page size.
    pub const LIMIT: &str = "limit";
    /// 1-based page number.
    pub const PAGE: &str = "page";
}

/// Page sizes offered to the operator.
pub const ALLOWED_LIMITS: [u32; 5] = [1, 5, 10, 20, 50];

/// Page every fresh listing starts on.
pub const FIRST_PAGE: u32 = 1;

/// A page size from [`ALLOWED_LIMITS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageLimit(u32);

impl PageLimit {
    /// Used when the URL carries no usable `limit`.
    pub const DEFAULT: PageLimit = PageLimit(10);

    /// `None` unless `value` is one of [`ALLOWED_LIMITS`].
    pub fn new(value: u32) -> Option<Self> {
        ALLOWED_LIMITS.contains(&value).then_some(PageLimit(value))
    }

    /// Every allowed limit, ascending.
    pub fn all() -> impl Iterator<Item = PageLimit> {
        ALLOWED_LIMITS.into_iter().map(PageLimit)
    }

    /// Raw value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One editable filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Title substring.
    Title,
    /// Category substring.
    Category,
    /// Publication status.
    Status,
}

impl FilterField {
    /// Every filter, in canonical query order.
    pub const ALL: [FilterField; 3] = [FilterField::Title, FilterField::Category, FilterField::Status];

    /// Query key this field is stored under.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Title => keys::TITLE,
            FilterField::Category => keys::CATEGORY,
            FilterField::Status => keys::STATUS,
        }
    }
}

/// Optional filters applied to the listing. Absent means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    /// Title substring.
    pub title: Option<String>,
    /// Category substring.
    pub category: Option<String>,
    /// Exact status.
    pub status: Option<ArticleStatus>,
}

impl FilterState {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.status.is_none()
    }

    /// Replace one field from raw input. Empty text clears the field; a status
    /// outside the allow-list clears it as well.
    pub fn with(&self, field: FilterField, raw: &str) -> Self {
        let mut next = self.clone();
        match field {
            FilterField::Title => next.title = non_empty(raw),
            FilterField::Category => next.category = non_empty(raw),
            FilterField::Status => next.status = ArticleStatus::parse(raw),
        }
        next
    }

    /// Current value of `field` as it would appear in an input.
    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Title => self.title.as_deref().unwrap_or_default(),
            FilterField::Category => self.category.as_deref().unwrap_or_default(),
            FilterField::Status => self.status.map(ArticleStatus::as_str).unwrap_or_default(),
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Filters plus pagination: everything that decides which articles are listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    /// Active filters.
    pub filters: FilterState,
    /// Page size.
    pub limit: PageLimit,
    /// 1-based page.
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            limit: PageLimit::DEFAULT,
            page: FIRST_PAGE,
        }
    }
}

impl QueryState {
    /// Derive state from an address-bar query string.
    ///
    /// A leading `?` is accepted. The first occurrence of a key wins, unknown
    /// keys are ignored and empty values count as absent. `limit` outside the
    /// allowed set falls back to the default; a non-positive or unparsable
    /// `page` falls back to the first page.
    pub fn initialize(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut title = None;
        let mut category = None;
        let mut status = None;
        let mut limit = None;
        let mut page = None;

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                keys::TITLE => &mut title,
                keys::CATEGORY => &mut category,
                keys::STATUS => &mut status,
                keys::LIMIT => &mut limit,
                keys::PAGE => &mut page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            filters: FilterState {
                title: title.as_deref().and_then(non_empty),
                category: category.as_deref().and_then(non_empty),
                status: status.as_deref().and_then(ArticleStatus::parse),
            },
            limit: limit
                .as_deref()
                .and_then(|value| value.trim().parse::<u32>().ok())
                .and_then(PageLimit::new)
                .unwrap_or_default(),
            page: page
                .as_deref()
                .and_then(|value| value.trim().parse::<u32>().ok())
                .filter(|page| *page >= FIRST_PAGE)
                .unwrap_or(FIRST_PAGE),
        }
    }

    /// Canonical key/value pairs: filters only when present, `limit` and
    /// `page` always.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        for field in FilterField::ALL {
            let value = self.filters.value(field);
            if !value.is_empty() {
                pairs.push((field.key(), value.to_string()));
            }
        }
        pairs.push((keys::LIMIT, self.limit.to_string()));
        pairs.push((keys::PAGE, self.page.to_string()));
        pairs
    }

    /// Canonical query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        encode_pairs(&self.query_pairs())
    }

    /// Projection onto the list request.
    pub fn fetch_params(&self) -> FetchParams {
        FetchParams {
            limit: self.limit.get(),
            page: self.page,
            title: self.filters.title.clone(),
            category: self.filters.category.clone(),
            status: self.filters.status,
        }
    }
}

/// Parameters of one list request. Two equal values name the same page of
/// results, so this doubles as the fetch key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchParams {
    /// Page size.
    pub limit: u32,
    /// 1-based page.
    pub page: u32,
    /// Title substring.
    pub title: Option<String>,
    /// Category substring.
    pub category: Option<String>,
    /// Exact status.
    pub status: Option<ArticleStatus>,
}

impl FetchParams {
    /// Request query string, absent filters omitted.
    pub fn to_query(&self) -> String {
        let mut pairs = vec![
            (keys::LIMIT, self.limit.to_string()),
            (keys::PAGE, self.page.to_string()),
        ];
        if let Some(status) = self.status {
            pairs.push((keys::STATUS, status.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push((keys::CATEGORY, category.clone()));
        }
        if let Some(title) = &self.title {
            pairs.push((keys::TITLE, title.clone()));
        }
        encode_pairs(&pairs)
    }
}

fn encode_pairs(pairs: &[(&'static str, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// A committed state together with its canonical URL encoding.
///
/// Both halves are computed from the same value, so they always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// New state.
    pub state: QueryState,
    /// `state.to_query()`.
    pub query: String,
}

impl From<QueryState> for Transition {
    fn from(state: QueryState) -> Self {
        let query = state.to_query();
        Self {
            state,
            query,
        }
    }
}

/// Replace one filter; the page goes back to the first and the limit stays.
pub fn apply_filter_edit(current: &QueryState, field: FilterField, raw: &str) -> Transition {
    QueryState {
        filters: current.filters.with(field, raw),
        limit: current.limit,
        page: FIRST_PAGE,
    }
    .into()
}

/// Replace the page size; the page goes back to the first, filters stay.
pub fn apply_limit_change(current: &QueryState, limit: PageLimit) -> Transition {
    QueryState {
        filters: current.filters.clone(),
        limit,
        page: FIRST_PAGE,
    }
    .into()
}

/// Move to `page` (clamped to at least the first page); nothing else changes.
pub fn apply_page_change(current: &QueryState, page: u32) -> Transition {
    QueryState {
        filters: current.filters.clone(),
        limit: current.limit,
        page: page.max(FIRST_PAGE),
    }
    .into()
}

/// Clear every filter and return to the first page, keeping the limit.
pub fn reset(current: &QueryState) -> Transition {
    QueryState {
        filters: FilterState::default(),
        limit: current.limit,
        page: FIRST_PAGE,
    }
    .into()
}

/// The address bar changed underneath the listing (back/forward, manual
/// edit, deep link): the URL wins and is read back exactly like on load.
pub fn on_external_navigation(raw: &str) -> Transition {
    QueryState::initialize(raw).into()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn pairs_of(query: &str) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn empty_query_yields_defaults() {
        let state = QueryState::initialize("");
        assert_eq!(state, QueryState::default());
        assert_eq!(state.to_query(), "limit=10&page=1");
    }

    #[test]
    fn initialize_reads_every_key() {
        let state =
            QueryState::initialize("?title=Budget+2024&category=Fin%26Ops&status=publish&limit=20&page=3");
        assert_eq!(state.filters.title.as_deref(), Some("Budget 2024"));
        assert_eq!(state.filters.category.as_deref(), Some("Fin&Ops"));
        assert_eq!(state.filters.status, Some(ArticleStatus::Publish));
        assert_eq!(state.limit.get(), 20);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn initialize_coerces_untrusted_values() {
        let state = QueryState::initialize("status=PUBLISH&limit=7&page=0&title=&utm_source=mail");
        assert_eq!(state, QueryState::default());

        let state = QueryState::initialize("limit=-5&page=-2");
        assert_eq!(state.limit, PageLimit::DEFAULT);
        assert_eq!(state.page, 1);

        let state = QueryState::initialize("limit=abc&page=2.5");
        assert_eq!(state.limit, PageLimit::DEFAULT);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn first_occurrence_of_a_key_wins() {
        let state = QueryState::initialize("page=4&page=9&status=draft&status=publish");
        assert_eq!(state.page, 4);
        assert_eq!(state.filters.status, Some(ArticleStatus::Draft));
    }

    #[test]
    fn absent_filters_are_removed_not_blanked() {
        let state = QueryState::initialize("title=x&category=y&status=draft&limit=5&page=2");
        let cleared = apply_filter_edit(&state, FilterField::Category, "");
        assert_eq!(cleared.query, "title=x&status=draft&limit=5&page=1");
        assert!(!cleared.query.contains("category"));
    }

    #[test]
    fn filter_edit_resets_page_and_keeps_limit() {
        let state = QueryState::initialize("limit=20&page=4");
        let next = apply_filter_edit(&state, FilterField::Status, "thrash");
        assert_eq!(next.state.page, 1);
        assert_eq!(next.state.limit.get(), 20);
        assert_eq!(next.state.filters.status, Some(ArticleStatus::Thrash));

        let invalid = apply_filter_edit(&next.state, FilterField::Status, "archived");
        assert_eq!(invalid.state.filters.status, None);
    }

    #[test]
    fn setting_title_next_to_existing_category() {
        let state = QueryState::initialize("category=Finance");
        let next = apply_filter_edit(&state, FilterField::Title, "Budget");
        assert_eq!(
            pairs_of(&next.query),
            pairs_of("title=Budget&category=Finance&page=1&limit=10")
        );
        assert!(!next.query.contains("status"));
    }

    #[test]
    fn limit_change_resets_page_only() {
        let state = QueryState::initialize("title=a&page=5");
        let next = apply_limit_change(&state, PageLimit::new(50).expect("allowed"));
        assert_eq!(next.state.page, 1);
        assert_eq!(next.state.filters, state.filters);
        assert_eq!(next.state.limit.get(), 50);
    }

    #[test]
    fn page_change_clamps_and_keeps_the_rest() {
        let state = QueryState::initialize("title=a&category=b&status=draft&limit=5&page=2");
        let next = apply_page_change(&state, 0);
        assert_eq!(next.state.page, 1);
        assert_eq!(next.state.filters, state.filters);
        assert_eq!(next.state.limit, state.limit);
    }

    #[test]
    fn reset_keeps_limit() {
        let state = QueryState::initialize("title=a&category=b&status=draft&limit=20&page=3");
        let next = reset(&state);
        assert!(next.state.filters.is_empty());
        assert_eq!(next.state.page, 1);
        assert_eq!(next.query, "limit=20&page=1");
    }

    #[test]
    fn external_navigation_matches_initialize() {
        let raw = "?status=draft&page=2&limit=5";
        let transition = on_external_navigation(raw);
        assert_eq!(transition.state, QueryState::initialize(raw));
        assert_eq!(transition.query, "status=draft&limit=5&page=2");
    }

    #[test]
    fn fetch_params_omit_absent_filters() {
        let state = QueryState::initialize("category=Tech&page=2");
        let params = state.fetch_params();
        assert_eq!(params.title, None);
        assert_eq!(params.category.as_deref(), Some("Tech"));
        assert_eq!(pairs_of(&params.to_query()), pairs_of("limit=10&page=2&category=Tech"));
    }

    #[test]
    fn limits_outside_the_allowed_set_are_rejected() {
        assert!(PageLimit::new(0).is_none());
        assert!(PageLimit::new(15).is_none());
        assert_eq!(PageLimit::all().map(PageLimit::get).collect::<Vec<_>>(), ALLOWED_LIMITS);
    }

    fn filter_text() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("\\PC{1,16}")
    }

    prop_compose! {
        fn any_state()(
            title in filter_text(),
            category in filter_text(),
            status in proptest::option::of(proptest::sample::select(ArticleStatus::ALL.to_vec())),
            limit in proptest::sample::select(ALLOWED_LIMITS.to_vec()),
            page in 1u32..10_000,
        ) -> QueryState {
            QueryState {
                filters: FilterState { title, category, status },
                limit: PageLimit::new(limit).unwrap_or_default(),
                page,
            }
        }
    }

    proptest! {
        #[test]
        fn encoding_round_trips(state in any_state()) {
            prop_assert_eq!(QueryState::initialize(&state.to_query()), state);
        }

        #[test]
        fn router_encoding_matches_canonical_query(state in any_state()) {
            let routed = serde_urlencoded::to_string(state.query_pairs()).expect("encodable pairs");
            prop_assert_eq!(routed, state.to_query());
        }

        #[test]
        fn initialize_is_idempotent(raw in "[a-z&=%+0-9?]{0,48}") {
            let once = QueryState::initialize(&raw);
            prop_assert_eq!(QueryState::initialize(&once.to_query()), once);
        }

        #[test]
        fn filter_edits_keep_url_and_state_in_step(
            state in any_state(),
            edits in proptest::collection::vec((0usize..3, "\\PC{0,8}"), 1..12),
        ) {
            let fields = FilterField::ALL;
            let mut current = state;
            for (index, value) in edits {
                let transition = apply_filter_edit(&current, fields[index], &value);
                prop_assert_eq!(QueryState::initialize(&transition.query), transition.state.clone());
                prop_assert_eq!(transition.state.page, 1);
                prop_assert_eq!(transition.state.limit, current.limit);
                current = transition.state;
            }
        }

        #[test]
        fn page_changes_never_touch_filters(state in any_state(), page in 0u32..500) {
            let next = apply_page_change(&state, page).state;
            prop_assert_eq!(next.filters, state.filters);
            prop_assert_eq!(next.limit, state.limit);
            prop_assert!(next.page >= 1);
        }
    }
}
