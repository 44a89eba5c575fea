use std::rc::Rc;

use article_admin_shared::{
    ApiError, ArticlePage, FetchParams, HistoryMode, ListView, QueryAction, QueryState, QuerySync,
    RequestSeq,
};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator, use_route};

use crate::router::Route;

/// Reducer wrapper so every [`QueryAction`] is applied to the latest
/// committed state rather than to a snapshot captured at render time.
#[derive(Debug, PartialEq)]
pub struct QuerySyncState(QuerySync);

impl Reducible for QuerySyncState {
    type Action = QueryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.dispatch(action) {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

impl QuerySyncState {
    pub fn sync(&self) -> &QuerySync {
        &self.0
    }

    pub fn state(&self) -> &QueryState {
        self.0.state()
    }
}

/// Keep the article listing's filters and pagination in step with the URL.
///
/// The address bar is read once at mount and again on every location change
/// (back/forward, manual edits, deep links); everything else flows from the
/// returned reducer to the URL through a single effect, which is the only
/// writer of the query string.
///
/// # Example
/// ```rust
/// use crate::hooks::use_query_sync;
/// use article_admin_shared::QueryAction;
///
/// #[function_component(Listing)]
/// fn listing() -> Html {
///     let sync = use_query_sync();
///     let onclick = {
///         let sync = sync.clone();
///         Callback::from(move |_| sync.dispatch(QueryAction::Reset))
///     };
///     html! { <button {onclick}>{ format!("page {}", sync.state().page) }</button> }
/// }
/// ```
#[hook]
pub fn use_query_sync() -> UseReducerHandle<QuerySyncState> {
    let location = use_location();
    let navigator = use_navigator();
    let target = Route::listing(use_route::<Route>().as_ref());
    let raw_query = location
        .as_ref()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    let sync = {
        let raw_query = raw_query.clone();
        use_reducer(move || QuerySyncState(QuerySync::new(&raw_query)))
    };

    {
        let dispatcher = sync.dispatcher();
        use_effect_with(raw_query, move |raw_query| {
            dispatcher.dispatch(QueryAction::Navigated(raw_query.clone()));
            || ()
        });
    }

    {
        let pending = sync.sync().pending_write().cloned();
        use_effect_with(pending, move |pending| {
            if let (Some(write), Some(navigator)) = (pending.as_ref(), navigator.as_ref()) {
                let result = match write.mode {
                    HistoryMode::Push => navigator.push_with_query(&target, &write.pairs),
                    HistoryMode::Replace => navigator.replace_with_query(&target, &write.pairs),
                };
                if let Err(err) = result {
                    web_sys::console::error_1(
                        &format!("Failed to write query `{}`: {:?}", write.query, err).into(),
                    );
                }
            }
            || ()
        });
    }

    sync
}

#[derive(Debug, Default, PartialEq)]
pub struct ListViewState(ListView);

pub enum ListAction {
    Begin {
        seq: u64,
        params: FetchParams,
    },
    Resolve {
        seq: u64,
        outcome: Result<ArticlePage, ApiError>,
    },
}

impl Reducible for ListViewState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        let changed = match action {
            ListAction::Begin {
                seq,
                params,
            } => next.begin(seq, params),
            ListAction::Resolve {
                seq,
                outcome,
            } => next.resolve(seq, outcome),
        };
        if changed {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

impl std::ops::Deref for ListViewState {
    type Target = ListView;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Fetch the page named by `params`, again whenever `params` or `reload`
/// changes. Responses to superseded requests are dropped.
#[hook]
pub fn use_article_list(params: FetchParams, reload: u64) -> UseReducerHandle<ListViewState> {
    let view = use_reducer(ListViewState::default);
    // Request sequence guard to avoid stale async responses overriding newer pages.
    let request_seq = use_mut_ref(RequestSeq::default);

    {
        let dispatcher = view.dispatcher();
        use_effect_with((params, reload), move |(params, _)| {
            let seq = request_seq.borrow_mut().next_id();
            dispatcher.dispatch(ListAction::Begin {
                seq,
                params: params.clone(),
            });

            let params = params.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = crate::api::list_articles(&params).await;
                if let Err(err) = &outcome {
                    web_sys::console::error_1(&format!("Failed to fetch articles: {}", err).into());
                }
                if request_seq.borrow().latest() != seq {
                    return;
                }
                dispatcher.dispatch(ListAction::Resolve {
                    seq,
                    outcome,
                });
            });
            || ()
        });
    }

    view
}

/// Scroll the viewport back to the top whenever `page` changes.
#[hook]
pub fn use_scroll_to_top_on(page: u32) {
    use_effect_with(page, move |_| {
        scroll_window_to_top();
        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
