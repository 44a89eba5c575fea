use article_admin_shared::{FilterField, PageLimit, QueryAction};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        article_row::ArticleRow,
        error_banner::ErrorBanner,
        filter_bar::FilterBar,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
    },
    hooks::{use_article_list, use_query_sync, use_scroll_to_top_on},
    i18n::{current::articles_list as t, fill_one},
    router::Route,
};

#[function_component(ArticlesListPage)]
pub fn articles_list_page() -> Html {
    let sync = use_query_sync();
    let reload = use_state(|| 0_u64);
    let deleting = use_state(|| None::<u64>);
    let delete_error = use_state(|| None::<String>);

    let state = sync.state().clone();
    let list = use_article_list(state.fetch_params(), *reload);
    use_scroll_to_top_on(state.page);

    {
        let dispatcher = sync.dispatcher();
        let loaded = list.loaded().map(|(params, meta)| (params.clone(), *meta));
        use_effect_with(loaded, move |loaded| {
            if let Some((params, meta)) = loaded.clone() {
                dispatcher.dispatch(QueryAction::PageLoaded {
                    params,
                    meta,
                });
            }
            || ()
        });
    }

    let on_filter_edit = {
        let dispatcher = sync.dispatcher();
        Callback::from(move |(field, value): (FilterField, String)| {
            dispatcher.dispatch(QueryAction::EditFilter {
                field,
                value,
            });
        })
    };
    let on_reset = {
        let dispatcher = sync.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(QueryAction::Reset))
    };
    let on_prev = {
        let dispatcher = sync.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(QueryAction::PrevPage))
    };
    let on_next = {
        let dispatcher = sync.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(QueryAction::NextPage))
    };
    let on_limit_change = {
        let dispatcher = sync.dispatcher();
        Callback::from(move |limit: PageLimit| dispatcher.dispatch(QueryAction::ChangeLimit(limit)))
    };

    let on_delete = {
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        let reload = reload.clone();
        Callback::from(move |id: u64| {
            if deleting.is_some() {
                return;
            }
            deleting.set(Some(id));
            delete_error.set(None);
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::delete_article(id).await {
                    Ok(()) => reload.set(*reload + 1),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to delete article {}: {}", id, err).into(),
                        );
                        delete_error.set(Some(fill_one(t::DELETE_FAILED_TEMPLATE, err)));
                    },
                }
                deleting.set(None);
            });
        })
    };

    let clear_delete_error = {
        let delete_error = delete_error.clone();
        Callback::from(move |_: ()| delete_error.set(None))
    };

    let load_error = list
        .error()
        .map(|message| fill_one(t::LOAD_FAILED_TEMPLATE, message));

    let body = if list.is_loading() && list.items().is_empty() {
        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
    } else if list.is_empty() {
        html! { <p class="py-10 text-center text-sm text-[var(--muted)]">{ t::EMPTY }</p> }
    } else {
        let busy = deleting.as_ref().copied();
        html! {
            <ul class={classes!("space-y-2", list.is_loading().then_some("opacity-60"))}>
                { for list.items().iter().map(|article| html! {
                    <ArticleRow
                        key={article.id}
                        article={article.clone()}
                        on_delete={on_delete.clone()}
                        deleting={busy == Some(article.id)}
                    />
                }) }
            </ul>
        }
    };

    html! {
        <main class="mx-auto max-w-5xl space-y-6 p-6">
            <header class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-semibold">{ t::TITLE }</h1>
                    <p class="text-sm text-[var(--muted)]">{ t::SUBTITLE }</p>
                </div>
                <Link<Route> to={Route::ArticleCreate} classes={classes!("btn", "btn-primary")}>
                    { t::CREATE }
                </Link<Route>>
            </header>

            <FilterBar filters={state.filters.clone()} on_edit={on_filter_edit} {on_reset} />

            if let Some(message) = load_error {
                <ErrorBanner {message} auto_dismiss={false} />
            }
            if let Some(message) = (*delete_error).clone() {
                <ErrorBanner {message} on_close={clear_delete_error} />
            }

            <section class="rounded-lg border border-[var(--border)] p-4" aria-labelledby="list-heading">
                <h2 id="list-heading" class="mb-3 text-sm font-semibold">{ t::LIST_HEADING }</h2>
                { body }
                <Pagination
                    controls={list.controls(&state)}
                    limit={state.limit}
                    {on_prev}
                    {on_next}
                    {on_limit_change}
                />
            </section>
        </main>
    }
}
