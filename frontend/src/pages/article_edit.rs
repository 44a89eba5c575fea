use article_admin_shared::{ApiError, Article, ArticleForm, ArticlePatch, ArticlePayload};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{
    components::{
        article_form::ArticleFormView,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::current::article_form as t,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleEditProps {
    pub id: String,
}

#[derive(Clone, PartialEq)]
enum Loaded {
    Pending,
    Ready(Article),
    Missing,
    Failed(String),
}

/// Shown beside the submit button; the form keeps its values either way.
fn save_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::NotFound => t::NOT_FOUND.to_string(),
        other => format!("{}: {}", t::SAVE_FAILED, other),
    }
}

#[function_component(ArticleEditPage)]
pub fn article_edit_page(props: &ArticleEditProps) -> Html {
    let navigator = use_navigator();
    let article_id = props.id.parse::<u64>().ok();
    let loaded = use_state(|| Loaded::Pending);
    let pending = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    {
        let loaded = loaded.clone();
        use_effect_with(article_id, move |article_id| {
            match *article_id {
                Some(id) => {
                    loaded.set(Loaded::Pending);
                    wasm_bindgen_futures::spawn_local(async move {
                        let next = match crate::api::get_article(id).await {
                            Ok(article) => Loaded::Ready(article),
                            Err(ApiError::NotFound) => Loaded::Missing,
                            Err(err) => {
                                web_sys::console::error_1(
                                    &format!("Failed to fetch article {}: {}", id, err).into(),
                                );
                                Loaded::Failed(format!("{}: {}", t::LOAD_FAILED, err))
                            },
                        };
                        loaded.set(next);
                    });
                },
                None => loaded.set(Loaded::Missing),
            }
            || ()
        });
    }

    let on_submit = {
        let loaded = loaded.clone();
        let pending = pending.clone();
        let save_error = save_error.clone();
        Callback::from(move |payload: ArticlePayload| {
            let Loaded::Ready(original) = &*loaded else {
                return;
            };
            let patch = ArticlePatch::between(original, &payload);
            if patch.is_empty() {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Articles);
                }
                return;
            }

            pending.set(true);
            save_error.set(None);
            let id = original.id;
            let pending = pending.clone();
            let save_error = save_error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::update_article(id, &patch).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Articles);
                        }
                        return;
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to update article {}: {}", id, err).into(),
                        );
                        save_error.set(Some(save_failure_message(&err)));
                    },
                }
                pending.set(false);
            });
        })
    };

    let body = match &*loaded {
        Loaded::Pending => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        Loaded::Missing => html! {
            <p class="py-10 text-center text-sm text-[var(--muted)]">{ t::NOT_FOUND }</p>
        },
        Loaded::Failed(message) => html! {
            <ErrorBanner message={message.clone()} auto_dismiss={false} />
        },
        Loaded::Ready(article) => html! {
            <ArticleFormView
                key={article.id}
                initial={ArticleForm::from_article(article)}
                pending={*pending}
                submit_error={(*save_error).clone()}
                {on_submit}
            />
        },
    };

    html! {
        <main class="mx-auto max-w-3xl space-y-6 p-6">
            <header class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold">{ t::EDIT_TITLE }</h1>
                <Link<Route> to={Route::Articles} classes={classes!("btn", "btn-ghost")}>
                    { t::BACK }
                </Link<Route>>
            </header>
            { body }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_deleted_while_editing_is_reported_inline() {
        assert_eq!(save_failure_message(&ApiError::NotFound), t::NOT_FOUND);
    }

    #[test]
    fn other_save_failures_carry_the_server_reason() {
        let err = ApiError::Rejected("title already taken".to_string());
        assert_eq!(save_failure_message(&err), "Failed to save: title already taken");
    }
}
