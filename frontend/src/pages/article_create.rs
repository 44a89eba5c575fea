use article_admin_shared::{ArticleForm, ArticlePayload};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{
    components::article_form::ArticleFormView,
    i18n::current::article_form as t,
    router::Route,
};

#[function_component(ArticleCreatePage)]
pub fn article_create_page() -> Html {
    let navigator = use_navigator();
    let pending = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    let on_submit = {
        let pending = pending.clone();
        let save_error = save_error.clone();
        Callback::from(move |payload: ArticlePayload| {
            pending.set(true);
            save_error.set(None);
            let pending = pending.clone();
            let save_error = save_error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::create_article(&payload).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Articles);
                        }
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to create article: {}", err).into());
                        save_error.set(Some(format!("{}: {}", t::SAVE_FAILED, err)));
                        pending.set(false);
                    },
                }
            });
        })
    };

    html! {
        <main class="mx-auto max-w-3xl space-y-6 p-6">
            <header class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold">{ t::CREATE_TITLE }</h1>
                <Link<Route> to={Route::Articles} classes={classes!("btn", "btn-ghost")}>
                    { t::BACK }
                </Link<Route>>
            </header>
            <ArticleFormView
                initial={ArticleForm::default()}
                pending={*pending}
                submit_error={(*save_error).clone()}
                {on_submit}
            />
        </main>
    }
}
