use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="mx-auto max-w-xl space-y-4 p-10 text-center">
            <h1 class="text-2xl font-semibold">{ t::TITLE }</h1>
            <Link<Route> to={Route::Articles} classes={classes!("btn", "btn-outline")}>
                { t::BACK }
            </Link<Route>>
        </main>
    }
}
