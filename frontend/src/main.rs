//! Single-page admin dashboard for articles, built with Yew.
//!
//! The article list keeps its filters and pagination in the address bar, so
//! every view can be bookmarked, shared and revisited with back/forward.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod models;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <router::AppRouter />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
