use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config,
    i18n::current::layout as t,
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,

    #[at("/dashboard/articles")]
    Articles,

    #[at("/dashboard/articles/new")]
    ArticleCreate,

    #[at("/dashboard/articles/:id/edit")]
    ArticleEdit { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where the listing writes its query back to: the root stays on the root
    /// so deep links and history entries keep their path.
    pub fn listing(current: Option<&Route>) -> Route {
        match current {
            Some(Route::Root) => Route::Root,
            _ => Route::Articles,
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root | Route::Articles => html! { <pages::ArticlesListPage /> },
        Route::ArticleCreate => html! { <pages::ArticleCreatePage /> },
        Route::ArticleEdit {
            id,
        } => {
            html! { <pages::ArticleEditPage id={id} /> }
        },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}

#[function_component(Sidebar)]
fn sidebar() -> Html {
    let route = use_route::<Route>();
    let articles_active = matches!(
        route,
        Some(Route::Root | Route::Articles | Route::ArticleCreate | Route::ArticleEdit { .. })
    );

    let mut link_classes = classes!("block", "rounded-md", "px-3", "py-2", "text-sm");
    if articles_active {
        link_classes.push("bg-[var(--surface-alt)]");
        link_classes.push("font-semibold");
    }

    html! {
        <aside class="w-56 shrink-0 border-r border-[var(--border)] p-4">
            <p class="mb-4 text-lg font-bold">{ t::BRAND }</p>
            <nav aria-label={t::NAV_ARIA}>
                <Link<Route> to={Route::Articles} classes={link_classes}>
                    { t::NAV_ARTICLES }
                </Link<Route>>
            </nav>
        </aside>
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let basename = config::router_basename().map(AttrValue::from);

    html! {
        <BrowserRouter {basename}>
            <div class="flex bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Sidebar />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
