use article_admin_shared::format_timestamp;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    i18n::{current::articles_list as t, fill_one},
    models::{Article, ArticleStatus},
    router::Route,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleRowProps {
    pub article: Article,
    /// Emits the article id once the operator confirmed the delete.
    pub on_delete: Callback<u64>,
    #[prop_or(false)]
    pub deleting: bool,
}

fn status_badge_class(status: ArticleStatus) -> Classes {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded-full",
        "px-2",
        "py-0.5",
        "text-xs",
        "font-semibold",
        "uppercase",
        "tracking-[0.06em]"
    );
    match status {
        ArticleStatus::Publish => {
            classes!(base, "bg-emerald-500/15", "text-emerald-700", "dark:text-emerald-200")
        },
        ArticleStatus::Draft => classes!(base, "bg-amber-500/15", "text-amber-700", "dark:text-amber-200"),
        ArticleStatus::Thrash => classes!(base, "bg-slate-500/15", "text-slate-700", "dark:text-slate-200"),
    }
}

/// Category line; the status is rendered separately as a badge.
fn meta_line(article: &Article) -> String {
    fill_one(t::META_TEMPLATE, &article.category)
}

#[function_component(ArticleRow)]
pub fn article_row(props: &ArticleRowProps) -> Html {
    let article = &props.article;
    let edit_route = Route::ArticleEdit {
        id: article.id.to_string(),
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let id = article.id;
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|window| window.confirm_with_message(t::DELETE_CONFIRM).ok())
                .unwrap_or(false);
            if confirmed {
                on_delete.emit(id);
            }
        })
    };

    html! {
        <li class="rounded-md border border-[var(--border)] p-3">
            <div class="flex items-start justify-between gap-3">
                <div>
                    <h3 class="font-medium">{ &article.title }</h3>
                    <p class="text-xs text-[var(--muted)]">
                        { meta_line(article) }
                        {" "}
                        <span class={status_badge_class(article.status)}>{ article.status.as_str() }</span>
                    </p>
                </div>
                <div class="flex items-center gap-2">
                    <Link<Route> to={edit_route} classes={classes!("btn", "btn-outline", "btn-sm")}>
                        { t::EDIT }
                    </Link<Route>>
                    <button
                        type="button"
                        class="btn btn-destructive btn-sm"
                        disabled={props.deleting}
                        onclick={on_delete_click}
                    >
                        { t::DELETE }
                    </button>
                </div>
            </div>
            <div class="mt-1 text-xs text-[var(--muted)]">
                { format_timestamp(&article.updated_at) }
            </div>
            <p class="mt-2 line-clamp-3 text-sm text-[var(--muted)]">{ &article.content }</p>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_appears_only_in_the_badge() {
        let article = Article {
            id: 7,
            title: "Quarterly budget review and forecast".to_string(),
            content: String::new(),
            category: "Finance".to_string(),
            status: ArticleStatus::Draft,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let line = meta_line(&article);
        assert_eq!(line, "Category: Finance");
        assert!(!line.contains(article.status.as_str()));
    }
}
