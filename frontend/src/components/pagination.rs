use article_admin_shared::{PageLimit, PagerControls};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_two};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub controls: PagerControls,
    pub limit: PageLimit,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_limit_change: Callback<PageLimit>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let controls = props.controls;

    let prev_onclick = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| {
            if controls.prev_enabled {
                on_prev.emit(());
            }
        })
    };

    let next_onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| {
            if controls.next_enabled {
                on_next.emit(());
            }
        })
    };

    let on_limit_change = {
        let on_limit_change = props.on_limit_change.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let parsed = select.value().parse::<u32>().ok().and_then(PageLimit::new);
            if let Some(limit) = parsed {
                on_limit_change.emit(limit);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "h-9",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[rgba(var(--surface-rgb),0.95)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "shadow-sm",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="mt-4 flex items-center justify-between" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={!controls.prev_enabled}
                onclick={prev_onclick}
            >
                { t::PREV }
            </button>
            <div class="flex items-center gap-4">
                <span class="text-sm" aria-live="polite">
                    { fill_two(t::PAGE_OF_TEMPLATE, controls.page, controls.total_pages) }
                </span>
                <label class="flex items-center gap-2 text-sm">
                    <span class="sr-only">{ t::LIMIT_LABEL }</span>
                    <select id="limit" class="select" onchange={on_limit_change}>
                        { for PageLimit::all().map(|limit| html! {
                            <option
                                key={limit.get()}
                                value={limit.to_string()}
                                selected={limit == props.limit}
                            >
                                { limit.get() }
                            </option>
                        }) }
                    </select>
                </label>
            </div>
            <button
                type="button"
                class={base_btn_classes}
                disabled={!controls.next_enabled}
                onclick={next_onclick}
            >
                { t::NEXT }
            </button>
        </nav>
    }
}
