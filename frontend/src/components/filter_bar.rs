use article_admin_shared::{ArticleStatus, FilterField, FilterState};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::i18n::current::articles_list as t;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: FilterState,
    /// Raw value of one edited field, emitted on every keystroke/selection.
    pub on_edit: Callback<(FilterField, String)>,
    pub on_reset: Callback<()>,
}

fn text_input_handler(on_edit: &Callback<(FilterField, String)>, field: FilterField) -> Callback<InputEvent> {
    let on_edit = on_edit.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            on_edit.emit((field, input.value()));
        }
    })
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let filters = &props.filters;

    let on_title_input = text_input_handler(&props.on_edit, FilterField::Title);
    let on_category_input = text_input_handler(&props.on_edit, FilterField::Category);

    let on_status_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_edit.emit((FilterField::Status, select.value()));
            }
        })
    };

    let on_reset_click = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let selected_status = filters.status;

    html! {
        <section class="rounded-lg border border-[var(--border)] p-4" aria-labelledby="filter-heading">
            <h2 id="filter-heading" class="mb-3 text-sm font-semibold">{ t::FILTER_HEADING }</h2>
            <div class="grid grid-cols-1 gap-3 md:grid-cols-4">
                <label class="flex flex-col gap-1 text-sm" for="filter-title">
                    { t::FILTER_TITLE }
                    <input
                        id="filter-title"
                        class="input"
                        type="text"
                        placeholder={t::FILTER_TITLE_PLACEHOLDER}
                        value={filters.value(FilterField::Title).to_string()}
                        oninput={on_title_input}
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm" for="filter-category">
                    { t::FILTER_CATEGORY }
                    <input
                        id="filter-category"
                        class="input"
                        type="text"
                        placeholder={t::FILTER_CATEGORY_PLACEHOLDER}
                        value={filters.value(FilterField::Category).to_string()}
                        oninput={on_category_input}
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm" for="filter-status">
                    { t::FILTER_STATUS }
                    <select id="filter-status" class="select" onchange={on_status_change}>
                        <option value="" selected={selected_status.is_none()}>{ t::FILTER_STATUS_ANY }</option>
                        { for ArticleStatus::ALL.iter().map(|status| html! {
                            <option
                                key={status.as_str()}
                                value={status.as_str()}
                                selected={selected_status == Some(*status)}
                            >
                                { status.as_str() }
                            </option>
                        }) }
                    </select>
                </label>
                <div class="flex items-end">
                    <button
                        type="button"
                        class="btn btn-outline w-full"
                        onclick={on_reset_click}
                    >
                        { t::RESET }
                    </button>
                </div>
            </div>
        </section>
    }
}
