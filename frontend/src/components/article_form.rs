use article_admin_shared::{
    validation::CONTENT_MIN_CHARS, ArticleForm, ArticlePayload, ArticleStatus, FormErrors,
    FormField,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    i18n::{current::article_form as t, fill_two},
};

#[derive(Properties, PartialEq)]
pub struct ArticleFormViewProps {
    /// Values shown on first render. Later changes are ignored.
    pub initial: ArticleForm,
    #[prop_or(false)]
    pub pending: bool,
    /// Failure of the last submission, shown beside the submit button.
    #[prop_or_default]
    pub submit_error: Option<String>,
    pub on_submit: Callback<ArticlePayload>,
}

fn field_error(errors: &Option<FormErrors>, field: FormField) -> Html {
    match errors.as_ref().and_then(|errors| errors.get(field)) {
        Some(err) => html! {
            <p class="text-xs text-[var(--danger)]" role="alert">{ err.to_string() }</p>
        },
        None => Html::default(),
    }
}

/// Create/edit form. Errors appear after the first submit and then track
/// every edit.
#[function_component(ArticleFormView)]
pub fn article_form_view(props: &ArticleFormViewProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };
    let errors = use_state(|| None::<FormErrors>);

    let update = {
        let form = form.clone();
        let errors = errors.clone();
        move |field: FormField, value: String| {
            let next = form.with(field, value);
            if errors.is_some() {
                errors.set(next.validate().err());
            }
            form.set(next);
        }
    };

    let on_title = {
        let update = update.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                update(FormField::Title, input.value());
            }
        })
    };
    let on_category = {
        let update = update.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                update(FormField::Category, input.value());
            }
        })
    };
    let on_content = {
        let update = update.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                update(FormField::Content, area.value());
            }
        })
    };
    let on_status = {
        let update = update.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                update(FormField::Status, select.value());
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        let pending = props.pending;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if pending {
                return;
            }
            match form.validate() {
                Ok(payload) => {
                    errors.set(Some(FormErrors::default()));
                    on_submit.emit(payload);
                },
                Err(failures) => errors.set(Some(failures)),
            }
        })
    };

    let content_chars = form.content.chars().count();

    html! {
        <form class="space-y-4" {onsubmit} novalidate=true>
            <label class="flex flex-col gap-1 text-sm" for="article-title">
                { t::TITLE }
                <input
                    id="article-title"
                    class="input"
                    type="text"
                    placeholder={t::TITLE_PLACEHOLDER}
                    value={form.title.clone()}
                    oninput={on_title}
                />
                { field_error(&*errors, FormField::Title) }
            </label>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <label class="flex flex-col gap-1 text-sm" for="article-category">
                    { t::CATEGORY }
                    <input
                        id="article-category"
                        class="input"
                        type="text"
                        placeholder={t::CATEGORY_PLACEHOLDER}
                        value={form.category.clone()}
                        oninput={on_category}
                    />
                    { field_error(&*errors, FormField::Category) }
                </label>
                <label class="flex flex-col gap-1 text-sm" for="article-status">
                    { t::STATUS }
                    <select id="article-status" class="select" onchange={on_status}>
                        { for ArticleStatus::ALL.iter().map(|status| html! {
                            <option
                                key={status.as_str()}
                                value={status.as_str()}
                                selected={form.status == status.as_str()}
                            >
                                { status.as_str() }
                            </option>
                        }) }
                    </select>
                    { field_error(&*errors, FormField::Status) }
                </label>
            </div>
            <label class="flex flex-col gap-1 text-sm" for="article-content">
                { t::CONTENT }
                <textarea
                    id="article-content"
                    class="textarea min-h-[240px]"
                    placeholder={t::CONTENT_PLACEHOLDER}
                    value={form.content.clone()}
                    oninput={on_content}
                />
                <span class="text-xs text-[var(--muted)]">
                    { fill_two(t::CHAR_COUNT_TEMPLATE, content_chars, CONTENT_MIN_CHARS) }
                </span>
                { field_error(&*errors, FormField::Content) }
            </label>
            <div class="flex items-center justify-end gap-3">
                if let Some(message) = props.submit_error.clone() {
                    <p class="text-sm text-[var(--danger)]" role="alert">{ message }</p>
                }
                <button type="submit" class="btn btn-primary" disabled={props.pending}>
                    if props.pending {
                        <LoadingSpinner size={SpinnerSize::Small} label={AttrValue::from(t::SUBMITTING)} />
                    } else {
                        { t::SUBMIT }
                    }
                </button>
            </div>
        </form>
    }
}
