use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

const AUTO_DISMISS_MS: u32 = 5000;

/// Dismissible alert. Re-opens whenever `message` changes.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let visible = use_state(|| true);

    let close = {
        let visible = visible.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if !*visible {
                return;
            }
            visible.set(false);
            if let Some(on_close) = on_close.as_ref() {
                on_close.emit(());
            }
        })
    };

    let timer = {
        let close = close.clone();
        use_timeout(move || close.emit(()), AUTO_DISMISS_MS)
    };

    {
        let visible = visible.clone();
        let auto_dismiss = props.auto_dismiss;
        use_effect_with(props.message.clone(), move |_| {
            visible.set(true);
            if auto_dismiss {
                timer.reset();
            } else {
                timer.cancel();
            }
        });
    }

    if !*visible || props.message.trim().is_empty() {
        return Html::default();
    }

    let onclick = Callback::from(move |_: MouseEvent| close.emit(()));

    html! {
        <div
            class="flex items-start gap-3 rounded-lg border border-[var(--danger)] bg-[var(--danger-soft)] px-4 py-3 text-sm"
            role="alert"
            aria-live="assertive"
        >
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="inline-flex h-7 w-7 items-center justify-center rounded-full hover:bg-black/10"
                aria-label={t::CLOSE_ARIA}
                {onclick}
            >
                {"×"}
            </button>
        </div>
    }
}
