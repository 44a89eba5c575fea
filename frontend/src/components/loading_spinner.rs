use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 32,
            SpinnerSize::Large => 48,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Visible caption next to the ring; screen readers always get one.
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let ring_style = format!("--spinner-size:{}px;", props.size.dimension());
    let padding = if props.size == SpinnerSize::Small { "p-0" } else { "p-6" };

    html! {
        <div
            class={classes!("flex", "items-center", "justify-center", "gap-2", padding)}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={ring_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-2",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            />
            {
                match props.label.as_ref() {
                    Some(label) => html! { <span class="text-sm text-[var(--muted)]">{ label.clone() }</span> },
                    None => html! { <span class="sr-only">{ t::LOADING }</span> },
                }
            }
        </div>
    }
}
