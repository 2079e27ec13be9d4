use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Full-width form submit button, disabled while a request is in flight
#[component]
pub fn SubmitButton(
    /// Whether the form is being submitted
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when idle
    #[prop(into)]
    text: String,
    /// Button text while submitting
    #[prop(default = "Submitting...".to_string(), into)]
    loading_text: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn-base btn-primary w-full"
            disabled=move || loading.get()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text.clone()}</span> }
            >
                <span class="flex items-center justify-center gap-2">
                    <Icon name=icons::LOADER class="animate-spin h-4 w-4" />
                    <span>{loading_text.clone()}</span>
                </span>
            </Show>
        </button>
    }
}
