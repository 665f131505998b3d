use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-6 w-6 animate-spin rounded-full border-4 border-sky-900 border-t-sky-400"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
