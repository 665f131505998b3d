use leptos::prelude::*;

/// Gradient call-to-action button. Use `full_width` inside the auth card.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] full_width: bool,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button
            type=button_type
            class="rounded-xl bg-gradient-to-r from-green-500 to-sky-400 px-4 py-2 text-sm font-semibold text-slate-950 shadow-lg shadow-green-500/30 transition hover:brightness-110 focus:outline-none focus:ring-2 focus:ring-sky-300"
            class:w-full=full_width
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-50=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
