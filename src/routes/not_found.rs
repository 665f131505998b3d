//! Fallback for unknown console paths.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
            <div class="relative">
                <h1 class="select-none text-9xl font-black text-slate-800">"404"</h1>
                <p class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-gray-100">
                    "Page not found"
                </p>
            </div>

            <div class="mt-4 space-y-6">
                <p class="mx-auto max-w-sm text-gray-400">
                    "This console page does not exist."
                </p>

                <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <A
                        href=paths::OVERVIEW
                        {..}
                        class="inline-flex items-center rounded-lg bg-sky-500 px-5 py-2.5 text-sm font-medium text-slate-950 transition-all hover:bg-sky-400"
                    >
                        <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                        "Overview"
                    </A>
                    <button
                        type="button"
                        on:click=move |_| go_back()
                        class="inline-flex items-center rounded-lg border border-slate-700 px-5 py-2.5 text-sm font-medium text-gray-300 transition-all hover:bg-slate-800"
                    >
                        <span class="material-symbols-outlined mr-2 text-base">"arrow_back"</span>
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn go_back() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.back();
    }
}
