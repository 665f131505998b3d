//! Static notice shown in place of admin-only content.

use leptos::prelude::*;

#[component]
pub fn AccessDenied(message: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-sm text-gray-300">
            <span class="material-symbols-outlined text-base text-orange-400">"lock"</span>
            <p>{message}</p>
        </div>
    }
}
