//! Authenticated layout: sidebar, a header with the signed-in identity, and the
//! content container. Navigation stays client-side; the API enforces access.

use super::Sidebar;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

/// Wraps authenticated routes with the sidebar and header.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let full_name = move || {
        auth.session
            .with(|session| session.as_ref().map(|s| s.user.full_name.clone()))
            .unwrap_or_default()
    };
    let role = move || {
        auth.session
            .with(|session| session.as_ref().map(|s| s.user.role.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="flex min-h-screen bg-slate-900 text-gray-100">
            <Sidebar />
            <div class="flex flex-1 flex-col">
                <header class="flex items-center justify-between border-b border-slate-800 px-6 py-4">
                    <div>
                        <p class="text-xs uppercase tracking-wider text-gray-400">"Zero Trust Console"</p>
                        <p class="text-sm font-medium">{full_name}</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <span class="rounded-full border border-sky-400/40 bg-sky-400/10 px-2 py-0.5 text-xs text-sky-300">
                            {role}
                        </span>
                        <button
                            type="button"
                            class="rounded-lg border border-slate-700 px-3 py-1.5 text-sm text-gray-200 hover:bg-slate-800"
                            on:click=move |_| auth.clear_session()
                        >
                            "Logout"
                        </button>
                    </div>
                </header>
                <main class="flex-1 overflow-y-auto p-6">
                    {children()}
                </main>
            </div>
        </div>
    }
}
