//! Side navigation for authenticated users.
//!
//! 1. Workspace (Overview, My Resources, Users, Security)
//! 2. Admin (Audit, System, Policies - admin only)

use crate::{
    app_lib::{GIT_COMMIT_HASH, VERSION},
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let is_at =
        move |target: &'static str| Signal::derive(move || pathname.with(|path| path == target));

    view! {
        <aside class="hidden w-60 flex-shrink-0 flex-col border-r border-slate-800 bg-slate-950 md:flex">
            <div class="px-5 py-5">
                <span class="bg-gradient-to-r from-green-500 to-sky-400 bg-clip-text text-lg font-bold text-transparent">
                    "ZT Console"
                </span>
            </div>
            <nav class="flex-1 space-y-6 px-3">
                <div class="space-y-1">
                    <SidebarLink target=paths::OVERVIEW icon="dashboard" label="Overview" active=is_at(paths::OVERVIEW) />
                    <SidebarLink target=paths::RESOURCES icon="cloud" label="My Resources" active=is_at(paths::RESOURCES) />
                    <SidebarLink target=paths::USERS icon="group" label="Users" active=is_at(paths::USERS) />
                    <SidebarLink target=paths::SECURITY icon="shield" label="Security" active=is_at(paths::SECURITY) />
                </div>

                <Show when=move || auth.is_admin.get()>
                    <div>
                        <h3 class="px-2 text-xs font-semibold uppercase tracking-wider text-gray-500">
                            "Admin"
                        </h3>
                        <div class="mt-2 space-y-1">
                            <SidebarLink target=paths::AUDIT icon="receipt_long" label="Audit" active=is_at(paths::AUDIT) />
                            <SidebarLink target=paths::SYSTEM icon="monitor_heart" label="System" active=is_at(paths::SYSTEM) />
                            <SidebarLink target=paths::POLICIES icon="policy" label="Policies" active=is_at(paths::POLICIES) />
                        </div>
                    </div>
                </Show>
            </nav>

            <div class="border-t border-slate-800 p-4">
                <p class="text-center font-mono text-[10px] uppercase tracking-tighter text-gray-500">
                    {format!("v{VERSION} · {GIT_COMMIT_HASH}")}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            class="flex items-center rounded-md px-2 py-2 text-sm font-medium transition-colors"
            class:bg-slate-800=move || active.get()
            class:text-sky-300=move || active.get()
            class:text-gray-300=move || !active.get()
            class:hover:bg-slate-900=move || !active.get()
        >
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
