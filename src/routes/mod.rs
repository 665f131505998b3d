mod audit;
mod auth;
mod not_found;
mod overview;
pub(crate) mod paths;
mod policies;
mod resources;
mod security;
mod system;
mod users;

pub(crate) use audit::AuditPage;
pub(crate) use auth::AuthGate;
pub(crate) use not_found::NotFoundPage;
pub(crate) use overview::OverviewPage;
pub(crate) use policies::PoliciesPage;
pub(crate) use resources::ResourcesPage;
pub(crate) use security::SecurityPage;
pub(crate) use system::SystemPage;
pub(crate) use users::UsersPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Routes available once a session exists. The shell is rendered by `App`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=OverviewPage />
            <Route path=path!("/resources") view=ResourcesPage />
            <Route path=path!("/users") view=UsersPage />
            <Route path=path!("/security") view=SecurityPage />
            <Route path=path!("/admin/audit") view=AuditPage />
            <Route path=path!("/admin/system") view=SystemPage />
            <Route path=path!("/admin/policies") view=PoliciesPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
