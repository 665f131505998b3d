use crate::components::AppShell;
use crate::features::auth::state::{AuthProvider, use_auth};
use crate::routes::{AppRoutes, AuthGate};
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <Console />
            </Router>
        </AuthProvider>
    }
}

/// Shows the auth gate until a session exists, then the routed console.
#[component]
fn Console() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_authenticated.get() fallback=|| view! { <AuthGate /> }>
            <AppShell>
                <AppRoutes />
            </AppShell>
        </Show>
    }
}
