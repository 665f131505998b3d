use crate::{components::AccessDenied, features::auth::state::use_auth};
use leptos::prelude::*;

/// Renders children for admins and a static notice for everyone else.
#[component]
pub fn AdminOnly(
    #[prop(optional, into)] message: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let message = message.unwrap_or_else(|| "You must be an admin to view this page.".to_string());

    view! {
        // UX-only guard; the API enforces the admin role itself.
        <Show
            when=move || auth.is_admin.get()
            fallback=move || view! { <AccessDenied message=message.clone() /> }
        >
            {children()}
        </Show>
    }
}
