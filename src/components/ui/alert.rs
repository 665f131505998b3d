//! Alert banners for success and error messages. Messages must be safe to render
//! and should never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-orange-500/40 bg-orange-500/10 px-4 py-3 text-sm text-orange-400"
        }
        AlertKind::Success => {
            "rounded-lg border border-green-500/40 bg-green-500/10 px-4 py-3 text-sm text-green-400"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
