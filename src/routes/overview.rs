//! Landing page: API health, the user directory and the caller's recent
//! access decisions. Each section loads independently.

use crate::{
    app_lib::{theme::Theme, time::format_timestamp},
    components::{Alert, AlertKind},
    features::{
        activity::{client as activity_client, types::DecisionTone},
        auth::state::use_auth,
        system::client as system_client,
        users::client as users_client,
    },
};
use leptos::prelude::*;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth = use_auth();
    let health = LocalResource::new(move || async move { system_client::fetch_health().await });
    let users = LocalResource::new(move || async move {
        users_client::list_users(&auth.require_token()?).await
    });
    let activity = LocalResource::new(move || async move {
        activity_client::my_activity(&auth.require_token()?).await
    });

    view! {
        <div class="space-y-8">
            <section>
                <h2 class=Theme::SECTION_TITLE>"System status"</h2>
                {move || match health.get() {
                    None => view! { <p class=Theme::MUTED>"Loading health..."</p> }.into_any(),
                    Some(Ok(health)) => view! {
                        <pre class="overflow-x-auto rounded-xl border border-slate-800 bg-slate-950 p-4 font-mono text-xs text-green-400">
                            {health.to_pretty_json()}
                        </pre>
                    }
                    .into_any(),
                    Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
                }}
            </section>

            <section>
                <h2 class=Theme::SECTION_TITLE>"Users"</h2>
                {move || match users.get() {
                    None => view! { <p class=Theme::MUTED>"Loading users..."</p> }.into_any(),
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <p class=Theme::MUTED>"No users loaded yet."</p> }.into_any()
                    }
                    Some(Ok(list)) => view! {
                        <ul class="space-y-2">
                            {list
                                .into_iter()
                                .map(|user| view! {
                                    <li class="rounded-lg border border-slate-800 bg-slate-950 px-3 py-2 text-sm">
                                        {format!("{} ({}) – {}", user.full_name, user.email, user.role)}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
                }}
            </section>

            <section>
                <h2 class=Theme::SECTION_TITLE>"Recent activity"</h2>
                {move || match activity.get() {
                    None => view! { <p class=Theme::MUTED>"Loading activity..."</p> }.into_any(),
                    Some(Ok(entries)) if entries.is_empty() => {
                        view! { <p class=Theme::MUTED>"No recent activity yet."</p> }.into_any()
                    }
                    Some(Ok(entries)) => view! {
                        <ul class="space-y-2">
                            {entries
                                .into_iter()
                                .map(|entry| {
                                    let tone = DecisionTone::of(&entry.decision).text_class();
                                    view! {
                                        <li class="rounded-lg border border-slate-800 bg-slate-950 px-3 py-2 text-sm">
                                            <div>
                                                <strong>{entry.resource_name}</strong>
                                                {format!(" – {} ", entry.action)}
                                                <span class=tone>{format!("({})", entry.decision)}</span>
                                            </div>
                                            <div class="text-gray-400">
                                                {format!("{} {} • {}", entry.method, entry.path, entry.ip)}
                                            </div>
                                            <div class="text-xs text-gray-500">
                                                {format_timestamp(&entry.created_at)}
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
                }}
            </section>
        </div>
    }
}
