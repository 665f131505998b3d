use crate::{
    app_lib::{GIT_COMMIT_HASH, VERSION, config::AppConfig, theme::Theme},
    components::{Alert, AlertKind, Spinner},
    features::{auth::AdminOnly, system::client},
};
use leptos::prelude::*;

/// API health and the console's own build and endpoint settings.
#[component]
pub fn SystemPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class=Theme::TITLE>"System"</h1>
                <p class=Theme::SUBTITLE>"Backend health and console build details."</p>
            </div>
            <AdminOnly message="Admin access only.">
                <SystemDetails />
            </AdminOnly>
        </div>
    }
}

#[component]
fn SystemDetails() -> impl IntoView {
    let health = LocalResource::new(move || async move { client::fetch_health().await });
    let config = AppConfig::load();

    view! {
        <div class="grid gap-6 lg:grid-cols-2">
            <section class=Theme::CARD>
                <div class="mb-3 flex items-center justify-between">
                    <h2 class=Theme::SECTION_TITLE>"Health"</h2>
                    <button
                        type="button"
                        class="rounded-lg border border-slate-700 px-3 py-1 text-xs text-gray-300 hover:bg-slate-800"
                        on:click=move |_| health.refetch()
                    >
                        "Refresh"
                    </button>
                </div>
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        health
                            .get()
                            .map(|result| match result {
                                Ok(health) => view! {
                                    <pre class="overflow-x-auto font-mono text-xs text-green-400">
                                        {health.to_pretty_json()}
                                    </pre>
                                }
                                .into_any(),
                                Err(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any(),
                            })
                    }}
                </Suspense>
            </section>
            <section class=Theme::CARD>
                <h2 class=Theme::SECTION_TITLE>"Console"</h2>
                <dl class="grid grid-cols-[auto,1fr] gap-x-4 gap-y-2 text-sm">
                    <dt class="text-gray-400">"Version"</dt>
                    <dd class="font-mono">{VERSION}</dd>
                    <dt class="text-gray-400">"Commit"</dt>
                    <dd class="font-mono">{GIT_COMMIT_HASH}</dd>
                    <dt class="text-gray-400">"API base URL"</dt>
                    <dd class="break-all font-mono">{config.api_base_url}</dd>
                    <dt class="text-gray-400">"Log level"</dt>
                    <dd class="font-mono">{config.log_level}</dd>
                </dl>
            </section>
        </div>
    }
}
