//! Audit trail: time-stamped access decisions and per-decision totals.

use crate::{
    app_lib::{theme::Theme, time::format_timestamp},
    components::{Alert, AlertKind},
    features::{
        activity::{
            client,
            types::{ActivityEntry, DecisionCount, DecisionTone, total},
        },
        auth::{AdminOnly, state::use_auth},
    },
};
use leptos::prelude::*;

const COLUMNS: [&str; 8] = ["Time", "User", "Action", "Decision", "Resource", "Method", "Path", "IP"];

#[component]
pub fn AuditPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class=Theme::TITLE>"Audit trail"</h1>
                <p class=Theme::SUBTITLE>
                    "Time-stamped record of access decisions and user actions across the system."
                </p>
            </div>
            <AdminOnly message="Admin access only.">
                <AuditContent />
            </AdminOnly>
        </div>
    }
}

#[component]
fn AuditContent() -> impl IntoView {
    let auth = use_auth();
    let stats = LocalResource::new(move || async move {
        client::audit_stats(&auth.require_token()?).await
    });
    let events = LocalResource::new(move || async move {
        client::my_activity(&auth.require_token()?).await
    });

    view! {
        <div class="space-y-6">
            {move || match stats.get() {
                None => ().into_any(),
                Some(Ok(counts)) => view! { <DecisionStats counts=counts /> }.into_any(),
                Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
            }}
            {move || match events.get() {
                None => view! { <p class=Theme::MUTED>"Loading audit events…"</p> }.into_any(),
                Some(Ok(rows)) if rows.is_empty() => view! {
                    <p class=Theme::MUTED>"No audit events have been recorded yet."</p>
                }
                .into_any(),
                Some(Ok(rows)) => view! { <AuditTable rows=rows /> }.into_any(),
                Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DecisionStats(counts: Vec<DecisionCount>) -> impl IntoView {
    let sum = total(&counts);

    view! {
        <div class="flex flex-wrap gap-3">
            <div class=Theme::CARD>
                <p class="text-xs uppercase tracking-wider text-gray-400">"Total"</p>
                <p class="text-2xl font-semibold text-gray-100">{sum}</p>
            </div>
            {counts
                .into_iter()
                .map(|count| {
                    let tone = DecisionTone::of(&count.decision).text_class();
                    view! {
                        <div class=Theme::CARD>
                            <p class="text-xs uppercase tracking-wider text-gray-400">{count.decision}</p>
                            <p class=format!("text-2xl font-semibold {tone}")>{count.count}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AuditTable(rows: Vec<ActivityEntry>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-xl border border-slate-800 bg-slate-950">
            <table class=Theme::TABLE>
                <thead>
                    <tr>
                        {COLUMNS
                            .into_iter()
                            .map(|column| view! { <th class=Theme::TABLE_HEAD>{column}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let tone = DecisionTone::of(&row.decision).text_class();
                            view! {
                                <tr>
                                    <td class=format!("{} whitespace-nowrap", Theme::TABLE_CELL)>
                                        {format_timestamp(&row.created_at)}
                                    </td>
                                    <td class=Theme::TABLE_CELL>
                                        {row.user_email.unwrap_or_else(|| "N/A".to_string())}
                                    </td>
                                    <td class=Theme::TABLE_CELL>{row.action}</td>
                                    <td class=format!("{} font-semibold {tone}", Theme::TABLE_CELL)>
                                        {row.decision}
                                    </td>
                                    <td class=Theme::TABLE_CELL>{row.resource_name}</td>
                                    <td class=Theme::TABLE_CELL>{row.method}</td>
                                    <td class=format!("{} font-mono text-xs", Theme::TABLE_CELL)>{row.path}</td>
                                    <td class=Theme::TABLE_CELL>{row.ip}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
