//! Read-only AWS role policy matrix.

use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind},
    features::{
        auth::{AdminOnly, state::use_auth},
        policies::{client, matrix::PolicyMatrix},
    },
};
use leptos::prelude::*;

#[component]
pub fn PoliciesPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class=Theme::TITLE>"AWS role policies"</h1>
                <p class=Theme::SUBTITLE>
                    "Read-only view of which AWS roles each application role can assume."
                </p>
            </div>
            <AdminOnly message="Admin access only.">
                <PolicyTable />
            </AdminOnly>
        </div>
    }
}

#[component]
fn PolicyTable() -> impl IntoView {
    let auth = use_auth();
    let matrix = LocalResource::new(move || async move {
        client::fetch_policy_matrix(&auth.require_token()?).await
    });

    move || match matrix.get() {
        None => view! { <p class=Theme::MUTED>"Loading policies…"</p> }.into_any(),
        Some(Ok(matrix)) if matrix.is_empty() => view! {
            <p class=Theme::MUTED>"No AWS roles are mapped to application roles yet."</p>
        }
        .into_any(),
        Some(Ok(matrix)) => view! { <MatrixTable matrix=matrix /> }.into_any(),
        Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
    }
}

#[component]
fn MatrixTable(matrix: PolicyMatrix) -> impl IntoView {
    let header = matrix
        .app_roles
        .iter()
        .map(|app_role| {
            view! {
                <th class=format!("{} text-center capitalize", Theme::TABLE_HEAD)>{app_role.clone()}</th>
            }
        })
        .collect_view();

    let body = matrix
        .aws_roles
        .iter()
        .map(|role| {
            let cells = matrix
                .app_roles
                .iter()
                .map(|app_role| {
                    let granted = matrix.allows(app_role, role.id);
                    view! {
                        <td
                            class=format!("{} text-center", Theme::TABLE_CELL)
                            class:text-green-500=granted
                            class:text-gray-500=!granted
                        >
                            {if granted { "✓" } else { "—" }}
                        </td>
                    }
                })
                .collect_view();
            view! {
                <tr>
                    <td class=Theme::TABLE_CELL>
                        <div class="font-medium text-gray-100">{role.name.clone()}</div>
                        <div class="text-xs text-gray-400">{role.caption()}</div>
                        {role
                            .description()
                            .map(|text| view! { <div class="mt-1 text-xs text-gray-300">{text.to_owned()}</div> })}
                    </td>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto rounded-xl border border-slate-800 bg-slate-950">
            <table class=Theme::TABLE>
                <thead>
                    <tr>
                        <th class=Theme::TABLE_HEAD>"AWS role"</th>
                        {header}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
