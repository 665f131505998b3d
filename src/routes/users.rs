//! User directory with role assignment. Only admins see the table; the API
//! rejects role changes from anyone else regardless.

use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, Spinner},
    features::{
        auth::{AdminOnly, state::use_auth},
        users::{
            client,
            types::{AppRole, User, apply_role_update, current_role},
        },
    },
};
use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class=Theme::TITLE>"Users"</h1>
                <p class=Theme::SUBTITLE>"Assign application roles to registered users."</p>
            </div>
            <AdminOnly message="You must be an admin to manage users.">
                <UsersTable />
            </AdminOnly>
        </div>
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let auth = use_auth();
    let rows = RwSignal::new(Vec::<User>::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let users = LocalResource::new(move || async move {
        client::list_users(&auth.require_token()?).await
    });

    Effect::new(move |_| match users.get() {
        Some(Ok(list)) => rows.set(list),
        Some(Err(err)) => set_error.set(Some(err)),
        None => {}
    });

    let update_action = Action::new_local(move |(user_id, role): &(i64, AppRole)| {
        let (user_id, role) = (*user_id, *role);
        async move { client::update_role(&auth.require_token()?, user_id, role).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(updated) => {
                    tracing::info!(user_id = updated.id, role = %updated.role, "role updated");
                    rows.update(|rows| {
                        apply_role_update(rows, &updated);
                    });
                    set_error.set(None);
                }
                Err(err) => {
                    // Re-assert the confirmed roles so the rejected choice is undone.
                    rows.update(|_| {});
                    set_error.set(Some(err));
                }
            }
        }
    });

    let change_role = move |user_id: i64, value: String| {
        set_error.set(None);
        update_action.dispatch((user_id, AppRole::from_select(&value)));
    };

    view! {
        <div class="space-y-4">
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
            <div class="overflow-x-auto rounded-xl border border-slate-800 bg-slate-950">
                <table class=Theme::TABLE>
                    <thead>
                        <tr>
                            <th class=Theme::TABLE_HEAD>"Name"</th>
                            <th class=Theme::TABLE_HEAD>"Email"</th>
                            <th class=Theme::TABLE_HEAD>"Role"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || users.get().is_some()
                            fallback=|| view! {
                                <tr>
                                    <td colspan="3" class="px-3 py-8 text-center"><Spinner /></td>
                                </tr>
                            }
                        >
                            <Show
                                when=move || !rows.with(Vec::is_empty)
                                fallback=|| view! {
                                    <tr>
                                        <td colspan="3" class=format!("{} text-center", Theme::TABLE_CELL)>
                                            <span class=Theme::MUTED>"No users loaded yet."</span>
                                        </td>
                                    </tr>
                                }
                            >
                                <For
                                    each=move || rows.get()
                                    key=|user| user.id
                                    children=move |user| {
                                        let user_id = user.id;
                                        let shown = move || {
                                            rows.with(|rows| current_role(rows, user_id))
                                                .unwrap_or(AppRole::User)
                                                .as_str()
                                        };
                                        view! {
                                            <tr class="hover:bg-slate-900">
                                                <td class=Theme::TABLE_CELL>{user.full_name}</td>
                                                <td class=Theme::TABLE_CELL>{user.email}</td>
                                                <td class=Theme::TABLE_CELL>
                                                    <select
                                                        class="rounded-lg border border-slate-700 bg-slate-900 px-2 py-1 text-sm text-gray-100"
                                                        prop:value=shown
                                                        prop:disabled=move || update_action.pending().get()
                                                        on:change=move |event| change_role(user_id, event_target_value(&event))
                                                    >
                                                        {AppRole::ALL
                                                            .into_iter()
                                                            .map(|role| {
                                                                let value = role.as_str();
                                                                view! { <option value=value>{value}</option> }
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </Show>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
