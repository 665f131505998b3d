//! "My Resources": AWS roles the caller may assume plus the resources the
//! active policies expose to them.

use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, Button},
    features::{
        auth::state::use_auth,
        aws::{
            client as aws_client,
            types::{AwsRole, tab_opened},
        },
        resources::client as resources_client,
    },
};
use leptos::prelude::*;

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let auth = use_auth();
    let roles = LocalResource::new(move || async move {
        aws_client::list_my_roles(&auth.require_token()?).await
    });
    let resources = LocalResource::new(move || async move {
        resources_client::list_resources(&auth.require_token()?).await
    });
    let (launch_error, set_launch_error) = signal::<Option<String>>(None);

    let launch_action = Action::new_local(move |role_id: &i64| {
        let role_id = *role_id;
        async move {
            let url = aws_client::create_session(&auth.require_token()?, role_id).await?;
            open_in_new_tab(&url)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = launch_action.value().get() {
            match result {
                Ok(()) => set_launch_error.set(None),
                Err(err) => set_launch_error.set(Some(err.to_string())),
            }
        }
    });

    let launch = Callback::new(move |role_id: i64| {
        set_launch_error.set(None);
        launch_action.dispatch(role_id);
    });
    let launching = Signal::derive(move || launch_action.pending().get());

    view! {
        <div class="space-y-8">
            <div>
                <h1 class=Theme::TITLE>"My Resources"</h1>
                <p class=Theme::SUBTITLE>"Resources you are allowed to access based on policies."</p>
            </div>

            <section class="space-y-3">
                <h2 class=Theme::SECTION_TITLE>"AWS accounts & roles"</h2>
                {move || {
                    launch_error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                {move || match roles.get() {
                    None => view! { <p class=Theme::MUTED>"Loading AWS roles..."</p> }.into_any(),
                    Some(Ok(list)) if list.is_empty() => view! {
                        <p class=Theme::MUTED>"No AWS roles assigned to your identity."</p>
                    }
                    .into_any(),
                    Some(Ok(list)) => view! {
                        <div class=Theme::CARD_GRID>
                            {list
                                .into_iter()
                                .map(|role| view! { <AwsRoleCard role=role launching=launching on_launch=launch /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
                }}
            </section>

            <section class="space-y-3">
                <h2 class=Theme::SECTION_TITLE>"Resources"</h2>
                {move || match resources.get() {
                    None => view! { <p class=Theme::MUTED>"Loading..."</p> }.into_any(),
                    Some(Ok(list)) if list.is_empty() => view! {
                        <p class=Theme::MUTED>"No resources are available to you yet."</p>
                    }
                    .into_any(),
                    Some(Ok(list)) => view! {
                        <div class=Theme::CARD_GRID>
                            {list
                                .into_iter()
                                .map(|resource| view! {
                                    <div class=Theme::CARD>
                                        <h3 class="mb-1 font-semibold text-gray-100">{resource.name}</h3>
                                        <p class="text-gray-400">{resource.kind}</p>
                                        <p class="mt-2 text-xs text-gray-300">
                                            "Sensitivity: " <strong>{resource.sensitivity}</strong>
                                        </p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn AwsRoleCard(role: AwsRole, launching: Signal<bool>, on_launch: Callback<i64>) -> impl IntoView {
    let role_id = role.id;
    let caption = role.caption();
    let description = role.description().map(str::to_owned);

    view! {
        <div class=format!("{} flex flex-col gap-2", Theme::CARD)>
            <div>
                <h3 class="font-semibold text-gray-100">{role.name}</h3>
                <p class="text-xs uppercase tracking-wider text-gray-400">{caption}</p>
            </div>
            {description.map(|text| view! { <p class="text-gray-300">{text}</p> })}
            <div class="mt-auto">
                <Button disabled=launching on:click=move |_| on_launch.run(role_id)>
                    "Open AWS Console"
                </Button>
            </div>
        </div>
    }
}

fn open_in_new_tab(url: &str) -> Result<(), AppError> {
    let window =
        web_sys::window().ok_or_else(|| AppError::Config("Window is unavailable.".to_string()))?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .is_ok_and(|tab| tab.is_some());
    tab_opened(opened)
}
