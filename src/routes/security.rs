//! Account security settings. Enabling MFA reuses the session token as the
//! bearer for enrollment and verification, then swaps in the verified token.

use super::auth::{MfaEnrollPanel, MfaVerifyPanel};
use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, Button, Spinner},
    features::auth::{
        client,
        flow::{LoginStage, verify_error},
        state::use_auth,
        types::MfaEnrollment,
    },
};
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
enum MfaSetup {
    #[default]
    Idle,
    Enrolling(MfaEnrollment),
    Verifying,
}

#[component]
pub fn SecurityPage() -> impl IntoView {
    let auth = use_auth();
    let setup = RwSignal::new(MfaSetup::default());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let mfa_enabled = move || {
        auth.session
            .with(|session| session.as_ref().is_some_and(|s| s.user.mfa_enabled))
    };

    let enroll_action = Action::new_local(move |_: &()| async move {
        client::mfa_enroll(&auth.require_token()?).await
    });

    Effect::new(move |_| {
        if let Some(result) = enroll_action.value().get() {
            match result {
                Ok(enrollment) => setup.set(MfaSetup::Enrolling(enrollment)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        async move {
            let response = client::mfa_verify(&code, &auth.require_token()?)
                .await
                .map_err(verify_error)?;
            LoginStage::complete(response)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(session) => {
                    setup.set(MfaSetup::Idle);
                    auth.set_session(session);
                    set_notice.set(Some("Multi-factor authentication is now enabled.".to_string()));
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let start = move |_: leptos::ev::MouseEvent| {
        set_error.set(None);
        set_notice.set(None);
        enroll_action.dispatch(());
    };
    let on_continue = Callback::new(move |()| setup.set(MfaSetup::Verifying));
    let on_verify = Callback::new(move |code: String| {
        set_error.set(None);
        verify_action.dispatch(code);
    });
    let on_back = Callback::new(move |()| {
        set_error.set(None);
        setup.set(MfaSetup::Idle);
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class=Theme::TITLE>"Security"</h1>
                <p class=Theme::SUBTITLE>"Manage how you sign in to the console."</p>
            </div>
            <section class=format!("{} max-w-md space-y-4", Theme::CARD)>
                <div>
                    <h2 class=Theme::SECTION_TITLE>"Multi-factor authentication"</h2>
                    <p class=Theme::MUTED>
                        "Protect your account with a one-time code from an authenticator app."
                    </p>
                </div>
                {move || match setup.get() {
                    MfaSetup::Idle => view! {
                        <div class="flex items-center justify-between gap-4">
                            <span class="text-sm" class:text-green-500=mfa_enabled class:text-gray-400=move || !mfa_enabled()>
                                {move || if mfa_enabled() { "Enabled" } else { "Not enabled" }}
                            </span>
                            <Button disabled=enroll_action.pending() on:click=start>
                                {move || if mfa_enabled() { "Re-enroll MFA" } else { "Enable MFA" }}
                            </Button>
                        </div>
                        <Show when=move || enroll_action.pending().get()>
                            <Spinner />
                        </Show>
                    }
                    .into_any(),
                    MfaSetup::Enrolling(enrollment) => view! {
                        <MfaEnrollPanel enrollment=enrollment on_continue=on_continue />
                    }
                    .into_any(),
                    MfaSetup::Verifying => view! {
                        <MfaVerifyPanel
                            submitting=verify_action.pending()
                            on_submit=on_verify
                            on_back=on_back
                        />
                    }
                    .into_any(),
                }}
                {move || notice.get().map(|message| view! { <Alert kind=AlertKind::Success message=message /> })}
                {move || error.get().map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })}
            </section>
        </div>
    }
}
