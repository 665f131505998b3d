//! Unauthenticated entry point. The gate card renders exactly one panel for the
//! current `LoginStage` plus an inline error line. Temp tokens live only in
//! the stage signal and are never persisted.

mod login_form;
mod mfa_enroll;
mod mfa_verify;
mod signup_form;

pub(crate) use mfa_enroll::MfaEnrollPanel;
pub(crate) use mfa_verify::MfaVerifyPanel;

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner},
    features::auth::{
        client,
        flow::{AuthMode, LoginOutcome, LoginStage, gate_error, verify_error},
        state::use_auth,
        types::AuthResponse,
    },
};
use leptos::prelude::*;
use login_form::LoginForm;
use signup_form::SignupForm;

/// Login, signup and second-factor card shown while no session exists.
#[component]
pub fn AuthGate() -> impl IntoView {
    let auth = use_auth();
    let stage = RwSignal::new(LoginStage::default());
    let error = RwSignal::new(None::<String>);

    let on_attempt = Callback::new(move |()| error.set(None));
    let on_response = Callback::new(move |result: Result<AuthResponse, AppError>| {
        let outcome = result.and_then(LoginStage::advance);
        error.set(gate_error(&outcome));
        match outcome {
            Ok(LoginOutcome::Authenticated(session)) => auth.set_session(session),
            Ok(LoginOutcome::Continue(next)) => {
                tracing::info!("second factor required");
                stage.set(next);
            }
            Err(_) => {}
        }
    });

    let enroll_action = Action::new_local(move |temp_token: &String| {
        let temp_token = temp_token.clone();
        async move { client::mfa_enroll(&temp_token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = enroll_action.value().get() {
            match result {
                Ok(enrollment) => transition(stage, |current| current.with_enrollment(enrollment)),
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    let verify_action = Action::new_local(move |(code, temp_token): &(String, String)| {
        let code = code.clone();
        let temp_token = temp_token.clone();
        async move {
            let response = client::mfa_verify(&code, &temp_token)
                .await
                .map_err(verify_error)?;
            LoginStage::complete(response)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    stage.set(LoginStage::default());
                    auth.set_session(session);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    let temp_token = move || stage.with_untracked(|current| current.temp_token().map(str::to_owned));
    let start_enrollment = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        if let Some(token) = temp_token() {
            enroll_action.dispatch(token);
        }
    };
    let on_continue = Callback::new(move |()| transition(stage, LoginStage::confirm_enrollment));
    let on_verify = Callback::new(move |code: String| {
        error.set(None);
        if let Some(token) = temp_token() {
            verify_action.dispatch((code, token));
        }
    });
    let on_back = Callback::new(move |()| {
        error.set(None);
        transition(stage, LoginStage::cancel);
    });
    let switch_mode = move |mode: AuthMode| {
        error.set(None);
        stage.set(LoginStage::Credentials(mode));
    };

    let panel = move || match stage.get() {
        LoginStage::Credentials(mode) => view! {
            <ModeTabs mode=mode on_select=Callback::new(switch_mode) />
            {match mode {
                AuthMode::Login => view! { <LoginForm on_attempt=on_attempt on_response=on_response /> }.into_any(),
                AuthMode::Signup => view! { <SignupForm on_attempt=on_attempt on_response=on_response /> }.into_any(),
            }}
        }
        .into_any(),
        LoginStage::MfaEnroll { enrollment: None, .. } => view! {
            <div class="space-y-4">
                <p class="text-sm text-gray-300">
                    "Your account requires multi-factor authentication. Enroll an authenticator app to continue."
                </p>
                <Button full_width=true disabled=enroll_action.pending() on:click=start_enrollment>
                    "Start MFA enrollment"
                </Button>
                <Show when=move || enroll_action.pending().get()>
                    <div class="flex justify-center"><Spinner /></div>
                </Show>
            </div>
        }
        .into_any(),
        LoginStage::MfaEnroll { enrollment: Some(enrollment), .. } => view! {
            <MfaEnrollPanel enrollment=enrollment on_continue=on_continue />
        }
        .into_any(),
        LoginStage::MfaVerify(_) => view! {
            <MfaVerifyPanel
                submitting=verify_action.pending()
                on_submit=on_verify
                on_back=on_back
            />
        }
        .into_any(),
    };

    view! {
        <div class="flex min-h-screen items-center justify-center bg-slate-900 px-4 text-gray-100">
            <div class="w-full max-w-md rounded-2xl border border-slate-800 bg-slate-950 p-8 shadow-2xl shadow-sky-900/20">
                <div class="mb-6 space-y-1">
                    <h1 class="bg-gradient-to-r from-green-500 to-sky-400 bg-clip-text text-2xl font-bold text-transparent">
                        "Zero Trust Console"
                    </h1>
                    <p class="text-sm text-gray-400">"Sign in to your console"</p>
                </div>
                {panel}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

/// Login / Sign up toggle above the credentials form.
#[component]
fn ModeTabs(mode: AuthMode, on_select: Callback<AuthMode>) -> impl IntoView {
    let tab = move |target: AuthMode, label: &'static str| {
        let selected = mode == target;
        view! {
            <button
                type="button"
                class="flex-1 rounded-lg px-3 py-1.5 text-sm font-medium transition-colors"
                class:bg-slate-800=selected
                class:text-sky-300=selected
                class:text-gray-400=!selected
                on:click=move |_| on_select.run(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="mb-5 flex gap-2 rounded-xl border border-slate-800 p-1">
            {tab(AuthMode::Login, "Login")}
            {tab(AuthMode::Signup, "Sign up")}
        </div>
    }
}

fn transition(stage: RwSignal<LoginStage>, step: impl FnOnce(LoginStage) -> LoginStage) {
    stage.update(|current| *current = step(std::mem::take(current)));
}
