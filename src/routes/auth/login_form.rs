use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Button, Spinner},
    features::auth::{client, types::{AuthResponse, LoginRequest}},
};
use leptos::{ev::SubmitEvent, prelude::*};

/// Email and password form. Responses are handed to the gate unchanged.
#[component]
pub fn LoginForm(
    on_attempt: Callback<()>,
    on_response: Callback<Result<AuthResponse, AppError>>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            on_response.run(result);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        on_attempt.run(());

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            on_response.run(Err(AppError::Rejected(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label class=Theme::LABEL for="login-email">"Work email"</label>
                <input
                    id="login-email"
                    type="email"
                    class=Theme::INPUT
                    autocomplete="email"
                    placeholder="you@company.com"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    class=Theme::INPUT
                    autocomplete="current-password"
                    placeholder="••••••••"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" full_width=true disabled=login_action.pending()>
                "Continue"
            </Button>
            <Show when=move || login_action.pending().get()>
                <div class="flex justify-center"><Spinner /></div>
            </Show>
            <p class="text-center text-xs text-gray-500">
                "By continuing, you agree to access policies for this environment."
            </p>
        </form>
    }
}
