use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Button, Spinner},
    features::auth::{client, types::{AuthResponse, SignupRequest}},
};
use leptos::{ev::SubmitEvent, prelude::*};

/// Account creation form. New accounts go through the same MFA stages as a
/// login, so the response is handed to the gate.
#[component]
pub fn SignupForm(
    on_attempt: Callback<()>,
    on_response: Callback<Result<AuthResponse, AppError>>,
) -> impl IntoView {
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let signup_action = Action::new_local(move |request: &SignupRequest| {
        let request = request.clone();
        async move { client::signup(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            on_response.run(result);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        on_attempt.run(());

        let request = SignupRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if request.full_name.is_empty() || request.email.is_empty() || request.password.is_empty()
        {
            on_response.run(Err(AppError::Rejected(
                "Full name, email and password are required.".to_string(),
            )));
            return;
        }

        signup_action.dispatch(request);
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label class=Theme::LABEL for="signup-name">"Full name"</label>
                <input
                    id="signup-name"
                    type="text"
                    class=Theme::INPUT
                    autocomplete="name"
                    required
                    on:input=move |event| set_full_name.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    type="email"
                    class=Theme::INPUT
                    autocomplete="email"
                    placeholder="you@company.com"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    type="password"
                    class=Theme::INPUT
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" full_width=true disabled=signup_action.pending()>
                "Create account"
            </Button>
            <Show when=move || signup_action.pending().get()>
                <div class="flex justify-center"><Spinner /></div>
            </Show>
        </form>
    }
}
