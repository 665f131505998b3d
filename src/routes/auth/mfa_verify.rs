use crate::{
    app_lib::theme::Theme,
    components::Button,
    features::auth::flow::{OTP_LENGTH, can_submit_otp, sanitize_otp},
};
use leptos::{ev::SubmitEvent, prelude::*};

/// Six-digit code entry. The code never leaves this panel except through
/// `on_submit`.
#[component]
pub fn MfaVerifyPanel(
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<String>,
    on_back: Callback<()>,
) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let ready = Signal::derive(move || code.with(|code| can_submit_otp(code, submitting.get())));

    let submit = move |event: SubmitEvent| {
        event.prevent_default();
        if ready.get_untracked() {
            on_submit.run(code.get_untracked());
        }
    };

    view! {
        <section class="space-y-4">
            <div>
                <h2 class="text-base font-semibold text-gray-100">"Multi-factor authentication"</h2>
                <p class="mt-1 text-sm text-gray-400">
                    "Enter the 6-digit code from your authenticator app."
                </p>
            </div>
            <form class="space-y-4" on:submit=submit>
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength=OTP_LENGTH.to_string()
                    placeholder="123456"
                    class=format!("{} text-center font-mono text-lg tracking-[0.4em]", Theme::INPUT)
                    prop:value=move || code.get()
                    on:input=move |event| code.set(sanitize_otp(&event_target_value(&event)))
                />
                <div class="flex gap-3">
                    <Button button_type="submit" full_width=true disabled=Signal::derive(move || !ready.get())>
                        {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                    </Button>
                    <button
                        type="button"
                        class="rounded-xl border border-slate-700 px-4 py-2 text-sm text-gray-300 hover:bg-slate-800"
                        on:click=move |_| on_back.run(())
                    >
                        "Back"
                    </button>
                </div>
            </form>
        </section>
    }
}
