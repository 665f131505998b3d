use crate::{
    components::{Button, QrCode},
    features::auth::types::MfaEnrollment,
};
use leptos::prelude::*;

/// QR code and manual key for adding the account to an authenticator app.
#[component]
pub fn MfaEnrollPanel(enrollment: MfaEnrollment, on_continue: Callback<()>) -> impl IntoView {
    let MfaEnrollment {
        otpauth_url,
        secret,
    } = enrollment;

    view! {
        <section class="space-y-4">
            <h2 class="text-base font-semibold text-gray-100">"Set up authenticator app"</h2>
            <ol class="list-inside list-decimal space-y-1 text-sm text-gray-400">
                <li>"Open Microsoft Authenticator (or Google/Authy)."</li>
                <li>"Choose “Add account” → “Other account”."</li>
                <li>"Scan this QR code."</li>
            </ol>
            <div class="flex justify-center">
                <QrCode value=otpauth_url />
            </div>
            <p class="break-all text-xs text-gray-400">
                "If you can’t scan, add the account manually using this key: "
                <code class="font-mono text-sky-300">{secret}</code>
            </p>
            <Button full_width=true on:click=move |_| on_continue.run(())>
                "I’ve added it, continue"
            </Button>
        </section>
    }
}
