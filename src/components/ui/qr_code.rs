//! Inline SVG QR code for `otpauth://` enrollment URLs.

use leptos::prelude::*;
use qrcode::{QrCode as Code, render::svg};

/// Edge length of the rendered code in pixels.
const QR_SIZE: u32 = 190;

/// Renders `value` as an SVG QR code, or nothing if it cannot be encoded.
#[component]
pub fn QrCode(value: String) -> impl IntoView {
    match Code::new(value.as_bytes()) {
        Ok(code) => {
            let image = code
                .render::<svg::Color<'_>>()
                .min_dimensions(QR_SIZE, QR_SIZE)
                .dark_color(svg::Color("#020617"))
                .light_color(svg::Color("#ffffff"))
                .build();
            view! { <div class="rounded-lg bg-white p-3" inner_html=image></div> }.into_any()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode enrollment QR code");
            ().into_any()
        }
    }
}
