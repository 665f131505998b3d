// Native builds only compile the pure modules so `cargo test` can run them.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::{app::App, app_lib::config::AppConfig};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = AppConfig::load();
    app_lib::logging::init(&config);
    tracing::info!(
        version = app_lib::VERSION,
        commit = app_lib::GIT_COMMIT_HASH,
        api = %config.api_base_url,
        "console starting"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
