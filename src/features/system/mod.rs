//! Backend health check shown on the overview and system pages.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
