//! Read-only view of which AWS roles each application role may assume.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod matrix;
