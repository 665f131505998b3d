//! AWS roles mapped to the current identity and console session hand-off.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
