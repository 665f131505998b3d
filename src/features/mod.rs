//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while keeping API handling in dedicated
//! feature areas. Each feature splits target-independent `types` from the
//! browser-only `client`.

pub(crate) mod activity;
pub(crate) mod auth;
pub(crate) mod aws;
pub(crate) mod policies;
pub(crate) mod resources;
pub(crate) mod system;
pub(crate) mod users;

/// Go encodes empty slices as `null`; treat that as an empty list.
#[cfg(target_arch = "wasm32")]
pub(crate) fn list_or_empty<T>(list: Option<Vec<T>>) -> Vec<T> {
    list.unwrap_or_default()
}
