//! Audit trail rows (`/me/activity`) and decision statistics
//! (`/admin/audit/stats`).

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
