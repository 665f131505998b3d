//! Shared frontend utilities for API access, configuration, errors, storage, and
//! build metadata.
//!
//! ## Core Authentication Flow
//!
//! 1. **Credentials:** The console POSTs `{email, password}` to `/auth/login`
//!    (or `{full_name, email, password}` to `/auth/signup`).
//! 2. **MFA:** When the response carries `mfa_required`, the returned
//!    `temp_token` is used as a bearer token for `/auth/mfa/enroll` (first-time
//!    setup) and `/auth/mfa/verify` (6-digit TOTP code).
//! 3. **Session:** The final `{token, user}` pair is cached in local storage
//!    (`zt_token`, `zt_user`) and attached as `Authorization: Bearer` to every
//!    protected call.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must never log tokens,
//! passwords or one-time codes.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod endpoint;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod logging;
pub(crate) mod storage;
pub(crate) mod theme;
pub(crate) mod time;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) const VERSION: &str = built_info::PKG_VERSION;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json, patch_json, post_json, post_json_without_body};
pub(crate) use errors::AppError;
