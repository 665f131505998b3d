//! Auth feature module covering password login, signup, TOTP enrollment and
//! verification, and the cached bearer session. It keeps authentication logic
//! out of the UI. This module touches security boundaries and must avoid
//! logging secrets or token material.
//!
//! Flow Overview: login/signup return either a final `{token, user}` or an MFA
//! demand with a `temp_token`. The temp token is used as the bearer for
//! enrollment and verification, and verification returns the final session.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::AdminOnly;
