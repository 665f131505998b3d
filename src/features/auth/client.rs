//! Client wrappers for the auth endpoints. These helpers centralize paths and
//! bearer handling so temp tokens never leak into route code.

use crate::{
    app_lib::{AppError, post_json, post_json_without_body},
    features::auth::types::{
        AuthResponse, LoginRequest, MfaEnrollment, MfaVerifyRequest, SignupRequest,
    },
};

/// Password login. The response may demand MFA instead of returning a token.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/login", request, None).await
}

/// Creates an account; the response has the same shape as login.
pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/signup", request, None).await
}

/// Starts TOTP enrollment for the bearer identity (temp or full token).
pub async fn mfa_enroll(token: &str) -> Result<MfaEnrollment, AppError> {
    post_json_without_body("/auth/mfa/enroll", Some(token)).await
}

/// Verifies a TOTP code and exchanges the bearer token for a full session.
/// Must never log the code.
pub async fn mfa_verify(code: &str, token: &str) -> Result<AuthResponse, AppError> {
    let request = MfaVerifyRequest {
        code: code.to_string(),
    };
    post_json("/auth/mfa/verify", &request, Some(token)).await
}
