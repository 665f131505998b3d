//! Login state machine for the unauthenticated console.
//!
//! `Credentials` → (`MfaEnroll` →) `MfaVerify` → authenticated. Each transition
//! consumes the current stage so the UI can only ever render one panel.

use super::{
    session::Session,
    types::{AuthResponse, AuthUser, MfaEnrollment},
};
use crate::app_lib::AppError;

/// Length of a TOTP code.
pub const OTP_LENGTH: usize = 6;

/// Which credentials form is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Identity waiting for its second factor. `temp_token` is only valid for the
/// MFA endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMfa {
    pub temp_token: String,
    pub user: AuthUser,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginStage {
    Credentials(AuthMode),
    MfaEnroll {
        pending: PendingMfa,
        enrollment: Option<MfaEnrollment>,
    },
    MfaVerify(PendingMfa),
}

/// Result of feeding a login or signup response into the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Session),
    Continue(LoginStage),
}

impl Default for LoginStage {
    fn default() -> Self {
        LoginStage::Credentials(AuthMode::Login)
    }
}

impl LoginStage {
    /// Interprets a login/signup response.
    pub fn advance(response: AuthResponse) -> Result<LoginOutcome, AppError> {
        if response.mfa_required {
            let (Some(temp_token), Some(user)) = (response.temp_token, response.user) else {
                return Err(AppError::InvalidResponse(
                    "MFA flow returned invalid data".to_string(),
                ));
            };
            let pending = PendingMfa { temp_token, user };
            let stage = if response.enrollment_required {
                LoginStage::MfaEnroll {
                    pending,
                    enrollment: None,
                }
            } else {
                LoginStage::MfaVerify(pending)
            };
            return Ok(LoginOutcome::Continue(stage));
        }

        final_session(response, "Login did not return a token").map(LoginOutcome::Authenticated)
    }

    /// Interprets the response of a successful MFA verification. The API omits
    /// `mfa_enabled`, so a verified user is marked here.
    pub fn complete(response: AuthResponse) -> Result<Session, AppError> {
        let mut session = final_session(response, "MFA verification failed.")?;
        session.user.mfa_enabled = true;
        Ok(session)
    }

    /// Attaches enrollment material to an enrollment stage.
    #[must_use]
    pub fn with_enrollment(self, data: MfaEnrollment) -> Self {
        match self {
            LoginStage::MfaEnroll { pending, .. } => LoginStage::MfaEnroll {
                pending,
                enrollment: Some(data),
            },
            other => other,
        }
    }

    /// The user added the secret to an authenticator; ask for the first code.
    #[must_use]
    pub fn confirm_enrollment(self) -> Self {
        match self {
            LoginStage::MfaEnroll { pending, .. } => LoginStage::MfaVerify(pending),
            other => other,
        }
    }

    /// Abandons any pending MFA step.
    #[must_use]
    pub fn cancel(self) -> Self {
        LoginStage::Credentials(AuthMode::Login)
    }

    pub fn pending(&self) -> Option<&PendingMfa> {
        match self {
            LoginStage::Credentials(_) => None,
            LoginStage::MfaEnroll { pending, .. } | LoginStage::MfaVerify(pending) => Some(pending),
        }
    }

    pub fn temp_token(&self) -> Option<&str> {
        self.pending().map(|pending| pending.temp_token.as_str())
    }
}

fn final_session(response: AuthResponse, missing: &str) -> Result<Session, AppError> {
    match (response.token, response.user) {
        (Some(token), Some(user)) if !token.trim().is_empty() => Ok(Session { token, user }),
        _ => Err(AppError::InvalidResponse(missing.to_string())),
    }
}

/// Error line the gate shows after a login or signup response. Any outcome
/// that moves the flow forward clears the previous failure.
pub fn gate_error(outcome: &Result<LoginOutcome, AppError>) -> Option<String> {
    outcome.as_ref().err().map(ToString::to_string)
}

/// Keeps digits only, at most `OTP_LENGTH` of them.
pub fn sanitize_otp(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

/// A code can be submitted once it has exactly `OTP_LENGTH` digits.
pub fn can_submit_otp(code: &str, submitting: bool) -> bool {
    !submitting && code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

/// Message shown when the API rejects a code. Transport failures keep their
/// own text.
pub fn verify_error(err: AppError) -> AppError {
    if err.status().is_some() {
        AppError::Rejected("Invalid or expired code. Try again.".to_string())
    } else {
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            id: 7,
            email: "grace@zt.io".to_string(),
            full_name: "Grace Hopper".to_string(),
            role: "user".to_string(),
            mfa_enabled: false,
        }
    }

    fn mfa_response(enrollment_required: bool) -> AuthResponse {
        AuthResponse {
            mfa_required: true,
            enrollment_required,
            temp_token: Some("temp".to_string()),
            user: Some(user()),
            ..AuthResponse::default()
        }
    }

    fn pending() -> PendingMfa {
        PendingMfa {
            temp_token: "temp".to_string(),
            user: user(),
        }
    }

    #[test]
    fn token_and_user_authenticate_directly() {
        let response = AuthResponse {
            token: Some("jwt".to_string()),
            user: Some(user()),
            ..AuthResponse::default()
        };

        let outcome = LoginStage::advance(response).expect("outcome");
        assert_eq!(
            outcome,
            LoginOutcome::Authenticated(Session {
                token: "jwt".to_string(),
                user: user(),
            })
        );
    }

    #[test]
    fn missing_token_is_rejected() {
        let response = AuthResponse {
            user: Some(user()),
            ..AuthResponse::default()
        };
        let err = LoginStage::advance(response).expect_err("no token");
        assert_eq!(err.to_string(), "Login did not return a token");

        let blank = AuthResponse {
            token: Some("  ".to_string()),
            user: Some(user()),
            ..AuthResponse::default()
        };
        assert!(LoginStage::advance(blank).is_err());
    }

    #[test]
    fn mfa_required_goes_to_verification() {
        let outcome = LoginStage::advance(mfa_response(false)).expect("outcome");
        assert_eq!(outcome, LoginOutcome::Continue(LoginStage::MfaVerify(pending())));
    }

    #[test]
    fn enrollment_required_goes_to_enrollment_first() {
        let outcome = LoginStage::advance(mfa_response(true)).expect("outcome");
        assert_eq!(
            outcome,
            LoginOutcome::Continue(LoginStage::MfaEnroll {
                pending: pending(),
                enrollment: None,
            })
        );
    }

    #[test]
    fn mfa_without_temp_token_is_invalid() {
        let mut response = mfa_response(false);
        response.temp_token = None;
        let err = LoginStage::advance(response).expect_err("invalid");
        assert_eq!(err.to_string(), "MFA flow returned invalid data");

        let mut response = mfa_response(true);
        response.user = None;
        assert!(LoginStage::advance(response).is_err());
    }

    #[test]
    fn enrollment_then_confirmation_keeps_temp_token() {
        let stage = LoginStage::MfaEnroll {
            pending: pending(),
            enrollment: None,
        };
        let enrollment = MfaEnrollment {
            otpauth_url: "otpauth://totp/zt:grace".to_string(),
            secret: "JBSWY3DPEHPK3PXP".to_string(),
        };

        let stage = stage.with_enrollment(enrollment.clone());
        assert!(matches!(
            &stage,
            LoginStage::MfaEnroll { enrollment: Some(data), .. } if *data == enrollment
        ));

        let stage = stage.confirm_enrollment();
        assert_eq!(stage, LoginStage::MfaVerify(pending()));
        assert_eq!(stage.temp_token(), Some("temp"));
    }

    #[test]
    fn enrollment_transitions_ignore_other_stages() {
        let stage = LoginStage::Credentials(AuthMode::Signup);
        let enrollment = MfaEnrollment {
            otpauth_url: "otpauth://x".to_string(),
            secret: "S".to_string(),
        };
        assert_eq!(
            stage.clone().with_enrollment(enrollment),
            LoginStage::Credentials(AuthMode::Signup)
        );
        assert_eq!(stage.confirm_enrollment(), LoginStage::Credentials(AuthMode::Signup));
    }

    #[test]
    fn cancel_returns_to_login_form() {
        let stage = LoginStage::MfaVerify(pending()).cancel();
        assert_eq!(stage, LoginStage::Credentials(AuthMode::Login));
        assert_eq!(stage.temp_token(), None);
    }

    #[test]
    fn verification_requires_final_token() {
        let err = LoginStage::complete(AuthResponse::default()).expect_err("empty");
        assert_eq!(err.to_string(), "MFA verification failed.");

        let session = LoginStage::complete(AuthResponse {
            token: Some("full".to_string()),
            user: Some(user()),
            ..AuthResponse::default()
        })
        .expect("session");
        assert_eq!(session.token, "full");
    }

    #[test]
    fn verified_user_is_marked_mfa_enabled() {
        let json = r#"{"token": "full", "user": {"id": 7, "email": "grace@zt.io", "full_name": "Grace Hopper", "role": "user"}}"#;
        let response: AuthResponse = serde_json::from_str(json).expect("decode");
        assert!(!response.user.as_ref().expect("user").mfa_enabled);

        let session = LoginStage::complete(response).expect("session");
        assert!(session.user.mfa_enabled);
        assert_eq!(session.user.email, "grace@zt.io");
    }

    #[test]
    fn progress_clears_the_gate_error() {
        let failed = LoginStage::advance(AuthResponse::default());
        assert_eq!(gate_error(&failed).as_deref(), Some("Login did not return a token"));

        let next = LoginStage::advance(mfa_response(false));
        assert_eq!(gate_error(&next), None);

        let signed_in = LoginStage::advance(AuthResponse {
            token: Some("jwt".to_string()),
            user: Some(user()),
            ..AuthResponse::default()
        });
        assert_eq!(gate_error(&signed_in), None);
    }

    #[test]
    fn otp_input_is_digits_only_and_capped() {
        assert_eq!(sanitize_otp("12a3 45-678"), "123456");
        assert_eq!(sanitize_otp("abc"), "");
        assert!(can_submit_otp("123456", false));
        assert!(!can_submit_otp("123456", true));
        assert!(!can_submit_otp("12345", false));
    }

    #[test]
    fn rejected_codes_get_a_friendly_message() {
        let err = verify_error(AppError::Http {
            status: 401,
            message: "invalid code".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid or expired code. Try again.");

        let err = verify_error(AppError::Timeout("slow".to_string()));
        assert_eq!(err, AppError::Timeout("slow".to_string()));
    }
}
