//! Request and response types for auth-related API calls. These payloads carry
//! passwords, bearer tokens and one-time codes, so they must never be logged.

use serde::{Deserialize, Serialize};

/// Role name the API uses for administrators.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub mfa_enabled: bool,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Shared response of `/auth/login`, `/auth/signup` and `/auth/mfa/verify`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub mfa_required: bool,
    #[serde(default)]
    pub temp_token: Option<String>,
    #[serde(default)]
    pub enrollment_required: bool,
}

/// TOTP enrollment material returned by `/auth/mfa/enroll`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MfaEnrollment {
    pub otpauth_url: String,
    pub secret: String,
}

#[derive(Clone, Serialize)]
pub struct MfaVerifyRequest {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_with_mfa_fields_decodes() {
        let json = r#"{
            "mfa_required": true,
            "enrollment_required": true,
            "temp_token": "tmp",
            "user": {"id": 4, "email": "a@b.io", "full_name": "Ada", "role": "user"}
        }"#;

        let response: AuthResponse = serde_json::from_str(json).expect("decode");
        assert!(response.mfa_required);
        assert!(response.enrollment_required);
        assert_eq!(response.temp_token.as_deref(), Some("tmp"));
        assert_eq!(response.token, None);
        let user = response.user.expect("user");
        assert!(!user.mfa_enabled);
        assert!(!user.is_admin());
    }

    #[test]
    fn plain_login_response_defaults_mfa_flags() {
        let json = r#"{"token": "t", "user": {"id": 1, "email": "root@zt.io", "full_name": "Root", "role": "admin", "mfa_enabled": true}}"#;

        let response: AuthResponse = serde_json::from_str(json).expect("decode");
        assert!(!response.mfa_required);
        assert!(!response.enrollment_required);
        let user = response.user.expect("user");
        assert!(user.is_admin());
        assert!(user.mfa_enabled);
    }

    #[test]
    fn signup_request_uses_api_field_names() {
        let request = SignupRequest {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@zt.io".to_string(),
            password: "pw".to_string(),
        };
        let value = serde_json::to_value(&request).expect("encode");
        assert_eq!(value["full_name"], "Ada Lovelace");
        assert_eq!(value["email"], "ada@zt.io");
    }
}
