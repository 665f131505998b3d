use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwsRole {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub arn: String,
    #[serde(default)]
    pub description: String,
    pub env: String,
    pub risk_level: String,
}

impl AwsRole {
    /// `env • risk` caption shown under the role name.
    pub fn caption(&self) -> String {
        format!("{} • {}", self.env, self.risk_level)
    }

    pub fn description(&self) -> Option<&str> {
        let description = self.description.trim();
        (!description.is_empty()).then_some(description)
    }
}

/// Federation sign-in URL for the AWS console.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AwsSession {
    #[serde(default)]
    pub url: Option<String>,
}

impl AwsSession {
    pub fn launch_url(self) -> Result<String, AppError> {
        self.url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::InvalidResponse("No URL returned from backend".to_string()))
    }
}

/// Outcome of asking the browser for a console tab. A popup blocker yields no
/// window handle rather than an error.
pub fn tab_opened(opened: bool) -> Result<(), AppError> {
    if opened {
        Ok(())
    } else {
        Err(AppError::Rejected(
            "The browser blocked the AWS console tab.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_without_url_is_an_error() {
        let err = AwsSession::default().launch_url().expect_err("missing");
        assert_eq!(err.to_string(), "No URL returned from backend");

        let blank = AwsSession {
            url: Some("  ".to_string()),
        };
        assert!(blank.launch_url().is_err());
    }

    #[test]
    fn session_url_is_returned_trimmed() {
        let session: AwsSession =
            serde_json::from_str(r#"{"url":" https://signin.aws.amazon.com/federation?x=1 "}"#)
                .expect("decode");
        assert_eq!(
            session.launch_url().expect("url"),
            "https://signin.aws.amazon.com/federation?x=1"
        );
    }

    #[test]
    fn role_caption_and_optional_description() {
        let role: AwsRole = serde_json::from_str(
            r#"{"id":1,"name":"Prod ReadOnly","env":"prod","risk_level":"high","description":""}"#,
        )
        .expect("decode");

        assert_eq!(role.caption(), "prod • high");
        assert_eq!(role.description(), None);
        assert!(role.arn.is_empty());
    }

    #[test]
    fn blocked_tab_is_reported() {
        let err = tab_opened(false).expect_err("blocked");
        assert_eq!(err.to_string(), "The browser blocked the AWS console tab.");
        assert!(tab_opened(true).is_ok());
    }
}
