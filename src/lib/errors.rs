use thiserror::Error;

/// Errors surfaced inline next to the form or section that triggered them.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
    /// The server answered 2xx but omitted fields the flow depends on.
    #[error("{0}")]
    InvalidResponse(String),
    /// A user-facing rejection whose text is shown as-is.
    #[error("{0}")]
    Rejected(String),
}

impl AppError {
    /// Returns the HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_errors_render_status_and_message() {
        let err = AppError::Http {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (403): forbidden");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn flow_errors_render_verbatim() {
        let err = AppError::InvalidResponse("Login did not return a token".to_string());
        assert_eq!(err.to_string(), "Login did not return a token");
        assert_eq!(err.status(), None);
    }
}
