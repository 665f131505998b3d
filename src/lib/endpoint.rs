//! Target-independent request helpers: URL joining, bearer headers, and error
//! body sanitizing. The fetch wrapper in `api` builds on these.

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Returns the `Authorization` header for a bearer token, if any.
pub fn bearer_headers(token: Option<&str>) -> Vec<(String, String)> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| vec![("Authorization".to_string(), format!("Bearer {token}"))])
        .unwrap_or_default()
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
/// Empty bodies fall back to the status text, then to a generic message.
pub fn sanitize_body(body: &str, status_text: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        let status_text = status_text.trim();
        if status_text.is_empty() {
            "Request failed.".to_string()
        } else {
            status_text.to_string()
        }
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_with_single_slash() {
        assert_eq!(
            build_url_with_base("http://localhost:8080/", "/resources"),
            "http://localhost:8080/resources"
        );
        assert_eq!(
            build_url_with_base(" http://localhost:8080 ", "users/7/role"),
            "http://localhost:8080/users/7/role"
        );
        assert_eq!(build_url_with_base("", "/health"), "/health");
    }

    #[test]
    fn bearer_headers_skip_missing_or_blank_tokens() {
        assert!(bearer_headers(None).is_empty());
        assert!(bearer_headers(Some("  ")).is_empty());
        assert_eq!(
            bearer_headers(Some("abc")),
            vec![("Authorization".to_string(), "Bearer abc".to_string())]
        );
    }

    #[test]
    fn sanitize_body_truncates_and_falls_back() {
        assert_eq!(sanitize_body("  forbidden\n", "Forbidden"), "forbidden");
        assert_eq!(sanitize_body("", "Unauthorized"), "Unauthorized");
        assert_eq!(sanitize_body(" ", ""), "Request failed.");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(&long, "").chars().count(), 200);
    }
}
