use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub env: String,
    pub time: String,
}

impl Health {
    /// Pretty JSON for the status panels.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.status.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_pretty_json() {
        let health: Health =
            serde_json::from_str(r#"{"status":"ok","env":"dev","time":"2024-05-01T10:00:00Z"}"#)
                .expect("Failed to deserialize");

        let pretty = health.to_pretty_json();
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"status\": \"ok\""));
        assert!(pretty.contains("\"env\": \"dev\""));
    }
}
