use serde::{Deserialize, Serialize};

/// One access decision recorded by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub role: String,
    pub resource_name: String,
    pub action: String,
    pub decision: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub ip: String,
    pub created_at: String,
    #[serde(default)]
    pub user_email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionCount {
    pub decision: String,
    pub count: i64,
}

/// Colour class of a decision cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionTone {
    Allowed,
    Denied,
    Neutral,
}

impl DecisionTone {
    pub fn of(decision: &str) -> Self {
        match decision.trim().to_ascii_lowercase().as_str() {
            "allow" => DecisionTone::Allowed,
            "deny" => DecisionTone::Denied,
            _ => DecisionTone::Neutral,
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            DecisionTone::Allowed => "text-green-500",
            DecisionTone::Denied => "text-orange-500",
            DecisionTone::Neutral => "text-gray-200",
        }
    }
}

/// Sum of all decision counts.
pub fn total(counts: &[DecisionCount]) -> i64 {
    counts.iter().map(|count| count.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_map_to_tones() {
        assert_eq!(DecisionTone::of("allow"), DecisionTone::Allowed);
        assert_eq!(DecisionTone::of(" DENY "), DecisionTone::Denied);
        assert_eq!(DecisionTone::of("mfa_challenge"), DecisionTone::Neutral);
        assert_eq!(DecisionTone::Denied.text_class(), "text-orange-500");
    }

    #[test]
    fn total_sums_counts() {
        let counts = vec![
            DecisionCount {
                decision: "allow".to_string(),
                count: 12,
            },
            DecisionCount {
                decision: "deny".to_string(),
                count: 3,
            },
        ];
        assert_eq!(total(&counts), 15);
        assert_eq!(total(&[]), 0);
    }

    #[test]
    fn activity_row_tolerates_missing_optional_fields() {
        let row: ActivityEntry = serde_json::from_str(
            r#"{"id":1,"user_id":null,"resource_name":"aws:Prod ReadOnly","action":"assume_role","decision":"allow","created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .expect("decode");

        assert_eq!(row.user_id, None);
        assert_eq!(row.user_email, None);
        assert!(row.ip.is_empty());
    }
}
