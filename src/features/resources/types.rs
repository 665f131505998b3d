use serde::{Deserialize, Serialize};

/// A resource the current identity may access under the active policies.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sensitivity: String,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::Resource;

    #[test]
    fn type_field_maps_to_kind() {
        let resource: Resource = serde_json::from_str(
            r#"{"id":2,"name":"payroll-db","type":"database","sensitivity":"high","created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .expect("decode");

        assert_eq!(resource.kind, "database");
        assert_eq!(resource.sensitivity, "high");
    }
}
