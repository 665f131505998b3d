use crate::features::aws::types::AwsRole;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Wire shape of `/admin/policies/aws-roles`. Lists may be `null`.
pub type AwsRolePolicies = BTreeMap<String, Option<Vec<AwsRole>>>;

/// App roles as columns, distinct AWS roles as rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyMatrix {
    pub app_roles: Vec<String>,
    pub aws_roles: Vec<AwsRole>,
    grants: BTreeMap<String, BTreeSet<i64>>,
}

impl PolicyMatrix {
    pub fn from_policies(policies: AwsRolePolicies) -> Self {
        let mut matrix = PolicyMatrix::default();
        let mut seen = HashSet::new();

        for (app_role, roles) in policies {
            let roles = roles.unwrap_or_default();
            let granted: BTreeSet<i64> = roles.iter().map(|role| role.id).collect();
            for role in roles {
                if seen.insert(role.id) {
                    matrix.aws_roles.push(role);
                }
            }
            matrix.grants.insert(app_role.clone(), granted);
            matrix.app_roles.push(app_role);
        }

        matrix
    }

    pub fn allows(&self, app_role: &str, aws_role_id: i64) -> bool {
        self.grants
            .get(app_role)
            .is_some_and(|granted| granted.contains(&aws_role_id))
    }

    pub fn is_empty(&self) -> bool {
        self.aws_roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: i64, name: &str) -> AwsRole {
        AwsRole {
            id,
            name: name.to_string(),
            arn: format!("arn:aws:iam::123456789012:role/{name}"),
            description: String::new(),
            env: "prod".to_string(),
            risk_level: "low".to_string(),
        }
    }

    #[test]
    fn roles_are_deduplicated_across_app_roles() {
        let mut policies = AwsRolePolicies::new();
        policies.insert(
            "admin".to_string(),
            Some(vec![role(1, "ReadOnly"), role(2, "Admin")]),
        );
        policies.insert("user".to_string(), Some(vec![role(1, "ReadOnly")]));

        let matrix = PolicyMatrix::from_policies(policies);

        assert_eq!(matrix.app_roles, vec!["admin", "user"]);
        let ids: Vec<i64> = matrix.aws_roles.iter().map(|role| role.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(matrix.allows("admin", 2));
        assert!(matrix.allows("user", 1));
        assert!(!matrix.allows("user", 2));
        assert!(!matrix.allows("auditor", 1));
    }

    #[test]
    fn null_lists_become_empty_columns() {
        let policies: AwsRolePolicies =
            serde_json::from_str(r#"{"user": null, "admin": [{"id": 5, "name": "Sandbox", "env": "dev", "risk_level": "low"}]}"#)
                .expect("decode");

        let matrix = PolicyMatrix::from_policies(policies);

        assert_eq!(matrix.app_roles, vec!["admin", "user"]);
        assert_eq!(matrix.aws_roles.len(), 1);
        assert!(!matrix.allows("user", 5));
        assert!(!matrix.is_empty());
    }

    #[test]
    fn empty_policies_produce_empty_matrix() {
        let matrix = PolicyMatrix::from_policies(AwsRolePolicies::new());
        assert!(matrix.is_empty());
        assert!(matrix.app_roles.is_empty());
    }
}
