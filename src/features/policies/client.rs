use crate::{
    app_lib::{AppError, get_json},
    features::policies::matrix::{AwsRolePolicies, PolicyMatrix},
};

/// Loads the app-role → AWS-role mapping; admin-only on the server.
pub async fn fetch_policy_matrix(token: &str) -> Result<PolicyMatrix, AppError> {
    get_json::<AwsRolePolicies>("/admin/policies/aws-roles", Some(token))
        .await
        .map(PolicyMatrix::from_policies)
}
