use crate::{
    app_lib::{AppError, get_json, post_json_without_body},
    features::{
        aws::types::{AwsRole, AwsSession},
        list_or_empty,
    },
};

/// AWS roles assigned to the bearer identity.
pub async fn list_my_roles(token: &str) -> Result<Vec<AwsRole>, AppError> {
    get_json::<Option<Vec<AwsRole>>>("/me/aws/roles", Some(token))
        .await
        .map(list_or_empty)
}

/// Asks the API to broker a console session for one role and returns the
/// sign-in URL.
pub async fn create_session(token: &str, role_id: i64) -> Result<String, AppError> {
    let session: AwsSession =
        post_json_without_body(&format!("/me/aws/roles/{role_id}/session"), Some(token)).await?;
    session.launch_url()
}
