use crate::{
    app_lib::{AppError, get_json},
    features::{list_or_empty, resources::types::Resource},
};

/// Resources the bearer identity is allowed to see.
pub async fn list_resources(token: &str) -> Result<Vec<Resource>, AppError> {
    get_json::<Option<Vec<Resource>>>("/resources", Some(token))
        .await
        .map(list_or_empty)
}
