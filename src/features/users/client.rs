//! Client helpers for user-directory endpoints. These functions keep endpoint
//! paths centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{AppError, get_json, patch_json},
    features::{
        list_or_empty,
        users::types::{AppRole, RoleUpdateRequest, User},
    },
};

/// Fetches the user list from the API.
pub async fn list_users(token: &str) -> Result<Vec<User>, AppError> {
    get_json::<Option<Vec<User>>>("/users", Some(token))
        .await
        .map(list_or_empty)
}

/// Changes a user's role; admin-only on the server.
pub async fn update_role(token: &str, user_id: i64, role: AppRole) -> Result<User, AppError> {
    patch_json(
        &format!("/users/{user_id}/role"),
        &RoleUpdateRequest { role },
        Some(token),
    )
    .await
}
