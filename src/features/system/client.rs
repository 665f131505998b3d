use crate::{
    app_lib::{AppError, get_json},
    features::system::types::Health,
};

/// Unauthenticated health check.
pub async fn fetch_health() -> Result<Health, AppError> {
    get_json("/health", None).await
}
