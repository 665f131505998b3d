use crate::{
    app_lib::{AppError, get_json},
    features::{
        activity::types::{ActivityEntry, DecisionCount},
        list_or_empty,
    },
};

/// Recent access decisions for the bearer identity.
pub async fn my_activity(token: &str) -> Result<Vec<ActivityEntry>, AppError> {
    get_json::<Option<Vec<ActivityEntry>>>("/me/activity", Some(token))
        .await
        .map(list_or_empty)
}

/// Decision totals across all users; admin-only on the server.
pub async fn audit_stats(token: &str) -> Result<Vec<DecisionCount>, AppError> {
    get_json::<Option<Vec<DecisionCount>>>("/admin/audit/stats", Some(token))
        .await
        .map(list_or_empty)
}
