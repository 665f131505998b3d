use serde::{Deserialize, Serialize};

/// Directory row returned by `GET /users`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub created_at: String,
}

/// Roles an administrator can assign from the console.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    User,
    Admin,
}

impl AppRole {
    pub const ALL: [AppRole; 2] = [AppRole::User, AppRole::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            AppRole::User => "user",
            AppRole::Admin => "admin",
        }
    }

    /// Maps a `<select>` value; anything but `admin` demotes to `user`.
    pub fn from_select(value: &str) -> Self {
        if value.trim() == "admin" {
            AppRole::Admin
        } else {
            AppRole::User
        }
    }
}

#[derive(Clone, Serialize)]
pub struct RoleUpdateRequest {
    pub role: AppRole,
}

/// Copies the role from the server's updated record into the matching row.
/// Returns whether a row changed.
pub fn apply_role_update(rows: &mut [User], updated: &User) -> bool {
    match rows.iter_mut().find(|row| row.id == updated.id) {
        Some(row) => {
            row.role.clone_from(&updated.role);
            true
        }
        None => false,
    }
}

/// Role the table should show for a row. This is the last value the server
/// confirmed, so a rejected change snaps back to it.
pub fn current_role(rows: &[User], user_id: i64) -> Option<AppRole> {
    rows.iter()
        .find(|row| row.id == user_id)
        .map(|row| AppRole::from_select(&row.role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: &str) -> User {
        User {
            id,
            email: format!("user{id}@zt.io"),
            full_name: format!("User {id}"),
            role: role.to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn select_values_map_to_roles() {
        assert_eq!(AppRole::from_select("admin"), AppRole::Admin);
        assert_eq!(AppRole::from_select("user"), AppRole::User);
        assert_eq!(AppRole::from_select("auditor"), AppRole::User);
        assert_eq!(AppRole::Admin.as_str(), "admin");
    }

    #[test]
    fn role_update_serializes_lowercase() {
        let body = serde_json::to_string(&RoleUpdateRequest {
            role: AppRole::Admin,
        })
        .expect("encode");
        assert_eq!(body, r#"{"role":"admin"}"#);
    }

    #[test]
    fn apply_role_update_only_touches_matching_row() {
        let mut rows = vec![user(1, "user"), user(2, "user")];
        let mut updated = user(2, "admin");
        updated.full_name = "ignored".to_string();

        assert!(apply_role_update(&mut rows, &updated));
        assert_eq!(rows[0].role, "user");
        assert_eq!(rows[1].role, "admin");
        assert_eq!(rows[1].full_name, "User 2");

        assert!(!apply_role_update(&mut rows, &user(9, "admin")));
    }

    #[test]
    fn rejected_update_keeps_the_confirmed_role() {
        let rows = vec![user(1, "user"), user(2, "admin")];

        // The PATCH failed, so nothing was applied to the rows.
        assert_eq!(current_role(&rows, 1), Some(AppRole::User));
        assert_eq!(current_role(&rows, 2), Some(AppRole::Admin));
        assert_eq!(current_role(&rows, 9), None);
    }

    #[test]
    fn confirmed_update_changes_the_shown_role() {
        let mut rows = vec![user(1, "user")];
        apply_role_update(&mut rows, &user(1, "admin"));
        assert_eq!(current_role(&rows, 1), Some(AppRole::Admin));
    }
}
