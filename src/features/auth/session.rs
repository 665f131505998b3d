//! Session cache in local storage: the bearer token and the serialized user
//! live under two keys and are only trusted together.

use super::types::AuthUser;
use crate::app_lib::{AppError, storage::KeyValueStore};

pub const TOKEN_KEY: &str = "zt_token";
pub const USER_KEY: &str = "zt_user";

/// Authenticated identity held by the console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

/// Writes both keys. The user is stored as JSON.
pub fn persist(store: &impl KeyValueStore, session: &Session) -> Result<(), AppError> {
    let user = serde_json::to_string(&session.user)
        .map_err(|err| AppError::Serialization(format!("Failed to encode user: {err}")))?;
    store.set(TOKEN_KEY, &session.token)?;
    store.set(USER_KEY, &user)
}

/// Restores a cached session. Partial or undecodable records are cleared.
pub fn restore(store: &impl KeyValueStore) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty());
    let user = store.get(USER_KEY);

    let (Some(token), Some(user)) = (token, user) else {
        clear(store);
        return None;
    };

    match serde_json::from_str::<AuthUser>(&user) {
        Ok(user) => Some(Session { token, user }),
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable cached user");
            clear(store);
            None
        }
    }
}

/// Removes both keys.
pub fn clear(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::storage::MemoryStore;

    fn session() -> Session {
        Session {
            token: "jwt".to_string(),
            user: AuthUser {
                id: 3,
                email: "linus@zt.io".to_string(),
                full_name: "Linus".to_string(),
                role: "admin".to_string(),
                mfa_enabled: true,
            },
        }
    }

    #[test]
    fn persisted_session_is_restored() {
        let store = MemoryStore::default();
        persist(&store, &session()).expect("persist");

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt"));
        let restored = restore(&store).expect("restored");
        assert_eq!(restored, session());
        assert!(restored.is_admin());
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemoryStore::default();
        persist(&store, &session()).expect("persist");

        clear(&store);

        assert!(!store.contains(TOKEN_KEY));
        assert!(!store.contains(USER_KEY));
        assert_eq!(restore(&store), None);
    }

    #[test]
    fn token_without_user_is_discarded() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "orphan").expect("set");

        assert_eq!(restore(&store), None);
        assert!(!store.contains(TOKEN_KEY));
    }

    #[test]
    fn corrupt_user_is_discarded() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "jwt").expect("set");
        store.set(USER_KEY, "{not json").expect("set");

        assert_eq!(restore(&store), None);
        assert!(!store.contains(TOKEN_KEY));
        assert!(!store.contains(USER_KEY));
    }
}
