//! Auth session state and context for the frontend. The provider restores the
//! cached session from local storage once on mount and exposes derived auth
//! signals for guards and routes.

use crate::{
    app_lib::{AppError, storage::BrowserStorage},
    features::auth::session::{self, Session},
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.with(Option::is_some));
        let is_admin = Signal::derive(move || {
            session.with(|session| session.as_ref().is_some_and(Session::is_admin))
        });
        Self {
            session,
            is_authenticated,
            is_admin,
        }
    }

    /// Stores the session in memory and in local storage.
    pub fn set_session(&self, value: Session) {
        if let Err(err) = session::persist(&BrowserStorage, &value) {
            // The console still works for this tab; only reload persistence is lost.
            tracing::warn!(error = %err, "failed to cache session");
        }
        tracing::info!(user_id = value.user.id, role = %value.user.role, "session established");
        self.session.set(Some(value));
    }

    /// Removes both storage keys and clears the in-memory session.
    pub fn clear_session(&self) {
        session::clear(&BrowserStorage);
        self.session.set(None);
        tracing::info!("session cleared");
    }

    /// Bearer token for API calls, read without tracking.
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.as_ref().map(|session| session.token.clone()))
    }

    /// Token for protected calls; errors once the session is gone.
    pub fn require_token(&self) -> Result<String, AppError> {
        self.token()
            .ok_or_else(|| AppError::Rejected("Sign in to continue.".to_string()))
    }
}

/// Provides auth context and restores the cached session synchronously.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let restored = session::restore(&BrowserStorage);
    if restored.is_some() {
        tracing::debug!("restored cached session");
    }
    let auth = AuthContext::new(RwSignal::new(restored));
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
