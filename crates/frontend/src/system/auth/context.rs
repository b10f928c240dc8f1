use contracts::system::auth::{AuthStatus, AuthUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::error::AuthError;
use super::session::{self, BrowserSession};

/// Auth state of the running session, shared through Leptos context.
///
/// Identity and permission resolve independently: `loading` goes false when the
/// user is known, `permission_loading` when the permission check has answered.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthStatus>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthStatus::pending()),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(|s| s.user.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn permission_loading(&self) -> bool {
        self.state.with(|s| s.permission_loading)
    }

    pub fn has_permission(&self) -> bool {
        self.state.with(|s| s.has_permission)
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.with(|s| s.is_signed_in())
    }

    /// Both identity and permission are resolved
    pub fn is_ready(&self) -> bool {
        self.state.with(|s| s.is_ready())
    }

    /// Sign the user out.
    ///
    /// The local session is always cleared. An error means only that the server
    /// could not revoke the refresh token.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        session::sign_out(&BrowserSession, &self.state).await
    }

    async fn restore_session(self) {
        session::restore_session(&BrowserSession, &self.state).await
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    // Restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(auth.restore_session());
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
