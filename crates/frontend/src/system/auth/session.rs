//! Session restore and sign-out.
//!
//! Both run against a `SessionBackend` (tokens + auth API) and a `StatusStore`
//! (where `AuthStatus` lives). In the app these are localStorage/HTTP and the
//! context signal.

use async_trait::async_trait;
use contracts::system::auth::{AuthStatus, AuthUser, RefreshResponse};
use leptos::prelude::*;

use super::error::AuthError;
use super::{api, storage};

#[async_trait(?Send)]
pub trait SessionBackend {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn save_access_token(&self, token: &str);
    fn clear_tokens(&self);

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;
    async fn refresh(&self, refresh_token: String) -> Result<RefreshResponse, AuthError>;
    async fn check_permission(&self, access_token: &str) -> Result<bool, AuthError>;
    async fn revoke(&self, refresh_token: String) -> Result<(), AuthError>;
}

/// localStorage + the auth HTTP API
pub struct BrowserSession;

#[async_trait(?Send)]
impl SessionBackend for BrowserSession {
    fn access_token(&self) -> Option<String> {
        storage::get_access_token()
    }

    fn refresh_token(&self) -> Option<String> {
        storage::get_refresh_token()
    }

    fn save_access_token(&self, token: &str) {
        storage::save_access_token(token)
    }

    fn clear_tokens(&self) {
        storage::clear_tokens()
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        api::get_current_user(access_token).await
    }

    async fn refresh(&self, refresh_token: String) -> Result<RefreshResponse, AuthError> {
        api::refresh_token(refresh_token).await
    }

    async fn check_permission(&self, access_token: &str) -> Result<bool, AuthError> {
        api::check_permission(access_token).await
    }

    async fn revoke(&self, refresh_token: String) -> Result<(), AuthError> {
        api::logout(refresh_token).await
    }
}

pub trait StatusStore {
    fn peek_status<R>(&self, f: impl FnOnce(&AuthStatus) -> R) -> R;
    fn update_status(&self, f: impl FnOnce(AuthStatus) -> AuthStatus);
}

impl StatusStore for RwSignal<AuthStatus> {
    fn peek_status<R>(&self, f: impl FnOnce(&AuthStatus) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_status(&self, f: impl FnOnce(AuthStatus) -> AuthStatus) {
        self.update(|s| *s = f(std::mem::take(s)));
    }
}

struct ResolvedIdentity {
    access_token: String,
    /// Set when the stored token was replaced and must be written back
    refreshed: bool,
    user: AuthUser,
}

/// Validate the stored access token, refreshing it once if the server rejects it.
///
/// Nothing is written to storage here; the caller decides whether the result still counts.
async fn resolve_identity<B: SessionBackend>(
    backend: &B,
    access_token: String,
) -> Result<ResolvedIdentity, AuthError> {
    let rejected = match backend.current_user(&access_token).await {
        Ok(user) => {
            return Ok(ResolvedIdentity {
                access_token,
                refreshed: false,
                user,
            })
        }
        Err(e) if e.is_unauthorized() => e,
        Err(e) => return Err(e),
    };

    let Some(refresh_token) = backend.refresh_token() else {
        return Err(rejected);
    };
    log::debug!("auth: access token rejected, refreshing");
    let response = backend.refresh(refresh_token).await?;
    let user = backend.current_user(&response.access_token).await?;

    Ok(ResolvedIdentity {
        access_token: response.access_token,
        refreshed: true,
        user,
    })
}

/// Resolve the stored session: identity first, then permission.
///
/// Results that arrive after a sign-out are dropped, storage writes included.
pub async fn restore_session<B: SessionBackend, S: StatusStore>(backend: &B, state: &S) {
    let Some(access_token) = backend.access_token() else {
        log::debug!("auth: no stored session");
        state.update_status(|_| AuthStatus::signed_out());
        return;
    };

    let resolved = resolve_identity(backend, access_token).await;

    if !state.peek_status(AuthStatus::accepts_identity) {
        log::debug!("auth: session changed during restore, result dropped");
        return;
    }

    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            // keep tokens if the server was merely unreachable
            if e.is_unauthorized() {
                backend.clear_tokens();
            }
            log::warn!("auth: session not restored: {}", e);
            state.update_status(|_| AuthStatus::signed_out());
            return;
        }
    };

    if resolved.refreshed {
        backend.save_access_token(&resolved.access_token);
    }
    log::debug!("auth: identity resolved for {}", resolved.user.uid);
    let user = resolved.user;
    state.update_status(|s| s.with_identity(Some(user)));

    let granted = match backend.check_permission(&resolved.access_token).await {
        Ok(granted) => granted,
        Err(e) => {
            log::warn!("auth: permission check failed: {}", e);
            false
        }
    };

    if state.peek_status(AuthStatus::accepts_permission) {
        log::debug!("auth: permission resolved, granted={}", granted);
        state.update_status(|s| s.with_permission(granted));
    }
}

/// Clear the local session and revoke the refresh token on the server.
///
/// Local state is cleared whatever the server answers; the error is only the revoke's.
pub async fn sign_out<B: SessionBackend, S: StatusStore>(
    backend: &B,
    state: &S,
) -> Result<(), AuthError> {
    let revoked = match backend.refresh_token() {
        Some(refresh_token) => backend.revoke(refresh_token).await,
        None => Ok(()),
    };

    backend.clear_tokens();
    state.update_status(|_| AuthStatus::signed_out());

    match &revoked {
        Ok(()) => log::info!("auth: signed out"),
        Err(e) => log::warn!("auth: local session cleared, revoke failed: {}", e),
    }
    revoked
}
