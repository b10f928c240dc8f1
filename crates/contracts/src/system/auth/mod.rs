use serde::{Deserialize, Serialize};

/// Snapshot of a signed-in identity as reported by the auth provider.
///
/// Replaced as a whole on every identity change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
            photo_url: None,
        }
    }

    /// Name to show in the UI: display name, then email, then uid
    pub fn label(&self) -> &str {
        [self.display_name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(self.uid.as_str())
    }
}

/// Current auth/permission state exposed to the UI.
///
/// `loading` tracks identity resolution and `permission_loading` tracks
/// permission resolution. They are independent; every combination is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthStatus {
    pub user: Option<AuthUser>,
    pub loading: bool,
    pub permission_loading: bool,
    pub has_permission: bool,
}

impl AuthStatus {
    /// State at provider start: nothing resolved yet
    pub fn pending() -> Self {
        Self {
            user: None,
            loading: true,
            permission_loading: true,
            has_permission: false,
        }
    }

    /// Resolved state with nobody signed in
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Identity resolved. Without a user there is no permission to wait for.
    pub fn with_identity(self, user: Option<AuthUser>) -> Self {
        match user {
            Some(user) => Self {
                user: Some(user),
                loading: false,
                ..self
            },
            None => Self::signed_out(),
        }
    }

    /// Permission resolved. Never granted without a user.
    pub fn with_permission(self, granted: bool) -> Self {
        Self {
            has_permission: granted && self.user.is_some(),
            permission_loading: false,
            ..self
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Both identity and permission are resolved
    pub fn is_ready(&self) -> bool {
        !self.loading && !self.permission_loading
    }

    /// An identity lookup that finishes now may still be applied.
    /// False once the session was signed out or already resolved.
    pub fn accepts_identity(&self) -> bool {
        self.loading
    }

    /// A permission answer that finishes now may still be applied
    pub fn accepts_permission(&self) -> bool {
        self.permission_loading && self.is_signed_in()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PermissionResponse {
    pub has_permission: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            uid: "u1".to_string(),
            email: Some("ada@example.com".to_string()),
            display_name: Some("Ada".to_string()),
            photo_url: None,
        }
    }

    #[test]
    fn test_uid_only_user_is_valid() {
        let user = AuthUser::new("u1");
        assert_eq!(user.uid, "u1");
        assert_eq!(user.email, None);
        assert_eq!(user.display_name, None);
        assert_eq!(user.photo_url, None);

        let parsed: AuthUser = serde_json::from_str(r#"{"uid":"u1"}"#).unwrap();
        assert_eq!(parsed, user);

        let parsed: AuthUser = serde_json::from_str(
            r#"{"uid":"u1","email":null,"displayName":null,"photoURL":null}"#,
        )
        .unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_uid_is_required() {
        assert!(serde_json::from_str::<AuthUser>(r#"{"email":"a@b.c"}"#).is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let mut user = user();
        user.photo_url = Some("https://example.com/a.png".to_string());
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["displayName"], "Ada");
        assert_eq!(json["photoURL"], "https://example.com/a.png");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(user().label(), "Ada");

        let mut no_name = user();
        no_name.display_name = Some(String::new());
        assert_eq!(no_name.label(), "ada@example.com");

        assert_eq!(AuthUser::new("u1").label(), "u1");
    }

    #[test]
    fn test_loading_flags_are_independent() {
        for loading in [true, false] {
            for permission_loading in [true, false] {
                let status = AuthStatus {
                    user: None,
                    loading,
                    permission_loading,
                    has_permission: false,
                };
                assert_eq!(status.loading, loading);
                assert_eq!(status.permission_loading, permission_loading);
                assert_eq!(status.is_ready(), !loading && !permission_loading);
            }
        }
    }

    #[test]
    fn test_identity_resolves_before_permission() {
        let status = AuthStatus::pending().with_identity(Some(user()));
        assert!(!status.loading);
        assert!(status.permission_loading);
        assert!(status.is_signed_in());
        assert!(!status.is_ready());

        let status = status.with_permission(true);
        assert!(status.is_ready());
        assert!(status.has_permission);
    }

    #[test]
    fn test_no_identity_resolves_everything() {
        let status = AuthStatus::pending().with_identity(None);
        assert_eq!(status, AuthStatus::signed_out());
        assert!(status.is_ready());
        assert!(!status.has_permission);
    }

    #[test]
    fn test_permission_requires_user() {
        let status = AuthStatus::pending().with_permission(true);
        assert!(!status.has_permission);
        assert!(!status.permission_loading);
        assert!(status.loading);
    }

    #[test]
    fn test_late_results_rejected_after_sign_out() {
        let pending = AuthStatus::pending();
        assert!(pending.accepts_identity());
        assert!(!pending.accepts_permission());

        let identified = pending.with_identity(Some(user()));
        assert!(!identified.accepts_identity());
        assert!(identified.accepts_permission());

        let signed_out = AuthStatus::signed_out();
        assert!(!signed_out.accepts_identity());
        assert!(!signed_out.accepts_permission());
    }

    #[test]
    fn test_permission_accepted_once() {
        let status = AuthStatus::pending()
            .with_identity(Some(user()))
            .with_permission(false);
        assert!(!status.accepts_permission());
        assert!(!status.has_permission);
    }

    #[test]
    fn test_signed_out_clears_user() {
        let status = AuthStatus::pending()
            .with_identity(Some(user()))
            .with_permission(true);
        assert!(status.has_permission);

        let status = AuthStatus::signed_out();
        assert_eq!(status.user, None);
        assert!(!status.has_permission);
        assert!(status.is_ready());
    }
}
