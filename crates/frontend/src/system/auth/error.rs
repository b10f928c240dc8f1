use thiserror::Error;

/// Ошибки обращения к сервису авторизации
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Failed to serialize request: {0}")]
    EncodeError(String),

    #[error("Failed to send request: {0}")]
    NetworkError(String),

    #[error("{operation} failed: {status}")]
    StatusError { operation: &'static str, status: u16 },

    #[error("Failed to parse response: {0}")]
    DecodeError(String),
}

impl AuthError {
    /// The server rejected the credentials (expired or revoked token)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::StatusError { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AuthError::StatusError {
            operation: "Logout",
            status: 500,
        };
        assert_eq!(err.to_string(), "Logout failed: 500");
        assert_eq!(
            AuthError::NetworkError("offline".into()).to_string(),
            "Failed to send request: offline"
        );
    }

    #[test]
    fn test_is_unauthorized() {
        let expired = AuthError::StatusError {
            operation: "Get current user",
            status: 401,
        };
        assert!(expired.is_unauthorized());
        assert!(!AuthError::DecodeError("eof".into()).is_unauthorized());
        assert!(!AuthError::StatusError {
            operation: "Refresh",
            status: 502
        }
        .is_unauthorized());
    }
}
