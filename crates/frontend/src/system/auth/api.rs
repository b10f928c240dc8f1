use contracts::system::auth::{AuthUser, PermissionResponse, RefreshRequest, RefreshResponse};
use gloo_net::http::{Request, Response};

use super::error::AuthError;
use crate::shared::api_utils::api_url;

const ME_PATH: &str = "/api/system/auth/me";
const REFRESH_PATH: &str = "/api/system/auth/refresh";
const PERMISSION_PATH: &str = "/api/system/auth/permission";
const LOGOUT_PATH: &str = "/api/system/auth/logout";

fn bearer(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}

fn ensure_ok(response: Response, operation: &'static str) -> Result<Response, AuthError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(AuthError::StatusError {
            operation,
            status: response.status(),
        })
    }
}

async fn decode<T>(response: Response) -> Result<T, AuthError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    response
        .json::<T>()
        .await
        .map_err(|e| AuthError::DecodeError(e.to_string()))
}

/// Get the identity behind an access token
pub async fn get_current_user(access_token: &str) -> Result<AuthUser, AuthError> {
    let response = Request::get(&api_url(ME_PATH))
        .header("Authorization", &bearer(access_token))
        .send()
        .await
        .map_err(|e| AuthError::NetworkError(e.to_string()))?;

    decode(ensure_ok(response, "Get current user")?).await
}

/// Ask whether the current user holds the permission the app requires
pub async fn check_permission(access_token: &str) -> Result<bool, AuthError> {
    let response = Request::get(&api_url(PERMISSION_PATH))
        .header("Authorization", &bearer(access_token))
        .send()
        .await
        .map_err(|e| AuthError::NetworkError(e.to_string()))?;

    let body: PermissionResponse = decode(ensure_ok(response, "Permission check")?).await?;
    Ok(body.has_permission)
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, AuthError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url(REFRESH_PATH))
        .json(&request)
        .map_err(|e| AuthError::EncodeError(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::NetworkError(e.to_string()))?;

    decode(ensure_ok(response, "Refresh")?).await
}

/// Revoke the refresh token on the server
pub async fn logout(refresh_token: String) -> Result<(), AuthError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url(LOGOUT_PATH))
        .json(&request)
        .map_err(|e| AuthError::EncodeError(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::NetworkError(e.to_string()))?;

    ensure_ok(response, "Logout")?;
    Ok(())
}
