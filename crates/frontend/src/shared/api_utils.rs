//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port of the auth/API server when the base is derived from the page location
pub const BACKEND_PORT: u16 = 3000;

/// Format an API base URL from location parts
///
/// # Example
/// ```
/// use frontend::shared::api_utils::build_api_base;
/// assert_eq!(build_api_base("https:", "example.com", 3000), "https://example.com:3000");
/// ```
pub fn build_api_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Get the base URL for API requests
///
/// `API_BASE_URL` set at compile time wins. Otherwise the base is built from
/// the current window location, using `BACKEND_PORT`.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_api_base(&protocol, &hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
