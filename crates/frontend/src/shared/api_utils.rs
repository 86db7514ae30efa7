//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and extracting
//! error messages from failed responses.

use gloo_net::http::Response;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Bearer header value from the stored session token, if any
pub fn auth_header() -> Option<String> {
    crate::system::auth::storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Error message for a non-2xx response.
///
/// The server sends its message either as a JSON object with a
/// `message` field or as plain text; both are surfaced verbatim. An
/// empty body falls back to `"{action}: {status}"`.
pub async fn error_body(response: Response, action: &str) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
                if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                    return message.to_string();
                }
            }
            body
        }
        _ => format!("{}: {}", action, status),
    }
}
