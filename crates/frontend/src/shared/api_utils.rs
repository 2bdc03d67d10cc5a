//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location
/// and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:9000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname, port)
}

fn base_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(9000, ADMIN_ATTENDANCE);
/// ```
pub fn api_url(port: u16, path: &str) -> String {
    format!("{}{}", api_base(port), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("http:", "localhost", 9000), "http://localhost:9000");
        assert_eq!(base_url("https:", "hr.example.com", 443), "https://hr.example.com:443");
    }
}
