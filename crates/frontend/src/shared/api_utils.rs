//! URL helpers for the document store API.
//!
//! The store is served from the same host as the console, on port 3000.

const API_PORT: u16 = 3000;

/// Base URL for API requests, e.g. `http://localhost:3000`.
///
/// Empty when there is no window (tests, workers), which leaves
/// [`api_url`] producing a relative path.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from(&protocol, &hostname)
}

fn base_from(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full API URL for a path starting with `/api/`
///
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/customers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location_parts() {
        assert_eq!(base_from("https:", "pos.example.com"), "https://pos.example.com:3000");
        assert_eq!(base_from("http:", "localhost"), "http://localhost:3000");
    }
}
