use std::cell::RefCell;

/// API route configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

thread_local! {
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::default());
}

impl ApiConfig {
    /// Create a new ApiConfig from a URL string. An empty string keeps
    /// requests same-origin.
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a request path against the base URL. Absolute URLs are
    /// returned untouched.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Snapshot of the page-wide configuration.
    pub fn current() -> Self {
        API_CONFIG.with(|cfg| cfg.borrow().clone())
    }

    /// Replace the page-wide configuration.
    pub fn install(config: ApiConfig) {
        tracing::debug!(base_url = %config.base_url, "API config installed");
        API_CONFIG.with(|cfg| *cfg.borrow_mut() = config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.url("/api/calculate_price"), "/api/calculate_price");
    }

    #[test]
    fn base_url_is_joined_without_double_slash() {
        let cfg = ApiConfig::from_url("https://workx.example/");
        assert_eq!(cfg.base_url(), "https://workx.example");
        assert_eq!(cfg.url("/api/user/my_orders"), "https://workx.example/api/user/my_orders");
        assert_eq!(cfg.url("api/user/my_orders"), "https://workx.example/api/user/my_orders");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let cfg = ApiConfig::from_url("https://workx.example");
        assert_eq!(cfg.url("http://other.host/x"), "http://other.host/x");
    }

    #[test]
    fn install_replaces_current() {
        ApiConfig::install(ApiConfig::from_url("http://localhost:5000"));
        assert_eq!(ApiConfig::current().base_url(), "http://localhost:5000");
        ApiConfig::install(ApiConfig::default());
        assert_eq!(ApiConfig::current().base_url(), "");
    }
}
