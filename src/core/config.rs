//! Application configuration.
//!
//! The server loads `Config::from_env()` after calling `dotenvy::dotenv()`
//! and publishes the auth API location to the browser through a `<meta>`
//! tag, which the hydrated client reads back with `ApiConfig::from_document()`.

/// Base URL of the authentication service when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:9000";

/// Name of the `<meta>` tag carrying the API base URL to the client
pub const API_URL_META: &str = "auth-api-url";

/// Location of the external authentication API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/login`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Read the API base URL the server rendered into the page head.
    #[cfg(not(feature = "ssr"))]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{}\"]", API_URL_META);
        leptos::web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the authentication service
    /// Example: http://localhost:9000
    pub auth_api_url: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_api_url: std::env::var("AUTH_API_URL").ok(),
        }
    }

    /// Check if the auth API location was set explicitly
    pub fn has_auth_api_url(&self) -> bool {
        self.auth_api_url.is_some()
    }

    /// API settings handed to the rendered app
    pub fn api(&self) -> ApiConfig {
        self.auth_api_url
            .as_deref()
            .map(ApiConfig::new)
            .unwrap_or_default()
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_endpoint_joins_path() {
        let api = ApiConfig::default();
        assert_eq!(api.endpoint("/api/login"), "http://localhost:9000/api/login");
        assert_eq!(api.endpoint("api/register"), "http://localhost:9000/api/register");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let api = ApiConfig::new("https://auth.example.com/");
        assert_eq!(api.base_url(), "https://auth.example.com");
        assert_eq!(api.endpoint("/api/login"), "https://auth.example.com/api/login");
    }

    #[test]
    fn test_new_keeps_path_prefix() {
        let api = ApiConfig::new("https://example.com/auth");
        assert_eq!(api.endpoint("/api/login"), "https://example.com/auth/api/login");
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        assert_eq!(ApiConfig::new(""), ApiConfig::default());
        assert_eq!(ApiConfig::new("  / "), ApiConfig::default());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_without_api_url() {
        let config = Config { auth_api_url: None };

        assert!(!config.has_auth_api_url());
        assert_eq!(config.api(), ApiConfig::default());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_with_api_url() {
        let config = Config {
            auth_api_url: Some("http://10.0.0.5:9000/".to_string()),
        };

        assert!(config.has_auth_api_url());
        assert_eq!(config.api().base_url(), "http://10.0.0.5:9000");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_env_yields_usable_api_url() {
        // Values depend on the environment; whatever is set must normalize
        let config = Config::from_env();
        let api = config.api();

        assert!(!api.base_url().is_empty());
        assert!(!api.base_url().ends_with('/'));
        if !config.has_auth_api_url() {
            assert_eq!(api.base_url(), DEFAULT_API_URL);
        }
    }
}
