//! Client for the external authentication API
//!
//! Two calls, both `POST` with a JSON `{username, password}` body:
//! - `/api/login` answers `{success, message, token?}`
//! - `/api/register` answers `{success, message}`
//!
//! The HTTP status is not inspected; the `success` flag in the body decides.

use serde::{Deserialize, Serialize};

use super::config::ApiConfig;
use super::forms::{Credentials, ValidationError};

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";

/// Reply body from both auth endpoints
///
/// Decoding is lenient: a missing `success` reads as `false` and a missing or
/// `null` message as no message, so such replies are rejections rather than
/// unreadable bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthResponse {
    /// Server-supplied message, if it sent a non-empty one
    pub fn server_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Why a submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A local precondition failed; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered `success: false`
    #[error("{0}")]
    Rejected(String),

    /// The request never completed or the reply was unreadable
    #[error("Server error, please try again later")]
    Transport(String),
}

impl AuthError {
    /// Text shown under the form
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// The two calls the pages make against the auth service
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError>;

    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError>;
}

/// `AuthApi` over the browser's fetch
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[cfg(not(feature = "ssr"))]
    async fn post(&self, path: &str, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        use gloo_net::http::Request;

        let url = self.config.endpoint(path);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AuthError::Transport(format!("{} (HTTP {})", e, response.status())))
    }

    #[cfg(feature = "ssr")]
    async fn post(&self, path: &str, _credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        Err(AuthError::Transport(format!(
            "{} is only reachable from the browser",
            self.config.endpoint(path)
        )))
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        self.post(LOGIN_PATH, credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        self.post(REGISTER_PATH, credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_success() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok","token":"abc"}"#).unwrap();

        assert!(resp.success);
        assert_eq!(resp.token.as_deref(), Some("abc"));
        assert_eq!(resp.server_message(), Some("ok"));
    }

    #[test]
    fn test_parse_without_message_or_token() {
        let resp: AuthResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();

        assert!(!resp.success);
        assert!(resp.message.is_none());
        assert!(resp.token.is_none());
        assert_eq!(resp.server_message(), None);
    }

    #[test]
    fn test_blank_message_counts_as_missing() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"   "}"#).unwrap();
        assert_eq!(resp.server_message(), None);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":true,"message":"","user_id":7}"#).unwrap();
        assert!(resp.success);
    }

    #[test]
    fn test_missing_success_flag_reads_as_failure() {
        let resp: AuthResponse = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.server_message(), Some("hi"));

        let empty: AuthResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AuthResponse::default());
    }

    #[test]
    fn test_null_message_counts_as_missing() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":null}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.server_message(), None);
    }

    #[test]
    fn test_non_object_body_is_an_error() {
        assert!(serde_json::from_str::<AuthResponse>("\"oops\"").is_err());
        assert!(serde_json::from_str::<AuthResponse>("<html>").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::Rejected("bad credentials".to_string()).user_message(),
            "bad credentials"
        );
        assert_eq!(
            AuthError::Transport("connection refused".to_string()).user_message(),
            "Server error, please try again later"
        );
        assert_eq!(
            AuthError::from(ValidationError::PasswordMismatch).user_message(),
            "Passwords do not match"
        );
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_http_api_unavailable_during_server_render() {
        let api = HttpAuthApi::default();
        let creds = Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };

        let err = api.login(&creds).await.unwrap_err();
        match err {
            AuthError::Transport(detail) => {
                assert!(detail.contains("http://localhost:9000/api/login"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
