//! Form submission flows
//!
//! Each flow turns a form into at most one API call and decides where the
//! page goes next. Errors carry the text the page displays.

use leptos::logging::warn;

use super::api::{AuthApi, AuthError, AuthResponse};
use super::forms::{LoginForm, RegisterForm};
use super::storage::TokenStore;

/// Shown when the server rejects a login without saying why
pub const LOGIN_FAILED: &str = "Login failed";

/// Shown when the server rejects a registration without saying why
pub const REGISTER_FAILED: &str = "Registration failed";

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Route {
    #[display("/")]
    Home,
    #[display("/login")]
    Login,
    #[display("/register")]
    Register,
}

fn rejection(response: &AuthResponse, default_message: &str) -> AuthError {
    AuthError::Rejected(
        response
            .server_message()
            .unwrap_or(default_message)
            .to_string(),
    )
}

fn log_transport_failure(call: &str, err: &AuthError) {
    if let AuthError::Transport(detail) = err {
        warn!("{} request failed: {}", call, detail);
    }
}

/// Send the login form; on success persist the token and go home.
pub async fn submit_login<A, S>(api: &A, store: &S, form: &LoginForm) -> Result<Route, AuthError>
where
    A: AuthApi,
    S: TokenStore,
{
    let response = api
        .login(&form.credentials())
        .await
        .inspect_err(|e| log_transport_failure("login", e))?;

    if !response.success {
        return Err(rejection(&response, LOGIN_FAILED));
    }

    match response.token.as_deref() {
        Some(token) => store.store_token(token).map_err(|e| {
            warn!("could not persist session token: {}", e);
            AuthError::Transport(e.to_string())
        })?,
        None => warn!("login succeeded but the response carried no token"),
    }

    Ok(Route::Home)
}

/// Validate and send the registration form; on success go to login.
///
/// Nothing is sent when validation fails.
pub async fn submit_register<A>(api: &A, form: &RegisterForm) -> Result<Route, AuthError>
where
    A: AuthApi,
{
    form.validate()?;

    let response = api
        .register(&form.credentials())
        .await
        .inspect_err(|e| log_transport_failure("register", e))?;

    if !response.success {
        return Err(rejection(&response, REGISTER_FAILED));
    }

    Ok(Route::Login)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::Login.to_string(), "/login");
        assert_eq!(Route::Register.to_string(), "/register");
    }

    #[test]
    fn test_rejection_prefers_server_message() {
        let response = AuthResponse {
            success: false,
            message: Some("user exists".to_string()),
            token: None,
        };
        assert_eq!(
            rejection(&response, REGISTER_FAILED),
            AuthError::Rejected("user exists".to_string())
        );
    }

    #[test]
    fn test_rejection_falls_back_to_default() {
        let response = AuthResponse::default();
        assert_eq!(
            rejection(&response, LOGIN_FAILED),
            AuthError::Rejected("Login failed".to_string())
        );
    }
}
