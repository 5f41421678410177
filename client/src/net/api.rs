//! Credential store client for the KokMaisa REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! `AuthError::Network` since the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are mapped through `classify_status` so callers only
//! ever see the `AuthError` taxonomy. The `detail` field of an error body is
//! carried along as the user-displayable reason.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
#[cfg(feature = "hydrate")]
use super::error::{Endpoint, classify_status};
#[cfg(feature = "hydrate")]
use super::types::ApiErrorBody;
use super::types::{LoginRequest, PasswordReset, PasswordResetRequest, Registration, TokenResponse, User, UserPatch};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ME_PATH: &str = "/me";
pub const PASSWORD_RESET_REQUEST_PATH: &str = "/password-reset-request";
pub const PASSWORD_RESET_PATH: &str = "/password-reset";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

/// Remote authority for credentials and the current user record.
///
/// Futures are not `Send`; the browser runs them on the UI event loop.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AuthError>;

    /// `POST /register`.
    async fn register(&self, registration: &Registration) -> Result<TokenResponse, AuthError>;

    /// `GET /me` with a bearer token.
    async fn fetch_me(&self, token: &str) -> Result<User, AuthError>;

    /// `PATCH /me` with a bearer token; returns the stored record.
    async fn update_me(&self, token: &str, patch: &UserPatch) -> Result<User, AuthError>;

    /// `POST /password-reset-request`.
    async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<(), AuthError>;

    /// `POST /password-reset`.
    async fn reset_password(&self, reset: &PasswordReset) -> Result<(), AuthError>;
}

/// `Authorization` header value for a bearer token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP implementation of [`CredentialStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpCredentialStore {
    config: ApiConfig,
}

impl HttpCredentialStore {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> AuthError {
    AuthError::Network(err.to_string())
}

/// Send a prepared request and turn any non-success status into an `AuthError`.
#[cfg(feature = "hydrate")]
async fn dispatch(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
    endpoint: Endpoint,
) -> Result<gloo_net::http::Response, AuthError> {
    let resp = request.map_err(network_error)?.send().await.map_err(network_error)?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let detail = resp
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.user_message());
    leptos::logging::warn!("api request failed: status={status} url={}", resp.url());
    Err(classify_status(endpoint, status, detail))
}

impl CredentialStore for HttpCredentialStore {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGIN_PATH);
            let resp = dispatch(gloo_net::http::Request::post(&url).json(request), Endpoint::Login).await?;
            resp.json::<TokenResponse>().await.map_err(network_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Network(NOT_AVAILABLE.to_owned()))
        }
    }

    async fn register(&self, registration: &Registration) -> Result<TokenResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(REGISTER_PATH);
            let resp = dispatch(gloo_net::http::Request::post(&url).json(registration), Endpoint::Public).await?;
            resp.json::<TokenResponse>().await.map_err(network_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(AuthError::Network(NOT_AVAILABLE.to_owned()))
        }
    }

    async fn fetch_me(&self, token: &str) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(ME_PATH);
            let request = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer_header(token))
                .build();
            let resp = dispatch(request, Endpoint::Authenticated).await?;
            resp.json::<User>().await.map_err(network_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(AuthError::Network(NOT_AVAILABLE.to_owned()))
        }
    }

    async fn update_me(&self, token: &str, patch: &UserPatch) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(ME_PATH);
            let request = gloo_net::http::Request::patch(&url)
                .header("Authorization", &bearer_header(token))
                .json(patch);
            let resp = dispatch(request, Endpoint::Authenticated).await?;
            resp.json::<User>().await.map_err(network_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, patch);
            Err(AuthError::Network(NOT_AVAILABLE.to_owned()))
        }
    }

    async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(PASSWORD_RESET_REQUEST_PATH);
            dispatch(gloo_net::http::Request::post(&url).json(request), Endpoint::Public).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Network(NOT_AVAILABLE.to_owned()))
        }
    }

    async fn reset_password(&self, reset: &PasswordReset) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(PASSWORD_RESET_PATH);
            dispatch(gloo_net::http::Request::post(&url).json(reset), Endpoint::Public).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = reset;
            Err(AuthError::Network(NOT_AVAILABLE.to_owned()))
        }
    }
}
