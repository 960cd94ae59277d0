/**
 * Authentication Module
 *
 * HTTP client functions for the auth endpoints: login, register and the
 * Facebook callback stub. Response bodies are read as text first and only
 * then parsed as JSON, so a non-JSON body degrades to a generic error
 * instead of a crash.
 */

use std::collections::BTreeMap;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::egui_app::config::{Config, REQUEST_TIMEOUT};
use crate::egui_app::types::{AuthSession, LoginCredentials, RegisterRequest};
use crate::shared::error::AuthError;

/// Error body the backend sends on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Login with email or phone credentials
pub async fn login(config: &Config, credentials: &LoginCredentials) -> Result<AuthSession, AuthError> {
    let url = config.api_url("/api/auth/login");

    let response = client()?
        .post(&url)
        .json(credentials)
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    let text = response.text().await.map_err(network_error)?;
    let body = parse_json(&text)?;

    if status.is_success() {
        let session = session_from(body)?;
        tracing::info!("login succeeded");
        Ok(session)
    } else {
        Err(error_from(status, body, "Login failed"))
    }
}

/// Register a new account. Success does not create a session; the caller
/// returns to the login screen.
pub async fn register(config: &Config, request: &RegisterRequest) -> Result<(), AuthError> {
    let url = config.api_url("/api/register");
    tracing::debug!("registering against {url}");

    let response = client()?
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    let text = response.text().await.map_err(network_error)?;
    let body = parse_json(&text)?;

    if status.is_success() {
        tracing::info!("registration succeeded");
        Ok(())
    } else {
        Err(error_from(status, body, "Registration failed"))
    }
}

/// Facebook login stub. There is no OAuth handshake here; we hit the fixed
/// callback endpoint and take a token if one comes back.
pub async fn facebook_login(config: &Config) -> Result<AuthSession, AuthError> {
    let url = config.api_url("/api/auth/facebook/callback");

    let response = client()?.get(&url).send().await.map_err(network_error)?;

    let status = response.status();
    let text = response.text().await.map_err(network_error)?;
    let body = parse_json(&text)?;

    if status.is_success() {
        session_from(body)
    } else {
        Err(error_from(status, body, "Facebook login failed"))
    }
}

fn client() -> Result<Client, AuthError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| {
            tracing::error!("failed to build HTTP client: {e}");
            AuthError::Network
        })
}

fn network_error(e: reqwest::Error) -> AuthError {
    tracing::warn!("request failed: {e}");
    AuthError::Network
}

fn parse_json(text: &str) -> Result<serde_json::Value, AuthError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!("unparseable response body: {e}");
        AuthError::MalformedResponse
    })
}

/// A 2xx auth body must carry a token; anything else is malformed
fn session_from(body: serde_json::Value) -> Result<AuthSession, AuthError> {
    serde_json::from_value(body).map_err(|e| {
        tracing::warn!("auth response missing token: {e}");
        AuthError::MalformedResponse
    })
}

fn error_from(status: StatusCode, body: serde_json::Value, fallback: &str) -> AuthError {
    match serde_json::from_value::<ErrorBody>(body) {
        Ok(ErrorBody {
            errors: Some(errors),
            ..
        }) if !errors.is_empty() => AuthError::ServerValidation { errors },
        Ok(ErrorBody { message, .. }) => {
            tracing::debug!("server rejected request ({status})");
            AuthError::server(message, fallback)
        }
        Err(_) => AuthError::server(None, fallback),
    }
}
