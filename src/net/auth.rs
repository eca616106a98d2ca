//! Authentication protocol client — signup and login against the API.
//!
//! ERROR HANDLING
//! ==============
//! Responses are classified into a tagged outcome instead of being inspected
//! ad hoc by callers: a non-JSON response means a misconfigured deployment
//! (`Protocol`), a JSON body with a failure status means the server turned
//! the request down (`Rejected`), and an unsent request means the network
//! itself failed (`Transport`). Callers pattern-match.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use reqwest::header::CONTENT_TYPE;

use super::types::{AuthResponse, AuthSuccess};

pub(crate) const SIGNUP_FALLBACK: &str = "Signup failed";
pub(crate) const LOGIN_FALLBACK: &str = "Login failed";

/// Why a signup or login call did not establish a session.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The server answered without a JSON content type — wrong port, or a
    /// proxy returning an HTML error page. Carries the raw body text.
    #[error("backend did not return JSON")]
    Protocol { body: String },
    /// The server rejected the request; `message` is the server-supplied
    /// reason or the operation's fixed fallback.
    #[error("{message}")]
    Rejected { message: String },
    /// The request never completed (DNS, connection refused, offline).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Persisting an established session failed.
    #[error("session storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

/// `POST /api/auth/signup` — create an account and obtain a session.
///
/// Arguments are forwarded as-is; input validation belongs to the calling
/// form. Single attempt, no retry, no timeout.
pub async fn sign_up(
    origin: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthSuccess, AuthError> {
    let resp = reqwest::Client::new()
        .post(format!("{origin}/api/auth/signup"))
        .json(&serde_json::json!({ "name": name, "email": email, "password": password }))
        .send()
        .await?;
    classify_response(resp, SIGNUP_FALLBACK).await
}

/// `POST /api/auth/login` — exchange credentials for a session.
pub async fn sign_in(origin: &str, email: &str, password: &str) -> Result<AuthSuccess, AuthError> {
    let resp = reqwest::Client::new()
        .post(format!("{origin}/api/auth/login"))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;
    classify_response(resp, LOGIN_FALLBACK).await
}

/// Classify a signup/login response into success or a tagged failure.
///
/// The content-type guard runs before the status check so a misconfigured
/// deployment surfaces as a protocol failure even when the status is 2xx.
async fn classify_response(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<AuthSuccess, AuthError> {
    let status = resp.status();
    let is_json = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));

    let body = resp.text().await?;

    if !is_json {
        tracing::warn!(%status, "non-JSON auth response: {body}");
        return Err(AuthError::Protocol { body });
    }

    let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) else {
        tracing::warn!(%status, "unparseable auth response: {body}");
        return Err(AuthError::Protocol { body });
    };

    if !status.is_success() {
        let message = json
            .get("detail")
            .and_then(|v| v.as_str())
            .filter(|detail| !detail.is_empty())
            .unwrap_or(fallback)
            .to_owned();
        return Err(AuthError::Rejected { message });
    }

    match serde_json::from_value::<AuthResponse>(json) {
        Ok(ok) => Ok(ok.into()),
        Err(e) => {
            tracing::warn!(%status, error = %e, "auth response missing expected fields: {body}");
            Err(AuthError::Protocol { body })
        }
    }
}
