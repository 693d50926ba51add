//! Shared HTTP client and auth utilities.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::config::Credential;
use crate::error::{error_chain, MindcheckError, Result};

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// Uses reqwest's defaults: no request timeout is set here.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(reqwest::Client::new)
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(credential: &Credential) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut value = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
        .map_err(|_| {
            MindcheckError::Configuration("credential contains invalid header characters".into())
        })?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Map a non-success status and its raw body to an error.
pub fn status_to_error(status: u16, body: &str) -> MindcheckError {
    MindcheckError::api(status, body)
}

/// Classify a reqwest failure: timeouts become [`MindcheckError::Timeout`]
/// carrying the full cause, everything else stays a network error.
pub fn transport_error(err: reqwest::Error) -> MindcheckError {
    if err.is_timeout() {
        MindcheckError::Timeout(error_chain(&err))
    } else {
        MindcheckError::Network(err)
    }
}
