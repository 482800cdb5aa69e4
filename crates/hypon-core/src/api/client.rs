//! Login and authenticated fetch against the Hypon cloud API.

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info};

use crate::auth::{Credentials, Session};
use crate::models::LoginResponse;

use super::ApiError;

/// Build a fresh client with its own cookie jar.
/// No request timeout is set; transport defaults apply.
fn build_client() -> Result<Client, ApiError> {
    Ok(Client::builder().cookie_store(true).build()?)
}

/// Drain a rejected response so its body is logged and the connection released
async fn log_rejected(response: Response, url: &str) -> StatusCode {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!(
        url = url,
        status = %status,
        body = %ApiError::truncate_body(&body),
        "Request rejected"
    );
    status
}

/// Log in with form-encoded credentials and return the resulting session.
///
/// Only a 200 answer counts as success. Cookies set by the server are kept
/// in the session's jar and replayed on later requests.
pub async fn authenticate(credentials: &Credentials, login_url: &str) -> Result<Session, ApiError> {
    let client = build_client()?;

    debug!(url = login_url, "Sending login request");

    let response = client
        .post(login_url)
        .form(&credentials.form_fields())
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        let status = log_rejected(response, login_url).await;
        return Err(ApiError::Authentication(status));
    }

    let body = response.bytes().await?;
    let login: LoginResponse = serde_json::from_slice(&body)?;

    debug!(code = ?login.code, message = ?login.message, "Login response decoded");
    info!(url = login_url, "Authenticated");

    Ok(Session::new(client, login.data.token))
}

/// Issue one authorized GET through the session and report the status.
/// The response body is discarded.
pub async fn fetch(session: &Session, url: &str) -> Result<StatusCode, ApiError> {
    let response = session
        .client()
        .get(url)
        .bearer_auth(session.token())
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        let status = log_rejected(response, url).await;
        return Err(ApiError::Api(status));
    }

    let status = response.status();
    info!(url = url, status = %status, "Fetched resource");
    Ok(status)
}
