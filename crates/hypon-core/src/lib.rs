//! hypon-core - login session and API client for the Hypon cloud.
//!
//! A run is two sequential requests: a form-encoded login that yields a
//! bearer token plus session cookies, then one authorized GET.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{authenticate, fetch, ApiError};
pub use auth::{Credentials, Session};
pub use config::{Config, Resource};
pub use reqwest::StatusCode;

use tracing::info;

/// Log in, then fetch the configured resource once.
/// Returns the status of the fetch; any failure ends the run.
pub async fn run(config: &Config) -> Result<StatusCode, ApiError> {
    let session = authenticate(&config.credentials, &config.login_url()).await?;

    info!(resource = %config.resource, "Fetching resource");
    fetch(&session, &config.resource_url()).await
}
