//! Run configuration.
//!
//! Everything comes from the environment (optionally seeded from a `.env`
//! file by the binary): credentials from `HYPON_USER`, `HYPON_PASS` and
//! `HYPON_OEM`, and the API base from `HYPON_BASE_URL`. The resulting
//! `Config` is built once at startup and borrowed by each stage.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::auth::Credentials;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for all Hypon cloud endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.hypon.cloud/v2";

/// Login endpoint, relative to the base URL
const LOGIN_PATH: &str = "/login";

pub const ENV_USERNAME: &str = "HYPON_USER";
pub const ENV_PASSWORD: &str = "HYPON_PASS";
pub const ENV_OEM: &str = "HYPON_OEM";
pub const ENV_BASE_URL: &str = "HYPON_BASE_URL";

/// Authenticated endpoint fetched after login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resource {
    /// Account details of the logged-in administrator
    #[default]
    AdminInfo,
    /// First page of the plant (solar installation) list
    PlantList,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::AdminInfo, Resource::PlantList];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::AdminInfo => "admin-info",
            Resource::PlantList => "plant-list",
        }
    }

    /// Path and query relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::AdminInfo => "/administrator/adminInfo?refresh=true",
            Resource::PlantList => "/plant/list2?page=1&page_size=10&refresh=true",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown resource '{}' (expected one of: admin-info, plant-list)",
                    s
                )
            })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    base_url: String,
    pub resource: Resource,
}

impl Config {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            resource: Resource::default(),
        }
    }

    /// Build from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    /// Unset credentials become empty strings; the login endpoint decides
    /// whether they are acceptable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup(ENV_USERNAME).unwrap_or_default();
        let password = lookup(ENV_PASSWORD).unwrap_or_default();
        let oem = lookup(ENV_OEM).unwrap_or_default();

        let credentials = Credentials::new(username, password).with_oem(oem);
        if !credentials.is_complete() {
            warn!(
                user_var = ENV_USERNAME,
                pass_var = ENV_PASSWORD,
                "Username or password is not set"
            );
        }

        let config = Self::new(credentials);
        match lookup(ENV_BASE_URL).filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = resource;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, LOGIN_PATH)
    }

    pub fn resource_url(&self) -> String {
        format!("{}{}", self.base_url, self.resource.path())
    }
}
