use std::fmt;

use reqwest::Client;

/// A logged-in session: the HTTP client holding the login cookies and the
/// bearer token issued with them. Only `authenticate` creates one, so the
/// two always travel together.
pub struct Session {
    client: Client,
    token: String,
}

impl Session {
    pub(crate) fn new(client: Client, token: String) -> Self {
        Self { client, token }
    }

    /// Get the bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the cookie-bearing client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .finish_non_exhaustive()
    }
}
