//! Authentication state for a single run.
//!
//! This module provides:
//! - `Credentials`: username, password and OEM sent to the login endpoint
//! - `Session`: the cookie-bearing client and bearer token produced by login
//!
//! Nothing here is persisted; a session lives as long as the process.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::Session;
