//! REST client for the Hypon cloud API.
//!
//! The API issues a bearer token from a form-encoded login endpoint. The
//! same cookie-bearing HTTP client must be used for the follow-up request,
//! so `authenticate` hands back a `Session` that `fetch` borrows.

pub mod client;
pub mod error;

pub use client::{authenticate, fetch};
pub use error::ApiError;
