//! Wire types for the Hypon cloud API.

pub mod login;

pub use login::{LoginData, LoginResponse};
