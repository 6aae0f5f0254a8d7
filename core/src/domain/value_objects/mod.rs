//! Value objects exchanged between the services and their callers.

pub mod auth_requests;
pub mod token;

pub use auth_requests::{LoginRequest, RefreshRequest, SignUpRequest};
pub use token::{Claims, RefreshToken, TokenPair};
