//! Authentication service module
//!
//! This module provides the credential lifecycle:
//! - Sign-up with salted password hashing
//! - Login issuing an access/refresh token pair
//! - Refresh with single-use token rotation
//! - Logout clearing the persisted refresh state

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
