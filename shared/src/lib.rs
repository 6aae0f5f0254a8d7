//! Shared utilities and common types for the Wingman server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types
//! - Validation utilities (email, password)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::Pagination;
pub use utils::validation;
