//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `wm_core`, following
//! the same clean-architecture split as the rest of the workspace:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Security**: bcrypt password hashing

pub mod database;
pub mod security;

pub use database::{
    DatabasePool, MySqlAircraftRepository, MySqlFlightRepository, MySqlUserRepository,
};
pub use security::BcryptPasswordHasher;
