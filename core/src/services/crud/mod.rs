//! Ownership-scoped CRUD service module
//!
//! One generic service gives every owned entity the same five
//! operations with the same authorization rules and the same failure
//! vocabulary.

mod service;

#[cfg(test)]
mod tests;

pub use service::CrudService;
