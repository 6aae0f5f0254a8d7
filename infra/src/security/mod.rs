//! Security module - credential hashing implementations

mod bcrypt_hasher;

pub use bcrypt_hasher::BcryptPasswordHasher;
