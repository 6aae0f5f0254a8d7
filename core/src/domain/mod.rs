//! Domain entities and value objects.

pub mod entities;
pub mod ownership;
pub mod value_objects;

pub use entities::{Aircraft, Flight, FlightStatus, User};
pub use ownership::OwnedEntity;
pub use value_objects::{Claims, LoginRequest, RefreshRequest, RefreshToken, SignUpRequest, TokenPair};
