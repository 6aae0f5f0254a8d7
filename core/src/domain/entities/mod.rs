//! Domain entities persisted by the repository layer.

pub mod aircraft;
pub mod flight;
pub mod user;

pub use aircraft::Aircraft;
pub use flight::{Flight, FlightStatus};
pub use user::User;
