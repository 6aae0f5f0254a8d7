//! MySQL repository implementations

mod aircraft_repository_impl;
mod flight_repository_impl;
mod user_repository_impl;

pub use aircraft_repository_impl::MySqlAircraftRepository;
pub use flight_repository_impl::MySqlFlightRepository;
pub use user_repository_impl::MySqlUserRepository;

use wm_core::errors::RepositoryError;

/// Maps a driver error onto the fatal repository error surfaced to the
/// service layer
pub(crate) fn database_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database {
        message: e.to_string(),
    }
}

/// Maps a row-decoding problem onto a corrupted-data error
pub(crate) fn corrupted(message: impl Into<String>) -> RepositoryError {
    RepositoryError::Corrupted {
        message: message.into(),
    }
}
