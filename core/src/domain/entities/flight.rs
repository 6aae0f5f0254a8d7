//! Flight entity owned by a single user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::OwnedEntity;

/// Lifecycle status of a logged flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    /// Planned but not yet departed
    Planned,
    /// Currently underway
    Departed,
    /// Flown and closed out
    Completed,
    /// Abandoned before departure
    Canceled,
}

impl Default for FlightStatus {
    fn default() -> Self {
        FlightStatus::Planned
    }
}

impl FlightStatus {
    /// Lowercase name used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Planned => "planned",
            FlightStatus::Departed => "departed",
            FlightStatus::Completed => "completed",
            FlightStatus::Canceled => "canceled",
        }
    }
}

impl std::str::FromStr for FlightStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(FlightStatus::Planned),
            "departed" => Ok(FlightStatus::Departed),
            "completed" => Ok(FlightStatus::Completed),
            "canceled" => Ok(FlightStatus::Canceled),
            other => Err(format!("unknown flight status: {}", other)),
        }
    }
}

/// A flight in a user's personal logbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique identifier, assigned by the backing store
    #[serde(default)]
    pub id: Uuid,

    /// Owning user, stamped by the service layer
    #[serde(default)]
    pub user_id: Uuid,

    /// Aircraft this flight was flown on
    pub aircraft_id: Uuid,

    /// Lifecycle status
    #[serde(default)]
    pub status: FlightStatus,

    /// Scheduled departure time
    pub departure_at: DateTime<Utc>,

    /// Departure aerodrome, ICAO code
    pub departure_icao: String,

    /// Arrival aerodrome, ICAO code
    pub arrival_icao: String,

    /// Alternate aerodrome, ICAO code
    pub alternate_icao: String,

    /// Block time in minutes
    pub duration_minutes: i64,
}

impl Flight {
    /// Creates a new planned flight with unset id and owner
    pub fn new(
        aircraft_id: Uuid,
        departure_at: DateTime<Utc>,
        departure_icao: impl Into<String>,
        arrival_icao: impl Into<String>,
        alternate_icao: impl Into<String>,
        duration_minutes: i64,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            aircraft_id,
            status: FlightStatus::Planned,
            departure_at,
            departure_icao: departure_icao.into(),
            arrival_icao: arrival_icao.into(),
            alternate_icao: alternate_icao.into(),
            duration_minutes,
        }
    }
}

impl OwnedEntity for Flight {
    const ENTITY_NAME: &'static str = "Flight";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn set_owner_id(&mut self, owner_id: Uuid) {
        self.user_id = owner_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flight() -> Flight {
        Flight::new(Uuid::new_v4(), Utc::now(), "SBSP", "SBRJ", "SBJR", 55)
    }

    #[test]
    fn test_new_flight_is_planned() {
        let flight = sample_flight();
        assert!(flight.id.is_nil());
        assert!(flight.user_id.is_nil());
        assert_eq!(flight.status, FlightStatus::Planned);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&FlightStatus::Departed).unwrap();
        assert_eq!(json, "\"departed\"");
    }

    #[test]
    fn test_status_string_roundtrip() {
        for status in [
            FlightStatus::Planned,
            FlightStatus::Departed,
            FlightStatus::Completed,
            FlightStatus::Canceled,
        ] {
            assert_eq!(status.as_str().parse::<FlightStatus>().unwrap(), status);
        }
        assert!("airborne".parse::<FlightStatus>().is_err());
    }
}
