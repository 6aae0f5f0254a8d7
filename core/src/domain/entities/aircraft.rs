//! Aircraft entity owned by a single user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::OwnedEntity;

/// An aircraft in a user's personal logbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Unique identifier, assigned by the backing store
    #[serde(default)]
    pub id: Uuid,

    /// Owning user, stamped by the service layer
    #[serde(default)]
    pub user_id: Uuid,

    /// Registration mark, e.g. "PP-XYZ"
    pub registration: String,

    /// ICAO type designator, e.g. "C172"
    pub type_icao: String,
}

impl Aircraft {
    /// Creates a new aircraft with unset id and owner
    pub fn new(registration: impl Into<String>, type_icao: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            registration: registration.into(),
            type_icao: type_icao.into(),
        }
    }
}

impl OwnedEntity for Aircraft {
    const ENTITY_NAME: &'static str = "Aircraft";

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
