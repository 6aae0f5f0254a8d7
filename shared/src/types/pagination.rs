//! Pagination related types for list operations

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 20;

/// Pagination parameters for list operations
///
/// Pages are 1-indexed; the database offset is `(page - 1) * per_page`.
/// Note that `Pagination` itself does not reject zero values: the service
/// layer turns those into a typed `BadRequest`, so requests carrying bad
/// parameters produce a uniform failure instead of being silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Whether both parameters are within the valid range
    pub fn is_valid(&self) -> bool {
        self.page >= 1 && self.per_page >= 1
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.per_page
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Offset as i64 for SQL binds
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.offset())
    }

    /// Limit as i64 for SQL binds
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit())
    }
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}
