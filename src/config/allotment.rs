//! Allotment configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::applicant::MAX_PREFERENCES;
use crate::core::registry::{Room, RoomKind};
use crate::core::scoring::{MERIT_MAX, MERIT_MIN};
use crate::intake::Application;

/// Seed definition for one room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Unique room identifier.
    pub id: String,
    /// Room category.
    pub kind: RoomKind,
    /// Explicit capacity; when absent the category default applies.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Pre-existing occupancy at initialization.
    #[serde(default)]
    pub occupied: u32,
}

impl RoomConfig {
    /// Materialize the room this config describes.
    #[must_use]
    pub fn to_room(&self) -> Room {
        let mut room = Room::new(self.id.clone(), self.kind);
        if let Some(capacity) = self.capacity {
            room.capacity = capacity;
        }
        room.occupied = self.occupied;
        room
    }

    /// Validate room configuration values.
    ///
    /// # Errors
    /// A human-readable description of the first failed check.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("room id must not be empty".into());
        }
        let capacity = self.capacity.unwrap_or_else(|| self.kind.default_capacity());
        if capacity == 0 {
            return Err(format!("room `{}` capacity must be greater than 0", self.id));
        }
        if self.occupied > capacity {
            return Err(format!(
                "room `{}` occupancy {} exceeds capacity {capacity}",
                self.id, self.occupied
            ));
        }
        Ok(())
    }
}

/// Root allotment configuration: rooms to register and applications to admit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllotmentConfig {
    /// Rooms registered at initialization, in fallback-scan order.
    pub rooms: Vec<RoomConfig>,
    /// Applications admitted at initialization.
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl AllotmentConfig {
    /// Validate all rooms and applications; ensures at least one room exists.
    ///
    /// Full referential checks (preference ids, duplicate applicant ids) are
    /// the intake/engine's job; this catches shape problems early.
    ///
    /// # Errors
    /// A human-readable description of the first failed check.
    pub fn validate(&self) -> Result<(), String> {
        if self.rooms.is_empty() {
            return Err("at least one room must be defined".into());
        }
        for room in &self.rooms {
            room.validate()?;
        }
        for app in &self.applications {
            if app.applicant_id.trim().is_empty() {
                return Err("application id must not be empty".into());
            }
            if !app.merit.is_finite() || !(MERIT_MIN..=MERIT_MAX).contains(&app.merit) {
                return Err(format!(
                    "application `{}` merit outside {MERIT_MIN}..={MERIT_MAX}",
                    app.applicant_id
                ));
            }
            if app.preferences.len() > MAX_PREFERENCES {
                return Err(format!(
                    "application `{}` lists more than {MAX_PREFERENCES} preferences",
                    app.applicant_id
                ));
            }
        }
        Ok(())
    }

    /// Parse allotment configuration from a JSON string and validate.
    ///
    /// # Errors
    /// A human-readable parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
