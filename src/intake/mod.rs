//! Intake boundary: validates raw applications before the core sees them.
//!
//! Validation errors are recovered locally by the caller; nothing here
//! mutates existing state.

use serde::{Deserialize, Serialize};

use crate::core::applicant::{Applicant, SpecialStatus, MAX_PREFERENCES};
use crate::core::error::AllotmentError;
use crate::core::registry::RoomRegistry;
use crate::core::scoring::{MERIT_MAX, MERIT_MIN};
use crate::util::clock::now_ms;

/// A raw application as supplied by an intake collaborator (form, seed file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique applicant identifier.
    #[serde(rename = "id")]
    pub applicant_id: String,
    /// Display name.
    pub name: String,
    /// Merit value; must lie in [`MERIT_MIN`]..=[`MERIT_MAX`].
    pub merit: f64,
    /// Special-priority status.
    #[serde(default)]
    pub status: SpecialStatus,
    /// Ordered room preferences, most preferred first.
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Submission timestamp in ms since epoch; defaults to now when absent.
    #[serde(default)]
    pub submitted_at_ms: Option<u64>,
}

/// Validate an application and construct the corresponding [`Applicant`].
///
/// Checks: non-empty id and name, finite merit within bounds, at most
/// [`MAX_PREFERENCES`] preferences, no repeated preference, and every
/// preference referring to a registered room.
///
/// # Errors
/// [`AllotmentError::InvalidInput`] describing the first failed check.
pub fn admit(
    application: Application,
    registry: &RoomRegistry,
) -> Result<Applicant, AllotmentError> {
    let Application {
        applicant_id,
        name,
        merit,
        status,
        preferences,
        submitted_at_ms,
    } = application;

    if applicant_id.trim().is_empty() {
        return Err(AllotmentError::InvalidInput("applicant id is empty".into()));
    }
    if name.trim().is_empty() {
        return Err(AllotmentError::InvalidInput(format!(
            "applicant `{applicant_id}` has an empty name"
        )));
    }
    if !merit.is_finite() || !(MERIT_MIN..=MERIT_MAX).contains(&merit) {
        return Err(AllotmentError::InvalidInput(format!(
            "applicant `{applicant_id}` merit {merit} outside {MERIT_MIN}..={MERIT_MAX}"
        )));
    }
    if preferences.len() > MAX_PREFERENCES {
        return Err(AllotmentError::InvalidInput(format!(
            "applicant `{applicant_id}` lists {} preferences (max {MAX_PREFERENCES})",
            preferences.len()
        )));
    }
    for (i, room_id) in preferences.iter().enumerate() {
        if !registry.contains(room_id) {
            return Err(AllotmentError::InvalidInput(format!(
                "applicant `{applicant_id}` preference `{room_id}` is not a registered room"
            )));
        }
        if preferences[..i].contains(room_id) {
            return Err(AllotmentError::InvalidInput(format!(
                "applicant `{applicant_id}` lists room `{room_id}` twice"
            )));
        }
    }

    let submitted_at_ms = submitted_at_ms.unwrap_or_else(now_ms);
    Ok(Applicant::new(
        applicant_id,
        name,
        merit,
        status,
        preferences,
        submitted_at_ms,
    ))
}
