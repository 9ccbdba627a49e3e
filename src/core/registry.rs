//! Room registry with capacity accounting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::error::AllotmentError;

/// Room category. Capacity defaults follow the category but an explicit
/// capacity may override it in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// One bed.
    Single,
    /// Two beds.
    Double,
    /// Three beds.
    Triple,
}

impl RoomKind {
    /// Capacity implied by the category.
    #[must_use]
    pub const fn default_capacity(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Triple => "Triple",
        }
    }
}

/// A capacity-limited allocatable room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room category.
    pub kind: RoomKind,
    /// Total capacity; always positive.
    pub capacity: u32,
    /// Current occupancy; never exceeds `capacity`, never decrements.
    pub occupied: u32,
}

impl Room {
    /// Create a room with the category's default capacity and zero occupancy.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id: id.into(),
            kind,
            capacity: kind.default_capacity(),
            occupied: 0,
        }
    }

    /// Whether at least one spot remains.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.occupied < self.capacity
    }

    /// Remaining free spots.
    #[must_use]
    pub const fn free_spots(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }
}

/// Registry of all allotable rooms, keyed by identifier.
///
/// Rooms are created once at initialization and mutated only through
/// [`RoomRegistry::place`]. Iteration order is registration order, which is
/// stable within a run; the allocation engine's fallback scan relies on it.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
}

impl RoomRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room.
    ///
    /// # Errors
    /// [`AllotmentError::DuplicateKey`] if a room with the same id exists;
    /// [`AllotmentError::InvalidInput`] if capacity is zero or occupancy
    /// already exceeds capacity.
    pub fn register(&mut self, room: Room) -> Result<(), AllotmentError> {
        if room.capacity == 0 {
            return Err(AllotmentError::InvalidInput(format!(
                "room `{}` has zero capacity",
                room.id
            )));
        }
        if room.occupied > room.capacity {
            return Err(AllotmentError::InvalidInput(format!(
                "room `{}` occupancy {} exceeds capacity {}",
                room.id, room.occupied, room.capacity
            )));
        }
        if self.index.contains_key(&room.id) {
            return Err(AllotmentError::DuplicateKey(room.id));
        }
        tracing::debug!(room = %room.id, kind = room.kind.label(), "room registered");
        self.index.insert(room.id.clone(), self.rooms.len());
        self.rooms.push(room);
        Ok(())
    }

    /// Whether the room has at least one free spot.
    ///
    /// # Errors
    /// [`AllotmentError::NotFound`] for an unknown id.
    pub fn has_capacity(&self, id: &str) -> Result<bool, AllotmentError> {
        self.get(id).map(Room::available)
    }

    /// Increment the room's occupancy by one.
    ///
    /// The engine checks [`Self::has_capacity`] first; a [`AllotmentError::RoomFull`]
    /// here is an invariant violation, not an expected condition.
    ///
    /// # Errors
    /// [`AllotmentError::NotFound`] for an unknown id,
    /// [`AllotmentError::RoomFull`] when no capacity remains.
    pub fn place(&mut self, id: &str) -> Result<(), AllotmentError> {
        let slot = *self
            .index
            .get(id)
            .ok_or_else(|| AllotmentError::NotFound(id.to_string()))?;
        let room = &mut self.rooms[slot];
        if !room.available() {
            tracing::error!(room = %id, "placement into full room attempted");
            return Err(AllotmentError::RoomFull(id.to_string()));
        }
        room.occupied += 1;
        tracing::debug!(
            room = %id,
            occupied = room.occupied,
            capacity = room.capacity,
            "occupancy incremented"
        );
        Ok(())
    }

    /// Look up a room by id.
    ///
    /// # Errors
    /// [`AllotmentError::NotFound`] for an unknown id.
    pub fn get(&self, id: &str) -> Result<&Room, AllotmentError> {
        self.index
            .get(id)
            .map(|&slot| &self.rooms[slot])
            .ok_or_else(|| AllotmentError::NotFound(id.to_string()))
    }

    /// Whether a room with this id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate all rooms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of registered rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the registry holds no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Sum of all room capacities.
    #[must_use]
    pub fn total_capacity(&self) -> u32 {
        self.rooms.iter().map(|r| r.capacity).sum()
    }

    /// Sum of all room occupancies.
    #[must_use]
    pub fn total_occupied(&self) -> u32 {
        self.rooms.iter().map(|r| r.occupied).sum()
    }
}

impl<'a> IntoIterator for &'a RoomRegistry {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}
