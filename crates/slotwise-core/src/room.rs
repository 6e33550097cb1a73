//! Room definitions -- identifiers and declared availability.

use crate::error::SlotwiseError;
use crate::slot::Slot;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifies a room by its floor and unit, displayed as `floor.unit`
/// (`7.11` is unit 11 on floor 7).
///
/// The id is a pair of integers, not a decimal number: `7.1` and `7.10` are
/// different rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId {
    floor: u16,
    unit: u16,
}

impl RoomId {
    pub fn new(floor: u16, unit: u16) -> Self {
        Self { floor, unit }
    }

    pub fn floor(&self) -> u16 {
        self.floor
    }

    pub fn unit(&self) -> u16 {
        self.unit
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.floor, self.unit)
    }
}

impl FromStr for RoomId {
    type Err = SlotwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotwiseError::InvalidRoomId(s.to_string());
        let (floor, unit) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            floor: floor.parse().map_err(|_| invalid())?,
            unit: unit.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for RoomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A room: identifier, seating capacity, and the slots it is declared
/// available during. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    capacity: u32,
    availability: Vec<Slot>,
}

impl Room {
    /// Build a room from its declared availability.
    ///
    /// The slots are normalized (sorted, duplicates removed), so overlapping
    /// declared windows collapse and the room can appear at most once in any
    /// calendar slot's candidate list.
    pub fn new(id: RoomId, capacity: u32, availability: impl IntoIterator<Item = Slot>) -> Self {
        let mut slots: Vec<Slot> = availability.into_iter().collect();
        slots.sort_unstable();
        slots.dedup();
        Self {
            id,
            capacity,
            availability: slots,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The normalized availability slots, in increasing order.
    pub fn availability(&self) -> &[Slot] {
        &self.availability
    }
}
