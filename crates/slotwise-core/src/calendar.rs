//! The calendar -- per-slot index of rooms still available for booking.
//!
//! A [`Calendar`] maps every slot inside office hours to the ordered list of
//! `(room, capacity)` pairs not yet booked for that slot. It is the only
//! mutable state in the engine: [`populate`](Calendar::populate) fills it
//! from room definitions once, then each successful
//! [`allocate`](crate::allocate::allocate) call removes one candidate from
//! one slot's list.

use crate::error::Result;
use crate::room::{Room, RoomId};
use crate::slot::{expand_range, Slot};
use std::collections::BTreeMap;

/// One bookable entry in a slot's candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub room: RoomId,
    pub capacity: u32,
}

/// Mutable per-run index from slot to the rooms still unbooked at that slot.
///
/// Invariants: one entry per office-hours slot; a room appears in a slot's
/// list at most once, and only until it is booked for that slot. Candidate
/// lists of distinct slots share no state, so bookings for different slots
/// are independent of each other.
#[derive(Debug, Clone)]
pub struct Calendar {
    slots: BTreeMap<Slot, Vec<Candidate>>,
}

impl Calendar {
    /// Create an empty calendar covering the office-hours window
    /// (`HH:MM` labels; equal labels mean all day).
    ///
    /// # Errors
    /// Propagates window-expansion failures ([`expand_range`]).
    pub fn build(office_start: &str, office_end: &str) -> Result<Self> {
        let slots = expand_range(office_start, office_end)?
            .into_iter()
            .map(|slot| (slot, Vec::new()))
            .collect();
        Ok(Self { slots })
    }

    /// Append every room to the candidate list of each of its availability
    /// slots that falls inside office hours; out-of-hours availability is
    /// silently dropped. List order follows room input order, which is the
    /// allocator's tie-break order.
    pub fn populate(&mut self, rooms: &[Room]) {
        for room in rooms {
            for slot in room.availability() {
                if let Some(list) = self.slots.get_mut(slot) {
                    list.push(Candidate {
                        room: room.id(),
                        capacity: room.capacity(),
                    });
                }
            }
        }
    }

    /// Whether `slot` falls inside office hours.
    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// The rooms still bookable at `slot`, or `None` outside office hours.
    pub fn candidates(&self, slot: Slot) -> Option<&[Candidate]> {
        self.slots.get(&slot).map(Vec::as_slice)
    }

    /// Number of slots the calendar tracks.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All tracked slots with their candidate lists, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[Candidate])> + '_ {
        self.slots.iter().map(|(slot, list)| (*slot, list.as_slice()))
    }

    pub(crate) fn candidates_mut(&mut self, slot: Slot) -> Option<&mut Vec<Candidate>> {
        self.slots.get_mut(&slot)
    }
}
