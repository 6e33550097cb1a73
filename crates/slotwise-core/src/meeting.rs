//! Meeting requests -- capacity, floor, and the slots a window occupies.

use crate::error::{Result, SlotwiseError};
use crate::slot::{expand_range, Slot};

/// A meeting request. Immutable once constructed: the requested window is
/// expanded into slots up front, and the original labels are kept for
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    capacity: u32,
    floor: u16,
    slots: Vec<Slot>,
    start: String,
    end: String,
}

impl Meeting {
    /// Build a meeting request for `capacity` people on `floor` over the
    /// `start`..`end` window (`HH:MM` labels; equal labels mean all day).
    ///
    /// # Errors
    /// Propagates window-expansion failures ([`expand_range`]), and returns
    /// `SlotwiseError::EmptyRange` when the window covers no slot at all -- a
    /// zero-slot scheduling attempt is invalid and is rejected here, before
    /// it can reach a calendar.
    pub fn new(capacity: u32, floor: u16, start: &str, end: &str) -> Result<Self> {
        let slots = expand_range(start, end)?;
        if slots.is_empty() {
            return Err(SlotwiseError::EmptyRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            capacity,
            floor,
            slots,
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn floor(&self) -> u16 {
        self.floor
    }

    /// The slots this meeting needs, in increasing order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The original `(start, end)` labels, for reporting.
    pub fn window(&self) -> (&str, &str) {
        (&self.start, &self.end)
    }
}
