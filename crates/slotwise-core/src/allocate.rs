//! Nearest-fit room allocation -- pick and remove the best candidate for one
//! slot.
//!
//! Allocation is deliberately stateful: a successful call removes the chosen
//! room from that slot's candidate list, so repeating the same call can give
//! a different answer from the now-smaller pool. That is the model -- the
//! room is taken.
//!
//! Candidate lists of distinct slots never overlap, so allocations for
//! different slots are order-independent; only calls against the *same* slot
//! contend. That per-slot independence is the precondition any future
//! by-slot work partitioning would rely on; the engine itself runs on a
//! single thread.

use crate::calendar::{Calendar, Candidate};
use crate::room::RoomId;
use crate::slot::Slot;

/// The outcome of allocating one slot: the room booked for it, or `None`
/// when no room could take the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub slot: Slot,
    pub room: Option<RoomId>,
}

/// Book the best-fitting room for `slot`, removing it from the calendar.
///
/// Selection: among candidates with `capacity >= requested`, take the one
/// with the least capacity overflow (nearest fit above). Ties go to the
/// earliest candidate in the list's current order, which follows room input
/// order -- outcomes therefore depend on roster order.
///
/// A slot outside office hours, or one whose candidates all fall short of
/// the requested capacity, yields `room: None` and leaves the calendar
/// untouched. Neither case is an error.
pub fn allocate(calendar: &mut Calendar, slot: Slot, requested: u32) -> Assignment {
    let candidates = match calendar.candidates_mut(slot) {
        Some(list) => list,
        None => return Assignment { slot, room: None },
    };
    match nearest_fit(candidates, requested) {
        Some(index) => {
            let chosen = candidates.remove(index);
            Assignment {
                slot,
                room: Some(chosen.room),
            }
        }
        None => Assignment { slot, room: None },
    }
}

/// Index of the candidate with sufficient capacity closest to `requested`;
/// the first such candidate wins ties. `None` if nothing is big enough.
fn nearest_fit(candidates: &[Candidate], requested: u32) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.capacity < requested {
            continue;
        }
        let overflow = candidate.capacity - requested;
        match best {
            Some((_, best_overflow)) if best_overflow <= overflow => {}
            _ => best = Some((index, overflow)),
        }
    }
    best.map(|(index, _)| index)
}
