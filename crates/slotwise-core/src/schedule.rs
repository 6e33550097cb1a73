//! End-to-end scheduling of one meeting against a calendar.
//!
//! Runs the allocator once per requested slot, groups the outcomes by room
//! (with "no room found" as its own group), and folds each group's slots
//! into contiguous ranges for reporting. Groups appear in the order their
//! room was first engaged, so a report reads in booking order.

use crate::allocate::allocate;
use crate::calendar::Calendar;
use crate::error::Result;
use crate::meeting::Meeting;
use crate::merge::{merge_slots, TimeRange};
use crate::room::RoomId;
use crate::slot::Slot;

/// One room's share of a meeting: which room (or `None` when no room could
/// be found) and the merged time ranges it covers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RoomSchedule {
    pub room: Option<RoomId>,
    pub ranges: Vec<TimeRange>,
}

/// Book every slot the meeting needs and report the result per room.
///
/// Each slot is allocated independently, so a long meeting may end up
/// split across several rooms, or partially unbooked, when no single room
/// covers the whole window. Allocations commit to the calendar as they
/// happen; a later failure does not roll back earlier slots.
///
/// # Errors
///
/// Propagates [`merge_slots`] failures. These cannot occur for a meeting
/// built through [`Meeting::new`], which guarantees at least one slot.
pub fn schedule_meeting(calendar: &mut Calendar, meeting: &Meeting) -> Result<Vec<RoomSchedule>> {
    let mut buckets: Vec<(Option<RoomId>, Vec<Slot>)> = Vec::new();
    for &slot in meeting.slots() {
        let assignment = allocate(calendar, slot, meeting.capacity());
        match buckets.iter_mut().find(|(room, _)| *room == assignment.room) {
            Some((_, slots)) => slots.push(assignment.slot),
            None => buckets.push((assignment.room, vec![assignment.slot])),
        }
    }

    buckets
        .into_iter()
        .map(|(room, slots)| {
            Ok(RoomSchedule {
                room,
                ranges: merge_slots(&slots)?,
            })
        })
        .collect()
}
