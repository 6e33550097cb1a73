//! Collapse booked slots back into human-readable time ranges.
//!
//! Bookings are tracked slot by slot, but nobody wants to read four lines
//! for a one-hour meeting. This module folds a set of slots into maximal
//! contiguous runs and reports each run as a half-open `TimeRange`, where
//! the end is one grid step past the last slot in the run.

use std::fmt;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

use crate::error::{Result, SlotwiseError};
use crate::slot::Slot;

/// A contiguous span of booked time, end-exclusive.
///
/// `end` is the boundary after the final slot of the run, so a single
/// 23:45 slot yields the range 23:45-00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    #[serde(serialize_with = "serialize_label")]
    pub start: NaiveTime,
    #[serde(serialize_with = "serialize_label")]
    pub end: NaiveTime,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn serialize_label<S>(time: &NaiveTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format("%H:%M"))
}

/// Merge slots into maximal contiguous ranges, ordered by start time.
///
/// Input order does not matter and duplicates are ignored; the slots are
/// sorted before runs are formed. Two slots belong to the same run when
/// they sit exactly one grid step apart.
///
/// # Errors
///
/// Returns [`SlotwiseError::EmptyMerge`] when `slots` is empty. A booking
/// with nothing in it is a caller bug, not a zero-range report.
pub fn merge_slots(slots: &[Slot]) -> Result<Vec<TimeRange>> {
    if slots.is_empty() {
        return Err(SlotwiseError::EmptyMerge);
    }

    let mut ordered = slots.to_vec();
    ordered.sort_unstable();
    ordered.dedup();

    let mut runs: Vec<(Slot, Slot)> = Vec::new();
    for slot in ordered {
        match runs.last_mut() {
            Some((_, run_end)) if run_end.next() == slot => *run_end = slot,
            _ => runs.push((slot, slot)),
        }
    }

    Ok(runs
        .into_iter()
        .map(|(start, last)| TimeRange {
            start: start.time(),
            end: last.next().time(),
        })
        .collect())
}
