//! The 15-minute scheduling grid -- `Slot` values and time-range expansion.
//!
//! A [`Slot`] is one quantum of the recurring daily schedule: a time of day
//! that is an exact multiple of [`SLOT_MINUTES`] past midnight. A slot stands
//! for itself *and* the granularity-width interval that follows it, so a
//! meeting occupying 10:00 and 10:15 runs from 10:00 until 10:30.
//!
//! [`expand_range`] discretizes an `HH:MM` window into the ordered slots it
//! covers, end-exclusive: the window `(10:00, 10:30)` expands to
//! `{10:00, 10:15}`, never `10:30`.

use crate::error::{Result, SlotwiseError};
use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Width of one scheduling slot, in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Number of slots in a full day (96).
pub const SLOTS_PER_DAY: usize = (24 * 60 / SLOT_MINUTES) as usize;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A single 15-minute scheduling quantum, identified by its time of day.
///
/// Slots are day-agnostic (they describe a recurring daily schedule, not an
/// absolute timestamp) and always sit on the grid: construction through
/// [`Slot::new`] or [`Slot::parse`] rejects anything else. Ordering follows
/// the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(NaiveTime);

impl Slot {
    /// Wrap a time of day as a slot.
    ///
    /// # Errors
    /// Returns `SlotwiseError::OffGrid` if the time has a seconds component
    /// or is not a whole multiple of [`SLOT_MINUTES`] past midnight.
    pub fn new(time: NaiveTime) -> Result<Self> {
        if time.second() != 0 || time.nanosecond() != 0 || time.minute() % SLOT_MINUTES != 0 {
            return Err(SlotwiseError::OffGrid(time.to_string()));
        }
        Ok(Self(time))
    }

    /// Parse an `HH:MM` label directly into a slot.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidTime` if the label is not a valid time
    /// of day, or `SlotwiseError::OffGrid` if it does not sit on the grid.
    pub fn parse(label: &str) -> Result<Self> {
        Self::new(parse_time(label)?)
    }

    /// The time of day this slot starts at.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// The slot one granularity step later, wrapping at midnight
    /// (23:45 -> 00:00) so the recurring day closes on itself.
    pub fn next(&self) -> Slot {
        Slot(self.0 + Duration::minutes(i64::from(SLOT_MINUTES)))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Expand an `HH:MM` window into the ordered slots it covers.
///
/// The window is half-open: every grid time `s` with `start <= s < end` is
/// produced, in strictly increasing order, consecutive elements exactly one
/// granularity step apart. Two special end conventions, both resolving to the
/// same "up to but excluding the boundary" reading:
///
/// - `start == end` means the full day: 00:00 through 23:45, 96 slots.
/// - an `end` of `00:00` after a later `start` means "up to midnight", so
///   `(23:00, 00:00)` expands to `{23:00, 23:15, 23:30, 23:45}`.
///
/// Endpoints need not sit on the grid; a start inside a slot rounds forward
/// to the next grid time. A window too short to reach any grid time expands
/// to an empty sequence.
///
/// # Errors
/// Returns `SlotwiseError::InvalidTime` if either label fails to parse, and
/// `SlotwiseError::ReversedRange` if `start` is after `end` (wrap-around
/// windows would break the one-step-apart ordering and are rejected).
pub fn expand_range(start: &str, end: &str) -> Result<Vec<Slot>> {
    let start_time = parse_time(start)?;
    let end_time = parse_time(end)?;

    if start_time == end_time {
        return Ok(walk(Slot(NaiveTime::MIN), SLOTS_PER_DAY));
    }

    let start_minute = minute_of(start_time);
    // Midnight as an end is the end of the day, not a wrap to its start.
    let end_minute = if end_time == NaiveTime::MIN {
        MINUTES_PER_DAY
    } else {
        minute_of(end_time)
    };

    if end_minute < start_minute {
        return Err(SlotwiseError::ReversedRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    // First grid time at or after the window start.
    let lead = (SLOT_MINUTES - start_minute % SLOT_MINUTES) % SLOT_MINUTES;
    let first_minute = start_minute + lead;
    if first_minute >= end_minute {
        return Ok(Vec::new());
    }

    let count = (end_minute - first_minute).div_ceil(SLOT_MINUTES) as usize;
    let first = Slot(start_time + Duration::minutes(i64::from(lead)));
    Ok(walk(first, count))
}

/// Produce `count` consecutive slots starting at `first`.
fn walk(first: Slot, count: usize) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(count);
    let mut cursor = first;
    for _ in 0..count {
        slots.push(cursor);
        cursor = cursor.next();
    }
    slots
}

fn minute_of(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn parse_time(label: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(label.trim(), "%H:%M")
        .map_err(|_| SlotwiseError::InvalidTime(label.to_string()))
}
