//! Error types for slotwise-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotwiseError {
    /// A time-of-day label could not be parsed.
    #[error("invalid time of day `{0}`: expected HH:MM")]
    InvalidTime(String),

    /// A room identifier could not be parsed.
    #[error("invalid room id `{0}`: expected floor.unit (e.g. 7.11)")]
    InvalidRoomId(String),

    /// A time handed to a [`Slot`](crate::slot::Slot) constructor was not a
    /// whole multiple of the grid granularity.
    #[error("time {0} is not on the 15-minute slot grid")]
    OffGrid(String),

    /// A time range ran backwards (start after end).
    #[error("invalid time range: start {start} is after end {end}")]
    ReversedRange { start: String, end: String },

    /// A meeting window so short it covers no slot at all.
    #[error("time range {start}-{end} does not cover any 15-minute slot")]
    EmptyRange { start: String, end: String },

    /// Merging was asked to merge nothing.
    #[error("no slots to merge")]
    EmptyMerge,
}

/// Convenience alias used throughout slotwise-core.
pub type Result<T> = std::result::Result<T, SlotwiseError>;
