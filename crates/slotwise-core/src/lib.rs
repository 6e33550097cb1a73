//! # slotwise-core
//!
//! Slot-based conference room allocation engine.
//!
//! Time of day is discretized into a fixed 15-minute grid. A [`Calendar`]
//! tracks, per slot, which rooms are still free together with their
//! capacities; the allocator books the room whose capacity sits nearest
//! above a request and removes it from that slot; a merge step folds the
//! per-slot outcome back into readable time ranges.
//!
//! ## Quick start
//!
//! ```rust
//! use slotwise_core::{expand_range, schedule_meeting, Calendar, Meeting, Room, RoomId};
//!
//! let rooms = vec![
//!     Room::new(RoomId::new(7, 11), 8, expand_range("09:00", "17:00").unwrap()),
//!     Room::new(RoomId::new(7, 12), 4, expand_range("09:00", "17:00").unwrap()),
//! ];
//!
//! let mut calendar = Calendar::build("08:00", "18:00").unwrap();
//! calendar.populate(&rooms);
//!
//! // Three people, 10:30 to 11:30: the 4-seat room is the nearest fit
//! // above the request, so the 8-seat room stays free for bigger groups.
//! let meeting = Meeting::new(3, 7, "10:30", "11:30").unwrap();
//! let report = schedule_meeting(&mut calendar, &meeting).unwrap();
//!
//! assert_eq!(report[0].room, Some(RoomId::new(7, 12)));
//! assert_eq!(report[0].ranges[0].to_string(), "10:30-11:30");
//! ```
//!
//! ## Modules
//!
//! - [`slot`] — the 15-minute grid and time-range expansion
//! - [`room`] — room identity, capacity and declared availability
//! - [`meeting`] — a validated booking request
//! - [`calendar`] — per-slot index of still-available rooms
//! - [`allocate`] — nearest-fit selection with removal
//! - [`merge`] — collapse booked slots into contiguous ranges
//! - [`schedule`] — book a whole meeting in one call
//! - [`error`] — error types

pub mod allocate;
pub mod calendar;
pub mod error;
pub mod meeting;
pub mod merge;
pub mod room;
pub mod schedule;
pub mod slot;

pub use allocate::{allocate, Assignment};
pub use calendar::{Calendar, Candidate};
pub use error::{Result, SlotwiseError};
pub use meeting::Meeting;
pub use merge::{merge_slots, TimeRange};
pub use room::{Room, RoomId};
pub use schedule::{schedule_meeting, RoomSchedule};
pub use slot::{expand_range, Slot, SLOTS_PER_DAY, SLOT_MINUTES};
