//! Tests for meeting request construction and validation.

use slotwise_core::{expand_range, Meeting, SLOTS_PER_DAY};

#[test]
fn meeting_derives_its_slots_from_the_window() {
    let meeting = Meeting::new(4, 7, "10:00", "11:00").unwrap();

    assert_eq!(meeting.capacity(), 4);
    assert_eq!(meeting.floor(), 7);
    assert_eq!(meeting.slots(), &expand_range("10:00", "11:00").unwrap()[..]);
    assert_eq!(meeting.window(), ("10:00", "11:00"));
}

#[test]
fn all_day_meeting_needs_every_slot() {
    let meeting = Meeting::new(2, 9, "00:00", "00:00").unwrap();

    assert_eq!(meeting.slots().len(), SLOTS_PER_DAY);
}

#[test]
fn meeting_covering_no_slot_is_rejected() {
    // (10:05, 10:10) touches no grid time, so there is nothing to book.
    let result = Meeting::new(4, 7, "10:05", "10:10");

    assert!(result.is_err(), "a zero-slot meeting should be rejected");
    assert!(result.unwrap_err().to_string().contains("does not cover"));
}

#[test]
fn meeting_with_malformed_times_is_rejected() {
    assert!(Meeting::new(4, 7, "10am", "11:00").is_err());
    assert!(Meeting::new(4, 7, "11:00", "10:00").is_err());
}
