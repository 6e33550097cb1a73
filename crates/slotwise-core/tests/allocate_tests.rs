//! Tests for nearest-fit allocation against a live calendar.

use slotwise_core::{allocate, expand_range, Calendar, Room, RoomId, Slot};

fn slot(label: &str) -> Slot {
    Slot::parse(label).unwrap()
}

fn room(floor: u16, unit: u16, capacity: u32, start: &str, end: &str) -> Room {
    Room::new(
        RoomId::new(floor, unit),
        capacity,
        expand_range(start, end).unwrap(),
    )
}

/// Helper to build an 08:00-18:00 office calendar populated with `rooms`.
fn office_with(rooms: &[Room]) -> Calendar {
    let mut calendar = Calendar::build("08:00", "18:00").unwrap();
    calendar.populate(rooms);
    calendar
}

#[test]
fn exact_fit_books_the_room_and_empties_the_slot() {
    let rooms = vec![room(7, 11, 5, "09:00", "10:00")];
    let mut calendar = office_with(&rooms);

    let first = allocate(&mut calendar, slot("09:00"), 5);
    assert_eq!(first.slot, slot("09:00"));
    assert_eq!(first.room, Some(RoomId::new(7, 11)));
    assert!(
        calendar.candidates(slot("09:00")).unwrap().is_empty(),
        "a booked room must leave the slot's candidate list"
    );

    // The pool at 09:00 is now empty, so the same request finds nothing.
    let second = allocate(&mut calendar, slot("09:00"), 5);
    assert_eq!(second.room, None);
}

#[test]
fn nearest_capacity_above_wins_over_a_bigger_room() {
    let rooms = vec![
        room(7, 11, 10, "09:00", "10:00"),
        room(7, 12, 6, "09:00", "10:00"),
    ];
    let mut calendar = office_with(&rooms);

    // Overflow 1 beats overflow 5.
    let assignment = allocate(&mut calendar, slot("09:00"), 5);
    assert_eq!(assignment.room, Some(RoomId::new(7, 12)));
}

#[test]
fn equal_overflow_ties_break_on_input_order() {
    let rooms = vec![
        room(9, 511, 6, "09:00", "10:00"),
        room(9, 527, 6, "09:00", "10:00"),
    ];
    let mut calendar = office_with(&rooms);

    let first = allocate(&mut calendar, slot("09:00"), 5);
    assert_eq!(first.room, Some(RoomId::new(9, 511)));

    let second = allocate(&mut calendar, slot("09:00"), 5);
    assert_eq!(second.room, Some(RoomId::new(9, 527)));
}

#[test]
fn undersized_rooms_are_never_booked() {
    let rooms = vec![
        room(7, 12, 4, "09:00", "10:00"),
        room(9, 511, 2, "09:00", "10:00"),
    ];
    let mut calendar = office_with(&rooms);

    let assignment = allocate(&mut calendar, slot("09:00"), 12);
    assert_eq!(assignment.room, None);
    assert_eq!(
        calendar.candidates(slot("09:00")).unwrap().len(),
        2,
        "a failed allocation must leave the candidate list untouched"
    );
}

#[test]
fn out_of_hours_slot_finds_no_room() {
    let rooms = vec![room(8, 23, 6, "00:00", "00:00")];
    let mut calendar = office_with(&rooms);

    // 19:00 is a valid slot but the office closed at 18:00.
    let assignment = allocate(&mut calendar, slot("19:00"), 1);
    assert_eq!(assignment.slot, slot("19:00"));
    assert_eq!(assignment.room, None);
}

#[test]
fn booking_one_slot_leaves_the_others_alone() {
    let rooms = vec![room(7, 11, 8, "09:00", "10:00")];
    let mut calendar = office_with(&rooms);

    let assignment = allocate(&mut calendar, slot("09:00"), 3);
    assert_eq!(assignment.room, Some(RoomId::new(7, 11)));

    assert!(calendar.candidates(slot("09:00")).unwrap().is_empty());
    assert_eq!(
        calendar.candidates(slot("09:15")).unwrap().len(),
        1,
        "the room is only booked for the slot that was allocated"
    );
}
