use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use slotwise_core::{
    expand_range, merge_slots, schedule_meeting, Calendar, Meeting, Room, RoomId, Slot,
    SLOTS_PER_DAY,
};

// Workload knobs: a mid-size office tower, one business day.
const FLOORS: u16 = 12;
const ROOMS_PER_FLOOR: u16 = 8;

/// 96 rooms with capacities cycling through 2..=16, each open for the
/// whole office day.
fn build_roster() -> Vec<Room> {
    let mut rooms = Vec::new();
    for floor in 1..=FLOORS {
        for unit in 1..=ROOMS_PER_FLOOR {
            let capacity = 2 + u32::from((floor + unit * 3) % 15);
            rooms.push(Room::new(
                RoomId::new(floor, unit),
                capacity,
                expand_range("08:00", "18:00").unwrap(),
            ));
        }
    }
    rooms
}

fn build_calendar(rooms: &[Room]) -> Calendar {
    let mut calendar = Calendar::build("08:00", "18:00").unwrap();
    calendar.populate(rooms);
    calendar
}

/// A day's worth of staggered one- and two-hour meetings of mixed size.
fn build_meetings() -> Vec<Meeting> {
    (0..48u32)
        .map(|i| {
            let capacity = 2 + (i * 5) % 13;
            let start_hour = 8 + (i % 9);
            let end_hour = start_hour + 1 + (i % 2);
            Meeting::new(
                capacity,
                1 + (i % 12) as u16,
                &format!("{:02}:00", start_hour),
                &format!("{:02}:00", end_hour),
            )
            .unwrap()
        })
        .collect()
}

fn bench_populate(c: &mut Criterion) {
    let rooms = build_roster();

    c.bench_function("populate_96_rooms_full_day", |b| {
        b.iter_batched(
            || Calendar::build("08:00", "18:00").unwrap(),
            |mut calendar| {
                calendar.populate(&rooms);
                black_box(calendar);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_schedule_day(c: &mut Criterion) {
    let rooms = build_roster();
    let meetings = build_meetings();

    c.bench_function("schedule_48_meetings", |b| {
        b.iter_batched(
            || build_calendar(&rooms),
            |mut calendar| {
                for meeting in &meetings {
                    let report = schedule_meeting(&mut calendar, meeting).unwrap();
                    black_box(report);
                }
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_merge(c: &mut Criterion) {
    // A fragmented day: three slots booked out of every four.
    let slots: Vec<Slot> = expand_range("00:00", "00:00")
        .unwrap()
        .into_iter()
        .enumerate()
        .filter(|(index, _)| index % 4 != 3)
        .map(|(_, slot)| slot)
        .collect();
    assert_eq!(slots.len(), SLOTS_PER_DAY / 4 * 3);

    c.bench_function("merge_fragmented_day", |b| {
        b.iter(|| merge_slots(black_box(&slots)).unwrap());
    });
}

criterion_group!(allocation, bench_populate, bench_schedule_day, bench_merge);
criterion_main!(allocation);
