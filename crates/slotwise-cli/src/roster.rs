//! Room roster loading.
//!
//! A roster file holds whitespace-separated room records, each a
//! comma-separated `floor.unit,capacity,start,end[,start,end]...` field list:
//!
//! ```text
//! 7.11,8,09:00,12:00,13:00,17:00
//! 7.12,4,09:00,17:00
//! 8.23,6,00:00,00:00
//! ```
//!
//! A record may declare several availability windows; `00:00,00:00` declares
//! the room available around the clock.

use anyhow::{bail, Context, Result};
use slotwise_core::{expand_range, Room, RoomId, Slot};
use std::path::Path;

/// Read and parse a roster file.
pub fn load_roster(path: &Path) -> Result<Vec<Room>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;
    parse_roster(&text).with_context(|| format!("invalid roster file: {}", path.display()))
}

/// Parse whitespace-separated roster records.
///
/// Rejects an empty roster and duplicate room ids: one room, one record.
pub fn parse_roster(text: &str) -> Result<Vec<Room>> {
    let mut rooms: Vec<Room> = Vec::new();
    for record in text.split_whitespace() {
        let room =
            parse_record(record).with_context(|| format!("bad room record `{}`", record))?;
        if rooms.iter().any(|existing| existing.id() == room.id()) {
            bail!("room {} is declared twice", room.id());
        }
        rooms.push(room);
    }
    if rooms.is_empty() {
        bail!("roster declares no rooms");
    }
    Ok(rooms)
}

/// Parse one `floor.unit,capacity,start,end[,start,end]...` record.
fn parse_record(record: &str) -> Result<Room> {
    let fields: Vec<&str> = record.split(',').collect();
    if fields.len() < 4 {
        bail!(
            "expected at least 4 comma-separated fields, got {}",
            fields.len()
        );
    }
    if fields.len() % 2 != 0 {
        bail!("availability times must come in start,end pairs");
    }

    let id: RoomId = fields[0].parse()?;
    let capacity: u32 = fields[1]
        .parse()
        .with_context(|| format!("invalid capacity `{}`", fields[1]))?;
    if capacity == 0 {
        bail!("capacity must be positive");
    }

    let mut availability: Vec<Slot> = Vec::new();
    for window in fields[2..].chunks(2) {
        let slots = expand_range(window[0], window[1])?;
        if slots.is_empty() {
            bail!("window {}-{} covers no slot", window[0], window[1]);
        }
        availability.extend(slots);
    }
    Ok(Room::new(id, capacity, availability))
}
