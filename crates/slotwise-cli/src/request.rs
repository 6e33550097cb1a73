//! Booking request parsing.
//!
//! A request is a single `capacity,floor,start,end` line, for example
//! `5,8,10:30,11:30`: five people, floor 8, half past ten to half past
//! eleven.

use anyhow::{bail, Context, Result};
use slotwise_core::Meeting;

/// Parse a `capacity,floor,start,end` line into a validated meeting.
pub fn parse_request(line: &str) -> Result<Meeting> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != 4 {
        bail!("expected `capacity,floor,start,end`, got `{}`", line.trim());
    }

    let capacity: u32 = fields[0]
        .parse()
        .with_context(|| format!("invalid capacity `{}`", fields[0]))?;
    if capacity == 0 {
        bail!("capacity must be positive");
    }
    let floor: u16 = fields[1]
        .parse()
        .with_context(|| format!("invalid floor `{}`", fields[1]))?;
    if floor == 0 {
        bail!("floor must be positive");
    }

    Ok(Meeting::new(capacity, floor, fields[2], fields[3])?)
}
