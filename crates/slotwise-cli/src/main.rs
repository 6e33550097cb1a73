//! `slotwise` CLI — book conference rooms from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Book one meeting: 3 people on floor 7, 10:30 to 11:30
//! slotwise book -r rooms.txt "3,7,10:30,11:30"
//!
//! # Book several meetings against the same day's calendar
//! slotwise book -r rooms.txt "3,7,10:30,11:30" "8,9,09:00,10:00"
//!
//! # Bound bookings by office hours (default: open all day)
//! slotwise book -r rooms.txt --office-start 08:00 --office-end 18:00 "3,7,10:30,11:30"
//!
//! # Machine-readable output
//! slotwise book -r rooms.txt --json "3,7,10:30,11:30"
//!
//! # Interactive session, one request per prompt
//! slotwise shell -r rooms.txt
//!
//! # List the roster with merged availability windows
//! slotwise rooms -r rooms.txt
//! ```

mod request;
mod roster;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slotwise_core::{
    merge_slots, schedule_meeting, Calendar, Meeting, Room, RoomId, RoomSchedule, TimeRange,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::request::parse_request;
use crate::roster::load_roster;

#[derive(Parser)]
#[command(name = "slotwise", version, about = "Slot-based conference room booking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book one or more meetings and print the assigned rooms
    Book {
        #[command(flatten)]
        office: OfficeArgs,
        /// Room roster file
        #[arg(short = 'r', long)]
        roster: PathBuf,
        /// Booking requests, one `capacity,floor,start,end` each
        #[arg(required = true)]
        requests: Vec<String>,
        /// Print the schedule as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Book meetings interactively, one request per prompt
    Shell {
        #[command(flatten)]
        office: OfficeArgs,
        /// Room roster file
        #[arg(short = 'r', long)]
        roster: PathBuf,
    },
    /// List the rooms a roster file declares
    Rooms {
        /// Room roster file
        #[arg(short = 'r', long)]
        roster: PathBuf,
        /// Print the roster as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Office-hours bounds shared by the booking subcommands.
#[derive(Args)]
struct OfficeArgs {
    /// Start of office hours (HH:MM)
    #[arg(long, default_value = "00:00")]
    office_start: String,
    /// End of office hours (HH:MM; equal to the start means open all day)
    #[arg(long, default_value = "00:00")]
    office_end: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Book {
            office,
            roster,
            requests,
            json,
        } => book(&office, &roster, &requests, json),
        Commands::Shell { office, roster } => shell(&office, &roster),
        Commands::Rooms { roster, json } => list_rooms(&roster, json),
    }
}

/// Load the roster and stand up a populated calendar for one run.
fn build_calendar(office: &OfficeArgs, roster_path: &Path) -> Result<Calendar> {
    let rooms = load_roster(roster_path)?;
    let mut calendar =
        Calendar::build(&office.office_start, &office.office_end).context("invalid office hours")?;
    calendar.populate(&rooms);
    Ok(calendar)
}

fn book(office: &OfficeArgs, roster_path: &Path, requests: &[String], json: bool) -> Result<()> {
    let mut calendar = build_calendar(office, roster_path)?;

    // All requests contend for the same calendar, in the order given.
    let mut reports = Vec::new();
    for raw in requests {
        let meeting = parse_request(raw).with_context(|| format!("bad request `{}`", raw))?;
        let rooms = schedule_meeting(&mut calendar, &meeting)?;
        reports.push(BookingReport::new(&meeting, rooms));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }
    Ok(())
}

fn shell(office: &OfficeArgs, roster_path: &Path) -> Result<()> {
    let mut calendar = build_calendar(office, roster_path)?;
    let mut lines = io::stdin().lock().lines();

    loop {
        prompt("Meeting (capacity,floor,start,end, e.g. 5,8,10:30,11:30): ")?;
        let line = match lines.next() {
            Some(line) => line.context("failed to read from stdin")?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        // A bad request does not end the session; re-prompt instead.
        let meeting = match parse_request(&line) {
            Ok(meeting) => meeting,
            Err(err) => {
                eprintln!("error: {:#}", err);
                continue;
            }
        };

        let rooms = schedule_meeting(&mut calendar, &meeting)?;
        print_report(&BookingReport::new(&meeting, rooms));

        prompt("Schedule another meeting? [y/n]: ")?;
        let answer = match lines.next() {
            Some(line) => line.context("failed to read from stdin")?,
            None => break,
        };
        if !answer.trim().to_lowercase().starts_with('y') {
            break;
        }
    }
    Ok(())
}

fn list_rooms(roster_path: &Path, json: bool) -> Result<()> {
    let rooms = load_roster(roster_path)?;

    if json {
        let listings = rooms
            .iter()
            .map(room_listing)
            .collect::<Result<Vec<RoomListing>>>()?;
        println!("{}", serde_json::to_string_pretty(&listings)?);
    } else {
        for room in &rooms {
            let windows = merge_slots(room.availability())?;
            println!(
                "{}  seats {:>3}  {}",
                room.id(),
                room.capacity(),
                joined(&windows)
            );
        }
    }
    Ok(())
}

/// One meeting's outcome: the request echoed back plus the per-room ranges.
#[derive(serde::Serialize)]
struct BookingReport {
    capacity: u32,
    floor: u16,
    start: String,
    end: String,
    rooms: Vec<RoomSchedule>,
}

impl BookingReport {
    fn new(meeting: &Meeting, rooms: Vec<RoomSchedule>) -> Self {
        let (start, end) = meeting.window();
        Self {
            capacity: meeting.capacity(),
            floor: meeting.floor(),
            start: start.to_string(),
            end: end.to_string(),
            rooms,
        }
    }
}

#[derive(serde::Serialize)]
struct RoomListing {
    room: RoomId,
    capacity: u32,
    availability: Vec<TimeRange>,
}

fn room_listing(room: &Room) -> Result<RoomListing> {
    Ok(RoomListing {
        room: room.id(),
        capacity: room.capacity(),
        availability: merge_slots(room.availability())?,
    })
}

fn print_report(report: &BookingReport) {
    println!(
        "Meeting {}-{} for {} on floor {}:",
        report.start, report.end, report.capacity, report.floor
    );
    for schedule in &report.rooms {
        let label = match schedule.room {
            Some(room) => format!("room {}", room),
            None => "no room".to_string(),
        };
        println!("  {:<10} {}", label, joined(&schedule.ranges));
    }
}

fn joined(ranges: &[TimeRange]) -> String {
    ranges
        .iter()
        .map(TimeRange::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}
