//! The normalized event record and run-wide id assignment

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One discrete timetable event, created once during extraction and immutable
/// thereafter.
///
/// Serialized field names follow the output contract: `eventId`, `room`,
/// `eventname`, `begin`, `end`, and nothing else. Timestamps serialize as
/// RFC 3339 with the local UTC offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimetableEvent {
    /// Sequential id, unique and strictly increasing in discovery order
    /// across the whole run
    #[serde(rename = "eventId")]
    pub event_id: u64,

    /// Room name from the header row, whitespace-collapsed
    pub room: String,

    /// Event name from the grid cell, whitespace-collapsed
    #[serde(rename = "eventname")]
    pub event_name: String,

    /// Absolute start timestamp, rollover-corrected
    pub begin: DateTime<Local>,

    /// Absolute end timestamp, rollover-corrected; always after `begin`
    pub end: DateTime<Local>,
}

/// Monotonic event-id generator shared across all sheets of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIdGen {
    next: u64,
}

impl EventIdGen {
    /// A generator starting at id 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
