//! Time-of-day resolution and cross-midnight correction
//!
//! Timetable sheets label rows with wall-clock times (`"09:30"`); the anchor
//! date supplied for the sheet turns those labels into absolute timestamps.
//! Resolution works on `NaiveDateTime` throughout: the parsed hour and minute
//! are *set* onto the anchor date rather than added as a duration, so a label
//! means the same wall-clock time whether or not a daylight-saving transition
//! falls on the anchor day. The single conversion to an offset-carrying
//! timestamp happens at event emission, in [`localize`].

use chrono::{DateTime, Days, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;
use std::sync::LazyLock;

/// First `HH:mm`-shaped token in a cell's display text. Seconds and any
/// surrounding decoration are ignored.
static RE_TIME_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("regex is compile-time constant"));

/// Resolve a time-of-day display string against an anchor date.
///
/// Extracts the first `HH:mm`-shaped pattern from `label` and sets its hour
/// and minute on `anchor`. Returns `None` when the label is empty, carries no
/// such pattern, or names an impossible clock time (hour > 23, minute > 59).
/// The caller treats all of these as "no time data in this cell", never as an
/// error.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Timelike};
/// use timetable_core::time::resolve;
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
///
/// let begin = resolve(anchor, "09:30").unwrap();
/// assert_eq!((begin.hour(), begin.minute()), (9, 30));
///
/// assert!(resolve(anchor, "ab 19 Uhr").is_none());
/// assert!(resolve(anchor, "").is_none());
/// ```
#[must_use]
pub fn resolve(anchor: NaiveDate, label: &str) -> Option<NaiveDateTime> {
    let captures = RE_TIME_LABEL.captures(label)?;

    // Two bounded digit groups always parse; range checking is left to
    // and_hms_opt, which rejects 24:00 and 09:75 with None.
    let hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;

    anchor.and_hms_opt(hour, minute, 0)
}

/// Correct a candidate begin/end pair for events that cross midnight.
///
/// Two independent adjustments, in order:
///
/// 1. If the end label reads as an earlier clock time than the begin label
///    (begin `23:30`, end `00:30`), the event runs past midnight: the end
///    moves one calendar day forward.
/// 2. If the previous event discovered in the same room-column begins after
///    the candidate's begin, that column has already rolled past midnight and
///    the candidate's raw labels are on the wrong day: both ends move one
///    calendar day forward.
///
/// If the very first event in a column itself starts after midnight there is
/// no prior event to compare against, and it stays on the anchor day; the
/// grid carries no signal that could detect this case.
#[must_use]
pub fn correct_rollover(
    prev_begin: Option<NaiveDateTime>,
    begin: NaiveDateTime,
    end: NaiveDateTime,
) -> (NaiveDateTime, NaiveDateTime) {
    let mut begin = begin;
    let mut end = end;

    if end < begin {
        end = end + Days::new(1);
    }

    if let Some(prev) = prev_begin {
        if prev > begin {
            begin = begin + Days::new(1);
            end = end + Days::new(1);
        }
    }

    (begin, end)
}

/// Attach the system-local UTC offset to a corrected wall-clock timestamp.
///
/// Ambiguous wall-clock times (the repeated hour when clocks fall back) take
/// the earliest reading. A wall-clock time that does not exist locally (the
/// skipped hour when clocks spring forward) has no correct answer; it falls
/// back to reading the naive value as UTC rather than dropping the event.
#[must_use]
pub fn localize(wall_clock: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&wall_clock) {
        LocalResult::Single(timestamp) => timestamp,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => Local.from_utc_datetime(&wall_clock),
    }
}
