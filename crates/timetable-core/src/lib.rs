//! # timetable-core
//!
//! Grid-to-events extraction for spreadsheet timetables.
//!
//! A timetable sheet lays rooms out as column headers, times of day as row
//! labels, and marks each event as a (usually merged) cell under its room.
//! This crate turns one such sheet, supplied as a validated [`SheetGrid`] by
//! a workbook loader, plus an anchor date into a flat list of
//! [`TimetableEvent`] records with absolute begin/end timestamps.
//!
//! ## Components
//!
//! - [`grid`]: the validated grid shapes loaders produce, and the
//!   merge-region index
//! - [`time`]: time-label resolution against an anchor date, and
//!   cross-midnight rollover correction
//! - [`extract`]: the per-sheet extraction walk
//! - [`plan`]: ordered run plan of (sheet, anchor date) pairs
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use timetable_core::{extract_sheet, EventIdGen, Grid, MergeRegion, SheetGrid};
//!
//! // Header row names the rooms; column 0 carries the time labels.
//! let sheet = SheetGrid {
//!     grid: Grid::from_rows(vec![
//!         vec![None, Some("Hall A".to_string())],
//!         vec![Some("09:00".to_string()), Some("Opening".to_string())],
//!         vec![Some("10:00".to_string()), None],
//!         vec![Some("11:00".to_string()), None],
//!     ]),
//!     // "Opening" visually spans rows 1-2 in column 1
//!     merges: vec![MergeRegion { start_row: 1, start_col: 1, end_row: 2, end_col: 1 }],
//! };
//!
//! let anchor = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
//! let mut ids = EventIdGen::new();
//! let events = extract_sheet("Main", &sheet, anchor, &mut ids)?;
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].room, "Hall A");
//! assert_eq!(events[0].event_name, "Opening");
//! # Ok::<(), timetable_core::TimetableError>(())
//! ```
//!
//! ## Ordering contract
//!
//! Events are discovered column-major within a row, rows ascending within a
//! sheet, sheets in run-plan order, and ids are assigned in exactly that
//! order. Callers must not re-sort if they care about id stability, and the
//! rollover correction depends on it: each event's date adjustment looks at
//! the event discovered immediately before it in the same room column.

pub mod error;
pub mod event;
pub mod extract;
pub mod grid;
pub mod plan;
pub mod time;

pub use error::{Result, TimetableError};
pub use event::{EventIdGen, TimetableEvent};
pub use extract::extract_sheet;
pub use grid::{Grid, MergeIndex, MergeRegion, SheetGrid};
pub use plan::PlanEntry;
