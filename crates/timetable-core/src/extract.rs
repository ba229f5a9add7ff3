//! Grid-to-events extraction
//!
//! Walks one sheet's grid top-to-bottom, left-to-right, turning merged (or
//! single) cells under a room header into timestamped events. The walk order
//! is part of the output contract: event ids are assigned in discovery order,
//! and the cross-midnight correction for a column depends on the event
//! discovered immediately before it in that same column.

use crate::error::{Result, TimetableError};
use crate::event::{EventIdGen, TimetableEvent};
use crate::grid::{MergeIndex, MergeRegion, SheetGrid};
use crate::time;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Row carrying the room names
pub const HEADER_ROW: usize = 0;
/// Column carrying the time-of-day labels
pub const TIME_COL: usize = 0;

const FIRST_DATA_ROW: usize = 1;
const FIRST_EVENT_COL: usize = 1;

static RE_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("regex is compile-time constant"));

/// Collapse runs of whitespace to a single space.
///
/// Display strings from merged title cells routinely carry line breaks and
/// alignment padding; event and room names are normalized the same way.
fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Extract all events from one sheet, anchored to the given date.
///
/// `ids` is the run-wide id generator; passing the same generator for every
/// sheet of a run keeps ids unique and strictly increasing across sheet
/// boundaries.
///
/// Cells that cannot produce a well-formed event (no display text, no room
/// header above them, a merge region spanning multiple columns, begin/end
/// time labels that do not resolve) are skipped silently; a debug-level log
/// line records the reason without affecting output.
///
/// # Errors
///
/// Returns [`TimetableError::MissingHeaderRow`] when row 0 of the grid has no
/// cells, since no room can ever be resolved on such a sheet.
pub fn extract_sheet(
    sheet_name: &str,
    sheet: &SheetGrid,
    anchor: NaiveDate,
    ids: &mut EventIdGen,
) -> Result<Vec<TimetableEvent>> {
    let header = sheet
        .grid
        .header()
        .ok_or_else(|| TimetableError::missing_header_row(sheet_name))?;

    let merges = MergeIndex::new(&sheet.merges);

    // Rolling per-column state: the (corrected) begin of the last event
    // discovered in each room column, for the rollover comparison.
    let mut last_begin: Vec<Option<NaiveDateTime>> = vec![None; header.len()];

    let mut events = Vec::new();

    for row in FIRST_DATA_ROW..sheet.grid.row_count() {
        for col in FIRST_EVENT_COL..sheet.grid.row_len(row) {
            let Some(event_text) = sheet.grid.cell_text(row, col) else {
                continue;
            };
            let Some(room_text) = sheet.grid.cell_text(HEADER_ROW, col) else {
                continue;
            };

            let event_name = collapse_whitespace(event_text);
            let room = collapse_whitespace(room_text);

            let region = merges
                .lookup(row, col)
                .unwrap_or_else(|| MergeRegion::cell(row, col));

            // More than one column wide means a grouping/annotation row, not
            // an event.
            if region.spans_columns() {
                log::debug!("{sheet_name}: skipping column-spanning cell \"{event_name}\" at ({row}, {col})");
                continue;
            }

            // The row after the event's last row holds the end boundary
            // label.
            let begin = sheet
                .grid
                .cell_text(region.start_row, TIME_COL)
                .and_then(|label| time::resolve(anchor, label));
            let end = sheet
                .grid
                .cell_text(region.end_row + 1, TIME_COL)
                .and_then(|label| time::resolve(anchor, label));

            let (Some(begin), Some(end)) = (begin, end) else {
                log::debug!("{sheet_name}: no resolvable begin/end time for \"{event_name}\" at ({row}, {col})");
                continue;
            };

            let prev_begin = last_begin.get(col).copied().flatten();
            let (begin, end) = time::correct_rollover(prev_begin, begin, end);

            if let Some(slot) = last_begin.get_mut(col) {
                *slot = Some(begin);
            }

            events.push(TimetableEvent {
                event_id: ids.next_id(),
                room,
                event_name,
                begin: time::localize(begin),
                end: time::localize(end),
            });
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use chrono::{Datelike, Timelike};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 6).unwrap()
    }

    /// Grid row builder; empty strings become absent cells
    fn row(cells: &[&str]) -> Vec<Option<String>> {
        cells
            .iter()
            .map(|text| {
                if text.is_empty() {
                    None
                } else {
                    Some((*text).to_string())
                }
            })
            .collect()
    }

    fn merge(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> MergeRegion {
        MergeRegion {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// The two-hour "Opening" scenario: one merged region over rows 1-2 in
    /// the Hall A column, end boundary labeled by the 11:00 row.
    fn opening_sheet() -> SheetGrid {
        SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Hall A"]),
                row(&["09:00", "Opening"]),
                row(&["10:00"]),
                row(&["11:00"]),
            ]),
            merges: vec![merge(1, 1, 2, 1)],
        }
    }

    #[test]
    fn test_merged_event_spans_to_end_boundary() {
        let mut ids = EventIdGen::new();
        let events = extract_sheet("Main", &opening_sheet(), anchor(), &mut ids).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.event_id, 0);
        assert_eq!(event.room, "Hall A");
        assert_eq!(event.event_name, "Opening");

        let begin = event.begin.naive_local();
        let end = event.end.naive_local();
        assert_eq!(begin.date(), anchor());
        assert_eq!((begin.hour(), begin.minute()), (9, 0));
        assert_eq!(end.date(), anchor());
        assert_eq!((end.hour(), end.minute()), (11, 0));
    }

    #[test]
    fn test_unmerged_cell_is_a_one_row_event() {
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Hall A"]),
                row(&["09:00", "Standup"]),
                row(&["09:15"]),
            ]),
            merges: vec![],
        };

        let mut ids = EventIdGen::new();
        let events = extract_sheet("Main", &sheet, anchor(), &mut ids).unwrap();

        assert_eq!(events.len(), 1);
        let begin = events[0].begin.naive_local();
        let end = events[0].end.naive_local();
        assert_eq!((begin.hour(), begin.minute()), (9, 0));
        assert_eq!((end.hour(), end.minute()), (9, 15));
    }

    #[test]
    fn test_column_spanning_region_is_never_an_event() {
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Hall A", "Hall B"]),
                row(&["09:00", "~ Lunch Break ~"]),
                row(&["10:00"]),
            ]),
            merges: vec![merge(1, 1, 1, 2)],
        };

        let mut ids = EventIdGen::new();
        let events = extract_sheet("Main", &sheet, anchor(), &mut ids).unwrap();
        assert!(events.is_empty(), "time labels were resolvable, still no event");
    }

    #[test]
    fn test_missing_header_row_is_fatal() {
        let err = extract_sheet("Main", &SheetGrid::default(), anchor(), &mut EventIdGen::new())
            .unwrap_err();
        match err {
            TimetableError::MissingHeaderRow { sheet } => assert_eq!(sheet, "Main"),
            other => panic!("Expected MissingHeaderRow, got {other:?}"),
        }
    }

    #[test]
    fn test_cell_without_room_header_is_skipped() {
        // Column 2 has event text but no header above it
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Hall A"]),
                row(&["09:00", "Talk", "Orphan"]),
                row(&["10:00"]),
            ]),
            merges: vec![],
        };

        let events =
            extract_sheet("Main", &sheet, anchor(), &mut EventIdGen::new()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, "Talk");
    }

    #[test]
    fn test_unresolvable_time_labels_skip_the_cell() {
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Hall A"]),
                row(&["somewhen", "Mystery"]),
                row(&["10:00", "Talk"]),
                // no row after the last event, so "Talk" has no end label
            ]),
            merges: vec![],
        };

        let events =
            extract_sheet("Main", &sheet, anchor(), &mut EventIdGen::new()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_names_are_whitespace_collapsed() {
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Hall\n  A"]),
                row(&["09:00", "Opening\n\tKeynote"]),
                row(&["10:00"]),
            ]),
            merges: vec![],
        };

        let events =
            extract_sheet("Main", &sheet, anchor(), &mut EventIdGen::new()).unwrap();
        assert_eq!(events[0].room, "Hall A");
        assert_eq!(events[0].event_name, "Opening Keynote");
    }

    #[test]
    fn test_rollover_across_column_sequence() {
        // 23:00-23:30 followed by a raw 00:30-01:00, which must land on the
        // next day because the column already rolled past midnight.
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Club Stage"]),
                row(&["23:00", "Late Show"]),
                row(&["23:30", ""]),
                row(&["00:30", "After Hours"]),
                row(&["01:00"]),
            ]),
            merges: vec![],
        };

        let events =
            extract_sheet("Night", &sheet, anchor(), &mut EventIdGen::new()).unwrap();
        assert_eq!(events.len(), 2);

        let late_show = &events[0];
        assert_eq!(late_show.begin.naive_local().day(), 6);
        // End label 23:30 stays on the anchor day
        assert_eq!(late_show.end.naive_local().day(), 6);

        let after_hours = &events[1];
        assert_eq!(after_hours.begin.naive_local().day(), 7);
        assert_eq!(after_hours.end.naive_local().day(), 7);
        assert!(after_hours.begin > late_show.begin);
    }

    #[test]
    fn test_event_crossing_midnight_via_end_label() {
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Club Stage"]),
                row(&["23:30", "Midnight Set"]),
                row(&["00:30"]),
            ]),
            merges: vec![],
        };

        let events =
            extract_sheet("Night", &sheet, anchor(), &mut EventIdGen::new()).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.end - event.begin, chrono::Duration::hours(1));
        assert_eq!(event.begin.naive_local().day(), 6);
        assert_eq!(event.end.naive_local().day(), 7);
    }

    #[test]
    fn test_discovery_order_is_column_major_row_ascending() {
        let sheet = SheetGrid {
            grid: Grid::from_rows(vec![
                row(&["", "Hall A", "Hall B"]),
                row(&["09:00", "A1", "B1"]),
                row(&["10:00", "A2", "B2"]),
                row(&["11:00"]),
            ]),
            merges: vec![],
        };

        let events =
            extract_sheet("Main", &sheet, anchor(), &mut EventIdGen::new()).unwrap();

        let names: Vec<&str> = events.iter().map(|e| e.event_name.as_str()).collect();
        assert_eq!(names, ["A1", "B1", "A2", "B2"]);

        let ids: Vec<u64> = events.iter().map(|e| e.event_id).collect();
        assert_eq!(ids, [0, 1, 2, 3]);
    }

    #[test]
    fn test_id_generator_is_shared_across_sheets() {
        let mut ids = EventIdGen::new();
        let first = extract_sheet("Day 1", &opening_sheet(), anchor(), &mut ids).unwrap();
        let second = extract_sheet(
            "Day 2",
            &opening_sheet(),
            anchor() + chrono::Days::new(1),
            &mut ids,
        )
        .unwrap();

        assert_eq!(first[0].event_id, 0);
        assert_eq!(second[0].event_id, 1);
        assert_eq!(second[0].begin.naive_local().day(), 7);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("Opening   Keynote"), "Opening Keynote");
        assert_eq!(collapse_whitespace("a\n\t b"), "a b");
        assert_eq!(collapse_whitespace("plain"), "plain");
    }
}
