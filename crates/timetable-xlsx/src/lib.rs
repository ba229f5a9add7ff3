//! # timetable-xlsx
//!
//! Excel workbook loader for timetable extraction.
//!
//! Reads `.xlsx`/`.xlsm` files with the `calamine` crate and adapts each
//! requested worksheet into the validated [`SheetGrid`](timetable_core::SheetGrid)
//! shape `timetable-core` consumes: an absolute-indexed grid of display
//! strings plus the sheet's merged-cell regions. The adaptation happens once,
//! here; extraction code never sees calamine types.
//!
//! ## Quick Start
//!
//! ```no_run
//! use timetable_xlsx::Workbook;
//!
//! let mut workbook = Workbook::open("timetable.xlsx")?;
//! let sheet = workbook.sheet("Saturday")?;
//!
//! println!("{} merge regions", sheet.merges.len());
//! println!("{} rows", sheet.grid.row_count());
//! # Ok::<(), timetable_xlsx::WorkbookError>(())
//! ```
//!
//! ## Display text
//!
//! Extraction works on what a sheet *displays*, not on raw typed values.
//! String cells pass through verbatim; numbers drop trailing zeros; Excel
//! serial time-of-day values render as `HH:MM` so time-column labels look the
//! same whether the sheet stores them as text or as real times.

pub mod error;
pub mod workbook;

pub use error::{Result, WorkbookError};
pub use workbook::Workbook;
