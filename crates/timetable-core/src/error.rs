//! Error types for timetable extraction

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Error type for timetable extraction operations.
///
/// Every variant is fatal: a run either fully succeeds or aborts with one of
/// these, with no partial output. Per-cell conditions (missing text,
/// unparseable time labels, multi-column merges) are never errors; the
/// extractor skips those cells silently.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// The header row (row 0) of a requested sheet has no data,
    /// so no room names can be resolved
    #[error("The room header row for \"{sheet}\" doesn't have any data")]
    MissingHeaderRow {
        /// Name of the sheet without a header row
        sheet: String,
    },

    /// A run plan entry is not of the form `<sheet name>:<date>`
    #[error("Invalid run plan entry \"{input}\": expected \"<sheet name>:<YYYY-MM-DD>\"")]
    InvalidPlanEntry {
        /// The raw entry that failed to split
        input: String,
    },

    /// The date half of a run plan entry failed to parse as a calendar date
    #[error("Invalid anchor date \"{input}\" for sheet \"{sheet}\": {source}")]
    InvalidAnchorDate {
        /// Name of the sheet the date was supplied for
        sheet: String,
        /// The raw date string
        input: String,
        /// Underlying chrono parse error
        source: chrono::ParseError,
    },
}

impl TimetableError {
    /// Create a missing-header-row error for the named sheet
    #[inline]
    #[must_use = "returns TimetableError for a sheet without room data"]
    pub fn missing_header_row(sheet: impl Into<String>) -> Self {
        Self::MissingHeaderRow {
            sheet: sheet.into(),
        }
    }
}
