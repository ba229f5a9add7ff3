//! Run plan: the ordered list of (sheet name, anchor date) pairs
//!
//! Sheets are processed strictly in the order their entries were supplied,
//! because event-id assignment and per-column rollover state are both
//! order-dependent. The plan is therefore a plain `Vec<PlanEntry>`, never a
//! keyed map: duplicate sheet names are legal and each occurrence is
//! processed independently with its own anchor date.

use crate::error::{Result, TimetableError};
use chrono::NaiveDate;
use std::str::FromStr;

/// One run plan entry: a sheet name and the calendar date its time-of-day
/// labels are anchored to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanEntry {
    /// Worksheet name, matched exactly against the workbook's sheet names
    pub sheet: String,
    /// Reference midnight for the sheet's time column
    pub anchor: NaiveDate,
}

impl PlanEntry {
    /// Parse a `<sheet name>:<YYYY-MM-DD>` pair.
    ///
    /// The input is split on the first `:`; the remainder must parse as a
    /// calendar date. Surrounding whitespace on the date half is ignored so
    /// that shell-quoted values like `"Main: 2025-09-06"` work.
    ///
    /// # Errors
    ///
    /// Returns [`TimetableError::InvalidPlanEntry`] when there is no `:`
    /// separator, or [`TimetableError::InvalidAnchorDate`] when the date half
    /// is not a valid `YYYY-MM-DD` date.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_core::plan::PlanEntry;
    ///
    /// let entry = PlanEntry::parse("Main:2025-09-06")?;
    /// assert_eq!(entry.sheet, "Main");
    /// assert_eq!(entry.anchor.to_string(), "2025-09-06");
    /// # Ok::<(), timetable_core::TimetableError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let (sheet, date) = input
            .split_once(':')
            .ok_or_else(|| TimetableError::InvalidPlanEntry {
                input: input.to_string(),
            })?;

        let anchor = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|source| {
            TimetableError::InvalidAnchorDate {
                sheet: sheet.to_string(),
                input: date.trim().to_string(),
                source,
            }
        })?;

        Ok(Self {
            sheet: sheet.to_string(),
            anchor,
        })
    }
}

impl FromStr for PlanEntry {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_simple_entry() {
        let entry = PlanEntry::parse("Main:2025-09-06").unwrap();
        assert_eq!(entry.sheet, "Main");
        assert_eq!(entry.anchor.year(), 2025);
        assert_eq!(entry.anchor.month(), 9);
        assert_eq!(entry.anchor.day(), 6);
    }

    #[test]
    fn test_parse_sheet_name_with_spaces() {
        let entry = PlanEntry::parse("Day 1 - Saturday: 2025-09-06").unwrap();
        assert_eq!(entry.sheet, "Day 1 - Saturday");
        assert_eq!(entry.anchor.to_string(), "2025-09-06");
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = PlanEntry::parse("Main 2025-09-06").unwrap_err();
        assert!(matches!(err, TimetableError::InvalidPlanEntry { .. }));
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = PlanEntry::parse("Main:2025-13-40").unwrap_err();
        match err {
            TimetableError::InvalidAnchorDate { sheet, input, .. } => {
                assert_eq!(sheet, "Main");
                assert_eq!(input, "2025-13-40");
            }
            other => panic!("Expected InvalidAnchorDate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_garbage_date() {
        assert!(PlanEntry::parse("Main:soon").is_err());
        assert!(PlanEntry::parse("Main:").is_err());
    }
}
