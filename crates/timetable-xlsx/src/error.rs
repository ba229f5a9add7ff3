//! Error types for workbook loading

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for workbook operations
pub type Result<T> = std::result::Result<T, WorkbookError>;

/// Error type for workbook loading operations
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// Failed to open or pre-parse the workbook file
    #[error("Failed to open workbook {path}: {source}")]
    Open {
        /// Path to the workbook that failed to open
        path: PathBuf,
        /// Underlying calamine error
        source: calamine::XlsxError,
    },

    /// A requested sheet name is not present in the workbook
    #[error("The sheet \"{name}\" doesn't exist in the workbook")]
    SheetNotFound {
        /// The requested sheet name
        name: String,
    },

    /// A sheet exists but its data or merge regions failed to parse
    #[error("Failed to read sheet \"{name}\": {source}")]
    Sheet {
        /// Name of the sheet that failed to read
        name: String,
        /// Underlying calamine error
        source: calamine::XlsxError,
    },
}

impl WorkbookError {
    /// Create an open error
    #[inline]
    #[must_use = "returns WorkbookError for workbook open failures"]
    pub fn open<P: AsRef<Path>>(path: P, source: calamine::XlsxError) -> Self {
        Self::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
