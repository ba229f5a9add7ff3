//! Excel workbook loading via calamine
//!
//! Adapts calamine's used-range view of a worksheet into the absolute-indexed
//! [`Grid`] + [`MergeRegion`] shapes the extractor consumes. All adaptation
//! happens here, once per sheet: range offsets are normalized, cell values
//! are rendered to display strings, and inverted merge rectangles are
//! dropped. Nothing downstream ever touches calamine types.

use crate::error::{Result, WorkbookError};
use calamine::{open_workbook, Data, Dimensions, ExcelDateTime, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use timetable_core::{Grid, MergeRegion, SheetGrid};

/// An open `.xlsx`/`.xlsm` workbook.
pub struct Workbook {
    inner: Xlsx<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook file and pre-load its merged regions.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbookError::Open`] when the file cannot be opened or its
    /// merge-region metadata fails to parse.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut inner: Xlsx<_> =
            open_workbook(path).map_err(|source| WorkbookError::open(path, source))?;

        // Must happen before any merged-region access
        inner
            .load_merged_regions()
            .map_err(|source| WorkbookError::open(path, source))?;

        Ok(Self { inner })
    }

    /// Names of all sheets in the workbook, in workbook order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    /// Load one sheet as a validated grid with its merge regions.
    ///
    /// Grid coordinates are absolute sheet coordinates: calamine reports only
    /// the used range, so leading unused rows and columns are padded back in
    /// as absent cells.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbookError::SheetNotFound`] when no sheet has the given
    /// name, or [`WorkbookError::Sheet`] when the sheet's cells or merge
    /// regions fail to parse.
    pub fn sheet(&mut self, name: &str) -> Result<SheetGrid> {
        if !self.inner.sheet_names().iter().any(|sheet| sheet == name) {
            return Err(WorkbookError::SheetNotFound {
                name: name.to_string(),
            });
        }

        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|source| WorkbookError::Sheet {
                name: name.to_string(),
                source,
            })?;

        let spans = match self.inner.worksheet_merge_cells(name) {
            Some(result) => result.map_err(|source| WorkbookError::Sheet {
                name: name.to_string(),
                source,
            })?,
            None => Vec::new(),
        };

        Ok(SheetGrid {
            grid: grid_from_range(&range),
            merges: merge_regions(name, &spans),
        })
    }
}

/// Render a cell's display text. Empty cells read as absent.
fn render_cell(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(text) => Some(text.clone()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => {
            // Format float, removing unnecessary trailing zeros
            let text = value.to_string();
            if text.contains('.') {
                Some(text.trim_end_matches('0').trim_end_matches('.').to_string())
            } else {
                Some(text)
            }
        }
        Data::Bool(value) => Some(value.to_string()),
        Data::DateTime(serial) => Some(render_serial_datetime(serial)),
        Data::DateTimeIso(text) => Some(text.clone()),
        Data::DurationIso(text) => Some(text.clone()),
        Data::Error(error) => Some(error.to_string()),
    }
}

/// Render an Excel serial date-time the way the sheet would display it.
///
/// A serial below 1.0 carries no date component: it is a pure time-of-day,
/// the usual storage for `09:30`-style time-column labels, and renders as
/// `HH:MM` straight from the day fraction. Anything else renders with its
/// date so the text stays faithful to the sheet.
fn render_serial_datetime(serial: &ExcelDateTime) -> String {
    let value = serial.as_f64();
    if (0.0..1.0).contains(&value) {
        let minutes = (value * 24.0 * 60.0).round() as u32;
        format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
    } else {
        serial
            .as_datetime()
            .map_or_else(|| value.to_string(), |rendered| {
                rendered.format("%Y-%m-%d %H:%M").to_string()
            })
    }
}

/// Expand a used range into an absolute-indexed grid.
fn grid_from_range(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        // No used cells at all
        return Grid::default();
    };

    let (height, _) = range.get_size();
    let mut rows: Vec<Vec<Option<String>>> = Vec::with_capacity(start_row as usize + height);
    rows.resize(start_row as usize, Vec::new());

    for cells in range.rows() {
        let mut grid_row: Vec<Option<String>> = Vec::with_capacity(start_col as usize + cells.len());
        grid_row.resize(start_col as usize, None);
        grid_row.extend(cells.iter().map(render_cell));
        rows.push(grid_row);
    }

    Grid::from_rows(rows)
}

/// Convert calamine merge spans into validated regions, dropping inverted
/// rectangles rather than letting them corrupt the scan.
fn merge_regions(sheet_name: &str, spans: &[Dimensions]) -> Vec<MergeRegion> {
    spans
        .iter()
        .filter_map(|span| {
            let region = MergeRegion {
                start_row: span.start.0 as usize,
                start_col: span.start.1 as usize,
                end_row: span.end.0 as usize,
                end_col: span.end.1 as usize,
            };
            if region.is_valid() {
                Some(region)
            } else {
                log::warn!(
                    "{sheet_name}: dropping inverted merge region ({},{})..({},{})",
                    span.start.0,
                    span.start.1,
                    span.end.0,
                    span.end.1
                );
                None
            }
        })
        .collect()
}
