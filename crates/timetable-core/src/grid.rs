//! Validated grid shapes consumed by the extractor
//!
//! Workbook loaders adapt whatever their spreadsheet library returns into
//! these types once, at the boundary. Row and column indices are absolute
//! sheet coordinates, 0-based: row 0 is the room header row, column 0 is the
//! time column.

use std::collections::HashMap;

/// One sheet's cell grid.
///
/// Rows may be ragged; a cell is either absent or carries the display string
/// the spreadsheet would render for it (not the raw typed value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    /// Build a grid from rows of optional display strings
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Number of rows, including the header row
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the given row, 0 if the row is absent
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// The room header row (row 0), if the sheet has one with any cells
    #[must_use]
    pub fn header(&self) -> Option<&[Option<String>]> {
        match self.rows.first() {
            Some(row) if !row.is_empty() => Some(row),
            _ => None,
        }
    }

    /// Display text of the cell at `(row, col)`.
    ///
    /// Absent cells, out-of-range coordinates, and cells whose display string
    /// is empty all read as `None`; the extractor treats these identically.
    #[must_use]
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(col)?
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

/// A rectangular merged-cell span, inclusive on both ends.
///
/// The cell at `(start_row, start_col)` visually covers every cell through
/// `(end_row, end_col)`. A region spanning multiple rows in a single column
/// marks an event; a region spanning multiple columns is a visual grouping
/// row and never an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRegion {
    /// Top row of the span
    pub start_row: usize,
    /// Left column of the span
    pub start_col: usize,
    /// Bottom row of the span (inclusive)
    pub end_row: usize,
    /// Right column of the span (inclusive)
    pub end_col: usize,
}

impl MergeRegion {
    /// A trivial one-cell region, used when a grid cell is not merged
    #[inline]
    #[must_use]
    pub fn cell(row: usize, col: usize) -> Self {
        Self {
            start_row: row,
            start_col: col,
            end_row: row,
            end_col: col,
        }
    }

    /// Whether the rectangle invariant `start <= end` holds on both axes
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start_row <= self.end_row && self.start_col <= self.end_col
    }

    /// Whether the region covers more than one column
    #[must_use]
    pub fn spans_columns(&self) -> bool {
        self.start_col < self.end_col
    }
}

/// A sheet's grid together with its merge regions, as handed over by a
/// workbook loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
    /// The cell grid
    pub grid: Grid,
    /// Merge regions, in workbook order
    pub merges: Vec<MergeRegion>,
}

/// Merge-region lookup by top-left coordinate.
///
/// Built once per sheet so the extractor's per-cell query is an O(1) hash
/// lookup instead of a scan over the region list.
#[derive(Debug, Clone, Default)]
pub struct MergeIndex {
    by_anchor: HashMap<(usize, usize), MergeRegion>,
}

impl MergeIndex {
    /// Index the given regions by their `(start_row, start_col)` anchor.
    ///
    /// If two regions share an anchor (malformed workbook), the first one
    /// encountered wins.
    #[must_use]
    pub fn new(regions: &[MergeRegion]) -> Self {
        let mut by_anchor = HashMap::with_capacity(regions.len());
        for region in regions {
            by_anchor
                .entry((region.start_row, region.start_col))
                .or_insert(*region);
        }
        Self { by_anchor }
    }

    /// The region starting at `(row, col)`, if any
    #[must_use]
    pub fn lookup(&self, row: usize, col: usize) -> Option<MergeRegion> {
        self.by_anchor.get(&(row, col)).copied()
    }

    /// Number of indexed regions
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_anchor.len()
    }

    /// Whether the sheet has no merge regions at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_anchor.is_empty()
    }
}
