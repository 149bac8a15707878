//! Detected table grid types.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// A cell grid detected on a page, together with its bounding box.
///
/// Row 0 is the header row. Rows may be ragged (varying column counts);
/// consumers must tolerate that. A cell is `None` when the detector found
/// the slot empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableGrid {
    /// Cell text by row, then column.
    pub rows: Vec<Vec<Option<String>>>,

    /// Bounding box of the whole table in page coordinates.
    pub bbox: Rect,
}

impl TableGrid {
    /// Create a new table grid.
    pub fn new(rows: Vec<Vec<Option<String>>>, bbox: Rect) -> Self {
        Self { rows, bbox }
    }

    /// Build a grid from plain strings, mapping empty strings to `None`.
    pub fn from_strings<S: Into<String>>(
        rows: impl IntoIterator<Item = Vec<S>>,
        bbox: Rect,
    ) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.into();
                        if cell.is_empty() {
                            None
                        } else {
                            Some(cell)
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows, bbox }
    }

    /// Header row (row 0), if the grid has any rows.
    pub fn header(&self) -> Option<&[Option<String>]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Data rows (everything after the header).
    pub fn data_rows(&self) -> &[Vec<Option<String>>] {
        if self.rows.len() > 1 {
            &self.rows[1..]
        } else {
            &[]
        }
    }

    /// Total number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
