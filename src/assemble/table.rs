//! Table reconstruction.
//!
//! Turns a detected cell grid plus the page's image pool into a
//! [`TableFragment`]: header row verbatim, then data rows in source order,
//! with at most one pool image assigned to each data row's primary column
//! (column 0) according to the selected policy.

use log::debug;

use crate::model::{PageImage, Rect, TableCellFragment, TableFragment, TableGrid, TableRowFragment};

use super::options::AssembleOptions;
use super::policy::AssignmentPolicy;
use super::pool::ImagePool;

/// Reconstructs one table at a time, taking the page pool by value and
/// handing it back with the consumed images removed.
pub struct TableReconstructor<'a> {
    options: &'a AssembleOptions,
}

impl<'a> TableReconstructor<'a> {
    /// Create a reconstructor with the given options.
    pub fn new(options: &'a AssembleOptions) -> Self {
        Self { options }
    }

    /// Reconstruct a table, consuming images from the pool.
    ///
    /// A grid with zero rows or an empty header still produces a (possibly
    /// empty) fragment; running out of pool images leaves the remaining
    /// rows without icons. Neither is an error.
    pub fn reconstruct(&self, grid: &TableGrid, mut pool: ImagePool) -> (TableFragment, ImagePool) {
        let mut fragment = TableFragment::new();

        let Some(header) = grid.header() else {
            return (fragment, pool);
        };

        fragment.add_row(TableRowFragment::header(
            header
                .iter()
                .map(|cell| TableCellFragment::text(cell.clone()))
                .collect(),
        ));

        for (row_index, row) in grid.data_rows().iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());

            for (col_index, cell) in row.iter().enumerate() {
                if col_index == 0 {
                    let icon = self.assign_icon(grid, row_index, row.len(), &mut pool);
                    if icon.is_some() {
                        debug!(
                            "assigned icon to data row {} via {}",
                            row_index, self.options.policy
                        );
                    }
                    cells.push(TableCellFragment::with_icon(cell.clone(), icon));
                } else {
                    cells.push(TableCellFragment::text(cell.clone()));
                }
            }

            fragment.add_row(TableRowFragment::new(cells));
        }

        (fragment, pool)
    }

    fn assign_icon(
        &self,
        grid: &TableGrid,
        data_row_index: usize,
        row_len: usize,
        pool: &mut ImagePool,
    ) -> Option<PageImage> {
        match self.options.policy {
            AssignmentPolicy::OrderedGreedy => pool.pop(),
            AssignmentPolicy::NearestNeighbor => {
                let cell = primary_cell_rect(grid, data_row_index, row_len)?;
                pool.take_nearest(
                    cell.center(),
                    self.options.x_tolerance,
                    self.options.y_tolerance,
                )
            }
        }
    }
}

/// Approximate bbox of a data row's primary cell, assuming a uniform
/// row/column split of the table bbox. Ragged rows use their own length
/// for the column width.
fn primary_cell_rect(grid: &TableGrid, data_row_index: usize, row_len: usize) -> Option<Rect> {
    let total_rows = grid.row_count();
    if total_rows == 0 || row_len == 0 {
        return None;
    }

    let bbox = grid.bbox;
    let row_height = bbox.height() / total_rows as f32;
    // +1 skips the header row.
    let row_y0 = bbox.y0 + row_height * (data_row_index + 1) as f32;
    let col_width = bbox.width() / row_len as f32;

    Some(Rect::new(
        bbox.x0,
        row_y0,
        bbox.x0 + col_width,
        row_y0 + row_height,
    ))
}
