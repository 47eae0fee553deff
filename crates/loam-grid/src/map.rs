//! Sparse grid backed by per-row associative storage.

use indexmap::IndexMap;
use loam_core::{CellGrid, GridError};

use crate::dense::check_dimension;

/// A rectangular grid backed by per-row maps.
///
/// Same read/write contract as [`DenseGrid`](crate::DenseGrid), but
/// shrinking deletes entries without reallocating unaffected rows, and
/// the growth operation is the general per-dimension
/// [`maybe_resize`](Self::maybe_resize) rather than the symmetric
/// expand.
///
/// Two long-standing behaviours of the source system are preserved
/// deliberately rather than generalized:
///
/// - [`set`](CellGrid::set) accepts a write to exactly one column past
///   the current right edge. The entry is stored and readable through
///   [`get`](CellGrid::get), but `columns` is unchanged and
///   [`set_checked`](CellGrid::set_checked) still rejects it.
/// - [`maybe_resize`](Self::maybe_resize) runs only when BOTH target
///   dimensions differ from the current ones; changing a single
///   dimension is a no-op.
#[derive(Clone, Debug)]
pub struct MapGrid<T> {
    cells: IndexMap<i32, IndexMap<i32, T>>,
    default: T,
    rows: i32,
    columns: i32,
}

impl<T: Clone> MapGrid<T> {
    /// Create a `rows × columns` grid with every cell set to `default`.
    ///
    /// Returns `Err(GridError::InvalidDimension)` if either dimension
    /// is negative.
    pub fn new(rows: i32, columns: i32, default: T) -> Result<Self, GridError> {
        let row_count = check_dimension("rows", rows)?;
        let column_count = check_dimension("columns", columns)?;

        let mut cells = IndexMap::with_capacity(row_count);
        for row in 0..row_count as i32 {
            let mut row_cells = IndexMap::with_capacity(column_count);
            for column in 0..column_count as i32 {
                row_cells.insert(column, default.clone());
            }
            cells.insert(row, row_cells);
        }

        Ok(Self {
            cells,
            default,
            rows,
            columns,
        })
    }

    /// Grow or shrink both dimensions; returns whether anything changed.
    ///
    /// The resize pass runs only when BOTH `new_rows` and `new_columns`
    /// differ from the current dimensions; otherwise the call returns
    /// `Ok(false)` and nothing changes. Growth inserts default-seeded
    /// rows at the new width and appends default-seeded columns at the
    /// right edge of surviving rows; shrink deletes rows and columns
    /// outside the new bounds.
    ///
    /// Fails with [`GridError::InvalidDimension`] for negative targets.
    pub fn maybe_resize(&mut self, new_rows: i32, new_columns: i32) -> Result<bool, GridError> {
        check_dimension("rows", new_rows)?;
        check_dimension("columns", new_columns)?;

        if new_rows == self.rows || new_columns == self.columns {
            return Ok(false);
        }

        let old_rows = self.rows;
        let old_columns = self.columns;
        self.rows = new_rows;
        self.columns = new_columns;

        if new_rows > old_rows {
            for row in old_rows..new_rows {
                let mut row_cells = IndexMap::with_capacity(new_columns as usize);
                for column in 0..new_columns {
                    row_cells.insert(column, self.default.clone());
                }
                self.cells.insert(row, row_cells);
            }
        } else {
            self.cells.retain(|row, _| *row < new_rows);
        }

        if new_columns > old_columns {
            let default = self.default.clone();
            for row_cells in self.cells.values_mut() {
                for column in old_columns..new_columns {
                    row_cells.entry(column).or_insert_with(|| default.clone());
                }
            }
        } else {
            for row_cells in self.cells.values_mut() {
                row_cells.retain(|column, _| *column < new_columns);
            }
        }

        Ok(true)
    }
}

impl<T: Clone> CellGrid<T> for MapGrid<T> {
    fn rows(&self) -> i32 {
        self.rows
    }

    fn columns(&self) -> i32 {
        self.columns
    }

    /// Presence-based read: any stored entry is readable, including one
    /// written one column past the edge through [`set`](CellGrid::set).
    fn get(&self, row: i32, column: i32) -> Option<&T> {
        self.cells.get(&row)?.get(&column)
    }

    fn get_checked(&self, row: i32, column: i32) -> Result<&T, GridError> {
        if row < 0 || row >= self.rows {
            return Err(GridError::InvalidRow { row });
        }
        if column < 0 || column >= self.columns {
            return Err(GridError::InvalidColumn { column });
        }
        self.cells
            .get(&row)
            .and_then(|row_cells| row_cells.get(&column))
            .ok_or(GridError::InvalidColumn { column })
    }

    /// Writes to missing rows are dropped. An in-bounds row accepts
    /// columns in `[0, columns]` — one past the edge is stored without
    /// widening the grid.
    fn set(&mut self, row: i32, column: i32, value: T) {
        let columns = self.columns;
        if let Some(row_cells) = self.cells.get_mut(&row) {
            if column >= 0 && column <= columns {
                row_cells.insert(column, value);
            }
        }
    }

    fn set_checked(&mut self, row: i32, column: i32, value: T) -> Result<(), GridError> {
        if row < 0 || row >= self.rows {
            return Err(GridError::InvalidRow { row });
        }
        if column < 0 || column >= self.columns {
            return Err(GridError::InvalidColumn { column });
        }
        if let Some(row_cells) = self.cells.get_mut(&row) {
            row_cells.insert(column, value);
        }
        Ok(())
    }
}
