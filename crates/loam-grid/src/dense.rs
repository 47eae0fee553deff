//! Fixed-capacity dense grid with symmetric column expansion.

use loam_core::{CellGrid, GridError};

/// Validate a construction dimension, rejecting negatives.
pub(crate) fn check_dimension(name: &'static str, value: i32) -> Result<usize, GridError> {
    if value < 0 {
        return Err(GridError::InvalidDimension { name, value });
    }
    Ok(value as usize)
}

/// A fixed-capacity two-dimensional grid of cell values, row-major.
///
/// Valid coordinates are `[0, rows) × [0, columns)`. The only growth
/// operation is [`maybe_expand`](Self::maybe_expand), which pads
/// columns symmetrically so existing data stays horizontally centred;
/// there is no general per-dimension resize on this backend.
///
/// # Examples
///
/// ```
/// use loam_core::CellGrid;
/// use loam_grid::DenseGrid;
///
/// let mut grid = DenseGrid::new(2, 3, 0u32).unwrap();
/// assert_eq!(grid.get(1, 2), Some(&0));
/// assert_eq!(grid.get(2, 0), None);
///
/// grid.set_checked(0, 1, 7).unwrap();
/// assert_eq!(grid.get_checked(0, 1), Ok(&7));
/// ```
#[derive(Clone, Debug)]
pub struct DenseGrid<T> {
    cells: Vec<Vec<T>>,
    default: T,
    rows: i32,
    columns: i32,
}

impl<T: Clone> DenseGrid<T> {
    /// Create a `rows × columns` grid with every cell set to `default`.
    ///
    /// Returns `Err(GridError::InvalidDimension)` if either dimension
    /// is negative. Zero-sized grids are allowed.
    pub fn new(rows: i32, columns: i32, default: T) -> Result<Self, GridError> {
        let value = default.clone();
        Self::with_initializer(rows, columns, default, move |_, _| value.clone())
    }

    /// Create a grid whose cells are seeded by `init(row, column)`.
    ///
    /// `default` is still used for cells created by later expansion.
    pub fn with_initializer(
        rows: i32,
        columns: i32,
        default: T,
        init: impl Fn(i32, i32) -> T,
    ) -> Result<Self, GridError> {
        let row_count = check_dimension("rows", rows)?;
        let column_count = check_dimension("columns", columns)?;

        let cells = (0..row_count as i32)
            .map(|row| (0..column_count as i32).map(|column| init(row, column)).collect())
            .collect();

        Ok(Self {
            cells,
            default,
            rows,
            columns,
        })
    }

    /// Borrow one full row.
    ///
    /// Returns `Err(GridError::InvalidRow)` outside `[0, rows)`.
    pub fn row_checked(&self, row: i32) -> Result<&[T], GridError> {
        self.row_index(row)
            .map(|index| self.cells[index].as_slice())
    }

    /// Grow or shrink the grid; returns whether anything changed.
    ///
    /// - `new_rows` replaces the row count: growth appends rows filled
    ///   with the default value at the full new width, shrink truncates
    ///   from the end.
    /// - `columns_delta` pads the SAME number of default-valued cells on
    ///   the left and right of every row, so the column count grows by
    ///   `2 * columns_delta` and the value previously at column `c` is
    ///   afterwards addressed at `c + columns_delta`.
    ///
    /// Returns `Ok(false)` without touching anything when `new_rows`
    /// equals the current row count and `columns_delta` is zero. Fails
    /// with [`GridError::InvalidDimension`] when `new_rows` or
    /// `columns_delta` is negative.
    pub fn maybe_expand(&mut self, new_rows: i32, columns_delta: i32) -> Result<bool, GridError> {
        let row_count = check_dimension("rows", new_rows)?;
        let delta = check_dimension("columns", columns_delta)?;

        if new_rows == self.rows && columns_delta == 0 {
            return Ok(false);
        }

        let new_columns = self.columns + 2 * columns_delta;
        let default = self.default.clone();

        self.cells.truncate(row_count);
        if delta > 0 {
            for row in &mut self.cells {
                let mut padded = Vec::with_capacity(new_columns as usize);
                padded.resize(delta, default.clone());
                padded.append(row);
                padded.resize(new_columns as usize, default.clone());
                *row = padded;
            }
        }
        while self.cells.len() < row_count {
            self.cells.push(vec![default.clone(); new_columns as usize]);
        }

        self.rows = new_rows;
        self.columns = new_columns;
        Ok(true)
    }

    fn row_index(&self, row: i32) -> Result<usize, GridError> {
        if row < 0 || row >= self.rows {
            return Err(GridError::InvalidRow { row });
        }
        Ok(row as usize)
    }

    fn column_index(&self, column: i32) -> Result<usize, GridError> {
        if column < 0 || column >= self.columns {
            return Err(GridError::InvalidColumn { column });
        }
        Ok(column as usize)
    }
}

impl<T: Clone> CellGrid<T> for DenseGrid<T> {
    fn rows(&self) -> i32 {
        self.rows
    }

    fn columns(&self) -> i32 {
        self.columns
    }

    fn get(&self, row: i32, column: i32) -> Option<&T> {
        if row < 0 || row >= self.rows || column < 0 || column >= self.columns {
            return None;
        }
        Some(&self.cells[row as usize][column as usize])
    }

    fn get_checked(&self, row: i32, column: i32) -> Result<&T, GridError> {
        let row = self.row_index(row)?;
        let column = self.column_index(column)?;
        Ok(&self.cells[row][column])
    }

    /// Writes outside the current bounds are dropped: the dense backend
    /// never grows on write — callers expand first.
    fn set(&mut self, row: i32, column: i32, value: T) {
        if row < 0 || row >= self.rows || column < 0 || column >= self.columns {
            return;
        }
        self.cells[row as usize][column as usize] = value;
    }

    fn set_checked(&mut self, row: i32, column: i32, value: T) -> Result<(), GridError> {
        let row = self.row_index(row)?;
        let column = self.column_index(column)?;
        self.cells[row][column] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_fills_with_default() {
        let grid = DenseGrid::new(2, 2, 9u32).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 2);
        for row in 0..2 {
            for column in 0..2 {
                assert_eq!(grid.get(row, column), Some(&9));
            }
        }
    }

    #[test]
    fn new_rejects_negative_dimensions() {
        assert_eq!(
            DenseGrid::new(-1, 1, 0u32).unwrap_err(),
            GridError::InvalidDimension {
                name: "rows",
                value: -1
            }
        );
        assert_eq!(
            DenseGrid::new(1, -2, 0u32).unwrap_err(),
            GridError::InvalidDimension {
                name: "columns",
                value: -2
            }
        );
    }

    #[test]
    fn initializer_seeds_each_cell() {
        let grid = DenseGrid::with_initializer(2, 3, 0, |row, column| row * 10 + column).unwrap();
        assert_eq!(grid.get(0, 0), Some(&0));
        assert_eq!(grid.get(0, 2), Some(&2));
        assert_eq!(grid.get(1, 1), Some(&11));
    }

    #[test]
    fn zero_sized_grid_is_allowed() {
        let grid = DenseGrid::new(0, 0, 0u32).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.get(0, 0), None);
    }

    // ── Accessors ───────────────────────────────────────────────

    #[test]
    fn get_returns_none_out_of_bounds() {
        let grid = DenseGrid::new(1, 1, 0u32).unwrap();
        assert_eq!(grid.get(0, 0), Some(&0));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.get(-1, 0), None);
    }

    #[test]
    fn checked_accessors_report_the_failing_axis() {
        let mut grid = DenseGrid::new(1, 1, 0u32).unwrap();
        compliance::assert_checked_bounds(&mut grid, 1, 1);
    }

    #[test]
    fn set_drops_out_of_bounds_writes() {
        let mut grid = DenseGrid::new(1, 1, 0u32).unwrap();
        grid.set(1, 1, 5);
        grid.set(0, 1, 5);
        grid.set(-1, 0, 5);
        assert_eq!(grid.get(1, 1), None);
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(0, 0), Some(&0));
    }

    #[test]
    fn row_checked_borrows_a_full_row() {
        let mut grid = DenseGrid::new(2, 3, 0u32).unwrap();
        grid.set_checked(1, 2, 7).unwrap();
        assert_eq!(grid.row_checked(1).unwrap(), &[0, 0, 7]);
        assert_eq!(
            grid.row_checked(2).unwrap_err(),
            GridError::InvalidRow { row: 2 }
        );
    }

    // ── Expansion ───────────────────────────────────────────────

    #[test]
    fn expand_is_a_noop_for_unchanged_dimensions() {
        let mut grid = DenseGrid::new(1, 1, 0u32).unwrap();
        assert!(!grid.maybe_expand(1, 0).unwrap());
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.columns(), 1);
    }

    #[test]
    fn expand_rows_appends_default_rows() {
        let mut grid = DenseGrid::new(1, 1, 0u32).unwrap();
        grid.set_checked(0, 0, 1).unwrap();

        assert!(grid.maybe_expand(2, 0).unwrap());
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.get(0, 0), Some(&1));
        assert_eq!(grid.get(1, 0), Some(&0));
    }

    #[test]
    fn expand_columns_pads_both_sides() {
        let mut grid = DenseGrid::new(1, 1, 0u32).unwrap();
        grid.set_checked(0, 0, 1).unwrap();

        assert!(grid.maybe_expand(1, 1).unwrap());
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.row_checked(0).unwrap(), &[0, 1, 0]);
    }

    #[test]
    fn expand_rows_and_columns_together() {
        let mut grid = DenseGrid::new(1, 1, 0u32).unwrap();
        grid.set_checked(0, 0, 1).unwrap();

        assert!(grid.maybe_expand(2, 1).unwrap());
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.row_checked(0).unwrap(), &[0, 1, 0]);
        assert_eq!(grid.row_checked(1).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn expand_shrinks_rows_from_the_end() {
        let mut grid = DenseGrid::with_initializer(3, 1, 0, |row, _| row).unwrap();
        assert!(grid.maybe_expand(1, 0).unwrap());
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.get(0, 0), Some(&0));
        assert_eq!(grid.get(1, 0), None);
    }

    #[test]
    fn expand_rejects_negative_arguments() {
        let mut grid = DenseGrid::new(1, 1, 0u32).unwrap();
        assert!(matches!(
            grid.maybe_expand(-1, 0),
            Err(GridError::InvalidDimension { name: "rows", .. })
        ));
        assert!(matches!(
            grid.maybe_expand(1, -1),
            Err(GridError::InvalidDimension { name: "columns", .. })
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn every_cell_reads_default_after_construction(
            rows in 0i32..8,
            columns in 0i32..8,
        ) {
            let grid = DenseGrid::new(rows, columns, 3u32).unwrap();
            for row in 0..rows {
                for column in 0..columns {
                    prop_assert_eq!(grid.get(row, column), Some(&3));
                }
            }
            prop_assert_eq!(grid.get(rows, 0), None);
            prop_assert_eq!(grid.get(0, columns), None);
        }

        #[test]
        fn symmetric_expansion_shifts_addresses_by_delta(
            rows in 1i32..6,
            columns in 1i32..6,
            delta in 0i32..4,
        ) {
            let mut grid =
                DenseGrid::with_initializer(rows, columns, -1, |row, column| row * 100 + column)
                    .unwrap();
            let changed = grid.maybe_expand(rows, delta).unwrap();
            prop_assert_eq!(changed, delta != 0);
            prop_assert_eq!(grid.columns(), columns + 2 * delta);
            for row in 0..rows {
                for column in 0..columns {
                    prop_assert_eq!(grid.get(row, column + delta), Some(&(row * 100 + column)));
                }
                for pad in 0..delta {
                    prop_assert_eq!(grid.get(row, pad), Some(&-1));
                    prop_assert_eq!(grid.get(row, columns + delta + pad), Some(&-1));
                }
            }
        }
    }
}
