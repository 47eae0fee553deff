//! [`CellGrid`] compliance test helpers.
//!
//! Reused across the backend test modules: every rectangular backend
//! must agree on the checked-accessor error contract at the
//! `[0, rows) × [0, columns)` boundary.

use loam_core::{CellGrid, GridError};

/// Assert that the checked accessors fail with `InvalidRow` /
/// `InvalidColumn` exactly outside `[0, rows) × [0, columns)`, and
/// that a failed write mutates nothing.
pub fn assert_checked_bounds<G: CellGrid<u32>>(grid: &mut G, rows: i32, columns: i32) {
    assert_eq!(
        grid.get_checked(rows, 0).unwrap_err(),
        GridError::InvalidRow { row: rows }
    );
    assert_eq!(
        grid.get_checked(-1, 0).unwrap_err(),
        GridError::InvalidRow { row: -1 }
    );
    assert_eq!(
        grid.get_checked(0, columns).unwrap_err(),
        GridError::InvalidColumn { column: columns }
    );
    assert_eq!(
        grid.get_checked(0, -1).unwrap_err(),
        GridError::InvalidColumn { column: -1 }
    );

    assert_eq!(
        grid.set_checked(rows, 0, 1).unwrap_err(),
        GridError::InvalidRow { row: rows }
    );
    assert_eq!(
        grid.set_checked(0, columns, 1).unwrap_err(),
        GridError::InvalidColumn { column: columns }
    );

    // The throwing and non-throwing readers agree on every in-range cell.
    for row in 0..rows {
        for column in 0..columns {
            assert_eq!(grid.get(row, column), Some(grid.get_checked(row, column).unwrap()));
        }
    }
}
