//! Radius-centred sparse grid addressed by signed coordinates.

use indexmap::IndexMap;
use loam_core::{CellGrid, GridError};

use crate::dense::check_dimension;

/// A square grid centred on the origin, addressed by coordinates in
/// `[-radius, radius]` on both axes.
///
/// Backed by the same per-row associative storage as
/// [`MapGrid`](crate::MapGrid). Resizing is by radius: growth seeds
/// every newly valid coordinate with the default value, shrink deletes
/// rows and columns outside the new bounds, and existing cells keep
/// their coordinates (the grid is centre-anchored, so nothing is
/// re-addressed).
///
/// # Examples
///
/// ```
/// use loam_core::CellGrid;
/// use loam_grid::RadiusGrid;
///
/// let mut grid = RadiusGrid::new(1, 0u32).unwrap();
/// assert_eq!(grid.rows(), 3);
/// grid.set_checked(-1, 1, 9).unwrap();
/// assert_eq!(grid.get(-1, 1), Some(&9));
/// assert_eq!(grid.get(-2, 0), None);
/// ```
#[derive(Clone, Debug)]
pub struct RadiusGrid<T> {
    cells: IndexMap<i32, IndexMap<i32, T>>,
    default: T,
    radius: i32,
}

impl<T: Clone> RadiusGrid<T> {
    /// Create a grid of radius `radius` with every cell set to
    /// `default`.
    ///
    /// Returns `Err(GridError::InvalidDimension)` for a negative
    /// radius. Radius 0 is a single origin cell.
    pub fn new(radius: i32, default: T) -> Result<Self, GridError> {
        check_dimension("radius", radius)?;

        let width = (2 * radius + 1) as usize;
        let mut cells = IndexMap::with_capacity(width);
        for row in -radius..=radius {
            let mut row_cells = IndexMap::with_capacity(width);
            for column in -radius..=radius {
                row_cells.insert(column, default.clone());
            }
            cells.insert(row, row_cells);
        }

        Ok(Self {
            cells,
            default,
            radius,
        })
    }

    /// Current radius.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Grow or shrink to `new_radius`; returns whether anything
    /// changed.
    ///
    /// `Ok(false)` when `new_radius` equals the current radius; fails
    /// with [`GridError::InvalidDimension`] when negative.
    pub fn maybe_resize(&mut self, new_radius: i32) -> Result<bool, GridError> {
        check_dimension("radius", new_radius)?;

        if new_radius == self.radius {
            return Ok(false);
        }

        let old_radius = self.radius;
        self.radius = new_radius;

        if new_radius > old_radius {
            let default = self.default.clone();
            for row_cells in self.cells.values_mut() {
                for column in -new_radius..=new_radius {
                    row_cells.entry(column).or_insert_with(|| default.clone());
                }
            }
            for step in (old_radius + 1)..=new_radius {
                for row in [-step, step] {
                    let mut row_cells = IndexMap::with_capacity((2 * new_radius + 1) as usize);
                    for column in -new_radius..=new_radius {
                        row_cells.insert(column, default.clone());
                    }
                    self.cells.insert(row, row_cells);
                }
            }
        } else {
            self.cells.retain(|row, _| row.abs() <= new_radius);
            for row_cells in self.cells.values_mut() {
                row_cells.retain(|column, _| column.abs() <= new_radius);
            }
        }

        Ok(true)
    }

    fn in_bounds(&self, value: i32) -> bool {
        value.abs() <= self.radius
    }
}

impl<T: Clone> CellGrid<T> for RadiusGrid<T> {
    /// Row count: `2 * radius + 1`.
    fn rows(&self) -> i32 {
        2 * self.radius + 1
    }

    /// Column count: `2 * radius + 1`.
    fn columns(&self) -> i32 {
        2 * self.radius + 1
    }

    fn get(&self, row: i32, column: i32) -> Option<&T> {
        self.cells.get(&row)?.get(&column)
    }

    fn get_checked(&self, row: i32, column: i32) -> Result<&T, GridError> {
        if !self.in_bounds(row) {
            return Err(GridError::InvalidRow { row });
        }
        if !self.in_bounds(column) {
            return Err(GridError::InvalidColumn { column });
        }
        self.cells
            .get(&row)
            .and_then(|row_cells| row_cells.get(&column))
            .ok_or(GridError::InvalidColumn { column })
    }

    fn set(&mut self, row: i32, column: i32, value: T) {
        if !self.in_bounds(row) || !self.in_bounds(column) {
            return;
        }
        if let Some(row_cells) = self.cells.get_mut(&row) {
            row_cells.insert(column, value);
        }
    }

    fn set_checked(&mut self, row: i32, column: i32, value: T) -> Result<(), GridError> {
        if !self.in_bounds(row) {
            return Err(GridError::InvalidRow { row });
        }
        if !self.in_bounds(column) {
            return Err(GridError::InvalidColumn { column });
        }
        if let Some(row_cells) = self.cells.get_mut(&row) {
            row_cells.insert(column, value);
        }
        Ok(())
    }
}
