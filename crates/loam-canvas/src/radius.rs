//! Facade over the radius-addressed sparse grid.

use loam_core::{CellGrid, GridError};
use loam_grid::RadiusGrid;

use crate::callbacks::{DrawFn, RadiusResizeFn};

const DEFAULT_VALUE: u32 = 0;

/// Construction input for [`RadiusCanvas`].
pub struct RadiusCanvasConfig {
    /// Initial radius; valid coordinates are `[-radius, radius]` on
    /// both axes.
    pub radius: i32,
    /// Per-cell draw callback.
    pub draw: DrawFn,
    /// Resize callback, fired with the new radius.
    pub resize: RadiusResizeFn,
}

/// A draw-callback facade over a [`RadiusGrid`] of paint counts.
///
/// Coordinates are signed and centre-anchored. Growth and shrink go
/// through [`resize`](Self::resize); newly seeded default cells are
/// not mutations of caller-visible state, so a resize fires only the
/// resize callback.
pub struct RadiusCanvas {
    grid: RadiusGrid<u32>,
    draw: DrawFn,
    resize: RadiusResizeFn,
}

impl RadiusCanvas {
    /// Create a facade and its backing grid.
    ///
    /// Fails with [`GridError::InvalidDimension`] for a negative
    /// radius. Construction fires no callbacks.
    pub fn new(config: RadiusCanvasConfig) -> Result<Self, GridError> {
        let RadiusCanvasConfig {
            radius,
            draw,
            resize,
        } = config;

        Ok(Self {
            grid: RadiusGrid::new(radius, DEFAULT_VALUE)?,
            draw,
            resize,
        })
    }

    /// Current radius.
    pub fn radius(&self) -> i32 {
        self.grid.radius()
    }

    /// Row count (`2 * radius + 1`).
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// Column count (`2 * radius + 1`).
    pub fn columns(&self) -> i32 {
        self.grid.columns()
    }

    /// Read a cell value.
    pub fn value(&self, row: i32, column: i32) -> Result<u32, GridError> {
        self.grid.get_checked(row, column).copied()
    }

    /// Add `amount` to a cell; returns the new value.
    pub fn increment(&mut self, row: i32, column: i32, amount: u32) -> Result<u32, GridError> {
        let value = self.value(row, column)?.saturating_add(amount);
        self.write(row, column, value)?;
        Ok(value)
    }

    /// Subtract `amount` from a cell, flooring at 0; returns the new
    /// value.
    pub fn decrement(&mut self, row: i32, column: i32, amount: u32) -> Result<u32, GridError> {
        let value = self.value(row, column)?.saturating_sub(amount);
        self.write(row, column, value)?;
        Ok(value)
    }

    /// Set a cell back to the default value.
    pub fn reset(&mut self, row: i32, column: i32) -> Result<(), GridError> {
        self.value(row, column)?;
        self.write(row, column, DEFAULT_VALUE)
    }

    /// Grow or shrink to `new_radius`; returns whether anything
    /// changed. Fires the resize callback with the new radius when it
    /// did.
    pub fn resize(&mut self, new_radius: i32) -> Result<bool, GridError> {
        let changed = self.grid.maybe_resize(new_radius)?;
        if changed {
            (self.resize)(self.grid.radius());
        }
        Ok(changed)
    }

    fn write(&mut self, row: i32, column: i32, value: u32) -> Result<(), GridError> {
        self.grid.set_checked(row, column, value)?;
        (self.draw)(row, column, value);
        Ok(())
    }
}
