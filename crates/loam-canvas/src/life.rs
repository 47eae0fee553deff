//! Facade over the 2D neighbour-count automaton.

use loam_automata::LifeAutomaton;
use loam_core::GridError;

use crate::callbacks::{DrawFn, InitFn};

const DEFAULT_VALUE: u32 = 0;

/// Construction input for [`LifeCanvas`].
pub struct LifeCanvasConfig {
    /// Row count; the automaton's grid never resizes.
    pub rows: i32,
    /// Column count.
    pub columns: i32,
    /// Per-cell draw callback.
    pub draw: DrawFn,
    /// Optional per-cell initializer; cells default to dead without
    /// one.
    pub init: Option<InitFn>,
}

/// A draw-callback facade over a [`LifeAutomaton`].
///
/// The pen operations (increment, decrement, reset) mutate single
/// cells and fire the draw callback. [`evolve`](Self::evolve) advances
/// the whole grid and returns the changed-cell count without firing
/// draws — a driving layer repaints from its own read pass and uses
/// the count to detect fixed points and oscillations.
pub struct LifeCanvas {
    automaton: LifeAutomaton,
    draw: DrawFn,
}

impl LifeCanvas {
    /// Create a facade and its backing automaton.
    ///
    /// Fails with [`GridError::InvalidDimension`] for negative
    /// dimensions. Construction fires no callbacks.
    pub fn new(config: LifeCanvasConfig) -> Result<Self, GridError> {
        let LifeCanvasConfig {
            rows,
            columns,
            draw,
            init,
        } = config;

        let automaton = match init {
            Some(init) => LifeAutomaton::with_initializer(rows, columns, |row, column| {
                init(row, column)
            })?,
            None => LifeAutomaton::new(rows, columns)?,
        };

        Ok(Self { automaton, draw })
    }

    /// Row count.
    pub fn rows(&self) -> i32 {
        self.automaton.rows()
    }

    /// Column count.
    pub fn columns(&self) -> i32 {
        self.automaton.columns()
    }

    /// Read a cell value.
    pub fn value(&self, row: i32, column: i32) -> Result<u32, GridError> {
        self.automaton.get_checked(row, column)
    }

    /// Whether the cell is alive (out-of-bounds reads as dead).
    pub fn is_alive(&self, row: i32, column: i32) -> bool {
        self.automaton.is_alive(row, column)
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

    /// Set a cell back to dead.
    pub fn reset(&mut self, row: i32, column: i32) -> Result<(), GridError> {
        self.value(row, column)?;
        self.write(row, column, DEFAULT_VALUE)
    }

    /// Advance the automaton one step; returns the number of cells
    /// that changed. Fires no draw callbacks.
    pub fn evolve(&mut self) -> usize {
        self.automaton.evolve()
    }

    fn write(&mut self, row: i32, column: i32, value: u32) -> Result<(), GridError> {
        self.automaton.set_checked(row, column, value)?;
        (self.draw)(row, column, value);
        Ok(())
    }
}
