//! Dense-grid facade with auto-expanding bulk row replace.

use loam_core::{CellGrid, GridError};
use loam_grid::DenseGrid;

use crate::callbacks::{DrawFn, InitFn, ResizeFn};

const DEFAULT_VALUE: u32 = 0;

/// Construction input for [`CanvasGrid`].
pub struct CanvasGridConfig {
    /// Initial row count.
    pub rows: i32,
    /// Initial column count.
    pub columns: i32,
    /// Per-cell draw callback.
    pub draw: DrawFn,
    /// Resize callback, fired with the new `(rows, columns)`.
    pub resize: ResizeFn,
    /// Optional per-cell initializer; cells default to 0 without one.
    pub init: Option<InitFn>,
}

/// A draw-callback facade over a [`DenseGrid`] of paint counts.
///
/// [`set_row`](Self::set_row) auto-expands the grid: rows grow to fit
/// the target index, and a too-wide row widens the grid symmetrically
/// so existing data stays centred (the dense backend's only growth
/// policy).
pub struct CanvasGrid {
    grid: DenseGrid<u32>,
    draw: DrawFn,
    resize: ResizeFn,
}

impl CanvasGrid {
    /// Create a facade and its backing grid.
    ///
    /// Fails with [`GridError::InvalidDimension`] for negative
    /// dimensions. Construction fires no callbacks.
    pub fn new(config: CanvasGridConfig) -> Result<Self, GridError> {
        let CanvasGridConfig {
            rows,
            columns,
            draw,
            resize,
            init,
        } = config;

        let grid = match init {
            Some(init) => DenseGrid::with_initializer(rows, columns, DEFAULT_VALUE, |row, column| {
                init(row, column)
            })?,
            None => DenseGrid::new(rows, columns, DEFAULT_VALUE)?,
        };

        Ok(Self { grid, draw, resize })
    }

    /// Current row count.
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// Current column count.
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

    /// Copy one full row out of the grid.
    pub fn row(&self, row: i32) -> Result<Vec<u32>, GridError> {
        self.grid.row_checked(row).map(<[u32]>::to_vec)
    }

    /// Replace row `index` with `values`, expanding the grid to fit.
    ///
    /// Rows grow to `index + 1` when the index is past the last row. A
    /// `values` slice at least as wide as the grid widens every row
    /// symmetrically by `ceil((values.len() - columns) / 2)` per side.
    /// The values are then written left-aligned across the full (new)
    /// width, with cells past the slice set to the default; the draw
    /// callback fires per cell and the resize callback once at the end
    /// if anything expanded.
    pub fn set_row(&mut self, index: i32, values: &[u32]) -> Result<(), GridError> {
        if index < 0 {
            return Err(GridError::InvalidRow { row: index });
        }

        let mut expanded = false;
        if index >= self.grid.rows() {
            expanded = self.grid.maybe_expand(index + 1, 0)?;
        }
        if values.len() as i32 >= self.grid.columns() {
            let delta = (values.len() as i32 - self.grid.columns() + 1) / 2;
            expanded = self.grid.maybe_expand(self.grid.rows(), delta)? || expanded;
        }

        for column in 0..self.grid.columns() {
            let value = values.get(column as usize).copied().unwrap_or(DEFAULT_VALUE);
            self.write(index, column, value)?;
        }

        if expanded {
            (self.resize)(self.grid.rows(), self.grid.columns());
        }
        Ok(())
    }

    fn write(&mut self, row: i32, column: i32, value: u32) -> Result<(), GridError> {
        self.grid.set_checked(row, column, value)?;
        (self.draw)(row, column, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type DrawLog = Rc<RefCell<Vec<(i32, i32, u32)>>>;
    type ResizeLog = Rc<RefCell<Vec<(i32, i32)>>>;

    fn logged_grid(rows: i32, columns: i32) -> (CanvasGrid, DrawLog, ResizeLog) {
        let draws: DrawLog = Rc::default();
        let resizes: ResizeLog = Rc::default();
        let draw_log = Rc::clone(&draws);
        let resize_log = Rc::clone(&resizes);
        let grid = CanvasGrid::new(CanvasGridConfig {
            rows,
            columns,
            draw: Box::new(move |row, column, value| {
                draw_log.borrow_mut().push((row, column, value));
            }),
            resize: Box::new(move |rows, columns| {
                resize_log.borrow_mut().push((rows, columns));
            }),
            init: None,
        })
        .unwrap();
        (grid, draws, resizes)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn construction_fires_no_callbacks() {
        let (grid, draws, resizes) = logged_grid(1, 1);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.value(0, 0), Ok(0));
        assert!(draws.borrow().is_empty());
        assert!(resizes.borrow().is_empty());
    }

    #[test]
    fn initializer_seeds_cells() {
        let grid = CanvasGrid::new(CanvasGridConfig {
            rows: 2,
            columns: 2,
            draw: Box::new(|_, _, _| {}),
            resize: Box::new(|_, _| {}),
            init: Some(Box::new(|row, column| (row * 2 + column) as u32)),
        })
        .unwrap();
        assert_eq!(grid.value(1, 1), Ok(3));
    }

    // ── Mutations ───────────────────────────────────────────────

    #[test]
    fn increment_draws_the_new_value() {
        let (mut grid, draws, _) = logged_grid(1, 1);

        assert_eq!(grid.increment(0, 0, 1), Ok(1));
        assert_eq!(grid.value(0, 0), Ok(1));
        assert_eq!(draws.borrow().as_slice(), &[(0, 0, 1)]);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let (mut grid, draws, _) = logged_grid(1, 1);

        assert_eq!(grid.increment(0, 0, 1), Ok(1));
        assert_eq!(grid.decrement(0, 0, 1), Ok(0));
        assert_eq!(grid.decrement(0, 0, 5), Ok(0));
        assert_eq!(draws.borrow().as_slice(), &[(0, 0, 1), (0, 0, 0), (0, 0, 0)]);
    }

    #[test]
    fn reset_restores_the_default() {
        let (mut grid, draws, _) = logged_grid(1, 1);

        grid.increment(0, 0, 3).unwrap();
        grid.reset(0, 0).unwrap();
        assert_eq!(grid.value(0, 0), Ok(0));
        assert_eq!(draws.borrow().as_slice(), &[(0, 0, 3), (0, 0, 0)]);
    }

    #[test]
    fn failed_mutations_fire_nothing() {
        let (mut grid, draws, resizes) = logged_grid(1, 1);

        assert_eq!(
            grid.increment(1, 0, 1),
            Err(GridError::InvalidRow { row: 1 })
        );
        assert_eq!(
            grid.decrement(0, 1, 1),
            Err(GridError::InvalidColumn { column: 1 })
        );
        assert_eq!(grid.reset(-1, 0), Err(GridError::InvalidRow { row: -1 }));
        assert!(draws.borrow().is_empty());
        assert!(resizes.borrow().is_empty());
    }

    // ── Bulk row replace ────────────────────────────────────────

    #[test]
    fn set_row_within_bounds_replaces_and_draws_in_order() {
        let (mut grid, draws, resizes) = logged_grid(2, 2);

        grid.set_row(1, &[4]).unwrap();
        assert_eq!(grid.row(1).unwrap(), vec![4, 0]);
        assert_eq!(draws.borrow().as_slice(), &[(1, 0, 4), (1, 1, 0)]);
        assert!(resizes.borrow().is_empty());
    }

    #[test]
    fn set_row_past_the_last_row_grows_rows() {
        let (mut grid, _, resizes) = logged_grid(1, 2);

        grid.set_row(2, &[7]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.row(2).unwrap(), vec![7, 0]);
        assert_eq!(resizes.borrow().as_slice(), &[(3, 2)]);
    }

    #[test]
    fn wide_row_triggers_symmetric_expansion() {
        let (mut grid, _, resizes) = logged_grid(1, 1);
        grid.increment(0, 0, 9).unwrap();

        // Three values against one column: delta ceil(2 / 2) = 1 pads
        // one column per side; the old cell moves from column 0 to 1
        // before being overwritten left-aligned.
        grid.set_row(0, &[1, 2, 3]).unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.row(0).unwrap(), vec![1, 2, 3]);
        assert_eq!(resizes.borrow().as_slice(), &[(1, 3)]);
    }

    #[test]
    fn resize_fires_once_after_all_draws() {
        // A single interleaved event log: every draw for the operation
        // must precede the resize event.
        let events: Rc<RefCell<Vec<String>>> = Rc::default();
        let draw_log = Rc::clone(&events);
        let resize_log = Rc::clone(&events);
        let mut grid = CanvasGrid::new(CanvasGridConfig {
            rows: 1,
            columns: 2,
            draw: Box::new(move |row, column, value| {
                draw_log.borrow_mut().push(format!("draw {row} {column} {value}"));
            }),
            resize: Box::new(move |rows, columns| {
                resize_log.borrow_mut().push(format!("resize {rows} {columns}"));
            }),
            init: None,
        })
        .unwrap();

        grid.set_row(1, &[5]).unwrap();
        assert_eq!(
            events.borrow().as_slice(),
            &["draw 1 0 5", "draw 1 1 0", "resize 2 2"]
        );
    }

    #[test]
    fn set_row_matching_width_does_not_resize() {
        let (mut grid, _, resizes) = logged_grid(1, 2);

        // Equal width trips the expansion check with a delta of zero,
        // which the backend treats as a no-op.
        grid.set_row(0, &[8, 9]).unwrap();
        assert_eq!(grid.row(0).unwrap(), vec![8, 9]);
        assert!(resizes.borrow().is_empty());
    }

    #[test]
    fn elementary_generations_stay_centred_as_rows() {
        use loam_automata::{ElementaryAutomaton, RuleSet};
        use std::sync::Arc;

        // Appending each 1D generation as a row is what the symmetric
        // expansion exists for: the history stays centred as the state
        // grows at both ends.
        let rules = Arc::new(RuleSet::from_wolfram(254).unwrap());
        let mut automaton = ElementaryAutomaton::new([1], rules);
        let (mut grid, _, resizes) = logged_grid(1, 1);

        grid.set_row(0, &[1]).unwrap();
        for generation in 1..4 {
            let state: Vec<u32> = automaton.evolve().unwrap().iter().map(|&c| c as u32).collect();
            grid.set_row(generation, &state).unwrap();
        }

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 7);
        assert_eq!(resizes.borrow().as_slice(), &[(2, 3), (3, 5), (4, 7)]);
        // Generation 0's single live cell sits in the centre column.
        assert_eq!(grid.value(0, 3), Ok(1));
        assert_eq!(grid.row(1).unwrap(), vec![0, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn set_row_rejects_negative_index() {
        let (mut grid, draws, _) = logged_grid(1, 1);
        assert_eq!(
            grid.set_row(-1, &[1]),
            Err(GridError::InvalidRow { row: -1 })
        );
        assert!(draws.borrow().is_empty());
    }
}
