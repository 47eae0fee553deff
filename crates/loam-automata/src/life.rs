//! 2D neighbour-count automaton over a dense grid.

use loam_core::{CellGrid, GridError};
use loam_grid::DenseGrid;

const DEAD: u32 = 0;
const ALIVE: u32 = 1;

/// All 8 Moore-neighbourhood offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A 2D automaton evolving every cell simultaneously from its
/// 8-neighbour live count.
///
/// Owns exactly one [`DenseGrid`] of non-negative cell values. A cell
/// is alive iff its value is exactly 1; larger values are paint
/// intensities written through the cell accessors and treated as dead
/// by the evolution rule (an evolution step that targets such a cell
/// rewrites it to 0 or 1).
///
/// Transition rule, per [`evolve`](Self::evolve) step:
///
/// - exactly 2 live neighbours: the cell keeps its current state
/// - exactly 1 or 3 live neighbours: the cell becomes alive
/// - any other count: the cell becomes dead
///
/// Out-of-bounds neighbours count as dead.
pub struct LifeAutomaton {
    grid: DenseGrid<u32>,
}

impl LifeAutomaton {
    /// Create an all-dead `rows × columns` automaton.
    pub fn new(rows: i32, columns: i32) -> Result<Self, GridError> {
        Ok(Self {
            grid: DenseGrid::new(rows, columns, DEAD)?,
        })
    }

    /// Create an automaton whose cells are seeded by
    /// `init(row, column)`.
    pub fn with_initializer(
        rows: i32,
        columns: i32,
        init: impl Fn(i32, i32) -> u32,
    ) -> Result<Self, GridError> {
        Ok(Self {
            grid: DenseGrid::with_initializer(rows, columns, DEAD, init)?,
        })
    }

    /// Row count of the backing grid.
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// Column count of the backing grid.
    pub fn columns(&self) -> i32 {
        self.grid.columns()
    }

    /// Read a cell value, failing outside the grid bounds.
    pub fn get_checked(&self, row: i32, column: i32) -> Result<u32, GridError> {
        self.grid.get_checked(row, column).copied()
    }

    /// Write a cell value, failing outside the grid bounds.
    pub fn set_checked(&mut self, row: i32, column: i32, value: u32) -> Result<(), GridError> {
        self.grid.set_checked(row, column, value)
    }

    /// Whether the cell at `(row, column)` is alive. Out-of-bounds
    /// coordinates read as dead.
    pub fn is_alive(&self, row: i32, column: i32) -> bool {
        self.grid.get(row, column) == Some(&ALIVE)
    }

    /// Advance the whole grid by one step; returns the number of cells
    /// whose stored value changed.
    ///
    /// The update is simultaneous: every neighbour count is measured
    /// against the grid as it stood when the call began, and the
    /// computed next values are committed only afterwards. The returned
    /// count is the caller's fixed-point and oscillation signal — zero
    /// means the grid has settled.
    pub fn evolve(&mut self) -> usize {
        let rows = self.grid.rows();
        let columns = self.grid.columns();

        let mut next = Vec::with_capacity((rows * columns) as usize);
        for row in 0..rows {
            for column in 0..columns {
                let alive = OFFSETS_8
                    .iter()
                    .filter(|&&(dr, dc)| self.is_alive(row + dr, column + dc))
                    .count();
                let lives = match alive {
                    2 => self.is_alive(row, column),
                    1 | 3 => true,
                    _ => false,
                };
                next.push(if lives { ALIVE } else { DEAD });
            }
        }

        let mut changed = 0;
        for row in 0..rows {
            for column in 0..columns {
                let value = next[(row * columns + column) as usize];
                if self.grid.get(row, column) != Some(&value) {
                    self.grid.set(row, column, value);
                    changed += 1;
                }
            }
        }
        changed
    }
}
