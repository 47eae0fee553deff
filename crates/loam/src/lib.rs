//! Loam: small discrete cellular-automaton engines with draw-callback
//! facades.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use loam::prelude::*;
//!
//! // Collect draw events the way a painting UI would.
//! let draws: Rc<RefCell<Vec<(i32, i32, u32)>>> = Rc::default();
//! let log = Rc::clone(&draws);
//!
//! // An 8×8 life canvas with a diagonal of live cells.
//! let mut canvas = LifeCanvas::new(LifeCanvasConfig {
//!     rows: 8,
//!     columns: 8,
//!     draw: Box::new(move |row, column, value| {
//!         log.borrow_mut().push((row, column, value));
//!     }),
//!     init: Some(Box::new(|row, column| u32::from(row == column))),
//! })
//! .unwrap();
//!
//! // Paint one cell, then step until the grid settles.
//! canvas.increment(0, 7, 1).unwrap();
//! assert_eq!(draws.borrow().as_slice(), &[(0, 7, 1)]);
//!
//! let changed = canvas.evolve();
//! assert!(changed > 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | Error types and the [`types::CellGrid`] trait |
//! | [`grid`] | `loam-grid` | [`grid::DenseGrid`], [`grid::MapGrid`], [`grid::RadiusGrid`] |
//! | [`automata`] | `loam-automata` | [`automata::LifeAutomaton`], rules, [`automata::ElementaryAutomaton`] |
//! | [`canvas`] | `loam-canvas` | Facade adapters and callback aliases |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error types and the cell-grid trait (`loam-core`).
pub use loam_core as types;

/// Grid backends (`loam-grid`).
///
/// [`grid::DenseGrid`] for fixed grids with symmetric expansion,
/// [`grid::MapGrid`] for sparse growable grids, and
/// [`grid::RadiusGrid`] for radius-centred signed addressing.
pub use loam_grid as grid;

/// Cellular automata (`loam-automata`).
///
/// The 2D [`automata::LifeAutomaton`], the 1D
/// [`automata::ElementaryAutomaton`], and the
/// [`automata::Rule`]/[`automata::RuleSet`] transition tables.
pub use loam_automata as automata;

/// Facade adapters and callback types (`loam-canvas`).
pub use loam_canvas as canvas;

/// Common imports for typical loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    pub use loam_automata::{ElementaryAutomaton, LifeAutomaton, Rule, RuleSet};
    pub use loam_canvas::{
        CanvasGrid, CanvasGridConfig, DrawFn, InitFn, LifeCanvas, LifeCanvasConfig,
        RadiusCanvas, RadiusCanvasConfig, RadiusResizeFn, ResizeFn,
    };
    pub use loam_core::{CellGrid, GridError, RuleError};
    pub use loam_grid::{DenseGrid, MapGrid, RadiusGrid};
}
