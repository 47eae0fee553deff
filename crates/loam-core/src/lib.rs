//! Core types and traits for the loam automaton crates.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by every grid and rule operation, and the
//! [`CellGrid`] trait that all grid backends implement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::{GridError, RuleError};
pub use grid::CellGrid;
