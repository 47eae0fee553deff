//! Grid backends for the loam automaton crates.
//!
//! Three implementations of [`loam_core::CellGrid`], selected per use
//! case:
//!
//! - [`DenseGrid`]: fixed-capacity 2D array with symmetric column
//!   expansion ([`DenseGrid::maybe_expand`])
//! - [`MapGrid`]: per-row associative storage with independent
//!   row/column growth and shrink ([`MapGrid::maybe_resize`])
//! - [`RadiusGrid`]: radius-centred associative storage addressed by
//!   coordinates in `[-radius, radius]` ([`RadiusGrid::maybe_resize`])
//!
//! The two growth policies are mutually exclusive by design: a backend
//! carries either the symmetric expand or the general resize, never
//! both.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod map;
pub mod radius;

#[cfg(test)]
pub(crate) mod compliance;

pub use dense::DenseGrid;
pub use map::MapGrid;
pub use radius::RadiusGrid;
