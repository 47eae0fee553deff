//! Cellular automata for the loam crates.
//!
//! Two evolution engines over the `loam-grid` backends:
//!
//! - [`LifeAutomaton`]: a 2D neighbour-count automaton over a dense
//!   grid. One [`evolve`](LifeAutomaton::evolve) step updates every
//!   cell simultaneously from its 8-neighbour live count and reports
//!   how many cells changed.
//! - [`ElementaryAutomaton`]: a 1D automaton whose transition table is
//!   a [`RuleSet`] of binary patterns ([`Rule`]). Each step grows the
//!   state at both ends, mirroring an infinite background of dead
//!   cells.
//!
//! Evolution is driven entirely by the caller; there are no timers or
//! threads here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod elementary;
pub mod life;
pub mod rule;
pub mod rules;

pub use elementary::ElementaryAutomaton;
pub use life::LifeAutomaton;
pub use rule::Rule;
pub use rules::RuleSet;
