//! 1D elementary automaton with a growing state vector.

use std::sync::Arc;

use loam_core::RuleError;
use smallvec::SmallVec;

use crate::rules::RuleSet;

/// A one-dimensional automaton driven by a shared [`RuleSet`].
///
/// Holds an ordered sequence of 0/1 cells. Each
/// [`evolve`](Self::evolve) step produces a strictly longer state: the
/// sequence extends into previously absent territory at both ends,
/// mirroring an infinite background of dead cells, so the length grows
/// by `window_len - 1` per step and never shrinks.
///
/// The rule set is externally owned and shared read-only; the automaton
/// holds an [`Arc`] handle.
pub struct ElementaryAutomaton {
    state: Vec<u8>,
    rules: Arc<RuleSet>,
}

impl ElementaryAutomaton {
    /// Create an automaton from an initial cell sequence and a rule
    /// set.
    ///
    /// Cell values are normalized to 0/1 (any non-zero value counts as
    /// alive).
    pub fn new(state: impl IntoIterator<Item = u8>, rules: Arc<RuleSet>) -> Self {
        Self {
            state: state.into_iter().map(|bit| u8::from(bit != 0)).collect(),
            rules,
        }
    }

    /// Read-only view of the current cell sequence.
    pub fn state(&self) -> &[u8] {
        &self.state
    }

    /// The rule set driving this automaton.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Advance one step, growing the state by `window_len - 1` cells,
    /// and return the new state.
    ///
    /// Output index `i` of the new state takes the window of
    /// `window_len` consecutive old values ending at old index `i`;
    /// indices past either end of the old state read as 0. The output
    /// cell is alive iff any rule matches the window.
    ///
    /// On error the state is unchanged. The error arm exists because
    /// [`RuleSet::has_match`] reports window-length mismatches; the
    /// windows built here always have the set's own length.
    pub fn evolve(&mut self) -> Result<&[u8], RuleError> {
        let window_len = self.rules.window_len();
        let new_len = self.state.len() + window_len.saturating_sub(1);

        let mut next = Vec::with_capacity(new_len);
        let mut window: SmallVec<[u8; 8]> = SmallVec::with_capacity(window_len);
        for i in 0..new_len as i64 {
            window.clear();
            for j in (i + 1 - window_len as i64)..=i {
                let cell = if j >= 0 && (j as usize) < self.state.len() {
                    self.state[j as usize]
                } else {
                    0
                };
                window.push(cell);
            }
            next.push(u8::from(self.rules.has_match(&window)?));
        }

        self.state = next;
        Ok(&self.state)
    }
}
