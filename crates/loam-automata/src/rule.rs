//! A single fixed-length binary neighbourhood pattern.

use loam_core::RuleError;
use smallvec::SmallVec;

/// One fixed pattern a neighbourhood window is compared against.
///
/// Immutable after construction; equality is positional. Input values
/// are normalized to 0/1 (any non-zero value counts as 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pattern: SmallVec<[u8; 8]>,
}

impl Rule {
    /// Create a rule from a sequence of 0/1 values.
    pub fn new(pattern: impl IntoIterator<Item = u8>) -> Self {
        Self {
            pattern: pattern.into_iter().map(|bit| u8::from(bit != 0)).collect(),
        }
    }

    /// Build the 3-cell rule whose pattern is the 3-bit binary
    /// representation of `neighborhood`, most significant bit first.
    ///
    /// `neighborhood` is expected in `0..8`; higher bits are ignored.
    pub fn from_index(neighborhood: u8) -> Self {
        Self::new((0..3).rev().map(|bit| (neighborhood >> bit) & 1))
    }

    /// Pattern length.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Whether the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The pattern as a slice of 0/1 values.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Whether `candidate` equals this rule's pattern at every
    /// position.
    ///
    /// Fails with [`RuleError::PatternLengthMismatch`] when the lengths
    /// differ.
    pub fn matches(&self, candidate: &[u8]) -> Result<bool, RuleError> {
        if candidate.len() != self.pattern.len() {
            return Err(RuleError::PatternLengthMismatch {
                expected: self.pattern.len(),
                actual: candidate.len(),
            });
        }
        Ok(self.pattern.iter().eq(candidate.iter()))
    }
}
