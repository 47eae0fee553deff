//! Error types for grid access and rule construction.
//!
//! All failures here are local, synchronous, and unrecoverable at the
//! call site. Operations validate their inputs before writing, so a
//! returned error guarantees no cell was mutated.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or bounds-checked cell access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid was constructed with a negative dimension.
    InvalidDimension {
        /// Which dimension was rejected (`"rows"`, `"columns"`, or `"radius"`).
        name: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A bounds-checked access named a row outside the current extent.
    InvalidRow {
        /// The offending row index.
        row: i32,
    },
    /// A bounds-checked access named a column outside the current extent
    /// of an otherwise valid row.
    InvalidColumn {
        /// The offending column index.
        column: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} must be non-negative, got {value}")
            }
            Self::InvalidRow { row } => write!(f, "invalid row: {row}"),
            Self::InvalidColumn { column } => write!(f, "invalid column: {column}"),
        }
    }
}

impl Error for GridError {}

/// Errors arising from rule matching or rule-set construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A candidate window's length differs from the rule's pattern length.
    PatternLengthMismatch {
        /// The rule's pattern length.
        expected: usize,
        /// The candidate's length.
        actual: usize,
    },
    /// A rule set was constructed from zero rules.
    EmptyRuleSet,
    /// A rule set was constructed from rules of differing lengths.
    RuleLengthMismatch {
        /// The first rule's length, which all members must share.
        expected: usize,
        /// The offending rule's length.
        actual: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternLengthMismatch { expected, actual } => {
                write!(f, "pattern length mismatch: expected {expected}, got {actual}")
            }
            Self::EmptyRuleSet => write!(f, "rule set must contain at least one rule"),
            Self::RuleLengthMismatch { expected, actual } => {
                write!(f, "all rules must share one length: expected {expected}, got {actual}")
            }
        }
    }
}

impl Error for RuleError {}
