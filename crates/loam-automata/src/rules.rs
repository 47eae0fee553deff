//! A validated collection of equal-length rules forming a transition
//! table.

use loam_core::RuleError;

use crate::rule::Rule;

/// The disjunction of all patterns that produce an alive output.
///
/// Non-empty, and every member shares one pattern length (the
/// neighbourhood window size, `2 * radius + 1` — radius 1 for the
/// elementary automata built by [`from_wolfram`](Self::from_wolfram)).
/// Both invariants are enforced at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    window_len: usize,
}

impl RuleSet {
    /// Create a rule set from a non-empty list of equal-length rules.
    ///
    /// Fails with [`RuleError::EmptyRuleSet`] for zero rules and
    /// [`RuleError::RuleLengthMismatch`] when any rule's length differs
    /// from the first rule's.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        let Some(first) = rules.first() else {
            return Err(RuleError::EmptyRuleSet);
        };

        let window_len = first.len();
        if let Some(rule) = rules.iter().find(|rule| rule.len() != window_len) {
            return Err(RuleError::RuleLengthMismatch {
                expected: window_len,
                actual: rule.len(),
            });
        }

        Ok(Self { rules, window_len })
    }

    /// Build the rule set for a classic Wolfram elementary-automaton
    /// rule number.
    ///
    /// For every bit position `i` in `0..8` where bit `i` of
    /// `rule_number` is 1 (least-significant bit corresponds to
    /// neighbourhood index 0), the set includes
    /// [`Rule::from_index`]`(i)` — i.e. it enumerates which of the 8
    /// possible 3-cell neighbourhoods produce an alive output.
    ///
    /// Rule number 0 maps every neighbourhood to dead and therefore
    /// fails with [`RuleError::EmptyRuleSet`].
    pub fn from_wolfram(rule_number: u8) -> Result<Self, RuleError> {
        let rules = (0..8)
            .filter(|index| (rule_number >> index) & 1 == 1)
            .map(Rule::from_index)
            .collect();
        Self::new(rules)
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false` — construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The pattern length every member shares.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// The member rules.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate over the member rules.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Whether any member rule matches `candidate`.
    ///
    /// Fails with [`RuleError::PatternLengthMismatch`] when
    /// `candidate`'s length differs from [`window_len`](Self::window_len).
    pub fn has_match(&self, candidate: &[u8]) -> Result<bool, RuleError> {
        for rule in &self.rules {
            if rule.matches(candidate)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
