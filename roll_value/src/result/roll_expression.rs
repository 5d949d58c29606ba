//! Roll expression metadata

use std::fmt;

/// How a dice roll result behaves when used as an operand
///
/// `verbose` asks the presentation layer for the full roll detail; `sum`
/// decides whether the result computes as its primary value (`true`) or as
/// the list of its individual values (`false`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RollExpression {
    roll_text: String,
    verbose: bool,
    sum: bool,
}

impl RollExpression {
    fn new(roll_text: String, verbose: bool, sum: bool) -> Self {
        RollExpression {
            roll_text,
            verbose,
            sum,
        }
    }

    /// Only the summed result is of interest
    pub fn result_only<S: Into<String>>(roll_text: S) -> Self {
        Self::new(roll_text.into(), false, true)
    }

    /// The individual rolls are of interest, not their sum
    pub fn detail_only<S: Into<String>>(roll_text: S) -> Self {
        Self::new(roll_text.into(), true, false)
    }

    /// Show the roll detail and compute with the sum
    pub fn detail_with_sum<S: Into<String>>(roll_text: S) -> Self {
        Self::new(roll_text.into(), true, true)
    }

    /// Source text of the roll, e.g. `3d6+2`
    pub fn roll_text(&self) -> &str {
        &self.roll_text
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_sum(&self) -> bool {
        self.sum
    }
}

impl fmt::Display for RollExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RollExpression: {} (verbose = {}, sum = {})",
            self.roll_text, self.verbose, self.sum
        )
    }
}
