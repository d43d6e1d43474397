//! Error types for rule graph construction.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while building a [`RuleGraph`](crate::grammar::RuleGraph).
///
/// These cover the only fatal input class: a malformed rule graph. Everything
/// downstream of graph construction (unknown override keys, cyclic rules,
/// opaque override text) is handled silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Two rules share the same name.
    #[error("duplicate rule name: `{0}`")]
    DuplicateRule(SmolStr),

    /// A rule body references a rule that does not exist in the graph.
    #[error("rule `{from}` references unknown rule `{to}`")]
    DanglingReference {
        /// The rule whose body contains the reference.
        from: SmolStr,
        /// The referenced name that is missing from the graph.
        to: SmolStr,
    },

    /// The grammar contains no rules at all.
    #[error("rule graph is empty")]
    EmptyGraph,
}

impl GrammarError {
    /// Create a dangling-reference error.
    pub fn dangling(from: impl Into<SmolStr>, to: impl Into<SmolStr>) -> Self {
        Self::DanglingReference {
            from: from.into(),
            to: to.into(),
        }
    }
}
