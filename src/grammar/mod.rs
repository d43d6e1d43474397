//! Rule graph model: the normalized representation of a grammar's rules.
//!
//! A [`RuleGraph`] is an ordered table of [`Rule`]s, indexed by name.
//! Declaration order is preserved because the emitted type declarations must
//! follow it. Construction validates the graph; everything after construction
//! is lookup-only.

mod rule;

pub use rule::{Rule, RuleBody};

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::error::GrammarError;

/// An ordered table of grammar rules.
///
/// Rules keep their declaration order and are addressable by name. Reference
/// edges between rules may form cycles; the graph itself does not care, it
/// only guarantees that every referenced name exists.
#[derive(Debug, Clone)]
pub struct RuleGraph {
    rules: IndexMap<SmolStr, Rule>,
}

impl RuleGraph {
    /// Build a graph from rules in declaration order.
    ///
    /// Rejects duplicate rule names, references to nonexistent rules, and an
    /// empty rule set. If no rule is designated a start rule, the first
    /// declared rule becomes the start rule.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Result<Self, GrammarError> {
        let mut table: IndexMap<SmolStr, Rule> = IndexMap::new();
        for rule in rules {
            let name = rule.name.clone();
            if table.insert(name.clone(), rule).is_some() {
                return Err(GrammarError::DuplicateRule(name));
            }
        }
        if table.is_empty() {
            return Err(GrammarError::EmptyGraph);
        }

        // Every reference edge must point at a declared rule.
        for (name, rule) in &table {
            let mut dangling = None;
            rule.body.for_each_ref(&mut |target| {
                if dangling.is_none() && !table.contains_key(target) {
                    dangling = Some(target.clone());
                }
            });
            if let Some(target) = dangling {
                return Err(GrammarError::dangling(name.clone(), target));
            }
        }

        if !table.values().any(|rule| rule.start) {
            if let Some(first) = table.values_mut().next() {
                first.start = true;
            }
        }

        Ok(Self { rules: table })
    }

    /// Look up a rule by raw name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Iterate rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Number of rules in the graph.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the graph holds no rules. Construction rejects empty
    /// graphs, so this is false for any graph obtained from [`RuleGraph::new`].
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
