//! Caller-supplied type overrides.
//!
//! An override maps a raw rule name to literal type-expression text. Entries
//! are authoritative: an overridden rule bypasses inference entirely and its
//! text is emitted verbatim, unvalidated. Keys that name no rule in the graph
//! are accepted and silently ignored.

use rustc_hash::FxHashMap;

/// A mapping from raw rule name to verbatim type-expression text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypeOverrides {
    map: FxHashMap<String, String>,
}

impl TypeOverrides {
    /// An empty override mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type text for a rule name, replacing any previous entry.
    pub fn insert(&mut self, rule: impl Into<String>, type_text: impl Into<String>) {
        self.map.insert(rule.into(), type_text.into());
    }

    /// The verbatim type text for a rule name, if overridden.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.map.get(rule).map(String::as_str)
    }

    /// Whether a rule name is overridden.
    pub fn contains(&self, rule: &str) -> bool {
        self.map.contains_key(rule)
    }

    /// Number of override entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        overrides.extend(iter);
        overrides
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TypeOverrides {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (rule, type_text) in iter {
            self.insert(rule, type_text);
        }
    }
}
