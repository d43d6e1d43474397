//! Rule and rule-body data types.
//!
//! A [`Rule`] is a named production with a structural [`RuleBody`]. Bodies are
//! pure data: the bridge from the grammar compiler builds them, the
//! inferencer walks them, and nothing here carries behavior beyond small
//! constructor helpers.

use smol_str::SmolStr;

/// A named production in a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Raw rule name, unique within a grammar.
    pub name: SmolStr,
    /// Structural body describing what the rule matches.
    pub body: RuleBody,
    /// Whether this rule is a designated entry point of the grammar.
    pub start: bool,
}

impl Rule {
    /// Create an ordinary (non-start) rule.
    pub fn new(name: impl Into<SmolStr>, body: RuleBody) -> Self {
        Self {
            name: name.into(),
            body,
            start: false,
        }
    }

    /// Create a rule designated as a grammar entry point.
    pub fn start(name: impl Into<SmolStr>, body: RuleBody) -> Self {
        Self {
            name: name.into(),
            body,
            start: true,
        }
    }
}

/// The structural shape of a rule body.
///
/// This is the normalized form handed over by the grammar compiler; embedded
/// action code never appears here. Shapes the static analysis cannot type
/// (sequences, captures) are represented structurally all the same and fall
/// back to a generic type during inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleBody {
    /// Matches one of a fixed, enumerable set of literal tokens.
    Literals(Vec<String>),
    /// Matches a single character from a class or wildcard.
    CharMatch,
    /// Matches another rule by name.
    Ref(SmolStr),
    /// Ordered choice among alternatives.
    Choice(Vec<RuleBody>),
    /// Ordered sequence of sub-matches.
    Sequence(Vec<RuleBody>),
    /// Repetition of an element (zero-or-more / one-or-more).
    Repeat(Box<RuleBody>),
    /// Labeled or anonymous capture of an inner match.
    Capture {
        /// Label under which the match is captured, if any.
        label: Option<SmolStr>,
        /// The captured sub-body.
        inner: Box<RuleBody>,
    },
}

impl RuleBody {
    /// A literal set with a single token.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literals(vec![value.into()])
    }

    /// A literal set from an iterator of tokens.
    pub fn literals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Literals(values.into_iter().map(Into::into).collect())
    }

    /// A reference to another rule.
    pub fn reference(name: impl Into<SmolStr>) -> Self {
        Self::Ref(name.into())
    }

    /// An ordered choice among alternatives.
    pub fn choice(alternatives: Vec<RuleBody>) -> Self {
        Self::Choice(alternatives)
    }

    /// An ordered sequence of sub-matches.
    pub fn sequence(parts: Vec<RuleBody>) -> Self {
        Self::Sequence(parts)
    }

    /// A repetition of an element.
    pub fn repeat(element: RuleBody) -> Self {
        Self::Repeat(Box::new(element))
    }

    /// A capture of an inner match, labeled or anonymous.
    pub fn capture(label: Option<&str>, inner: RuleBody) -> Self {
        Self::Capture {
            label: label.map(SmolStr::new),
            inner: Box::new(inner),
        }
    }

    /// Visit every rule name referenced by this body, depth-first.
    pub fn for_each_ref(&self, f: &mut impl FnMut(&SmolStr)) {
        match self {
            Self::Literals(_) | Self::CharMatch => {}
            Self::Ref(name) => f(name),
            Self::Choice(parts) | Self::Sequence(parts) => {
                for part in parts {
                    part.for_each_ref(f);
                }
            }
            Self::Repeat(inner) => inner.for_each_ref(f),
            Self::Capture { inner, .. } => inner.for_each_ref(f),
        }
    }
}
