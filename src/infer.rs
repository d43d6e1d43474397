//! Structural type inference over the rule graph.
//!
//! For every rule without an explicit override, the inferencer derives a
//! [`TypeExpr`] purely from the rule's structural body and the resolved types
//! of the rules it references. Resolution is a memoized depth-first walk with
//! an in-progress set: each rule is inferred at most once, and a reference
//! back into an in-progress rule is replaced by that rule's declaration name
//! as an opaque reference. Named aliases tolerate forward and mutual
//! references, so opaque references are always legal output and no global
//! ordering is required.
//!
//! Inference never fails: bodies without structural signal (sequences,
//! captures) resolve to the configured fallback type.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::trace;

use crate::grammar::{RuleBody, RuleGraph};
use crate::options::GenOptions;
use crate::overrides::TypeOverrides;
use crate::type_expr::{CHAR_MATCH_TYPE, TypeExpr};

/// A rule's resolved type, still keyed by raw rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    /// Raw rule name.
    pub name: SmolStr,
    /// The resolved type expression (explicit or inferred).
    pub ty: TypeExpr,
    /// Whether the rule is a designated start rule.
    pub exported: bool,
}

/// Resolves a type expression for every rule in a graph.
pub struct TypeInferencer<'a> {
    graph: &'a RuleGraph,
    overrides: &'a TypeOverrides,
    fallback: TypeExpr,
    resolved: FxHashMap<SmolStr, TypeExpr>,
    in_progress: FxHashSet<SmolStr>,
}

impl<'a> TypeInferencer<'a> {
    /// Create an inferencer for one generation request.
    pub fn new(graph: &'a RuleGraph, overrides: &'a TypeOverrides, options: &GenOptions) -> Self {
        let fallback = match &options.capture_fallback_type {
            Some(text) => TypeExpr::Verbatim(text.clone()),
            None => TypeExpr::array(TypeExpr::scalar(CHAR_MATCH_TYPE)),
        };
        Self {
            graph,
            overrides,
            fallback,
            resolved: FxHashMap::default(),
            in_progress: FxHashSet::default(),
        }
    }

    /// Resolve every rule, in declaration order.
    pub fn infer_all(mut self) -> Vec<ResolvedRule> {
        let order: Vec<(SmolStr, bool)> = self
            .graph
            .iter()
            .map(|rule| (rule.name.clone(), rule.start))
            .collect();
        order
            .into_iter()
            .map(|(name, exported)| {
                let ty = self.resolve_rule(&name);
                ResolvedRule { name, ty, exported }
            })
            .collect()
    }

    /// The resolved type of a rule: its override if one exists, otherwise its
    /// memoized or freshly inferred structural type. A rule whose resolution
    /// is already underway is referenced opaquely by name.
    fn resolve_rule(&mut self, name: &SmolStr) -> TypeExpr {
        if let Some(text) = self.overrides.get(name) {
            trace!(rule = %name, "using explicit override type");
            return TypeExpr::Verbatim(text.to_owned());
        }
        if let Some(ty) = self.resolved.get(name) {
            return ty.clone();
        }
        if self.in_progress.contains(name) {
            trace!(rule = %name, "cyclic reference, substituting opaque name");
            return TypeExpr::Name(name.clone());
        }

        // The graph rejects dangling references at construction, so the
        // lookup only misses for graphs built outside `RuleGraph::new`.
        let Some(rule) = self.graph.get(name) else {
            return TypeExpr::Name(name.clone());
        };

        self.in_progress.insert(name.clone());
        let ty = self.infer_body(&rule.body);
        self.in_progress.remove(name);

        trace!(rule = %name, ty = %ty, "inferred rule type");
        self.resolved.insert(name.clone(), ty.clone());
        ty
    }

    fn infer_body(&mut self, body: &RuleBody) -> TypeExpr {
        match body {
            RuleBody::Literals(values) => TypeExpr::union(
                values
                    .iter()
                    .map(|v| TypeExpr::Literal(v.clone()))
                    .collect(),
            ),
            RuleBody::CharMatch => TypeExpr::scalar(CHAR_MATCH_TYPE),
            RuleBody::Ref(target) => self.resolve_rule(target),
            // A one-alternative choice is the alternative itself, so a bare
            // reference inside it inlines the referenced rule's type.
            RuleBody::Choice(alternatives) if alternatives.len() == 1 => {
                self.infer_body(&alternatives[0])
            }
            RuleBody::Choice(alternatives) => TypeExpr::union(
                alternatives
                    .iter()
                    .map(|alt| match alt {
                        // Bare references in a union stay opaque instead of
                        // expanding into a nested union.
                        RuleBody::Ref(target) => TypeExpr::Name(target.clone()),
                        other => self.infer_body(other),
                    })
                    .collect(),
            ),
            RuleBody::Sequence(_) | RuleBody::Capture { .. } => self.fallback.clone(),
            RuleBody::Repeat(element) => TypeExpr::array(self.infer_body(element)),
        }
    }
}
