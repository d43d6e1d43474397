//! # peg-typegen
//!
//! Static type declaration inference for parsing-grammar rule graphs.
//!
//! Given a grammar's rules (names, structural bodies, cross-rule references)
//! and an optional mapping of rule name → explicit type text, this crate
//! computes a type expression for every rule and renders an ordered block of
//! named type-alias declarations, ready to be spliced into generated parser
//! source. Inference is purely structural: action code is never analyzed.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate  → pipeline entry point
//!   ↓
//! render    → declaration serialization, union wrapping
//!   ↓
//! naming    → identifier casing policy
//!   ↓
//! infer     → structural inference, cycle-safe resolution
//!   ↓
//! grammar   → rule graph model and validation
//!   ↓
//! type_expr, overrides, options, escape, error → leaves
//! ```
//!
//! ## Example
//!
//! ```
//! use typegen::{GenOptions, Rule, RuleBody, RuleGraph, TypeOverrides, generate};
//!
//! let graph = RuleGraph::new(vec![
//!     Rule::start("start", RuleBody::literals(["a", "b"])),
//! ])?;
//! let output = generate(&graph, &TypeOverrides::new(), &GenOptions::default());
//! assert!(output.ends_with("export type Start = \"a\" | \"b\";\n"));
//! # Ok::<(), typegen::GrammarError>(())
//! ```

/// String-literal escaping for emitted type text.
pub mod escape;

/// Errors raised during rule graph construction.
pub mod error;

/// Rule graph model: rules, bodies, validation.
pub mod grammar;

/// Type expressions: the resolved form of a rule's static type.
pub mod type_expr;

/// Caller-supplied type overrides.
pub mod overrides;

/// Generation options.
pub mod options;

/// Structural type inference over the rule graph.
pub mod infer;

/// Naming normalization for declaration identifiers.
pub mod naming;

/// Declaration rendering.
pub mod render;

/// The generation pipeline.
pub mod generate;

// Re-export the request-level surface
pub use error::GrammarError;
pub use generate::generate;
pub use grammar::{Rule, RuleBody, RuleGraph};
pub use infer::{ResolvedRule, TypeInferencer};
pub use naming::Declaration;
pub use options::{DEFAULT_HEADER, GenOptions};
pub use overrides::TypeOverrides;
pub use render::AUTOGEN_BANNER;
pub use type_expr::TypeExpr;
