//! Type expressions: the resolved form of a rule's static type.
//!
//! A [`TypeExpr`] is the tree the inferencer produces and the renderer
//! consumes. `Display` renders the single-line form; the renderer decides
//! separately whether a union is wrapped across lines.
//!
//! Explicit override text is carried as the [`TypeExpr::Verbatim`] variant:
//! an opaque payload that is never escaped, renamed, or reformatted.

use std::fmt;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::escape::quote_literal;

/// The scalar type of a single-character match.
pub const CHAR_MATCH_TYPE: &str = "string";

/// The type of an empty union (a literal set with no values).
pub const EMPTY_UNION_TYPE: &str = "never";

/// A resolved type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A string-literal variant, rendered quoted and escaped.
    Literal(String),
    /// An opaque reference to another rule's declaration by name.
    Name(SmolStr),
    /// A built-in scalar type such as the single-character match type.
    Scalar(SmolStr),
    /// A union of variants, in declaration order, at least two of them.
    Union(Vec<TypeExpr>),
    /// An array of an element type.
    Array(Box<TypeExpr>),
    /// Caller-supplied type text, passed through verbatim.
    Verbatim(String),
}

impl TypeExpr {
    /// An opaque reference to a rule's declaration.
    pub fn name(name: impl Into<SmolStr>) -> Self {
        Self::Name(name.into())
    }

    /// A built-in scalar type.
    pub fn scalar(name: impl Into<SmolStr>) -> Self {
        Self::Scalar(name.into())
    }

    /// Build a union from parts, flattening nested unions and collapsing
    /// duplicates while preserving first-occurrence order.
    ///
    /// A single surviving variant is returned unwrapped; an empty input
    /// degrades to the empty-union scalar rather than failing.
    pub fn union(parts: Vec<TypeExpr>) -> Self {
        let mut seen = FxHashSet::default();
        let mut variants = Vec::new();
        for part in parts {
            match part {
                Self::Union(nested) => {
                    for v in nested {
                        push_unique(&mut variants, &mut seen, v);
                    }
                }
                other => push_unique(&mut variants, &mut seen, other),
            }
        }
        match variants.len() {
            0 => Self::scalar(EMPTY_UNION_TYPE),
            1 => variants.remove(0),
            _ => Self::Union(variants),
        }
    }

    /// Build an array of an element type.
    pub fn array(element: TypeExpr) -> Self {
        Self::Array(Box::new(element))
    }

    /// The union variants of this expression: its parts if it is a union,
    /// otherwise the expression itself as a single variant.
    pub fn variants(&self) -> &[TypeExpr] {
        match self {
            Self::Union(parts) => parts,
            other => std::slice::from_ref(other),
        }
    }

    /// Rewrite every opaque [`TypeExpr::Name`] node through `f`, leaving
    /// literals, scalars, and verbatim text untouched.
    pub fn map_names(self, f: &impl Fn(&SmolStr) -> SmolStr) -> Self {
        match self {
            Self::Name(name) => Self::Name(f(&name)),
            Self::Union(parts) => {
                Self::Union(parts.into_iter().map(|p| p.map_names(f)).collect())
            }
            Self::Array(element) => Self::Array(Box::new(element.map_names(f))),
            leaf @ (Self::Literal(_) | Self::Scalar(_) | Self::Verbatim(_)) => leaf,
        }
    }

    /// Whether this expression needs parentheses when wrapped in an array.
    fn needs_parens_in_array(&self) -> bool {
        match self {
            Self::Union(parts) => parts.len() > 1,
            // Opaque text is parenthesized unless it is a plain identifier.
            Self::Verbatim(text) => {
                !text.chars().all(unicode_ident::is_xid_continue) || text.is_empty()
            }
            Self::Literal(_) | Self::Name(_) | Self::Scalar(_) | Self::Array(_) => false,
        }
    }
}

fn push_unique(variants: &mut Vec<TypeExpr>, seen: &mut FxHashSet<String>, part: TypeExpr) {
    if seen.insert(part.to_string()) {
        variants.push(part);
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.write_str(&quote_literal(value)),
            Self::Name(name) => f.write_str(name),
            Self::Scalar(name) => f.write_str(name),
            Self::Verbatim(text) => f.write_str(text),
            Self::Union(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Self::Array(element) => {
                if element.needs_parens_in_array() {
                    write!(f, "({element})[]")
                } else {
                    write!(f, "{element}[]")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_literal_is_quoted() {
        assert_eq!(TypeExpr::Literal("a".into()).to_string(), "\"a\"");
        assert_eq!(TypeExpr::Literal("\t".into()).to_string(), "\"\\t\"");
    }

    #[test]
    fn test_display_union_joins_with_pipes() {
        let t = TypeExpr::union(vec![
            TypeExpr::Literal("a".into()),
            TypeExpr::Literal("b".into()),
            TypeExpr::name("Rest"),
        ]);
        assert_eq!(t.to_string(), "\"a\" | \"b\" | Rest");
    }

    #[test]
    fn test_union_collapses_duplicates_in_order() {
        let t = TypeExpr::union(vec![
            TypeExpr::scalar("string"),
            TypeExpr::name("Other"),
            TypeExpr::scalar("string"),
        ]);
        assert_eq!(t.to_string(), "string | Other");
    }

    #[test]
    fn test_union_flattens_nested_unions() {
        let inner = TypeExpr::union(vec![
            TypeExpr::Literal("a".into()),
            TypeExpr::Literal("b".into()),
        ]);
        let t = TypeExpr::union(vec![inner, TypeExpr::name("Zs")]);
        assert_eq!(t.to_string(), "\"a\" | \"b\" | Zs");
    }

    #[test]
    fn test_union_of_one_unwraps() {
        let t = TypeExpr::union(vec![TypeExpr::name("Only")]);
        assert_eq!(t, TypeExpr::name("Only"));
    }

    #[test]
    fn test_empty_union_degrades_to_never() {
        let t = TypeExpr::union(vec![]);
        assert_eq!(t.to_string(), "never");
    }

    #[test]
    fn test_array_parenthesizes_unions() {
        let t = TypeExpr::array(TypeExpr::union(vec![
            TypeExpr::Literal("a".into()),
            TypeExpr::Literal("b".into()),
        ]));
        assert_eq!(t.to_string(), "(\"a\" | \"b\")[]");
    }

    #[test]
    fn test_array_of_scalar_is_bare() {
        let t = TypeExpr::array(TypeExpr::scalar("string"));
        assert_eq!(t.to_string(), "string[]");
    }

    #[test]
    fn test_array_parenthesizes_non_identifier_verbatim() {
        let t = TypeExpr::array(TypeExpr::Verbatim("number | null".into()));
        assert_eq!(t.to_string(), "(number | null)[]");

        let plain = TypeExpr::array(TypeExpr::Verbatim("number".into()));
        assert_eq!(plain.to_string(), "number[]");
    }

    #[test]
    fn test_map_names_rewrites_only_names() {
        let t = TypeExpr::Union(vec![
            TypeExpr::name("other_rule"),
            TypeExpr::Literal("other_rule".into()),
            TypeExpr::Verbatim("other_rule".into()),
        ]);
        let renamed = t.map_names(&|_| SmolStr::new("OtherRule"));
        assert_eq!(
            renamed.to_string(),
            "OtherRule | \"other_rule\" | other_rule"
        );
    }

    #[test]
    fn test_variants_of_non_union_is_self() {
        let t = TypeExpr::name("X");
        assert_eq!(t.variants(), &[TypeExpr::name("X")]);
    }
}
