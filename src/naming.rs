//! Naming normalization for declaration identifiers.
//!
//! Raw rule names become declaration identifiers under the configured casing
//! policy. The default converts to upper camel case; the policy applies to
//! declared identifiers and to opaque rule references inside inferred types,
//! never to literal variants or explicit override text.

use smol_str::SmolStr;
use unicode_ident::is_xid_continue;

use crate::infer::ResolvedRule;
use crate::type_expr::TypeExpr;

/// A declaration ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The normalized identifier being declared.
    pub ident: SmolStr,
    /// The declared type expression, with references normalized the same way.
    pub ty: TypeExpr,
    /// Whether the declaration is exported.
    pub exported: bool,
}

/// Map resolved rules to declarations under the casing policy.
pub fn declarations(resolved: Vec<ResolvedRule>, do_not_camel_case: bool) -> Vec<Declaration> {
    resolved
        .into_iter()
        .map(|rule| Declaration {
            ident: type_identifier(&rule.name, do_not_camel_case),
            ty: rule
                .ty
                .map_names(&|name| type_identifier(name, do_not_camel_case)),
            exported: rule.exported,
        })
        .collect()
}

/// The declaration identifier for a raw rule name.
pub fn type_identifier(raw: &str, do_not_camel_case: bool) -> SmolStr {
    if do_not_camel_case {
        SmolStr::new(raw)
    } else {
        upper_camel_case(raw)
    }
}

/// Convert a raw rule name to upper camel case: the first letter and every
/// letter following a separator are capitalized, separators are removed, and
/// all other characters are preserved as written.
///
/// A name consisting only of separators (such as `_`) has no camel-case form
/// and is returned unchanged.
pub fn upper_camel_case(raw: &str) -> SmolStr {
    let mut out = String::with_capacity(raw.len());
    let mut capitalize = true;
    for c in raw.chars() {
        if is_separator(c) {
            capitalize = true;
        } else if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }
    if out.is_empty() {
        SmolStr::new(raw)
    } else {
        SmolStr::from(out)
    }
}

/// Underscores and any non-identifier character separate name segments.
fn is_separator(c: char) -> bool {
    c == '_' || !is_xid_continue(c)
}
