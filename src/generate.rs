//! The generation pipeline.

use tracing::debug;

use crate::grammar::RuleGraph;
use crate::infer::TypeInferencer;
use crate::naming::declarations;
use crate::options::GenOptions;
use crate::overrides::TypeOverrides;
use crate::render::render_declarations;

/// Generate the type-declaration block for a rule graph.
///
/// Runs the full pipeline: override resolution, structural inference, naming
/// normalization, rendering. Infallible — all input validation happens when
/// the [`RuleGraph`] is constructed — and pure: identical inputs produce
/// byte-identical output.
pub fn generate(graph: &RuleGraph, overrides: &TypeOverrides, options: &GenOptions) -> String {
    debug!(
        rules = graph.len(),
        overrides = overrides.len(),
        "generating type declarations"
    );
    let resolved = TypeInferencer::new(graph, overrides, options).infer_all();
    let decls = declarations(resolved, options.do_not_camel_case_types);
    render_declarations(options.header(), &decls)
}
