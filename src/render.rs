//! Declaration rendering.
//!
//! Serializes the ordered declarations into the final text block: header,
//! autogeneration banner, then one declaration per rule. Unions whose
//! single-line form exceeds the width threshold wrap one variant per line.
//! Rendering is a pure function of its inputs.

use crate::naming::Declaration;

/// Banner line emitted after the header.
pub const AUTOGEN_BANNER: &str = "// These types were autogenerated by peg-typegen";

/// Maximum rendered width of a single-line declaration.
pub const MAX_DECL_WIDTH: usize = 80;

/// Indentation for wrapped union variants.
const WRAP_INDENT: &str = "  ";

/// Render the header, banner, and declarations into one text block.
pub fn render_declarations(header: &str, declarations: &[Declaration]) -> String {
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    out.push_str(AUTOGEN_BANNER);
    out.push('\n');
    for decl in declarations {
        render_declaration(&mut out, decl);
    }
    out
}

fn render_declaration(out: &mut String, decl: &Declaration) {
    let head = if decl.exported { "export type" } else { "type" };
    let line = format!("{head} {} = {};", decl.ident, decl.ty);

    let variants = decl.ty.variants();
    if variants.len() > 1 && line.chars().count() > MAX_DECL_WIDTH {
        // One variant per line, each prefixed with the union separator.
        out.push_str(head);
        out.push(' ');
        out.push_str(&decl.ident);
        out.push_str(" =\n");
        for (i, variant) in variants.iter().enumerate() {
            out.push_str(WRAP_INDENT);
            out.push_str("| ");
            out.push_str(&variant.to_string());
            if i + 1 == variants.len() {
                out.push(';');
            }
            out.push('\n');
        }
    } else {
        out.push_str(&line);
        out.push('\n');
    }
}
