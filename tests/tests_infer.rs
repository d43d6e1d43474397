//! Structural inference tests through the public pipeline.
//!
//! Each case declares a small grammar and checks the type expression emitted
//! for its first rule.

use rstest::rstest;
use typegen::{GenOptions, Rule, RuleBody, RuleGraph, TypeOverrides, generate};

/// Generate declarations for `rules` and return the rendered type text of
/// the rule declared first.
fn first_rule_type(rules: Vec<Rule>) -> String {
    let graph = RuleGraph::new(rules).unwrap();
    let output = generate(&graph, &TypeOverrides::new(), &GenOptions::default());
    let line = output
        .lines()
        .nth(2)
        .unwrap_or_else(|| panic!("missing declaration in output:\n{output}"));
    let (_, ty) = line
        .split_once(" = ")
        .unwrap_or_else(|| panic!("not a declaration line: {line}"));
    ty.trim_end_matches(';').to_owned()
}

#[rstest]
// Literal sets become ordered unions of literal variants.
#[case(RuleBody::literals(["+", "-"]), "\"+\" | \"-\"")]
#[case(RuleBody::literal("only"), "\"only\"")]
// Duplicate values collapse to one variant.
#[case(RuleBody::literals(["x", "y", "x"]), "\"x\" | \"y\"")]
// An empty literal set has no variants at all.
#[case(RuleBody::literals(Vec::<String>::new()), "never")]
// Single-character matches are plain text.
#[case(RuleBody::CharMatch, "string")]
// Sequences and captures carry no structural signal.
#[case(RuleBody::sequence(vec![RuleBody::CharMatch, RuleBody::CharMatch]), "string[]")]
#[case(RuleBody::capture(Some("value"), RuleBody::CharMatch), "string[]")]
#[case(RuleBody::capture(None, RuleBody::CharMatch), "string[]")]
// Repetition wraps the element type in an array.
#[case(RuleBody::repeat(RuleBody::CharMatch), "string[]")]
#[case(RuleBody::repeat(RuleBody::literals(["a", "b"])), "(\"a\" | \"b\")[]")]
#[case(RuleBody::repeat(RuleBody::repeat(RuleBody::CharMatch)), "string[][]")]
fn test_self_contained_bodies(#[case] body: RuleBody, #[case] expected: &str) {
    assert_eq!(first_rule_type(vec![Rule::start("rule", body)]), expected);
}

#[rstest]
// A pure reference inlines the referenced rule's resolved type.
#[case(RuleBody::reference("helper"), "\"h\"")]
// So does a one-alternative choice.
#[case(RuleBody::choice(vec![RuleBody::reference("helper")]), "\"h\"")]
// With two or more alternatives, bare references stay opaque.
#[case(
    RuleBody::choice(vec![RuleBody::reference("helper"), RuleBody::CharMatch]),
    "Helper | string"
)]
// Repetition over a reference inlines the element type.
#[case(RuleBody::repeat(RuleBody::reference("helper")), "\"h\"[]")]
fn test_bodies_referencing_a_helper(#[case] body: RuleBody, #[case] expected: &str) {
    let rules = vec![
        Rule::start("rule", body),
        Rule::new("helper", RuleBody::literal("h")),
    ];
    assert_eq!(first_rule_type(rules), expected);
}

#[test]
fn test_mutual_recursion_terminates_with_opaque_references() {
    let rules = vec![
        Rule::start(
            "value",
            RuleBody::choice(vec![
                RuleBody::literal("null"),
                RuleBody::reference("array"),
            ]),
        ),
        Rule::new("array", RuleBody::repeat(RuleBody::reference("value"))),
    ];
    let graph = RuleGraph::new(rules).unwrap();
    let output = generate(&graph, &TypeOverrides::new(), &GenOptions::default());

    assert!(output.contains("export type Value = \"null\" | Array;\n"));
    // value finished resolving before array, so array's element inlines
    // value's type; the reference back to array inside it stays opaque.
    assert!(output.contains("type Array = (\"null\" | Array)[];\n"));
}

#[test]
fn test_self_recursive_choice() {
    let rules = vec![Rule::start(
        "list",
        RuleBody::choice(vec![
            RuleBody::literal("[]"),
            RuleBody::reference("list"),
        ]),
    )];
    let graph = RuleGraph::new(rules).unwrap();
    let output = generate(&graph, &TypeOverrides::new(), &GenOptions::default());

    assert!(output.contains("export type List = \"[]\" | List;\n"));
}

#[test]
fn test_reference_into_overridden_rule_inlines_verbatim_text() {
    let rules = vec![
        Rule::start("outer", RuleBody::reference("inner")),
        Rule::new("inner", RuleBody::literal("ignored")),
    ];
    let graph = RuleGraph::new(rules).unwrap();
    let overrides: TypeOverrides = [("inner", "{ kind: \"node\" }")].into_iter().collect();
    let output = generate(&graph, &overrides, &GenOptions::default());

    assert!(output.contains("export type Outer = { kind: \"node\" };\n"));
    assert!(output.contains("type Inner = { kind: \"node\" };\n"));
}

#[test]
fn test_chain_of_references_resolves_to_the_leaf() {
    let rules = vec![
        Rule::start("a", RuleBody::reference("b")),
        Rule::new("b", RuleBody::reference("c")),
        Rule::new("c", RuleBody::literals(["leaf"])),
    ];
    assert_eq!(first_rule_type(rules), "\"leaf\"");
}
