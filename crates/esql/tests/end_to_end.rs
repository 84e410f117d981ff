//! End-to-end tests: query text through a mock analyzer into a parse result
//!
//! Covers:
//! - Declaration order and spans of inline functions
//! - Queries without inline functions
//! - Character (not byte) offsets for non-ASCII text
//! - Tooling lookups by name and by offset
//! - Internal errors vs. query errors

mod common;

use common::mocks::{MockAnalyzer, MockLambda, MockTree};
use esql::diagnostics::{ESQL0004, ESQL0401, ESQL0405, SourceLocation};
use esql::{EsqlError, ErrorKind, FunctionDefinition, ParseResult, ParseResultBuilder, Span};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

const TWO_FUNCTIONS: &str =
    "FUNCTION Foo(x Int32) AS (x + 1) FUNCTION Bar(y Int32) AS (Foo(y) * 2) SELECT VALUE Bar(3) FROM {1}";

fn analyze(query: &str) -> ParseResult<MockTree, MockLambda> {
    MockAnalyzer
        .analyze(query)
        .unwrap_or_else(|e| panic!("Failed to analyze query: {:?}", e))
}

// === Declaration Order ===

#[test]
fn test_functions_in_declaration_order() {
    let result = analyze(TWO_FUNCTIONS);

    let defs = result.function_definitions();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].name(), "Foo");
    assert_eq!(defs[0].span(), Span::new(0, 32));
    assert_eq!(defs[1].name(), "Bar");
    assert_eq!(defs[1].span(), Span::new(33, 70));
    assert_eq!(
        result.command_tree().statement,
        "SELECT VALUE Bar(3) FROM {1}"
    );
}

#[test]
fn test_lambda_bodies_resolved() {
    let result = analyze(TWO_FUNCTIONS);

    let bar = result.function("Bar").unwrap();
    assert_eq!(
        **bar.lambda(),
        MockLambda {
            params: "y Int32".to_string(),
            body: "Foo(y) * 2".to_string(),
        }
    );
    assert_eq!(
        bar.source_text(TWO_FUNCTIONS),
        Some("FUNCTION Bar(y Int32) AS (Foo(y) * 2)")
    );
}

#[test]
fn test_given_positions_keep_given_order() {
    let mut builder = ParseResultBuilder::new();
    builder
        .define_function("Foo", Arc::new("foo body"), 5, 20)
        .unwrap()
        .define_function("Bar", Arc::new("bar body"), 25, 40)
        .unwrap()
        .command_tree(Arc::new("tree"))
        .unwrap();
    let result = builder.build().unwrap();

    assert_eq!(result.function_definitions()[0].name(), "Foo");
    assert_eq!(result.function_definitions()[1].name(), "Bar");
}

#[test]
fn test_query_without_functions() {
    let result = analyze("SELECT VALUE 1 FROM {1}");

    assert!(result.function_definitions().is_empty());
    assert_eq!(result.command_tree().statement, "SELECT VALUE 1 FROM {1}");
}

// === Source Positions ===

#[test]
fn test_offsets_count_characters() {
    let query = "FUNCTION Grüße(s String) AS (s + 'ß') FUNCTION Zähler() AS (1) SELECT VALUE Zähler() FROM {1}";
    let result = analyze(query);

    let defs = result.function_definitions();
    assert_eq!(defs[0].span(), Span::new(0, 37));
    assert_eq!(defs[1].span(), Span::new(38, 62));
    assert_eq!(defs[1].source_text(query), Some("FUNCTION Zähler() AS (1)"));
    assert!(result.check_spans(query).is_ok());
}

#[test]
fn test_location_on_later_line() {
    let query = "FUNCTION Foo() AS (1)\nFUNCTION Bar() AS (2)\nSELECT VALUE Bar() FROM {1}";
    let result = analyze(query);

    let bar = result.function("bar").unwrap();
    assert_eq!(bar.location(query), SourceLocation::new(2, 1, 22, 21));
}

#[rstest]
#[case(0, Some("Foo"))]
#[case(31, Some("Foo"))]
#[case(32, None)]
#[case(33, Some("Bar"))]
#[case(69, Some("Bar"))]
#[case(80, None)]
fn test_function_at_offset(#[case] offset: usize, #[case] expected: Option<&str>) {
    let result = analyze(TWO_FUNCTIONS);
    assert_eq!(result.function_at(offset).map(FunctionDefinition::name), expected);
}

#[test]
fn test_spans_checked_against_other_text() {
    let result = analyze(TWO_FUNCTIONS);
    let err = result.check_spans("SELECT VALUE 1 FROM {1}").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// === Error Classification ===

#[test]
fn test_construction_errors_are_internal() {
    let missing_tree = ParseResultBuilder::<MockTree, MockLambda>::new().build().unwrap_err();
    assert_eq!(missing_tree.code(), ESQL0401);
    assert!(missing_tree.is_internal());

    let reversed = FunctionDefinition::new("f", Arc::new(()), 10, 5).unwrap_err();
    assert_eq!(reversed.code(), ESQL0405);
    assert!(reversed.is_internal());
}

#[test]
fn test_query_errors_are_not_internal() {
    let query = "SELECT VALUE Baz(1) FROM {1}";
    let location = SourceLocation::from_span(Span::new(13, 16), query);
    let err = EsqlError::query_at(ESQL0004, "'Baz' cannot be resolved", location);

    assert!(!err.is_internal());
    assert_eq!(err.to_diagnostic().to_string(), "error: ESQL0004 - 'Baz' cannot be resolved at 1:14");
}

// === Sharing ===

#[test]
fn test_result_readable_from_many_threads() {
    let result = analyze(TWO_FUNCTIONS);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let result = result.clone();
            scope.spawn(move || {
                let names: Vec<_> = result.iter().map(|d| d.name().to_string()).collect();
                assert_eq!(names, ["Foo", "Bar"]);
            });
        }
    });
}
