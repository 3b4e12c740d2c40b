//! The executor end to end: sample sources through every registered format

use std::collections::HashMap;

use lolmark_parser::lolmark::ast::{AstSnapshot, ErrorKind};
use lolmark_parser::lolmark::pipeline::{ExecutionError, PipelineExecutor};
use lolmark_parser::lolmark::pipeline::PipelineOptions;
use lolmark_parser::lolmark::testing::lolplore::Lolplore;
use rstest::rstest;

#[rstest]
#[case::treeviz("treeviz")]
#[case::json("json")]
#[case::lolmark("lolmark")]
#[case::tokens("tokens")]
fn test_every_format_serializes_the_full_scenario(#[case] format: &str) {
    let source = Lolplore::scenario(5).source();
    let output = PipelineExecutor::new()
        .execute_and_serialize(&source, format)
        .expect("serializes");

    assert!(!output.is_empty());
}

#[test]
fn test_json_output_is_a_resolved_snapshot() {
    let source = Lolplore::scenario(4).source();
    let json = PipelineExecutor::new()
        .execute_and_serialize(&source, "json")
        .expect("serializes");
    let snapshot: AstSnapshot = serde_json::from_str(&json).expect("valid snapshot json");

    assert_eq!(snapshot.node_type, "Document");
    let usage = &snapshot.children[1];
    assert_eq!(usage.node_type, "VariableUse");
    assert_eq!(usage.attributes.get("resolved").map(String::as_str), Some("world"));
}

#[test]
fn test_lolmark_output_parses_again() {
    let executor = PipelineExecutor::new();
    let source = Lolplore::scenario(5).source();
    let rendered = executor
        .execute_and_serialize(&source, "lolmark")
        .expect("serializes");

    let original = executor.execute(&source).expect("parses");
    let reparsed = executor.execute(&rendered).expect("rendered source parses");
    assert_eq!(original.title(), reparsed.title());
    assert_eq!(original.body.len(), reparsed.body.len());
}

#[test]
fn test_unresolved_option_skips_resolution() {
    let source = Lolplore::invalid(2).source();
    let executor = PipelineExecutor::with_options(PipelineOptions {
        resolve: false,
        ..PipelineOptions::default()
    });

    let output = executor
        .execute_and_serialize(&source, "treeviz")
        .expect("unresolved uses are fine without resolution");
    assert!(output.contains("$ y (unresolved)"));
}

#[test]
fn test_fail_fast_reports_one_error() {
    let source = "#HAI #LEMME SEE a #MKAY #LEMME SEE b #MKAY #KTHXBYE";
    let collect_all = PipelineExecutor::new().execute(source).expect_err("unbound");
    let fail_fast = PipelineExecutor::with_options(PipelineOptions {
        fail_fast: true,
        ..PipelineOptions::default()
    })
    .execute(source)
    .expect_err("unbound");

    assert_eq!(
        collect_all.kinds(),
        vec![ErrorKind::UnresolvedVariable, ErrorKind::UnresolvedVariable]
    );
    assert_eq!(fail_fast.kinds(), vec![ErrorKind::UnresolvedVariable]);
}

#[test]
fn test_treeviz_params_reach_the_formatter() {
    let source = Lolplore::scenario(3).source();
    let params = HashMap::from([("show-linum".to_string(), "true".to_string())]);
    let output = PipelineExecutor::new()
        .execute_and_serialize_with_params(&source, "treeviz", &params)
        .expect("serializes");

    assert!(output.starts_with("01 ⧉"));
}

#[test]
fn test_parse_failures_surface_as_pipeline_errors() {
    let source = Lolplore::invalid(1).source();
    match PipelineExecutor::new().execute_and_serialize(&source, "json") {
        Err(ExecutionError::Pipeline(error)) => {
            assert_eq!(error.kind(), ErrorKind::UnterminatedBlock)
        }
        other => panic!("expected a pipeline error, got {other:?}"),
    }
}
