#![allow(missing_docs)]

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

#[test]
fn rewrite_emits_sql_and_parameters() {
    let output = cargo_bin_cmd!("cli")
        .args(["--format", "json", "rewrite", "SELECT $a, '$b', $c"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["sql"], "SELECT ?, '$b', ?");
    assert_eq!(json["parameters"][0], "a");
    assert_eq!(json["parameters"][1], "c");
}

#[test]
fn rewrite_text_output_lists_slots() {
    let output = cargo_bin_cmd!("cli")
        .args(["rewrite", "SELECT $a, $b"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf-8");
    assert!(text.contains("sql: SELECT ?, ?"));
    assert!(text.contains("$1: a"));
    assert!(text.contains("$2: b"));
}

#[test]
fn decode_emits_the_typed_value() {
    let output = cargo_bin_cmd!("cli")
        .args([
            "--format",
            "json",
            "decode",
            "--type",
            "vertex",
            r#"person[16.3]{"name": "Ann"}"#,
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["t"], "Vertex");
    assert_eq!(json["v"]["label"], "person");
    assert_eq!(json["v"]["properties"]["name"], "Ann");
}

#[test]
fn decode_graphid_array_text_output() {
    let output = cargo_bin_cmd!("cli")
        .args(["decode", "--type", "graphid-array", "{1.1,2.2}"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf-8");
    assert!(text.contains("graphid array: {1.1,2.2}"));
}

#[test]
fn malformed_value_text_fails_with_a_diagnostic() {
    let assert = cargo_bin_cmd!("cli")
        .args(["decode", "--type", "edge", "not an edge"])
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8");
    assert!(stderr.contains("malformed edge text"), "stderr: {stderr}");
}

#[test]
fn empty_query_fails_with_a_diagnostic() {
    let assert = cargo_bin_cmd!("cli").args(["rewrite", ""]).assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8");
    assert!(stderr.contains("invalid argument"), "stderr: {stderr}");
}
