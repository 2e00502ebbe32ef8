//! Unit tests for input contracts.

use rstest::rstest;

use super::*;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[rstest]
#[case::long_enough("hello", true)]
#[case::exact("12345", true)]
#[case::too_short("hi", false)]
#[case::empty("", false)]
fn min_length_predicate(#[case] input: &str, #[case] accepted: bool) {
    let contract = InputContract::MinLength(5);
    assert_eq!(contract.accepts(input), accepted);
}

#[rstest]
#[case::matching("a,b,c", true)]
#[case::no_match("no delimiters here", false)]
fn pattern_predicate(#[case] input: &str, #[case] accepted: bool) {
    let contract = InputContract::pattern(",").expect("compile");
    assert_eq!(contract.accepts(input), accepted);
}

#[rstest]
#[case::array("[1, 2]", true)]
#[case::object(r#"{"a": 1}"#, true)]
#[case::scalar("42", false)]
fn any_of_predicate(#[case] input: &str, #[case] accepted: bool) {
    let contract = InputContract::AnyOf(vec![
        InputContract::pattern(r"^\[").expect("compile"),
        InputContract::pattern(r"^\{").expect("compile"),
    ]);
    assert_eq!(contract.accepts(input), accepted);
}

#[test]
fn invalid_pattern_is_an_error() {
    assert!(InputContract::pattern("(unclosed").is_err());
}

// ---------------------------------------------------------------------------
// Contract set
// ---------------------------------------------------------------------------

#[test]
fn missing_contract_accepts_anything() {
    let contracts = ContractSet::new();
    assert!(contracts.validate("unregistered", "").is_ok());
    assert!(contracts.validate("unregistered", "any text at all").is_ok());
}

#[test]
fn failing_contract_names_the_rule() {
    let mut contracts = ContractSet::new();
    contracts.insert("short-form", InputContract::MinLength(10));
    let err = contracts
        .validate("short-form", "tiny")
        .expect_err("should fail");
    let PluginError::ValidationFailed { id, reason } = err else {
        panic!("expected ValidationFailed, got {err}");
    };
    assert_eq!(id, "short-form");
    assert!(reason.contains("10"), "reason should name the rule: {reason}");
}

#[test]
fn insert_replaces_existing_contract() {
    let mut contracts = ContractSet::new();
    contracts.insert("p", InputContract::MinLength(100));
    contracts.insert("p", InputContract::MinLength(1));
    assert!(contracts.validate("p", "x").is_ok());
}

// ---------------------------------------------------------------------------
// Builtin table
// ---------------------------------------------------------------------------

#[rstest]
#[case::contact_ok("contact-extractor", "long enough text", true)]
#[case::contact_short("contact-extractor", "tiny", false)]
#[case::invoice_short("invoice-parser", "x", false)]
#[case::table_ok("table-to-json", "<TABLE><tr></tr></TABLE>", true)]
#[case::table_missing_tag("table-to-json", "<div>no table</div>", false)]
#[case::meta_ok("meta-tag-extractor", r#"<meta name="a" content="b">"#, true)]
#[case::json_array("json-summary", "[]", true)]
#[case::json_object("json-summary", "{}", true)]
#[case::json_scalar("json-summary", "12", false)]
#[case::csv_ok("csv-cleaner", "a,b", true)]
#[case::csv_no_comma("csv-cleaner", "plain text", false)]
#[case::geojson_ok(
    "geojson-validator",
    r#"{"type": "FeatureCollection", "features": []}"#,
    true
)]
#[case::geojson_wrong_type("geojson-validator", r#"{"type": "Point"}"#, false)]
#[case::dates_ok("date-normalizer", "2024-01-02", true)]
#[case::urls_short("url-extractor", "abc", false)]
fn builtin_rules(#[case] id: &str, #[case] input: &str, #[case] accepted: bool) {
    let contracts = ContractSet::builtin();
    assert_eq!(
        contracts.validate(id, input).is_ok(),
        accepted,
        "id={id} input={input:?}"
    );
}

/// The marker check tolerates whitespace after the colon, as serialisers
/// differ.
#[rstest]
#[case::compact(r#"{"type":"FeatureCollection","features":[]}"#)]
#[case::spaced(r#"{"type":  "FeatureCollection", "features": []}"#)]
fn geojson_marker_tolerates_spacing(#[case] input: &str) {
    let contracts = ContractSet::builtin();
    assert!(contracts.validate("geojson-validator", input).is_ok());
}
