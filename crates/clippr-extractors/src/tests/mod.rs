//! Behaviour tests running the builtin plugins through the full pipeline.

use rstest::{fixture, rstest};
use tempfile::TempDir;

use clippr_plugins::{ContractSet, FailureKind, PluginResolver, PluginRunner};

use crate::{bindings, install_manifests, manifests, registry};

#[fixture]
fn runner() -> (TempDir, PluginRunner) {
    let root = tempfile::tempdir().expect("create tempdir");
    install_manifests(root.path()).expect("install manifests");
    let runner = PluginRunner::new(
        PluginResolver::new(root.path()),
        registry(),
        ContractSet::builtin(),
    );
    (root, runner)
}

#[test]
fn every_binding_has_a_manifest_and_contract_coverage() {
    let manifest_ids: Vec<&str> = manifests().into_iter().map(|(id, _)| id).collect();
    for (id, entry_name, _) in bindings() {
        assert!(
            manifest_ids.contains(&id),
            "binding '{id}' has no manifest"
        );
        assert!(
            entry_name.ends_with(".rs"),
            "binding '{id}' has an odd entry name: {entry_name}"
        );
    }
    assert_eq!(bindings().len(), manifest_ids.len());
}

#[test]
fn manifests_validate_against_their_ids() {
    for (id, manifest) in manifests() {
        manifest.validate(id).expect("builtin manifest must be valid");
    }
}

#[rstest]
fn geojson_validator_accepts_feature_collection(runner: (TempDir, PluginRunner)) {
    let (_root, runner) = runner;
    let report = runner.execute(
        "geojson-validator",
        r#"{"type":"FeatureCollection","features":[]}"#,
    );
    assert_eq!(
        report.value(),
        Some(&serde_json::json!({ "valid": true, "features": 0 }))
    );
}

#[rstest]
fn csv_cleaner_normalises_messy_input(runner: (TempDir, PluginRunner)) {
    let (_root, runner) = runner;
    let report = runner.execute("csv-cleaner", " Name , Age \n John , 30 \n Jane , 25 ");
    assert_eq!(
        report.value(),
        Some(&serde_json::json!([
            { "name": "John", "age": "30" },
            { "name": "Jane", "age": "25" }
        ]))
    );
}

#[rstest]
fn contact_extractor_finds_email_and_phone(runner: (TempDir, PluginRunner)) {
    let (_root, runner) = runner;
    let report = runner.execute(
        "contact-extractor",
        "Reach out to us at help@example.com or call +1 555 234 5678.",
    );
    let value = report.value().expect("success").clone();
    assert_eq!(value["emails"], serde_json::json!(["help@example.com"]));
    let phones = value["phones"].as_array().expect("phones array");
    assert!(!phones.is_empty());
    assert_eq!(phones.first(), Some(&serde_json::json!("+1 555 234 5678")));
}

#[rstest]
fn malformed_json_is_a_plugin_runtime_failure(runner: (TempDir, PluginRunner)) {
    let (_root, runner) = runner;
    // Passes the leading-brace contract but fails to parse inside the body.
    let report = runner.execute("json-summary", "{broken");
    assert_eq!(
        report.failure_kind(),
        Some(FailureKind::PluginRuntimeError)
    );
}

#[rstest]
fn contract_rejection_happens_before_the_body(runner: (TempDir, PluginRunner)) {
    let (_root, runner) = runner;
    let report = runner.execute("csv-cleaner", "no delimiter at all");
    assert_eq!(report.failure_kind(), Some(FailureKind::ValidationFailed));
}

#[rstest]
fn repeated_execution_is_stable(runner: (TempDir, PluginRunner)) {
    let (_root, runner) = runner;
    let input = "Vendor: Acme Corp\nDate: 2024-06-01\nTotal: $19.99\n";
    let first = runner.execute("invoice-parser", input);
    let second = runner.execute("invoice-parser", input);
    assert!(first.is_success());
    assert_eq!(first, second);
}

#[rstest]
#[case::dates("date-normalizer", "Due 2024-12-01 or 12/15/2024.")]
#[case::meta("meta-tag-extractor", "<meta name=\"description\" content=\"x\">")]
#[case::resume("resume-parser", "Name: Ada\nSkills: analysis\n")]
#[case::tables("table-to-json", "<table><tr><td>a</td></tr></table>")]
#[case::urls("url-extractor", "see https://example.com")]
fn remaining_builtins_run_end_to_end(
    runner: (TempDir, PluginRunner),
    #[case] id: &str,
    #[case] input: &str,
) {
    let (_root, runner) = runner;
    let report = runner.execute(id, input);
    assert!(report.is_success(), "{id} failed: {report:?}");
}
