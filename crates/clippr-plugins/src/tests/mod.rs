//! Crate-level behaviour tests covering the full pipeline.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use crate::contract::{ContractSet, InputContract};
use crate::envelope::{ExecutionStage, FailureKind};
use crate::manifest::{PluginCategory, PluginManifest};
use crate::registry::{EntryError, PluginEntry, PluginRegistry};
use crate::resolver::{PluginResolver, MANIFEST_FILE};
use crate::runner::PluginRunner;

/// Minimal word-count plugin used as the end-to-end fixture.
struct WordCount;

impl PluginEntry for WordCount {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        Ok(serde_json::json!({ "words": input.split_whitespace().count() }))
    }
}

fn install(root: &TempDir, id: &str, manifest: &PluginManifest) {
    let dir = root.path().join(id);
    fs::create_dir_all(&dir).expect("create plugin dir");
    fs::write(
        dir.join(MANIFEST_FILE),
        serde_json::to_string_pretty(manifest).expect("serialise"),
    )
    .expect("write manifest");
}

#[test]
fn end_to_end_success() {
    let root = tempfile::tempdir().expect("create tempdir");
    install(
        &root,
        "word-count",
        &PluginManifest::new("word_count.rs")
            .with_name("Word Count")
            .with_category(PluginCategory::Analyzer),
    );

    let mut registry = PluginRegistry::new();
    registry.bind("word-count", "word_count.rs", Arc::new(WordCount));

    let runner = PluginRunner::new(
        PluginResolver::new(root.path()),
        registry,
        ContractSet::new(),
    );
    let report = runner.execute("word-count", "one two three");
    assert_eq!(report.value(), Some(&serde_json::json!({ "words": 3 })));
}

/// A tampered manifest pointing at a different entry is caught between
/// resolution and validation.
#[test]
fn end_to_end_tampered_manifest_is_rejected() {
    let root = tempfile::tempdir().expect("create tempdir");
    install(
        &root,
        "word-count",
        &PluginManifest::new("something_else.rs"),
    );

    let mut registry = PluginRegistry::new();
    registry.bind("word-count", "word_count.rs", Arc::new(WordCount));

    let runner = PluginRunner::new(
        PluginResolver::new(root.path()),
        registry,
        ContractSet::new(),
    );
    let report = runner.execute("word-count", "one two three");
    assert_eq!(report.failure_kind(), Some(FailureKind::EntryMismatch));
    assert_eq!(report.failed_stage(), Some(ExecutionStage::Verifying));
}

/// Registry rebuild is the deliberate hot-reload path: behaviour changes
/// only when the host swaps the bindings.
#[test]
fn end_to_end_registry_rebuild_changes_behaviour() {
    struct Constant(i64);
    impl PluginEntry for Constant {
        fn run(&self, _input: &str) -> Result<serde_json::Value, EntryError> {
            Ok(serde_json::json!(self.0))
        }
    }

    let root = tempfile::tempdir().expect("create tempdir");
    install(&root, "constant", &PluginManifest::new("constant.rs"));

    let mut registry = PluginRegistry::new();
    registry.bind("constant", "constant.rs", Arc::new(Constant(1)));
    let mut runner = PluginRunner::new(
        PluginResolver::new(root.path()),
        registry,
        ContractSet::new(),
    );
    assert_eq!(
        runner.execute("constant", "").value(),
        Some(&serde_json::json!(1))
    );

    let replacement: Arc<dyn PluginEntry> = Arc::new(Constant(2));
    runner
        .registry_mut()
        .rebuild_from([("constant", "constant.rs", replacement)]);
    assert_eq!(
        runner.execute("constant", "").value(),
        Some(&serde_json::json!(2))
    );
}

/// Contracts gate execution but unknown ids pass through untouched.
#[test]
fn end_to_end_contract_gating() {
    let root = tempfile::tempdir().expect("create tempdir");
    install(&root, "word-count", &PluginManifest::new("word_count.rs"));

    let mut registry = PluginRegistry::new();
    registry.bind("word-count", "word_count.rs", Arc::new(WordCount));

    let mut contracts = ContractSet::new();
    contracts.insert("word-count", InputContract::MinLength(5));
    let runner = PluginRunner::new(PluginResolver::new(root.path()), registry, contracts);

    assert!(runner.execute("word-count", "long enough").is_success());
    assert_eq!(
        runner.execute("word-count", "no").failure_kind(),
        Some(FailureKind::ValidationFailed)
    );
}
