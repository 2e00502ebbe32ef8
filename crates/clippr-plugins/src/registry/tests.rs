//! Unit tests for the entry registry.

use std::sync::Arc;

use super::*;

struct StaticEntry(serde_json::Value);

impl PluginEntry for StaticEntry {
    fn run(&self, _input: &str) -> Result<serde_json::Value, EntryError> {
        Ok(self.0.clone())
    }
}

fn entry(value: serde_json::Value) -> Arc<dyn PluginEntry> {
    Arc::new(StaticEntry(value))
}

#[test]
fn new_registry_is_empty() {
    let registry = PluginRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.bindings("anything").is_empty());
}

#[test]
fn bind_and_lookup() {
    let mut registry = PluginRegistry::new();
    registry.bind("csv-cleaner", "csv.rs", entry(serde_json::json!([])));
    assert_eq!(registry.len(), 1);

    let bindings = registry.bindings("csv-cleaner");
    assert_eq!(bindings.len(), 1);
    let binding = bindings.first().expect("one binding");
    assert_eq!(binding.entry_name(), "csv.rs");
    assert!(binding.entry().run("a,b").is_ok());
}

#[test]
fn multiple_bindings_for_one_id_are_kept() {
    let mut registry = PluginRegistry::new();
    registry.bind("doubled", "first.rs", entry(serde_json::json!(1)));
    registry.bind("doubled", "second.rs", entry(serde_json::json!(2)));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.bindings("doubled").len(), 2);
}

#[test]
fn ids_lists_registered_plugins() {
    let mut registry = PluginRegistry::new();
    registry.bind("a", "a.rs", entry(serde_json::json!(null)));
    registry.bind("b", "b.rs", entry(serde_json::json!(null)));
    let mut ids = registry.ids();
    ids.sort_unstable();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn rebuild_replaces_all_bindings() {
    let mut registry = PluginRegistry::new();
    registry.bind("old", "old.rs", entry(serde_json::json!(null)));

    registry.rebuild_from([(
        "new",
        "new.rs",
        entry(serde_json::json!(null)),
    )]);

    assert!(registry.bindings("old").is_empty());
    assert_eq!(registry.bindings("new").len(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn debug_output_names_entries_without_dumping_them() {
    let binding = EntryBinding::new("csv.rs", entry(serde_json::json!([])));
    let rendered = format!("{binding:?}");
    assert!(rendered.contains("csv.rs"));
}
