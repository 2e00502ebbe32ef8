//! URL extraction from raw text.

use std::sync::LazyLock;

use regex::Regex;

use clippr_plugins::{EntryError, PluginEntry};

use crate::compiled;

static URL: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"https?://[\w.-]+(?:/[\w/#?=&.-]*)?"));

/// Collects HTTP and HTTPS links as a flat list of strings.
pub struct UrlExtractor;

impl PluginEntry for UrlExtractor {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let urls: Vec<&str> = URL.find_iter(input).map(|m| m.as_str()).collect();
        Ok(serde_json::json!(urls))
    }
}
