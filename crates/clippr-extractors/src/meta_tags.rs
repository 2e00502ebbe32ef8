//! HTML meta tag extraction.

use std::sync::LazyLock;

use regex::Regex;

use clippr_plugins::{EntryError, PluginEntry};

use crate::compiled;

static TITLE: LazyLock<Regex> = LazyLock::new(|| compiled(r"(?i)<title>(.*?)</title>"));
static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| compiled(r#"(?i)<meta name="description" content="(.*?)""#));
static KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| compiled(r#"(?i)<meta name="keywords" content="(.*?)""#));

/// Extracts `{title, description, keywords}` from an HTML document.
/// Absent tags serialise as null.
pub struct MetaTagExtractor;

fn capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_owned())
}

impl PluginEntry for MetaTagExtractor {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        Ok(serde_json::json!({
            "title": capture(&TITLE, input),
            "description": capture(&DESCRIPTION, input),
            "keywords": capture(&KEYWORDS, input),
        }))
    }
}
