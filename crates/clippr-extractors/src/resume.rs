//! Resume field extraction.

use std::sync::LazyLock;

use regex::Regex;

use clippr_plugins::{EntryError, PluginEntry};

use crate::compiled;

static NAME: LazyLock<Regex> = LazyLock::new(|| compiled(r"(?i)Name:\s*(.*)"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| compiled(r"[\w.-]+@[\w.-]+\.[A-Za-z]{2,}"));
static SKILLS: LazyLock<Regex> = LazyLock::new(|| compiled(r"(?i)Skills?:\s*(.*?)\n"));

/// Extracts `{name, email, skills}` from resume text. The name falls back
/// to `N/A`; a missing email serialises as null.
pub struct ResumeParser;

impl PluginEntry for ResumeParser {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let name = NAME
            .captures(input)
            .and_then(|captures| captures.get(1))
            .map_or("N/A", |m| m.as_str());
        let email = EMAIL.find(input).map(|m| m.as_str());
        let skills: Vec<&str> = SKILLS
            .captures_iter(input)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str())
            .collect();
        Ok(serde_json::json!({ "name": name, "email": email, "skills": skills }))
    }
}
