//! Contact extraction: email addresses and phone numbers.

use std::sync::LazyLock;

use regex::Regex;

use clippr_plugins::{EntryError, PluginEntry};

use crate::compiled;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| compiled(r"[\w.-]+@[\w.-]+\.[A-Za-z]{2,}"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| compiled(r"\+?\d[\d\s.-]{7,}\d"));

/// Extracts `{emails, phones}` from free-form text.
///
/// Phone matches are trimmed of surrounding whitespace; interior separators
/// are preserved as captured.
pub struct ContactExtractor;

impl PluginEntry for ContactExtractor {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let emails: Vec<&str> = EMAIL.find_iter(input).map(|m| m.as_str()).collect();
        let phones: Vec<&str> = PHONE
            .find_iter(input)
            .map(|m| m.as_str().trim())
            .collect();
        Ok(serde_json::json!({ "emails": emails, "phones": phones }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_emails_and_phones() {
        let input = "Reach out to us at help@example.com or call +1 555 234 5678.";
        let value = ContactExtractor.run(input).expect("run");
        assert_eq!(value["emails"], serde_json::json!(["help@example.com"]));
        assert_eq!(value["phones"], serde_json::json!(["+1 555 234 5678"]));
    }

    #[test]
    fn empty_text_yields_empty_lists() {
        let value = ContactExtractor.run("").expect("run");
        assert_eq!(value, serde_json::json!({ "emails": [], "phones": [] }));
    }
}
