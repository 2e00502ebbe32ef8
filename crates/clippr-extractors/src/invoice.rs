//! Invoice field extraction.

use std::sync::LazyLock;

use regex::Regex;

use clippr_plugins::{EntryError, PluginEntry};

use crate::compiled;

static VENDOR: LazyLock<Regex> = LazyLock::new(|| compiled(r"(?i)Vendor:\s*(.*)"));
static DATE: LazyLock<Regex> = LazyLock::new(|| compiled(r"Date:\s*(\d{4}-\d{2}-\d{2})"));
static TOTAL: LazyLock<Regex> = LazyLock::new(|| compiled(r"Total:\s*\$([\d.]+)"));

/// Extracts `{vendor, date, total}` from invoice text, with placeholder
/// values when a field is absent.
pub struct InvoiceParser;

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

impl PluginEntry for InvoiceParser {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        Ok(serde_json::json!({
            "vendor": capture(&VENDOR, input).unwrap_or("Unknown"),
            "date": capture(&DATE, input).unwrap_or("N/A"),
            "total": capture(&TOTAL, input).unwrap_or("0.00"),
        }))
    }
}
