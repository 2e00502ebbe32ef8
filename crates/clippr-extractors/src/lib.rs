//! Builtin extraction plugins for the Clippr platform.
//!
//! Each module implements one plugin body as a [`PluginEntry`]: a small,
//! stateless piece of regex-driven extraction logic operating on untrusted
//! text. The crate also exposes the wiring needed to host them:
//! [`bindings`] enumerates the id, entry name, and implementation of every
//! builtin; [`registry`] builds a ready-to-use [`PluginRegistry`]; and
//! [`install_manifests`] writes each plugin's `manifest.json` under a plugin
//! root in the layout the resolver reads.
//!
//! # Example
//!
//! ```
//! use clippr_plugins::{ContractSet, PluginResolver, PluginRunner};
//!
//! let root = tempfile::tempdir()?;
//! clippr_extractors::install_manifests(root.path())?;
//!
//! let runner = PluginRunner::new(
//!     PluginResolver::new(root.path()),
//!     clippr_extractors::registry(),
//!     ContractSet::builtin(),
//! );
//! let report = runner.execute("url-extractor", "see https://example.com/docs");
//! assert!(report.is_success());
//! # Ok::<(), std::io::Error>(())
//! ```

use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use clippr_plugins::{PluginCategory, PluginEntry, PluginManifest, PluginRegistry, MANIFEST_FILE};

mod contact;
mod csv;
mod dates;
mod geojson;
mod invoice;
mod json_summary;
mod meta_tags;
mod resume;
mod tables;
mod urls;

#[cfg(test)]
mod tests;

pub use self::contact::ContactExtractor;
pub use self::csv::CsvCleaner;
pub use self::dates::DateNormalizer;
pub use self::geojson::GeojsonValidator;
pub use self::invoice::InvoiceParser;
pub use self::json_summary::JsonSummary;
pub use self::meta_tags::MetaTagExtractor;
pub use self::resume::ResumeParser;
pub use self::tables::TableToJson;
pub use self::urls::UrlExtractor;

/// Compiles a pattern fixed at build time.
#[expect(clippy::expect_used, reason = "builtin patterns are fixed and known valid")]
fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("builtin pattern must compile")
}

/// Returns the id, entry name, and implementation of every builtin plugin.
#[must_use]
pub fn bindings() -> Vec<(&'static str, &'static str, Arc<dyn PluginEntry>)> {
    vec![
        (
            "contact-extractor",
            "clippr_extractors/contact.rs",
            Arc::new(ContactExtractor),
        ),
        (
            "csv-cleaner",
            "clippr_extractors/csv.rs",
            Arc::new(CsvCleaner),
        ),
        (
            "date-normalizer",
            "clippr_extractors/dates.rs",
            Arc::new(DateNormalizer),
        ),
        (
            "geojson-validator",
            "clippr_extractors/geojson.rs",
            Arc::new(GeojsonValidator),
        ),
        (
            "invoice-parser",
            "clippr_extractors/invoice.rs",
            Arc::new(InvoiceParser),
        ),
        (
            "json-summary",
            "clippr_extractors/json_summary.rs",
            Arc::new(JsonSummary),
        ),
        (
            "meta-tag-extractor",
            "clippr_extractors/meta_tags.rs",
            Arc::new(MetaTagExtractor),
        ),
        (
            "resume-parser",
            "clippr_extractors/resume.rs",
            Arc::new(ResumeParser),
        ),
        (
            "table-to-json",
            "clippr_extractors/tables.rs",
            Arc::new(TableToJson),
        ),
        (
            "url-extractor",
            "clippr_extractors/urls.rs",
            Arc::new(UrlExtractor),
        ),
    ]
}

/// Returns the manifest for every builtin plugin, paired with its id.
///
/// Each manifest declares the file component of the plugin's entry name;
/// the verifier's suffix check accepts it against the full binding.
#[must_use]
pub fn manifests() -> Vec<(&'static str, PluginManifest)> {
    vec![
        (
            "contact-extractor",
            PluginManifest::new("contact.rs")
                .with_name("Contact Extractor")
                .with_description("Pulls email addresses and phone numbers out of raw text")
                .with_category(PluginCategory::Processor)
                .with_tags(vec!["email".into(), "phone".into()]),
        ),
        (
            "csv-cleaner",
            PluginManifest::new("csv.rs")
                .with_name("CSV Cleaner")
                .with_description("Trims and normalises messy comma-separated data")
                .with_category(PluginCategory::Processor)
                .with_tags(vec!["csv".into()]),
        ),
        (
            "date-normalizer",
            PluginManifest::new("dates.rs")
                .with_name("Date Normalizer")
                .with_description("Rewrites numeric dates to ISO form")
                .with_category(PluginCategory::Utility),
        ),
        (
            "geojson-validator",
            PluginManifest::new("geojson.rs")
                .with_name("GeoJSON Validator")
                .with_description("Checks feature collections for structural validity")
                .with_category(PluginCategory::Analyzer)
                .with_tags(vec!["geojson".into()]),
        ),
        (
            "invoice-parser",
            PluginManifest::new("invoice.rs")
                .with_name("Invoice Parser")
                .with_description("Extracts vendor, date, and total from invoice text")
                .with_category(PluginCategory::Processor),
        ),
        (
            "json-summary",
            PluginManifest::new("json_summary.rs")
                .with_name("JSON Summary")
                .with_description("Summarises the keys and value types of a JSON array")
                .with_category(PluginCategory::Analyzer),
        ),
        (
            "meta-tag-extractor",
            PluginManifest::new("meta_tags.rs")
                .with_name("Meta Tag Extractor")
                .with_description("Reads title, description, and keywords from HTML")
                .with_category(PluginCategory::Processor)
                .with_tags(vec!["html".into()]),
        ),
        (
            "resume-parser",
            PluginManifest::new("resume.rs")
                .with_name("Resume Parser")
                .with_description("Extracts name, email, and skills from resume text")
                .with_category(PluginCategory::Processor),
        ),
        (
            "table-to-json",
            PluginManifest::new("tables.rs")
                .with_name("Table to JSON")
                .with_description("Converts HTML table rows to JSON records")
                .with_category(PluginCategory::Processor)
                .with_tags(vec!["html".into(), "table".into()]),
        ),
        (
            "url-extractor",
            PluginManifest::new("urls.rs")
                .with_name("URL Extractor")
                .with_description("Collects HTTP and HTTPS links from raw text")
                .with_category(PluginCategory::Processor),
        ),
    ]
}

/// Builds a registry with every builtin plugin bound.
#[must_use]
pub fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    for (id, entry_name, entry) in bindings() {
        registry.bind(id, entry_name, entry);
    }
    registry
}

/// Writes each builtin plugin's `manifest.json` under `<root>/<id>/`.
///
/// This is the durable manifest layout the resolver reads; hosts run it once
/// at install time and may edit the files afterwards without a restart.
///
/// # Errors
///
/// Returns any I/O error raised while creating directories or writing files.
pub fn install_manifests(root: &Path) -> std::io::Result<()> {
    for (id, manifest) in manifests() {
        let dir = root.join(id);
        std::fs::create_dir_all(&dir)?;
        let json = serde_json::to_string_pretty(&manifest).map_err(std::io::Error::other)?;
        std::fs::write(dir.join(MANIFEST_FILE), json)?;
    }
    Ok(())
}
