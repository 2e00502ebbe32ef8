//! Plugin manifest types describing plugin identity and metadata.
//!
//! A [`PluginManifest`] is the declarative descriptor stored beside each
//! plugin as `manifest.json`. The only required field is `entry`, which names
//! the module the manifest declares as the plugin's executable
//! implementation; everything else is descriptive metadata passed through to
//! callers. Manifests are validated after parsing to reject entries that
//! could redirect execution outside the plugin directory.

use std::path::Component;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

/// Default timeout in seconds for plugin execution.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Category of a plugin within the Clippr ecosystem.
///
/// # Example
///
/// ```
/// use clippr_plugins::PluginCategory;
///
/// let category = PluginCategory::Processor;
/// assert_eq!(category.as_str(), "processor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginCategory {
    /// Fetches or harvests raw content.
    Scraper,
    /// Transforms raw text into structured data.
    Processor,
    /// Emits data to an external destination.
    Exporter,
    /// Derives statistics or summaries from data.
    Analyzer,
    /// General-purpose helpers.
    Utility,
}

impl PluginCategory {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scraper => "scraper",
            Self::Processor => "processor",
            Self::Exporter => "exporter",
            Self::Analyzer => "analyzer",
            Self::Utility => "utility",
        }
    }
}

impl std::fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative description of a plugin, parsed from its `manifest.json`.
///
/// The manifest is authored alongside the plugin and is therefore data the
/// plugin author controls; only the `entry` field is security-relevant and
/// it is cross-checked by the verifier before execution.
///
/// # Example
///
/// ```
/// use clippr_plugins::{PluginCategory, PluginManifest};
///
/// let manifest = PluginManifest::new("contact.rs")
///     .with_name("Contact Extractor")
///     .with_category(PluginCategory::Processor);
/// assert_eq!(manifest.entry(), "contact.rs");
/// assert_eq!(manifest.timeout_secs(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    entry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<PluginCategory>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl PluginManifest {
    /// Creates a manifest declaring the given entry module, with no metadata
    /// and the default timeout.
    #[must_use]
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            name: None,
            version: None,
            description: None,
            category: None,
            tags: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the human-readable plugin name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the plugin version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the plugin description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the plugin category.
    #[must_use]
    pub const fn with_category(mut self, category: PluginCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the descriptive tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Overrides the default execution timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validates the manifest, returning an error if it is malformed.
    ///
    /// The declared entry must be a non-empty relative path with no
    /// parent-directory components; anything else could direct the verifier
    /// at a file outside the plugin directory.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Manifest`] naming the offending field.
    pub fn validate(&self, id: &str) -> Result<(), PluginError> {
        if self.entry.trim().is_empty() {
            return Err(PluginError::Manifest {
                id: id.to_owned(),
                message: String::from("manifest entry must not be empty"),
            });
        }
        let entry = Path::new(&self.entry);
        if entry.is_absolute() {
            return Err(PluginError::Manifest {
                id: id.to_owned(),
                message: format!("manifest entry must be relative, got '{}'", self.entry),
            });
        }
        if entry
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(PluginError::Manifest {
                id: id.to_owned(),
                message: format!(
                    "manifest entry must not contain parent components, got '{}'",
                    self.entry
                ),
            });
        }
        if self.timeout_secs == 0 {
            return Err(PluginError::Manifest {
                id: id.to_owned(),
                message: String::from("manifest timeout_secs must be positive"),
            });
        }
        Ok(())
    }

    /// Returns the declared entry module.
    #[must_use]
    pub const fn entry(&self) -> &str {
        self.entry.as_str()
    }

    /// Returns the human-readable plugin name, if declared.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the plugin version, if declared.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the plugin description, if declared.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the plugin category, if declared.
    #[must_use]
    pub const fn category(&self) -> Option<PluginCategory> {
        self.category
    }

    /// Returns the descriptive tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the execution timeout in seconds.
    #[must_use]
    pub const fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}
