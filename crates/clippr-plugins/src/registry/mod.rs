//! Closed registry of plugin entry-point implementations.
//!
//! Plugin behaviour is statically linked: each plugin id maps to one or more
//! [`EntryBinding`]s installed at startup, each pairing the entry-point name
//! the implementation was compiled under with a [`PluginEntry`] trait object.
//! There is no runtime code loading; hot reload of plugin behaviour is the
//! deliberate [`PluginRegistry::rebuild_from`] operation, while manifest
//! metadata is still read fresh from disk by the resolver on every call.

use std::collections::HashMap;
use std::sync::Arc;

/// Error type returned by plugin bodies.
///
/// Boxed so third-party extraction logic can surface any error shape; the
/// runner preserves the message and wraps it as a plugin runtime failure.
pub type EntryError = Box<dyn std::error::Error + Send + Sync>;

/// The execution contract every plugin implementation satisfies: one callable
/// taking the raw input text and returning a structured value.
///
/// Entries must be `Send + Sync` because the runner executes them on a
/// deadline worker thread.
///
/// # Example
///
/// ```
/// use clippr_plugins::{EntryError, PluginEntry};
///
/// struct WordCount;
///
/// impl PluginEntry for WordCount {
///     fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
///         Ok(serde_json::json!({ "words": input.split_whitespace().count() }))
///     }
/// }
/// ```
pub trait PluginEntry: Send + Sync {
    /// Executes the plugin body against the raw input text.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the plugin's own extraction logic.
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError>;
}

/// One installed entry point: the name it was compiled under plus the
/// implementation itself.
#[derive(Clone)]
pub struct EntryBinding {
    entry_name: String,
    entry: Arc<dyn PluginEntry>,
}

impl EntryBinding {
    /// Creates a binding for the given entry name and implementation.
    #[must_use]
    pub fn new(entry_name: impl Into<String>, entry: Arc<dyn PluginEntry>) -> Self {
        Self {
            entry_name: entry_name.into(),
            entry,
        }
    }

    /// Returns the entry-point name the implementation was installed under.
    #[must_use]
    pub const fn entry_name(&self) -> &str {
        self.entry_name.as_str()
    }

    /// Returns the entry implementation.
    #[must_use]
    pub const fn entry(&self) -> &Arc<dyn PluginEntry> {
        &self.entry
    }
}

impl std::fmt::Debug for EntryBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryBinding")
            .field("entry_name", &self.entry_name)
            .finish_non_exhaustive()
    }
}

/// Registry of plugin entry bindings keyed by plugin id.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use clippr_plugins::{EntryError, PluginEntry, PluginRegistry};
///
/// struct Echo;
/// impl PluginEntry for Echo {
///     fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
///         Ok(serde_json::Value::String(input.to_owned()))
///     }
/// }
///
/// let mut registry = PluginRegistry::new();
/// registry.bind("echo", "echo.rs", Arc::new(Echo));
/// assert_eq!(registry.bindings("echo").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    bindings: HashMap<String, Vec<EntryBinding>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs an entry implementation for the given plugin id.
    ///
    /// Multiple bindings for one id are representable so the verifier can
    /// reject ids that do not expose exactly one callable.
    pub fn bind(
        &mut self,
        id: impl Into<String>,
        entry_name: impl Into<String>,
        entry: Arc<dyn PluginEntry>,
    ) {
        self.bindings
            .entry(id.into())
            .or_default()
            .push(EntryBinding::new(entry_name, entry));
    }

    /// Returns the bindings installed for a plugin id, empty when none.
    #[must_use]
    pub fn bindings(&self, id: &str) -> &[EntryBinding] {
        self.bindings.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns the ids of all registered plugins.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered plugin ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when no plugins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drops every binding and installs a fresh set.
    ///
    /// This is the deliberate hot-reload operation: callers that need new
    /// plugin behaviour rebuild the registry rather than relying on implicit
    /// per-call code loading.
    pub fn rebuild_from<I, S, N>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, N, Arc<dyn PluginEntry>)>,
        S: Into<String>,
        N: Into<String>,
    {
        self.bindings.clear();
        for (id, entry_name, entry) in entries {
            self.bind(id, entry_name, entry);
        }
    }
}

#[cfg(test)]
mod tests;
