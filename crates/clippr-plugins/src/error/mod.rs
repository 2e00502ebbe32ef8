//! Domain errors raised by plugin operations.
//!
//! All errors use `thiserror`-derived enums with structured context so callers
//! can inspect the failure programmatically. I/O errors are wrapped in `Arc`
//! to satisfy the `result_large_err` Clippy lint.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors arising from plugin operations.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin id contains characters outside the allow-listed set.
    #[error("plugin id '{id}' is not a valid plugin identifier")]
    InvalidId {
        /// Id that was rejected.
        id: String,
    },

    /// No manifest exists for a syntactically valid plugin id.
    #[error("plugin '{id}' not found under the plugin root")]
    NotFound {
        /// Id that was looked up.
        id: String,
    },

    /// The plugin manifest could not be parsed or failed validation.
    #[error("manifest error for plugin '{id}': {message}")]
    Manifest {
        /// Plugin id.
        id: String,
        /// Description of the parse or validation failure.
        message: String,
    },

    /// The manifest declares an entry point inconsistent with the
    /// independently re-derived path.
    #[error(
        "plugin '{id}' declares entry '{declared}' but the resolved entry is '{}'",
        derived.display()
    )]
    EntryMismatch {
        /// Plugin id.
        id: String,
        /// Entry point declared by the manifest.
        declared: String,
        /// Entry path re-derived from the plugin root and registry binding.
        derived: PathBuf,
    },

    /// The registry does not expose exactly one callable entry for the id.
    #[error("plugin '{id}' does not expose a single callable entry ({bindings} bound)")]
    NotCallable {
        /// Plugin id.
        id: String,
        /// Number of entry bindings found for the id.
        bindings: usize,
    },

    /// Caller input does not satisfy the plugin's declared input contract.
    #[error("invalid input for plugin '{id}': {reason}")]
    ValidationFailed {
        /// Plugin id.
        id: String,
        /// Which rule the input failed.
        reason: String,
    },

    /// The plugin body did not complete within the configured deadline.
    #[error("plugin '{id}' timed out after {timeout_secs}s")]
    Timeout {
        /// Plugin id.
        id: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },

    /// The plugin body returned an error or panicked.
    #[error("execution failed for plugin '{id}': {message}")]
    PluginRuntime {
        /// Plugin id.
        id: String,
        /// Message reported by the plugin body, preserved verbatim.
        message: String,
    },

    /// An I/O error occurred while reading plugin state from disk.
    #[error("I/O error for plugin '{id}': {source}")]
    Io {
        /// Plugin id.
        id: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },
}
