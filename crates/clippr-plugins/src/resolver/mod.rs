//! Plugin descriptor resolution from durable manifest storage.
//!
//! The [`PluginResolver`] turns a caller-supplied plugin id into a
//! [`PluginDescriptor`]. The id is the only caller-controlled component of
//! the manifest path, so it is checked against a restrictive character class
//! before any filesystem access; ids that could escape the plugin root are
//! rejected outright. Manifests are read fresh on every call so metadata
//! edits are observed without a service restart.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::PluginError;
use crate::manifest::PluginManifest;

/// Manifest file name expected inside each plugin directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Tracing target for resolver operations.
const RESOLVER_TARGET: &str = "clippr_plugins::resolver";

/// Returns `true` when the id matches the allow-listed pattern: one or more
/// ASCII letters, digits, or hyphens.
///
/// Path separators, parent-directory segments, and every other character are
/// rejected, so a valid id can never name anything outside its own
/// subdirectory of the plugin root.
///
/// # Example
///
/// ```
/// use clippr_plugins::resolver::is_valid_id;
///
/// assert!(is_valid_id("csv-cleaner"));
/// assert!(!is_valid_id("../etc"));
/// assert!(!is_valid_id(""));
/// ```
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A resolved plugin: its id, its directory under the plugin root, and its
/// parsed manifest.
///
/// Descriptors are built per invocation and are immutable; they live no
/// longer than the call that resolved them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    id: String,
    dir: PathBuf,
    manifest: PluginManifest,
}

impl PluginDescriptor {
    /// Returns the plugin id.
    #[must_use]
    pub const fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the plugin directory under the plugin root.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the parsed manifest.
    #[must_use]
    pub const fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }
}

/// Resolves plugin ids to descriptors against a fixed plugin root directory.
///
/// # Example
///
/// ```no_run
/// use clippr_plugins::PluginResolver;
/// use std::path::PathBuf;
///
/// let resolver = PluginResolver::new(PathBuf::from("/srv/clippr/plugins"));
/// let descriptor = resolver.resolve("csv-cleaner")?;
/// assert_eq!(descriptor.id(), "csv-cleaner");
/// # Ok::<(), clippr_plugins::PluginError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PluginResolver {
    root: PathBuf,
}

impl PluginResolver {
    /// Creates a resolver rooted at the given plugin directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the plugin root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a plugin id to its descriptor.
    ///
    /// Reads `<root>/<id>/manifest.json` fresh on every call; no descriptor
    /// is cached across invocations.
    ///
    /// # Errors
    ///
    /// - [`PluginError::InvalidId`] if the id fails the allow-list check.
    ///   No filesystem access happens in this case.
    /// - [`PluginError::NotFound`] if the manifest file does not exist.
    /// - [`PluginError::Manifest`] if the manifest cannot be parsed or fails
    ///   validation.
    /// - [`PluginError::Io`] for any other read failure.
    pub fn resolve(&self, id: &str) -> Result<PluginDescriptor, PluginError> {
        if !is_valid_id(id) {
            return Err(PluginError::InvalidId { id: id.to_owned() });
        }

        let dir = self.root.join(id);
        let manifest_path = dir.join(MANIFEST_FILE);

        debug!(
            target: RESOLVER_TARGET,
            plugin = id,
            manifest = %manifest_path.display(),
            "reading plugin manifest"
        );

        let raw = std::fs::read_to_string(&manifest_path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                PluginError::NotFound { id: id.to_owned() }
            } else {
                PluginError::Io {
                    id: id.to_owned(),
                    source: Arc::new(err),
                }
            }
        })?;

        let manifest: PluginManifest =
            serde_json::from_str(&raw).map_err(|err| PluginError::Manifest {
                id: id.to_owned(),
                message: err.to_string(),
            })?;
        manifest.validate(id)?;

        Ok(PluginDescriptor {
            id: id.to_owned(),
            dir,
            manifest,
        })
    }
}
