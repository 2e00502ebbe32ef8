//! Entry-point verification against the closed registry.
//!
//! The manifest is data the plugin author controls, so its declared entry
//! point is never trusted on its own. [`verify`] re-derives the expected
//! entry path from the plugin directory and the registry binding, and
//! requires the declaration to be consistent with it before handing the
//! entry to the runner. It also enforces the single-callable shape: a plugin
//! id must expose exactly one entry implementation.

use std::sync::Arc;

use tracing::debug;

use crate::error::PluginError;
use crate::registry::{PluginEntry, PluginRegistry};
use crate::resolver::PluginDescriptor;

/// Tracing target for verifier operations.
const VERIFIER_TARGET: &str = "clippr_plugins::verifier";

/// An entry point that passed verification and may be executed.
#[derive(Clone)]
pub struct VerifiedEntry {
    entry_name: String,
    entry: Arc<dyn PluginEntry>,
}

impl VerifiedEntry {
    /// Returns the verified entry-point name.
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

impl std::fmt::Debug for VerifiedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifiedEntry")
            .field("entry_name", &self.entry_name)
            .finish_non_exhaustive()
    }
}

/// Verifies that a descriptor's declared entry point matches the registry
/// binding and that the binding exposes exactly one callable.
///
/// The expected entry path is re-derived as `<plugin dir>/<bound entry
/// name>`; the manifest's declared entry must be a suffix of (or equal to)
/// that derivation. Suffix matching tolerates manifests that declare only
/// the file component of a nested entry name.
///
/// The entry is never invoked here.
///
/// # Errors
///
/// - [`PluginError::NotCallable`] if the registry holds zero or more than
///   one binding for the id.
/// - [`PluginError::EntryMismatch`] if the declared entry is inconsistent
///   with the re-derived path.
pub fn verify(
    descriptor: &PluginDescriptor,
    registry: &PluginRegistry,
) -> Result<VerifiedEntry, PluginError> {
    let id = descriptor.id();
    let bindings = registry.bindings(id);

    let [binding] = bindings else {
        return Err(PluginError::NotCallable {
            id: id.to_owned(),
            bindings: bindings.len(),
        });
    };

    let declared = descriptor.manifest().entry();
    let derived = descriptor.dir().join(binding.entry_name());
    if !derived.to_string_lossy().ends_with(declared) {
        return Err(PluginError::EntryMismatch {
            id: id.to_owned(),
            declared: declared.to_owned(),
            derived,
        });
    }

    debug!(
        target: VERIFIER_TARGET,
        plugin = id,
        entry = binding.entry_name(),
        "entry point verified"
    );

    Ok(VerifiedEntry {
        entry_name: binding.entry_name().to_owned(),
        entry: Arc::clone(binding.entry()),
    })
}
