//! Plugin execution core for the Clippr extraction platform.
//!
//! The `clippr-plugins` crate implements the hardened pipeline that stands
//! between callers and third-party extraction logic. A plugin is identified
//! by an opaque string id, described by a `manifest.json` under the plugin
//! root, and implemented by a statically linked [`PluginEntry`] installed in
//! a [`PluginRegistry`]. Every invocation runs the same four stages:
//!
//! 1. **Resolve** — check the id against a restrictive allow-list (the id is
//!    caller-supplied and becomes part of a filesystem path), then read and
//!    parse the manifest fresh from disk.
//! 2. **Verify** — re-derive the expected entry path and require the
//!    manifest's declared entry to be consistent with it, and require the
//!    registry to expose exactly one callable for the id.
//! 3. **Validate** — evaluate the plugin's declared input contract against
//!    the raw input; plugins without a contract accept anything.
//! 4. **Execute** — run the entry body on a deadline worker thread, catching
//!    errors and panics, and wrap the outcome in a uniform
//!    [`ExecutionReport`] envelope.
//!
//! There is no runtime code loading: plugin behaviour changes only through a
//! deliberate registry rebuild, while manifest metadata edits are observed
//! on the next call.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use clippr_plugins::{ContractSet, PluginRegistry, PluginResolver, PluginRunner};
//!
//! let runner = PluginRunner::new(
//!     PluginResolver::new(PathBuf::from("/srv/clippr/plugins")),
//!     PluginRegistry::new(),
//!     ContractSet::builtin(),
//! );
//! let report = runner.execute("contact-extractor", "mail us at help@example.com");
//! assert!(!report.is_success()); // nothing bound in the empty registry
//! ```

pub mod contract;
pub mod envelope;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod runner;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use self::contract::{ContractSet, InputContract};
pub use self::envelope::{ExecutionReport, ExecutionStage, FailureKind};
pub use self::error::PluginError;
pub use self::manifest::{PluginCategory, PluginManifest};
pub use self::registry::{EntryBinding, EntryError, PluginEntry, PluginRegistry};
pub use self::resolver::{PluginDescriptor, PluginResolver, MANIFEST_FILE};
pub use self::runner::PluginRunner;
pub use self::verifier::{verify, VerifiedEntry};
