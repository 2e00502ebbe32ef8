//! Execution dispatcher composing the full plugin pipeline.
//!
//! The [`PluginRunner`] is the public-facing API: resolve the descriptor,
//! verify the entry point, validate the input, then execute the entry body
//! under a deadline. Each stage short-circuits with a typed failure and no
//! stage retries. The runner is the single conversion point from
//! [`PluginError`] to the caller-facing [`ExecutionReport`], so callers
//! never observe a raw, unclassified error.
//!
//! Invocations share no mutable state: each call builds its own descriptor
//! and verified entry, so many callers may execute concurrently against one
//! runner without locking.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::contract::ContractSet;
use crate::envelope::ExecutionReport;
use crate::error::PluginError;
use crate::registry::{PluginEntry, PluginRegistry};
use crate::resolver::PluginResolver;
use crate::verifier::verify;

/// Tracing target for runner operations.
const RUNNER_TARGET: &str = "clippr_plugins::runner";

/// Orchestrates plugin execution: resolve, verify, validate, execute.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use clippr_plugins::{
///     ContractSet, EntryError, PluginEntry, PluginManifest, PluginRegistry,
///     PluginResolver, PluginRunner,
/// };
///
/// struct LineCount;
/// impl PluginEntry for LineCount {
///     fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
///         Ok(serde_json::json!({ "lines": input.lines().count() }))
///     }
/// }
///
/// let root = tempfile::tempdir()?;
/// let dir = root.path().join("line-count");
/// std::fs::create_dir_all(&dir)?;
/// let manifest = PluginManifest::new("line_count.rs");
/// std::fs::write(dir.join("manifest.json"), serde_json::to_string(&manifest)?)?;
///
/// let mut registry = PluginRegistry::new();
/// registry.bind("line-count", "line_count.rs", Arc::new(LineCount));
///
/// let runner = PluginRunner::new(
///     PluginResolver::new(root.path()),
///     registry,
///     ContractSet::new(),
/// );
/// let report = runner.execute("line-count", "a\nb\n");
/// assert_eq!(report.value(), Some(&serde_json::json!({ "lines": 2 })));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct PluginRunner {
    resolver: PluginResolver,
    registry: PluginRegistry,
    contracts: ContractSet,
}

impl PluginRunner {
    /// Creates a runner from its three collaborators.
    #[must_use]
    pub const fn new(
        resolver: PluginResolver,
        registry: PluginRegistry,
        contracts: ContractSet,
    ) -> Self {
        Self {
            resolver,
            registry,
            contracts,
        }
    }

    /// Returns the descriptor resolver.
    #[must_use]
    pub const fn resolver(&self) -> &PluginResolver {
        &self.resolver
    }

    /// Returns the entry registry.
    #[must_use]
    pub const fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Returns a mutable reference to the entry registry, for deliberate
    /// registry rebuilds.
    #[must_use]
    pub const fn registry_mut(&mut self) -> &mut PluginRegistry {
        &mut self.registry
    }

    /// Returns the input contract table.
    #[must_use]
    pub const fn contracts(&self) -> &ContractSet {
        &self.contracts
    }

    /// Executes a plugin and returns the uniform outcome envelope.
    ///
    /// Never returns a raw error: every pipeline failure is converted into
    /// an [`ExecutionReport::Failure`] tagged with its kind and stage.
    #[must_use]
    pub fn execute(&self, id: &str, input: &str) -> ExecutionReport {
        match self.try_execute(id, input) {
            Ok(value) => ExecutionReport::success(value),
            Err(error) => {
                debug!(target: RUNNER_TARGET, plugin = id, %error, "execution failed");
                ExecutionReport::from(error)
            }
        }
    }

    /// Executes a plugin, returning the typed error instead of the envelope.
    ///
    /// Stage order is fixed: resolve, verify, validate, execute. The
    /// manifest is read fresh from disk on every call.
    ///
    /// # Errors
    ///
    /// Any [`PluginError`] raised by a pipeline stage or by the plugin body.
    pub fn try_execute(&self, id: &str, input: &str) -> Result<serde_json::Value, PluginError> {
        let descriptor = self.resolver.resolve(id)?;
        let verified = verify(&descriptor, &self.registry)?;
        self.contracts.validate(id, input)?;

        debug!(
            target: RUNNER_TARGET,
            plugin = id,
            entry = verified.entry_name(),
            input_bytes = input.len(),
            "executing plugin body"
        );

        run_with_deadline(
            id,
            verified.entry(),
            input,
            descriptor.manifest().timeout_secs(),
        )
    }
}

/// Runs the entry body on a worker thread and waits up to the deadline.
///
/// A panic in the body is caught and reported as a plugin runtime failure.
/// On timeout the worker thread is detached; cancellation is cooperative
/// only, so a hung body leaks its thread but never blocks the caller.
fn run_with_deadline(
    id: &str,
    entry: &Arc<dyn PluginEntry>,
    input: &str,
    timeout_secs: u64,
) -> Result<serde_json::Value, PluginError> {
    let (sender, receiver) = mpsc::channel();
    let body = Arc::clone(entry);
    let owned_input = input.to_owned();

    thread::spawn(move || {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| body.run(&owned_input)));
        // The receiver may already have given up; a send failure is fine.
        drop(sender.send(outcome));
    });

    match receiver.recv_timeout(Duration::from_secs(timeout_secs)) {
        Ok(Ok(Ok(value))) => Ok(value),
        Ok(Ok(Err(error))) => Err(PluginError::PluginRuntime {
            id: id.to_owned(),
            message: error.to_string(),
        }),
        Ok(Err(payload)) => Err(PluginError::PluginRuntime {
            id: id.to_owned(),
            message: panic_message(payload.as_ref()),
        }),
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                target: RUNNER_TARGET,
                plugin = id,
                timeout_secs,
                "plugin body exceeded its deadline, detaching worker"
            );
            Err(PluginError::Timeout {
                id: id.to_owned(),
                timeout_secs,
            })
        }
        Err(RecvTimeoutError::Disconnected) => Err(PluginError::PluginRuntime {
            id: id.to_owned(),
            message: String::from("plugin body aborted without reporting a result"),
        }),
    }
}

/// Extracts a readable message from a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("plugin body panicked")
    }
}
