//! The uniform execution envelope returned to callers.
//!
//! Every invocation produces exactly one [`ExecutionReport`]: a success
//! carrying the plugin's structured value, or a failure carrying a
//! machine-readable kind, the pipeline stage that failed, and a
//! human-readable message. Callers never observe a raw error from the
//! pipeline; the runner converts every [`PluginError`] through
//! `ExecutionReport::from`.

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

/// Machine-readable classification of an execution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The plugin id failed the allow-list check or its manifest is
    /// malformed. A client error.
    InvalidId,
    /// No plugin exists for a well-formed id. A client error.
    NotFound,
    /// The manifest's declared entry is inconsistent with the resolved
    /// entry. The installation is corrupt or tampered.
    EntryMismatch,
    /// The plugin does not expose a single callable entry. Same class as
    /// an entry mismatch.
    NotCallable,
    /// Caller input does not satisfy the plugin's input contract.
    ValidationFailed,
    /// The plugin body exceeded its execution deadline.
    Timeout,
    /// The plugin body itself failed; the fault is attributed to the
    /// plugin, not the core.
    PluginRuntimeError,
    /// An infrastructure fault (for example an unreadable manifest file).
    InternalError,
}

impl FailureKind {
    /// Returns the canonical snake_case string for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::NotFound => "not_found",
            Self::EntryMismatch => "entry_mismatch",
            Self::NotCallable => "not_callable",
            Self::ValidationFailed => "validation_failed",
            Self::Timeout => "timeout",
            Self::PluginRuntimeError => "plugin_runtime_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage an invocation was in when it failed.
///
/// Stages advance strictly forward: resolving, verifying, validating,
/// executing. A failure at any stage moves the invocation directly to its
/// terminal failed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStage {
    /// Locating and parsing the manifest.
    Resolving,
    /// Cross-checking the declared entry point.
    Verifying,
    /// Evaluating the input contract.
    Validating,
    /// Running the plugin body.
    Executing,
}

impl ExecutionStage {
    /// Returns the canonical snake_case string for the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resolving => "resolving",
            Self::Verifying => "verifying",
            Self::Validating => "validating",
            Self::Executing => "executing",
        }
    }
}

impl std::fmt::Display for ExecutionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome envelope for one plugin invocation.
///
/// Success and failure are mutually exclusive by construction; the envelope
/// is built per call and never persisted.
///
/// # Example
///
/// ```
/// use clippr_plugins::ExecutionReport;
///
/// let report = ExecutionReport::success(serde_json::json!({"emails": []}));
/// assert!(report.is_success());
/// assert!(report.value().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExecutionReport {
    /// The plugin completed and returned a structured value.
    Success {
        /// The plugin's return value.
        value: serde_json::Value,
    },
    /// The invocation failed at some pipeline stage.
    Failure {
        /// Machine-readable failure classification.
        kind: FailureKind,
        /// Stage the pipeline was in when it failed.
        stage: ExecutionStage,
        /// Human-readable description.
        message: String,
    },
}

impl ExecutionReport {
    /// Wraps a plugin return value as a success.
    #[must_use]
    pub const fn success(value: serde_json::Value) -> Self {
        Self::Success { value }
    }

    /// Builds a failure report.
    #[must_use]
    pub const fn failure(kind: FailureKind, stage: ExecutionStage, message: String) -> Self {
        Self::Failure {
            kind,
            stage,
            message,
        }
    }

    /// Returns `true` for a success report.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure kind, if any.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Returns the stage a failed invocation stopped at, if any.
    #[must_use]
    pub const fn failed_stage(&self) -> Option<ExecutionStage> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { stage, .. } => Some(*stage),
        }
    }
}

impl From<PluginError> for ExecutionReport {
    fn from(error: PluginError) -> Self {
        let (kind, stage) = match &error {
            PluginError::InvalidId { .. } | PluginError::Manifest { .. } => {
                (FailureKind::InvalidId, ExecutionStage::Resolving)
            }
            PluginError::NotFound { .. } => (FailureKind::NotFound, ExecutionStage::Resolving),
            PluginError::Io { .. } => (FailureKind::InternalError, ExecutionStage::Resolving),
            PluginError::EntryMismatch { .. } => {
                (FailureKind::EntryMismatch, ExecutionStage::Verifying)
            }
            PluginError::NotCallable { .. } => {
                (FailureKind::NotCallable, ExecutionStage::Verifying)
            }
            PluginError::ValidationFailed { .. } => {
                (FailureKind::ValidationFailed, ExecutionStage::Validating)
            }
            PluginError::Timeout { .. } => (FailureKind::Timeout, ExecutionStage::Executing),
            PluginError::PluginRuntime { .. } => {
                (FailureKind::PluginRuntimeError, ExecutionStage::Executing)
            }
        };
        Self::failure(kind, stage, error.to_string())
    }
}
