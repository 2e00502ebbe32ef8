//! Per-plugin input contracts evaluated before execution.
//!
//! An [`InputContract`] is a structural predicate over the raw input string.
//! Contracts live in a [`ContractSet`] keyed by plugin id; an id with no
//! registered contract accepts any input, including the empty string. This
//! stage runs strictly before the runner and never touches the plugin body.

use std::collections::HashMap;

use regex::Regex;

use crate::error::PluginError;

/// A structural predicate over caller-supplied input.
#[derive(Debug, Clone)]
pub enum InputContract {
    /// Input must contain at least this many bytes.
    MinLength(usize),
    /// Input must match the pattern.
    Pattern(Regex),
    /// Input must satisfy at least one of the alternatives.
    AnyOf(Vec<InputContract>),
}

impl InputContract {
    /// Builds a pattern contract from a regex string.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when the pattern is invalid.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Returns `true` when the input satisfies the predicate.
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        match self {
            Self::MinLength(min) => input.len() >= *min,
            Self::Pattern(re) => re.is_match(input),
            Self::AnyOf(alternatives) => alternatives.iter().any(|alt| alt.accepts(input)),
        }
    }

    /// Describes the rule for rejection messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::MinLength(min) => format!("input must be at least {min} characters"),
            Self::Pattern(re) => format!("input must match /{}/", re.as_str()),
            Self::AnyOf(alternatives) => {
                let rules: Vec<String> = alternatives.iter().map(Self::describe).collect();
                format!("input must satisfy one of: {}", rules.join("; "))
            }
        }
    }
}

/// Compiles a pattern known to be valid at build time.
#[expect(clippy::expect_used, reason = "builtin patterns are fixed and known valid")]
fn builtin_pattern(pattern: &str) -> InputContract {
    InputContract::pattern(pattern).expect("builtin contract pattern must compile")
}

/// Static mapping from plugin id to its input contract.
///
/// # Example
///
/// ```
/// use clippr_plugins::{ContractSet, InputContract};
///
/// let mut contracts = ContractSet::new();
/// contracts.insert("csv-cleaner", InputContract::pattern(",")?);
/// assert!(contracts.validate("csv-cleaner", "a,b").is_ok());
/// assert!(contracts.validate("csv-cleaner", "no commas").is_err());
/// // Unknown ids pass unconditionally.
/// assert!(contracts.validate("unknown", "").is_ok());
/// # Ok::<(), regex::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContractSet {
    contracts: HashMap<String, InputContract>,
}

impl ContractSet {
    /// Creates an empty contract set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contract for a plugin id, replacing any existing one.
    pub fn insert(&mut self, id: impl Into<String>, contract: InputContract) {
        self.contracts.insert(id.into(), contract);
    }

    /// Returns the contract registered for an id, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InputContract> {
        self.contracts.get(id)
    }

    /// Validates raw input against the contract registered for the id.
    ///
    /// Absence of a contract means pass-through: the input is accepted
    /// unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::ValidationFailed`] naming the rule the input
    /// failed.
    pub fn validate(&self, id: &str, input: &str) -> Result<(), PluginError> {
        let Some(contract) = self.contracts.get(id) else {
            return Ok(());
        };
        if contract.accepts(input) {
            return Ok(());
        }
        Err(PluginError::ValidationFailed {
            id: id.to_owned(),
            reason: contract.describe(),
        })
    }

    /// Returns the contract table for the builtin extraction plugins.
    #[must_use]
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.insert("invoice-parser", InputContract::MinLength(10));
        set.insert("contact-extractor", InputContract::MinLength(10));
        set.insert("resume-parser", InputContract::MinLength(10));
        set.insert("table-to-json", builtin_pattern("(?i)<table"));
        set.insert("meta-tag-extractor", builtin_pattern("(?i)<meta"));
        set.insert(
            "json-summary",
            InputContract::AnyOf(vec![builtin_pattern(r"^\["), builtin_pattern(r"^\{")]),
        );
        set.insert("csv-cleaner", builtin_pattern(","));
        set.insert(
            "geojson-validator",
            builtin_pattern(r#""type":\s*"FeatureCollection""#),
        );
        set.insert("date-normalizer", InputContract::MinLength(5));
        set.insert("url-extractor", InputContract::MinLength(5));
        set
    }
}

#[cfg(test)]
mod tests;
