//! Structured error types shared across compnet crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and context carried by every [`CompnetError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case identifier callers can match on, e.g. `empty-group`.
    pub code: String,
    /// One-line description of what was rejected.
    pub message: String,
    /// Contextual key value pairs (vertex ids, group ids, sizes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the caller can do instead, when there is an obvious alternative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with an empty context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key=value`; a repeated key keeps the last value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for competition network operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CompnetError {
    /// Rejected input to the incidence store.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Operation that is documented but deliberately not available.
    #[error("unsupported: {0}")]
    Unsupported(ErrorInfo),
    /// Malformed equilibrium sketch data.
    #[error("sketch error: {0}")]
    Sketch(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        let mut pairs = self.context.iter();
        if let Some((key, value)) = pairs.next() {
            write!(f, " | context: [{key}={value}")?;
            for (key, value) in pairs {
                write!(f, ", {key}={value}")?;
            }
            f.write_str("]")?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl CompnetError {
    /// Payload of whichever family the error belongs to.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CompnetError::Graph(info)
            | CompnetError::Unsupported(info)
            | CompnetError::Sketch(info) => info,
        }
    }

    /// Returns `true` when the error marks an unsupported operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, CompnetError::Unsupported(_))
    }
}
