//! Error types for spec parsing.
//!
//! Two kinds of failure are surfaced to callers:
//!
//! - [`ParseError::Document`]: the input is not a well-formed YAML mapping
//!   at all. Wraps the structural parse cause and never carries a context
//!   path, because no context was established.
//! - [`ParseError::Spec`]: a semantic rule was violated while reading an
//!   otherwise well-formed document. Always carries the dotted
//!   `"<value>/<property>"` context path at the point of violation.
//!
//! Neither kind is retried: parsing is deterministic, so a retry without
//! changed input reproduces the same failure.

use thiserror::Error;

/// The error type returned by [`parse`](crate::parse).
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not a well-formed YAML mapping.
    #[error("spec must be valid YAML expression")]
    Document {
        #[source]
        source: serde_yaml::Error,
    },

    /// A semantic spec rule was violated.
    #[error(transparent)]
    Spec(#[from] SpecSyntaxError),
}

/// A semantic spec violation with its dotted context path.
///
/// The message embeds the path (`"val/prop"`) and states the violated
/// rule, e.g.
/// `malformed property name "val/prop erty" : should be a valid identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SpecSyntaxError {
    message: String,
    path: String,
}

impl SpecSyntaxError {
    /// Creates a spec syntax error from a complete message and the context
    /// path it refers to.
    pub(crate) fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }

    /// The full human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The dotted context path (`"<value>/<property>"`) at the point of
    /// violation.
    pub fn path(&self) -> &str {
        &self.path
    }
}
