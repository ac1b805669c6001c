//! Error types for valobj pipeline operations.
//!
//! This module provides the main error type [`ValobjError`] which wraps
//! the error conditions that can occur while parsing a spec document and
//! generating code from it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use valobj_parser::ParseError;

/// The main error type for valobj pipeline operations.
#[derive(Debug, Error)]
pub enum ValobjError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
}

/// A fault raised while producing artifacts.
///
/// Generation is a pure function of the spec, so faults are surfaced to
/// the caller and never retried; a faulting run aborts at the failing
/// artifact with no partial-output guarantee.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An artifact could not be written to its output sink.
    #[error("could not write artifact {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A type reference did not resolve against the generation index.
    /// With a parser-validated spec this indicates a broken invariant in
    /// the caller, not in the document.
    #[error("unresolved type reference `{name}` while generating `{owner}`")]
    UnresolvedReference { owner: String, name: String },

    /// A declared name has no legal spelling in the target syntax.
    #[error("declared name at `{path}` cannot be used as an identifier in generated code")]
    ReservedName { path: String },

    /// The configured root module is not a valid identifier.
    #[error("invalid root module name `{name}`")]
    InvalidRootModule { name: String },
}
