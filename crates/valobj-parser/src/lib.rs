//! Parser for valobj spec documents.
//!
//! A spec document is a YAML mapping: top level keys are value type names,
//! each mapping to a nested mapping of property name to type token (or to
//! nothing, for a value type without properties). Parsing produces the
//! immutable [`Spec`](valobj_core::spec::Spec) model from `valobj-core`,
//! fully validated: identifier well-formedness, type token resolution and
//! the in-spec reference closure over the whole document.
//!
//! The public entry point is [`parse`]. Errors split into two kinds, see
//! [`error::ParseError`].

pub mod error;

mod context;
mod reader;
mod resolve;


pub use error::{ParseError, SpecSyntaxError};

use valobj_core::spec::Spec;

/// Parses a spec document into a validated [`Spec`].
///
/// Parsing is total and deterministic: the same input always yields either
/// a structurally equal spec or the same error.
///
/// # Errors
///
/// Returns [`ParseError::Document`] when the input is not a well-formed
/// YAML mapping at all, and [`ParseError::Spec`] when a semantic rule is
/// violated (malformed identifier, unknown type token, undeclared in-spec
/// reference, unexpected node shape). Spec errors carry the dotted
/// `"<value>/<property>"` context path at the point of violation.
pub fn parse(source: &str) -> Result<Spec, ParseError> {
    reader::read(source)
}
