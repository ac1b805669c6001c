//! Adapters from pipeline errors to miette reportables.
//!
//! The pipeline errors carry plain messages (plus a spec context path for
//! semantic violations); this module wraps them in a [`Reportable`] that
//! miette's graphical handler can render with help text.

use miette::Diagnostic;
use thiserror::Error;

use valobj::ValobjError;
use valobj_parser::ParseError;

use crate::CliError;

/// A single renderable diagnostic derived from a CLI error.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct Reportable {
    message: String,
    #[help]
    help: Option<String>,
}

impl Reportable {
    fn new(message: impl Into<String>, help: Option<String>) -> Self {
        Self {
            message: message.into(),
            help,
        }
    }
}

/// Renders a CLI error as one or more reportables.
pub fn to_reportables(err: &CliError) -> Vec<Reportable> {
    match err {
        CliError::Pipeline(ValobjError::Parse(ParseError::Document { source })) => {
            vec![Reportable::new(
                "spec must be valid YAML expression",
                Some(format!("caused by: {source}")),
            )]
        }
        CliError::Pipeline(ValobjError::Parse(ParseError::Spec(spec_err))) => {
            vec![Reportable::new(
                spec_err.to_string(),
                Some(format!("at spec path `{}`", spec_err.path())),
            )]
        }
        other => vec![Reportable::new(other.to_string(), None)],
    }
}
