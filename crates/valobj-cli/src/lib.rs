//! CLI logic for the valobj generator.
//!
//! This module contains the core CLI logic for the valobj generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;
use std::path::Path;

use log::info;
use thiserror::Error;

use valobj::{Generator, ValobjError};

/// Error type for the CLI front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] ValobjError),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Run the valobj CLI application
///
/// This function processes the input spec through the valobj pipeline and
/// writes the generated sources to the output directory.
///
/// # Errors
///
/// Returns [`CliError`] for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Generation errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing spec"
    );

    // Load configuration
    let mut codegen_config = config::load_config(args.config.as_ref())?;
    if let Some(root_module) = &args.root_module {
        codegen_config = valobj::config::CodegenConfig::new(root_module)
            .with_header(codegen_config.header());
    }

    // Read input file
    let source = fs::read_to_string(&args.input).map_err(ValobjError::from)?;

    // Process the spec using the Generator API
    let generator = Generator::new(codegen_config);
    let spec = generator.parse(&source)?;
    let artifacts = generator.generate(&spec)?;

    // Write output files
    generator.write_artifacts(Path::new(&args.output), &artifacts)?;

    info!(
        output_dir = args.output,
        artifacts = artifacts.len();
        "Sources generated successfully"
    );

    Ok(())
}
