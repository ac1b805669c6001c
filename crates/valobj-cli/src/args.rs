//! Command-line argument definitions for the valobj CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration
//! file selection, generated module naming and logging verbosity.

use clap::Parser;

/// Command-line arguments for the valobj generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input spec file (YAML)
    #[arg(help = "Path to the input spec file")]
    pub input: String,

    /// Output directory for generated sources
    #[arg(short, long, default_value = "src")]
    pub output: String,

    /// Root module name for generated code (overrides the config file)
    #[arg(short, long)]
    pub root_module: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
