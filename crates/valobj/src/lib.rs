//! Valobj - a value object code generator driven by declarative YAML specs.
//!
//! A spec document declares value types and their typed properties; valobj
//! parses it into an immutable spec model and generates, per value type, an
//! accessor contract, an immutable implementation with structural
//! equality/hash/string rendering, a staging builder, per-property withers
//! and a bulk-change operation, plus shared immutable collection wrappers
//! for list and set properties.

pub mod config;

mod codegen;
mod error;

pub use codegen::{Artifact, Backend, RustBackend};
pub use error::{GenerateError, ValobjError};

use std::path::Path;

use log::{debug, info, trace};

use valobj_core::spec::Spec;

use config::CodegenConfig;

/// Pipeline front end for parsing spec documents and generating code.
///
/// # Examples
///
/// ```rust,no_run
/// use valobj::{Generator, config::CodegenConfig};
///
/// let source = "person:\n  name: string\n";
///
/// let generator = Generator::new(CodegenConfig::default());
///
/// // Parse the document into the spec model
/// let spec = generator.parse(source)
///     .expect("Failed to parse");
///
/// // Emit the artifact set
/// let artifacts = generator.generate(&spec)
///     .expect("Failed to generate");
///
/// // Or use default config
/// let generator = Generator::default();
/// ```
#[derive(Default)]
pub struct Generator {
    config: CodegenConfig,
}

impl Generator {
    /// Create a new generator with the given configuration.
    pub fn new(config: CodegenConfig) -> Self {
        Self { config }
    }

    /// Parse a spec document into the validated spec model.
    ///
    /// # Errors
    ///
    /// Returns `ValobjError::Parse` for structurally invalid documents and
    /// for semantic spec violations; see
    /// [`valobj_parser::ParseError`] for the split.
    pub fn parse(&self, source: &str) -> Result<Spec, ValobjError> {
        info!("Parsing spec document");

        let spec = valobj_parser::parse(source)?;

        debug!(values = spec.len(); "Spec parsed successfully");
        trace!(spec:?; "Parsed spec");

        Ok(spec)
    }

    /// Generate the artifact set for a parsed spec with the reference
    /// backend.
    ///
    /// Independent value types are generated concurrently; the returned
    /// artifact order is deterministic (module index, collections, then
    /// value types in declaration order).
    ///
    /// # Errors
    ///
    /// Returns `ValobjError::Generate` when an artifact cannot be
    /// produced. Faults abort the run and are not retried.
    pub fn generate(&self, spec: &Spec) -> Result<Vec<Artifact>, ValobjError> {
        let backend = RustBackend;
        info!(backend = backend.name(), values = spec.len(); "Generating artifacts");

        let artifacts = backend.generate(spec, &self.config)?;

        info!(artifacts = artifacts.len(); "Artifacts generated");
        Ok(artifacts)
    }

    /// Write generated artifacts under the given output root.
    ///
    /// # Errors
    ///
    /// Returns `ValobjError::Generate` wrapping the artifact path and the
    /// underlying I/O cause when a sink fails.
    pub fn write_artifacts(&self, root: &Path, artifacts: &[Artifact]) -> Result<(), ValobjError> {
        codegen::write_artifacts(root, artifacts)?;
        info!(root:? = root, artifacts = artifacts.len(); "Artifacts written");
        Ok(())
    }
}
