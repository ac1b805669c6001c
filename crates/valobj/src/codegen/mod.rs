//! Code generation backends.
//!
//! A [`Backend`] turns a validated spec into a set of [`Artifact`]s. The
//! reference backend is [`RustBackend`], which emits one module per value
//! type, a shared `collections` module when any property has List or Set
//! cardinality, and a module index with re-exports. Parallel backends for
//! other target syntaxes implement the same trait against the same spec
//! model.
//!
//! Generation assumes its spec already passed parser validation and
//! performs no re-validation of reference closure. Faults abort the run
//! and are never retried: generation is a pure function of the spec, so a
//! retry without changed input reproduces the same fault.

mod collections;
mod index;
mod property;
mod value_type;
mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use valobj_core::identifier;
use valobj_core::spec::{Spec, ValueSpec};
use valobj_core::typing::TypeKind;

use crate::config::CodegenConfig;
use crate::error::GenerateError;

use index::TypeIndex;
use writer::SourceWriter;

/// One generated source file, as a path relative to the output root plus
/// its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub(crate) fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// The artifact contract every code generation backend satisfies.
pub trait Backend: Sync {
    /// Backend name, for logs.
    fn name(&self) -> &'static str;

    /// Emits the artifact set for a validated spec.
    fn generate(&self, spec: &Spec, config: &CodegenConfig)
    -> Result<Vec<Artifact>, GenerateError>;
}

/// The reference backend, emitting Rust source artifacts.
#[derive(Debug, Default)]
pub struct RustBackend;

impl Backend for RustBackend {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn generate(
        &self,
        spec: &Spec,
        config: &CodegenConfig,
    ) -> Result<Vec<Artifact>, GenerateError> {
        if !identifier::is_valid(config.root_module()) {
            return Err(GenerateError::InvalidRootModule {
                name: config.root_module().to_string(),
            });
        }

        // The cross-reference index is a pure function of the declared
        // names; it is computed once here, before the per-value fan-out,
        // and shared read-only by the parallel workers.
        let type_index = TypeIndex::build(spec);

        let mut artifacts = Vec::with_capacity(spec.len() + 2);
        artifacts.push(module_index(spec, &type_index, config));
        if let Some(artifact) = collections::generate(spec, config) {
            artifacts.push(artifact);
        }

        let value_artifacts = spec
            .value_specs()
            .par_iter()
            .map(|value_spec| {
                let artifact = value_type::generate(value_spec, &type_index, config)?;
                debug!(value = value_spec.name(); "generated value type");
                Ok(artifact)
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;
        artifacts.extend(value_artifacts);

        Ok(artifacts)
    }
}

/// Emits the module index: module declarations plus re-exports of every
/// generated type.
fn module_index(spec: &Spec, type_index: &TypeIndex, config: &CodegenConfig) -> Artifact {
    let mut w = SourceWriter::new();
    if config.header() {
        w.line("// Generated by valobj; do not edit.");
        w.blank();
    }
    w.line("//! Generated value types.");
    w.blank();
    if collections_needed(spec) {
        w.line("pub mod collections;");
    }
    for (_, entry) in type_index.iter() {
        w.line(&format!("pub mod {};", property::raw_module(&entry.module)));
    }
    if !spec.is_empty() {
        w.blank();
    }
    for value_spec in spec.value_specs() {
        if let Some(entry) = type_index.get(value_spec.name()) {
            let mut names = vec![
                entry.type_name.clone(),
                entry.builder_name.clone(),
                entry.trait_name.clone(),
            ];
            names.extend(enum_names(value_spec, &entry.type_name));
            names.sort();
            w.line(&format!(
                "pub use self::{}::{{{}}};",
                property::raw_module(&entry.module),
                names.join(", ")
            ));
        }
    }
    Artifact::new(format!("{}/mod.rs", config.root_module()), w.finish())
}

fn collections_needed(spec: &Spec) -> bool {
    use valobj_core::typing::Cardinality;
    spec.has_cardinality(Cardinality::List) || spec.has_cardinality(Cardinality::Set)
}

/// Names of the enumeration types generated for one value spec.
fn enum_names(value_spec: &ValueSpec, type_name: &str) -> Vec<String> {
    value_spec
        .property_specs()
        .iter()
        .filter(|property| property.type_spec().type_kind() == TypeKind::Enumeration)
        .map(|property| format!("{type_name}{}", identifier::upper_camel(property.name())))
        .collect()
}

/// Writes artifacts under `root`, creating directories as needed.
///
/// A sink failure aborts the run at the failing artifact; artifacts
/// already written stay on disk, with no partial-output guarantee.
pub(crate) fn write_artifacts(root: &Path, artifacts: &[Artifact]) -> Result<(), GenerateError> {
    for artifact in artifacts {
        let path = root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::Artifact {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, &artifact.content).map_err(|source| GenerateError::Artifact {
            path: path.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use valobj_core::spec::PropertySpec;
    use valobj_core::typing::TypeSpec;

    fn sample_spec() -> Spec {
        Spec::builder()
            .add_value(
                ValueSpec::builder()
                    .name("person")
                    .add_property(
                        PropertySpec::builder()
                            .name("name")
                            .type_spec(TypeSpec::builder().type_ref("string").build())
                            .build(),
                    )
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_module_index_lists_modules_and_reexports() {
        let spec = sample_spec();
        let artifact = module_index(&spec, &TypeIndex::build(&spec), &CodegenConfig::default());
        assert!(artifact.content.contains("pub mod person;"));
        assert!(
            artifact
                .content
                .contains("pub use self::person::{Person, PersonBuilder, PersonValue};")
        );
        assert_eq!(artifact.path.to_str().unwrap(), "generated/mod.rs");
    }

    #[test]
    fn test_backend_artifact_order_is_deterministic() {
        let spec = sample_spec();
        let backend = RustBackend;
        let first = backend.generate(&spec, &CodegenConfig::default()).unwrap();
        let second = backend.generate(&spec, &CodegenConfig::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].path.to_str().unwrap(), "generated/mod.rs");
        assert_eq!(first[1].path.to_str().unwrap(), "generated/person.rs");
    }

    #[test]
    fn test_invalid_root_module_is_rejected() {
        let spec = sample_spec();
        let config = CodegenConfig::new("not a module");
        let err = RustBackend.generate(&spec, &config).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRootModule { .. }));
    }
}
