//! Emission of the shared collection wrapper module.
//!
//! The ordered and unordered wrappers are emitted once per generation run,
//! into one `collections` module shared by every value type that needs
//! them, and only when some property actually has List or Set cardinality.
//! The emitted source is included verbatim from the canonical template
//! files, which the test suite also compiles directly, so the tested code
//! and the emitted code are the same text.

use valobj_core::spec::Spec;
use valobj_core::typing::Cardinality;

use crate::codegen::Artifact;
use crate::config::CodegenConfig;

const VALUE_LIST_SOURCE: &str = include_str!("templates/value_list.rs");
const VALUE_SET_SOURCE: &str = include_str!("templates/value_set.rs");

/// Emits the `collections` module, or `None` when no property in the spec
/// has List or Set cardinality.
pub(crate) fn generate(spec: &Spec, config: &CodegenConfig) -> Option<Artifact> {
    let needs_list = spec.has_cardinality(Cardinality::List);
    let needs_set = spec.has_cardinality(Cardinality::Set);
    if !needs_list && !needs_set {
        return None;
    }

    let mut content = String::new();
    if config.header() {
        content.push_str("// Generated by valobj; do not edit.\n\n");
    }
    content.push_str("//! Shared immutable collection wrappers for generated value types.\n\n");
    if needs_list {
        content.push_str(VALUE_LIST_SOURCE);
    }
    if needs_list && needs_set {
        content.push('\n');
    }
    if needs_set {
        content.push_str(VALUE_SET_SOURCE);
    }

    Some(Artifact::new(
        format!("{}/collections.rs", config.root_module()),
        content,
    ))
}
