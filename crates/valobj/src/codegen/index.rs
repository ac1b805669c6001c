//! Cross-reference index over the declared value types.
//!
//! Generation of independent value specs fans out across parallel workers,
//! so the name index they share is computed once up front, as a pure
//! function of the declared names, and read-only afterwards.

use indexmap::IndexMap;

use valobj_core::identifier;
use valobj_core::spec::Spec;

/// Generated-name entry for one declared value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeEntry {
    /// Target module name (`book_review`).
    pub(crate) module: String,
    /// Generated immutable type name (`BookReview`).
    pub(crate) type_name: String,
    /// Generated builder type name (`BookReviewBuilder`).
    pub(crate) builder_name: String,
    /// Generated accessor contract name (`BookReviewValue`).
    pub(crate) trait_name: String,
}

/// Read-only map from declared value type name to generated names.
#[derive(Debug, Default)]
pub(crate) struct TypeIndex {
    entries: IndexMap<String, TypeEntry>,
}

impl TypeIndex {
    /// Builds the index for a validated spec, in declaration order.
    pub(crate) fn build(spec: &Spec) -> Self {
        let mut entries = IndexMap::with_capacity(spec.len());
        for value_spec in spec.value_specs() {
            let name = value_spec.name();
            let type_name = identifier::upper_camel(name);
            entries.insert(
                name.to_string(),
                TypeEntry {
                    module: identifier::snake(name),
                    builder_name: format!("{type_name}Builder"),
                    trait_name: format!("{type_name}Value"),
                    type_name,
                },
            );
        }
        Self { entries }
    }

    /// Looks up the generated names for a declared value type.
    pub(crate) fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    /// Iterates all entries in declaration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &TypeEntry)> {
        self.entries.iter()
    }
}
