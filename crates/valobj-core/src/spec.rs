//! The immutable spec model.
//!
//! A [`Spec`] is the complete set of value types declared by one document:
//! `Spec -> ValueSpec* -> PropertySpec* -> TypeSpec`. All entities are
//! immutable once built and live exactly as long as one generation pass.
//! Each type is assembled through a fluent builder, mirroring the staging
//! builders the generator itself emits.

use serde::Serialize;

use crate::typing::{Cardinality, TypeSpec};

/// The complete set of declared value types for one generation run.
///
/// Invariant: value type names are unique. The parser enforces this while
/// reading the document; the model itself only stores the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Spec {
    value_specs: Vec<ValueSpec>,
}

impl Spec {
    /// Starts building a spec.
    pub fn builder() -> SpecBuilder {
        SpecBuilder::default()
    }

    /// The declared value types, in document order.
    pub fn value_specs(&self) -> &[ValueSpec] {
        &self.value_specs
    }

    /// Looks up a value type by declared name.
    pub fn value_spec(&self, name: &str) -> Option<&ValueSpec> {
        self.value_specs.iter().find(|value| value.name() == name)
    }

    /// Returns true if a value type with the given name is declared.
    pub fn declares(&self, name: &str) -> bool {
        self.value_spec(name).is_some()
    }

    /// Returns true if any property anywhere in the spec has the given
    /// cardinality. Backends use this to decide whether the shared
    /// collection wrappers are needed at all.
    pub fn has_cardinality(&self, cardinality: Cardinality) -> bool {
        self.value_specs.iter().any(|value| {
            value
                .property_specs()
                .iter()
                .any(|property| property.type_spec().cardinality() == cardinality)
        })
    }

    /// Number of declared value types.
    pub fn len(&self) -> usize {
        self.value_specs.len()
    }

    /// Returns true when no value type is declared.
    pub fn is_empty(&self) -> bool {
        self.value_specs.is_empty()
    }
}

/// Builder for [`Spec`].
#[derive(Debug, Default)]
pub struct SpecBuilder {
    value_specs: Vec<ValueSpec>,
}

impl SpecBuilder {
    /// Appends a value type declaration.
    pub fn add_value(mut self, value_spec: ValueSpec) -> Self {
        self.value_specs.push(value_spec);
        self
    }

    /// Builds the immutable spec.
    pub fn build(self) -> Spec {
        Spec {
            value_specs: self.value_specs,
        }
    }
}

/// One named value type: an ordered group of properties.
///
/// Property order is significant; it drives generated accessor, constructor
/// and field order as well as string rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValueSpec {
    name: String,
    property_specs: Vec<PropertySpec>,
}

impl ValueSpec {
    /// Starts building a value spec.
    pub fn builder() -> ValueSpecBuilder {
        ValueSpecBuilder::default()
    }

    /// The declared value type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared properties, in document order.
    pub fn property_specs(&self) -> &[PropertySpec] {
        &self.property_specs
    }

    /// Looks up a property by declared name.
    pub fn property_spec(&self, name: &str) -> Option<&PropertySpec> {
        self.property_specs
            .iter()
            .find(|property| property.name() == name)
    }
}

/// Builder for [`ValueSpec`].
#[derive(Debug, Default)]
pub struct ValueSpecBuilder {
    name: String,
    property_specs: Vec<PropertySpec>,
}

impl ValueSpecBuilder {
    /// Sets the value type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a property declaration.
    pub fn add_property(mut self, property_spec: PropertySpec) -> Self {
        self.property_specs.push(property_spec);
        self
    }

    /// Builds the immutable value spec.
    pub fn build(self) -> ValueSpec {
        ValueSpec {
            name: self.name,
            property_specs: self.property_specs,
        }
    }
}

/// One named, typed property within a value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertySpec {
    name: String,
    type_spec: TypeSpec,
}

impl PropertySpec {
    /// Starts building a property spec.
    pub fn builder() -> PropertySpecBuilder {
        PropertySpecBuilder::default()
    }

    /// The declared property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved property type.
    pub fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }
}

/// Builder for [`PropertySpec`].
#[derive(Debug, Default)]
pub struct PropertySpecBuilder {
    name: String,
    type_spec: Option<TypeSpec>,
}

impl PropertySpecBuilder {
    /// Sets the property name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the property type.
    pub fn type_spec(mut self, type_spec: TypeSpec) -> Self {
        self.type_spec = Some(type_spec);
        self
    }

    /// Builds the immutable property spec.
    pub fn build(self) -> PropertySpec {
        PropertySpec {
            name: self.name,
            type_spec: self
                .type_spec
                .unwrap_or_else(|| TypeSpec::builder().build()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::TypeKind;

    fn string_property(name: &str) -> PropertySpec {
        PropertySpec::builder()
            .name(name)
            .type_spec(
                TypeSpec::builder()
                    .type_ref("string")
                    .type_kind(TypeKind::Primitive)
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_spec_preserves_declaration_order() {
        let spec = Spec::builder()
            .add_value(ValueSpec::builder().name("val1").build())
            .add_value(ValueSpec::builder().name("val2").build())
            .build();

        let names: Vec<&str> = spec.value_specs().iter().map(ValueSpec::name).collect();
        assert_eq!(names, vec!["val1", "val2"]);
    }

    #[test]
    fn test_value_spec_lookup() {
        let spec = Spec::builder()
            .add_value(
                ValueSpec::builder()
                    .name("val")
                    .add_property(string_property("p1"))
                    .add_property(string_property("p2"))
                    .build(),
            )
            .build();

        assert!(spec.declares("val"));
        assert!(!spec.declares("other"));
        let value = spec.value_spec("val").unwrap();
        assert_eq!(value.property_specs().len(), 2);
        assert!(value.property_spec("p1").is_some());
        assert!(value.property_spec("missing").is_none());
    }

    #[test]
    fn test_has_cardinality() {
        let spec = Spec::builder()
            .add_value(
                ValueSpec::builder()
                    .name("val")
                    .add_property(
                        PropertySpec::builder()
                            .name("items")
                            .type_spec(
                                TypeSpec::builder()
                                    .type_ref("string")
                                    .type_kind(TypeKind::Primitive)
                                    .cardinality(Cardinality::List)
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .build();

        assert!(spec.has_cardinality(Cardinality::List));
        assert!(!spec.has_cardinality(Cardinality::Set));
    }

    #[test]
    fn test_structural_equality_of_specs() {
        let build = || {
            Spec::builder()
                .add_value(
                    ValueSpec::builder()
                        .name("val")
                        .add_property(string_property("p"))
                        .build(),
                )
                .build()
        };
        assert_eq!(build(), build());
    }
}
