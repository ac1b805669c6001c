//! Document reading: YAML mapping to validated [`Spec`].
//!
//! Reading is two-phase. The first phase walks the document in order,
//! validating identifiers, resolving type tokens and collecting every
//! in-spec reference together with its context path. Anonymous nested
//! value mappings are hoisted into the spec under a synthesized name
//! (`<parent><CapitalizedProperty>`). The second phase checks each
//! collected reference against the complete set of declared names, so a
//! value type may reference another declared later in the same document.

use log::debug;

use valobj_core::identifier;
use valobj_core::spec::{PropertySpec, Spec, ValueSpec};
use valobj_core::typing::{TypeKind, TypeSpec};

use crate::context::Context;
use crate::error::{ParseError, SpecSyntaxError};
use crate::resolve::{self, PendingReference};

pub(crate) fn read(source: &str) -> Result<Spec, ParseError> {
    let root: serde_yaml::Mapping =
        serde_yaml::from_str(source).map_err(|source| ParseError::Document { source })?;

    let mut reader = Reader::default();
    let mut spec_builder = Spec::builder();
    for (key, node) in &root {
        let name = reader.value_name(key)?;
        reader.declare(&name)?;
        spec_builder = spec_builder.add_value(reader.read_value(&name, node)?);
    }
    for hoisted in reader.hoisted {
        spec_builder = spec_builder.add_value(hoisted);
    }
    let spec = spec_builder.build();

    // Closure check against the complete set of declared names; forward and
    // self references are legal.
    for pending in &reader.pending {
        if !spec.declares(&pending.name) {
            return Err(SpecSyntaxError::new(
                format!(
                    "undeclared referenced type for \"{}\" : a referenced type should be declared in the same spec",
                    pending.path
                ),
                pending.path.clone(),
            )
            .into());
        }
    }

    debug!(values = spec.len(); "parsed spec document");
    Ok(spec)
}

#[derive(Debug, Default)]
struct Reader {
    context: Context,
    pending: Vec<PendingReference>,
    hoisted: Vec<ValueSpec>,
    declared: Vec<String>,
}

impl Reader {
    /// Validates a top-level key as a value type name.
    fn value_name(&self, key: &serde_yaml::Value) -> Result<String, SpecSyntaxError> {
        let rendered = match key.as_str() {
            Some(name) => name.to_string(),
            None => render_node(key),
        };
        if !identifier::is_valid(&rendered) {
            return Err(SpecSyntaxError::new(
                format!(
                    "malformed value name \"{rendered}\" : should be a valid identifier"
                ),
                rendered,
            ));
        }
        Ok(rendered)
    }

    /// Records a declared name, rejecting collisions. Collisions can only
    /// arise from synthesized nested names, since YAML itself rejects
    /// duplicate mapping keys.
    fn declare(&mut self, name: &str) -> Result<(), SpecSyntaxError> {
        if self.declared.iter().any(|declared| declared == name) {
            let path = self.context.path();
            return Err(SpecSyntaxError::new(
                format!("duplicate value name \"{name}\""),
                if path.is_empty() { name.to_string() } else { path },
            ));
        }
        self.declared.push(name.to_string());
        Ok(())
    }

    fn read_value(
        &mut self,
        name: &str,
        node: &serde_yaml::Value,
    ) -> Result<ValueSpec, SpecSyntaxError> {
        self.context.push(name);
        let result = match node {
            serde_yaml::Value::Null => Ok(ValueSpec::builder().name(name).build()),
            serde_yaml::Value::Mapping(properties) => {
                let mut builder = ValueSpec::builder().name(name);
                for property in self.read_properties(name, properties)? {
                    builder = builder.add_property(property);
                }
                Ok(builder.build())
            }
            other => Err(SpecSyntaxError::new(
                format!(
                    "unexpected specification for value \"{}\" : {}",
                    self.context.path(),
                    render_node(other)
                ),
                self.context.path(),
            )),
        };
        self.context.pop();
        result
    }

    /// Reads the properties of one (declared or hoisted) value type.
    /// The context already points at the owning value.
    fn read_properties(
        &mut self,
        owner: &str,
        properties: &serde_yaml::Mapping,
    ) -> Result<Vec<PropertySpec>, SpecSyntaxError> {
        let mut specs = Vec::with_capacity(properties.len());
        for (key, node) in properties {
            specs.push(self.read_property(owner, key, node)?);
        }
        Ok(specs)
    }

    fn read_property(
        &mut self,
        owner: &str,
        key: &serde_yaml::Value,
        node: &serde_yaml::Value,
    ) -> Result<PropertySpec, SpecSyntaxError> {
        let name = match key.as_str() {
            Some(name) => name.to_string(),
            None => render_node(key),
        };
        self.context.push(&name);
        let result = self.read_property_type(owner, &name, node);
        self.context.pop();
        let type_spec = result?;
        Ok(PropertySpec::builder()
            .name(name)
            .type_spec(type_spec)
            .build())
    }

    fn read_property_type(
        &mut self,
        owner: &str,
        name: &str,
        node: &serde_yaml::Value,
    ) -> Result<TypeSpec, SpecSyntaxError> {
        if !identifier::is_valid(name) {
            return Err(SpecSyntaxError::new(
                format!(
                    "malformed property name \"{}\" : should be a valid identifier",
                    self.context.path()
                ),
                self.context.path(),
            ));
        }
        match node {
            serde_yaml::Value::String(token) => {
                let (type_spec, pending) = resolve::resolve_token(token, &self.context)?;
                if let Some(pending) = pending {
                    self.pending.push(pending);
                }
                Ok(type_spec)
            }
            serde_yaml::Value::Mapping(nested) => self.hoist_nested(owner, name, nested),
            other => Err(SpecSyntaxError::new(
                format!(
                    "unexpected specification for property \"{}\" : {}",
                    self.context.path(),
                    render_node(other)
                ),
                self.context.path(),
            )),
        }
    }

    /// Hoists an anonymous nested value mapping into the spec under a
    /// synthesized name and types the property as a reference to it.
    fn hoist_nested(
        &mut self,
        owner: &str,
        name: &str,
        nested: &serde_yaml::Mapping,
    ) -> Result<TypeSpec, SpecSyntaxError> {
        let synthesized = format!("{owner}{}", identifier::capitalized_first(name));
        self.declare(&synthesized)?;
        let mut builder = ValueSpec::builder().name(&synthesized);
        for property in self.read_properties(&synthesized, nested)? {
            builder = builder.add_property(property);
        }
        self.hoisted.push(builder.build());
        Ok(TypeSpec::builder()
            .type_ref(synthesized)
            .type_kind(TypeKind::Nested)
            .build())
    }
}

/// Renders a YAML node for an error message.
fn render_node(node: &serde_yaml::Value) -> String {
    match node {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(value) => value.to_string(),
        serde_yaml::Value::Number(value) => value.to_string(),
        serde_yaml::Value::String(value) => value.clone(),
        serde_yaml::Value::Sequence(items) => {
            let rendered: Vec<String> = items.iter().map(render_node).collect();
            format!("[{}]", rendered.join(", "))
        }
        serde_yaml::Value::Mapping(_) => "{...}".to_string(),
        serde_yaml::Value::Tagged(tagged) => render_node(&tagged.value),
    }
}
