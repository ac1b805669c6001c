//! Emission of one value type file: accessor contract, immutable
//! implementation, withers, bulk change and staging builder.

use std::collections::{BTreeMap, BTreeSet};

use valobj_core::spec::ValueSpec;

use crate::codegen::index::TypeIndex;
use crate::codegen::property::{self, PropertyModel};
use crate::codegen::writer::SourceWriter;
use crate::codegen::Artifact;
use crate::config::CodegenConfig;
use crate::error::GenerateError;

pub(crate) fn generate(
    value_spec: &ValueSpec,
    index: &TypeIndex,
    config: &CodegenConfig,
) -> Result<Artifact, GenerateError> {
    let entry = index
        .get(value_spec.name())
        .ok_or_else(|| GenerateError::UnresolvedReference {
            owner: value_spec.name().to_string(),
            name: value_spec.name().to_string(),
        })?;
    let type_name = entry.type_name.clone();
    let trait_name = entry.trait_name.clone();
    let builder_name = entry.builder_name.clone();
    let own_module = entry.module.clone();

    let models: Vec<PropertyModel> = value_spec
        .property_specs()
        .iter()
        .map(|property| property::build_model(value_spec.name(), &type_name, property, index))
        .collect::<Result<_, _>>()?;

    let mut w = SourceWriter::new();
    if config.header() {
        w.line("// Generated by valobj; do not edit.");
        w.blank();
    }
    write_imports(&mut w, &models, &own_module);
    write_enums(&mut w, &models, &type_name);
    write_contract(&mut w, &models, value_spec.name(), &trait_name);
    write_struct(&mut w, &models, &type_name, &builder_name);
    write_inherent(&mut w, &models, &type_name, &builder_name);
    write_contract_impl(&mut w, &models, &type_name, &trait_name);
    write_eq_hash(&mut w, &models, &type_name);
    write_display(&mut w, &models, &type_name);
    write_builder(&mut w, &models, &type_name, &builder_name);

    Ok(Artifact::new(
        format!("{}/{}.rs", config.root_module(), own_module),
        w.finish(),
    ))
}

fn write_imports(w: &mut SourceWriter, models: &[PropertyModel], own_module: &str) {
    w.line("use std::fmt;");
    w.line("use std::hash::{Hash, Hasher};");
    w.blank();

    // module -> imported names, deterministically ordered
    let mut imports: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for model in models {
        if let Some(collection) = &model.collection {
            imports
                .entry("collections".to_string())
                .or_default()
                .insert(collection.wrapper.to_string());
        }
        if let Some(value_ref) = &model.value_ref {
            if value_ref.module != own_module {
                let names = imports.entry(value_ref.module.clone()).or_default();
                names.insert(value_ref.type_name.clone());
                names.insert(value_ref.builder_name.clone());
            }
        }
    }
    if imports.is_empty() {
        return;
    }
    for (module, names) in &imports {
        let module = property::raw_module(module);
        if names.len() == 1 {
            let name = names.iter().next().map(String::as_str).unwrap_or_default();
            w.line(&format!("use super::{module}::{name};"));
        } else {
            let joined = names.iter().cloned().collect::<Vec<_>>().join(", ");
            w.line(&format!("use super::{module}::{{{joined}}};"));
        }
    }
    w.blank();
}

fn write_enums(w: &mut SourceWriter, models: &[PropertyModel], type_name: &str) {
    for model in models {
        let Some(enum_model) = &model.enum_model else {
            continue;
        };
        w.line(&format!(
            "/// Enumerated values for the `{}` property of [`{type_name}`].",
            model.declared_name
        ));
        w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
        w.open(&format!("pub enum {} {{", enum_model.type_name));
        for (variant, _) in &enum_model.variants {
            w.line(&format!("{variant},"));
        }
        w.close("}");
        w.blank();
        w.open(&format!("impl fmt::Display for {} {{", enum_model.type_name));
        w.open("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
        w.open("match self {");
        for (variant, declared) in &enum_model.variants {
            w.line(&format!(
                "{}::{variant} => f.write_str(\"{declared}\"),",
                enum_model.type_name
            ));
        }
        w.close("}");
        w.close("}");
        w.close("}");
        w.blank();
    }
}

fn write_contract(
    w: &mut SourceWriter,
    models: &[PropertyModel],
    declared_name: &str,
    trait_name: &str,
) {
    w.line(&format!(
        "/// Read accessors for the `{declared_name}` value type."
    ));
    if models.is_empty() {
        w.line(&format!("pub trait {trait_name} {{}}"));
        w.blank();
        return;
    }
    w.open(&format!("pub trait {trait_name} {{"));
    for model in models {
        w.line(&format!(
            "fn {}(&self) -> {};",
            model.rust_name, model.accessor_ret
        ));
    }
    w.close("}");
    w.blank();
}

fn write_struct(
    w: &mut SourceWriter,
    models: &[PropertyModel],
    type_name: &str,
    builder_name: &str,
) {
    w.line(&format!(
        "/// Immutable value, assembled through [`{builder_name}`]."
    ));
    w.line("#[derive(Debug, Clone)]");
    if models.is_empty() {
        w.line(&format!("pub struct {type_name} {{}}"));
        w.blank();
        return;
    }
    w.open(&format!("pub struct {type_name} {{"));
    for model in models {
        w.line(&format!("{}: {},", model.rust_name, model.field_type));
    }
    w.close("}");
    w.blank();
}

fn write_inherent(
    w: &mut SourceWriter,
    models: &[PropertyModel],
    type_name: &str,
    builder_name: &str,
) {
    w.open(&format!("impl {type_name} {{"));
    w.line("/// A fresh builder with no property set.");
    w.open(&format!("pub fn builder() -> {builder_name} {{"));
    w.line(&format!("{builder_name}::default()"));
    w.close("}");
    w.blank();
    w.line("/// Applies `change` to a builder seeded from this value and builds the");
    w.line("/// result, committing every change in one new snapshot.");
    w.open(&format!(
        "pub fn changed(&self, change: impl FnOnce({builder_name}) -> {builder_name}) -> {type_name} {{"
    ));
    w.line(&format!("change({builder_name}::from_value(self)).build()"));
    w.close("}");

    for model in models {
        w.blank();
        w.line(&format!(
            "/// A copy of this value with only `{}` replaced.",
            model.declared_name
        ));
        w.open(&format!(
            "pub fn with_{}(&self, value: {}) -> {type_name} {{",
            model.snake_name, model.setter_param
        ));
        w.line(&format!(
            "{builder_name}::from_value(self).{}(value).build()",
            model.rust_name
        ));
        w.close("}");

        if let Some(collection) = &model.collection {
            w.blank();
            w.line(&format!(
                "/// A copy of this value with `{}` replaced by `transform` applied",
                model.declared_name
            ));
            w.line("/// to the current collection (empty when unset).");
            w.open(&format!(
                "pub fn with_{}_changed(&self, transform: impl FnOnce(&{1}) -> {1}) -> {type_name} {{",
                model.snake_name, collection.collection_type
            ));
            w.line(&format!(
                "let current = self.{}.clone().unwrap_or_default();",
                model.rust_name
            ));
            w.line(&format!(
                "{builder_name}::from_value(self).{}(transform(&current)).build()",
                model.rust_name
            ));
            w.close("}");
        }
    }
    w.close("}");
    w.blank();
}

fn write_contract_impl(
    w: &mut SourceWriter,
    models: &[PropertyModel],
    type_name: &str,
    trait_name: &str,
) {
    if models.is_empty() {
        w.line(&format!("impl {trait_name} for {type_name} {{}}"));
        w.blank();
        return;
    }
    w.open(&format!("impl {trait_name} for {type_name} {{"));
    for (position, model) in models.iter().enumerate() {
        if position > 0 {
            w.blank();
        }
        w.open(&format!(
            "fn {}(&self) -> {} {{",
            model.rust_name, model.accessor_ret
        ));
        w.line(&model.accessor_body);
        w.close("}");
    }
    w.close("}");
    w.blank();
}

fn write_eq_hash(w: &mut SourceWriter, models: &[PropertyModel], type_name: &str) {
    w.open(&format!("impl PartialEq for {type_name} {{"));
    if models.is_empty() {
        w.line("fn eq(&self, _other: &Self) -> bool {");
        w.line("    true");
        w.line("}");
    } else {
        w.open("fn eq(&self, other: &Self) -> bool {");
        for (position, model) in models.iter().enumerate() {
            if position == 0 {
                w.line(&model.eq_expr);
            } else {
                w.line(&format!("    && {}", model.eq_expr));
            }
        }
        w.close("}");
    }
    w.close("}");
    w.blank();
    w.line(&format!("impl Eq for {type_name} {{}}"));
    w.blank();
    w.open(&format!("impl Hash for {type_name} {{"));
    if models.is_empty() {
        w.line("fn hash<H: Hasher>(&self, _state: &mut H) {}");
    } else {
        w.open("fn hash<H: Hasher>(&self, state: &mut H) {");
        for model in models {
            w.line(&model.hash_stmt);
        }
        w.close("}");
    }
    w.close("}");
    w.blank();
}

fn write_display(w: &mut SourceWriter, models: &[PropertyModel], type_name: &str) {
    w.open(&format!("impl fmt::Display for {type_name} {{"));
    if models.is_empty() {
        w.open("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
        w.line(&format!("write!(f, \"{type_name}{{{{}}}}\")"));
        w.close("}");
        w.close("}");
        w.blank();
        return;
    }
    w.open("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
    w.line(&format!("write!(f, \"{type_name}{{{{\")?;"));
    for (position, model) in models.iter().enumerate() {
        if position > 0 {
            w.line("write!(f, \", \")?;");
        }
        let value_format = if model.display_debug {
            "{value:?}"
        } else {
            "{value}"
        };
        w.open(&format!("match &self.{} {{", model.rust_name));
        w.line(&format!(
            "Some(value) => write!(f, \"{}={value_format}\")?,",
            model.declared_name
        ));
        w.line(&format!(
            "None => write!(f, \"{}=null\")?,",
            model.declared_name
        ));
        w.close("}");
    }
    w.line("write!(f, \"}}\")");
    w.close("}");
    w.close("}");
    w.blank();
}

fn write_builder(
    w: &mut SourceWriter,
    models: &[PropertyModel],
    type_name: &str,
    builder_name: &str,
) {
    w.line(&format!("/// Mutable staging builder for [`{type_name}`] values."));
    w.line("///");
    w.line("/// `build` may be called repeatedly; every call produces an independent");
    w.line("/// snapshot of the current state.");
    w.line("#[derive(Debug, Default)]");
    if models.is_empty() {
        w.line(&format!("pub struct {builder_name} {{}}"));
    } else {
        w.open(&format!("pub struct {builder_name} {{"));
        for model in models {
            w.line(&format!("{}: {},", model.rust_name, model.field_type));
        }
        w.close("}");
    }
    w.blank();

    w.open(&format!("impl {builder_name} {{"));
    w.line("/// A builder seeded with every property of `value`.");
    if models.is_empty() {
        w.open(&format!(
            "pub fn from_value(_value: &{type_name}) -> {builder_name} {{"
        ));
        w.line(&format!("{builder_name}::default()"));
        w.close("}");
    } else {
        w.open(&format!(
            "pub fn from_value(value: &{type_name}) -> {builder_name} {{"
        ));
        w.open(&format!("{builder_name} {{"));
        for model in models {
            w.line(&format!("{0}: value.{0}.clone(),", model.rust_name));
        }
        w.close("}");
        w.close("}");
    }

    for model in models {
        w.blank();
        w.line(&format!("/// Sets `{}`.", model.declared_name));
        w.open(&format!(
            "pub fn {}(mut self, value: {}) -> Self {{",
            model.rust_name, model.setter_param
        ));
        w.line(&format!("self.{} = {};", model.rust_name, model.setter_assign));
        w.line("self");
        w.close("}");

        if let Some(value_ref) = &model.value_ref {
            w.blank();
            match &model.collection {
                None => {
                    w.line(&format!(
                        "/// Configures `{}` with a fresh [`{}`].",
                        model.declared_name, value_ref.builder_name
                    ));
                    w.open(&format!(
                        "pub fn {}_with(self, config: impl FnOnce({1}) -> {1}) -> Self {{",
                        model.snake_name, value_ref.builder_name
                    ));
                    w.line(&format!(
                        "self.{}(config({}::builder()).build())",
                        model.rust_name, value_ref.type_name
                    ));
                    w.close("}");
                }
                Some(_) => {
                    w.line(&format!(
                        "/// Configures `{}` with one fresh [`{}`] per element.",
                        model.declared_name, value_ref.builder_name
                    ));
                    w.line(&format!(
                        "pub fn {}_with<F>(self, configs: impl IntoIterator<Item = F>) -> Self",
                        model.snake_name
                    ));
                    w.line("where");
                    w.line(&format!(
                        "    F: FnOnce({0}) -> {0},",
                        value_ref.builder_name
                    ));
                    w.open("{");
                    w.line(&format!(
                        "let elements: Vec<{}> = configs",
                        value_ref.type_name
                    ));
                    w.line("    .into_iter()");
                    w.line(&format!(
                        "    .map(|config| config({}::builder()).build())",
                        value_ref.type_name
                    ));
                    w.line("    .collect();");
                    w.line(&format!("self.{}(elements)", model.rust_name));
                    w.close("}");
                }
            }
        }
    }

    w.blank();
    w.line("/// Builds an independent immutable snapshot of the current state.");
    if models.is_empty() {
        w.open(&format!("pub fn build(&self) -> {type_name} {{"));
        w.line(&format!("{type_name} {{}}"));
        w.close("}");
    } else {
        w.open(&format!("pub fn build(&self) -> {type_name} {{"));
        w.open(&format!("{type_name} {{"));
        for model in models {
            w.line(&format!("{0}: self.{0}.clone(),", model.rust_name));
        }
        w.close("}");
        w.close("}");
    }
    w.close("}");
}
