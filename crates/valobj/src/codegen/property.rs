//! Per-property rendering model for the Rust backend.
//!
//! A [`PropertyModel`] precomputes every rendered fragment one property
//! contributes to its value type file: field declaration, accessor
//! signature and body, fluent setter, equality and hash expressions and
//! the string rendering arm. Float properties get bitwise equality and
//! hashing so the generated hash stays consistent with equality.

use valobj_core::identifier;
use valobj_core::spec::PropertySpec;
use valobj_core::typing::{Cardinality, PrimitiveType, TypeKind};

use crate::codegen::index::TypeIndex;
use crate::error::GenerateError;

/// Rust keywords that must be escaped as raw identifiers in generated
/// code.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Names that cannot be used even as raw identifiers.
const UNESCAPABLE: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Escapes a generated identifier, or fails when no legal spelling exists.
pub(crate) fn escape_identifier(name: &str, path: &str) -> Result<String, GenerateError> {
    if UNESCAPABLE.contains(&name) {
        return Err(GenerateError::ReservedName {
            path: path.to_string(),
        });
    }
    if KEYWORDS.contains(&name) {
        return Ok(format!("r#{name}"));
    }
    Ok(name.to_string())
}

/// Escapes a module name at its use sites. Module names derive from value
/// type names, which are never unescapable keywords once snake cased.
pub(crate) fn raw_module(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// One generated enumeration declaration.
#[derive(Debug, Clone)]
pub(crate) struct EnumModel {
    pub(crate) type_name: String,
    /// `(variant name, declared token)` pairs, e.g. `("Textbook", "TEXTBOOK")`.
    pub(crate) variants: Vec<(String, String)>,
}

/// Collection facts for a List or Set property.
#[derive(Debug, Clone)]
pub(crate) struct CollectionModel {
    pub(crate) wrapper: &'static str,
    pub(crate) element_type: String,
    pub(crate) collection_type: String,
}

/// Reference to another generated value type, for imports and
/// configuration-callback setters.
#[derive(Debug, Clone)]
pub(crate) struct ValueRef {
    pub(crate) module: String,
    pub(crate) type_name: String,
    pub(crate) builder_name: String,
}

/// Everything one property contributes to its generated file.
#[derive(Debug, Clone)]
pub(crate) struct PropertyModel {
    /// Name as declared in the document; drives string rendering.
    pub(crate) declared_name: String,
    /// Snake case name before raw-identifier escaping, for composing
    /// derived names (`with_<name>`, `<name>_with`).
    pub(crate) snake_name: String,
    /// Escaped name used as field, accessor and setter identifier.
    pub(crate) rust_name: String,
    pub(crate) field_type: String,
    pub(crate) accessor_ret: String,
    pub(crate) accessor_body: String,
    pub(crate) setter_param: String,
    pub(crate) setter_assign: String,
    pub(crate) eq_expr: String,
    pub(crate) hash_stmt: String,
    /// Render the value with `{:?}` instead of `{}` (bytes payloads).
    pub(crate) display_debug: bool,
    pub(crate) collection: Option<CollectionModel>,
    pub(crate) value_ref: Option<ValueRef>,
    pub(crate) enum_model: Option<EnumModel>,
}

/// The resolved base type of a property, before cardinality is applied.
enum BaseType {
    Primitive(PrimitiveType),
    External(String),
    Value(ValueRef),
    Enum(EnumModel),
}

pub(crate) fn build_model(
    owner_name: &str,
    owner_type_name: &str,
    property: &PropertySpec,
    index: &TypeIndex,
) -> Result<PropertyModel, GenerateError> {
    let path = format!("{owner_name}/{}", property.name());
    let snake_name = identifier::snake(property.name());
    let rust_name = escape_identifier(&snake_name, &path)?;
    // These would collide with the generated builder entry points.
    if matches!(snake_name.as_str(), "build" | "from_value") {
        return Err(GenerateError::ReservedName { path });
    }
    let type_spec = property.type_spec();

    let base = match type_spec.type_kind() {
        TypeKind::Primitive => match PrimitiveType::from_token(type_spec.type_ref()) {
            Some(primitive) => BaseType::Primitive(primitive),
            None => {
                return Err(GenerateError::UnresolvedReference {
                    owner: owner_name.to_string(),
                    name: type_spec.type_ref().to_string(),
                });
            }
        },
        TypeKind::ExternalReference => {
            BaseType::External(type_spec.type_ref().replace('.', "::"))
        }
        TypeKind::InSpecReference | TypeKind::Nested => {
            let entry = index.get(type_spec.type_ref()).ok_or_else(|| {
                GenerateError::UnresolvedReference {
                    owner: owner_name.to_string(),
                    name: type_spec.type_ref().to_string(),
                }
            })?;
            BaseType::Value(ValueRef {
                module: entry.module.clone(),
                type_name: entry.type_name.clone(),
                builder_name: entry.builder_name.clone(),
            })
        }
        TypeKind::Enumeration => {
            let type_name = format!(
                "{owner_type_name}{}",
                identifier::upper_camel(property.name())
            );
            let variants = type_spec
                .enum_values()
                .iter()
                .map(|declared| (identifier::upper_camel(declared), declared.to_string()))
                .collect();
            BaseType::Enum(EnumModel {
                type_name,
                variants,
            })
        }
    };

    let element_type = match &base {
        BaseType::Primitive(primitive) => primitive_rust_type(*primitive).to_string(),
        BaseType::External(rust_path) => rust_path.clone(),
        BaseType::Value(value_ref) => value_ref.type_name.clone(),
        BaseType::Enum(enum_model) => enum_model.type_name.clone(),
    };

    let float_suffix = match &base {
        BaseType::Primitive(PrimitiveType::Float) => Some("f32"),
        BaseType::Primitive(PrimitiveType::Double) => Some("f64"),
        _ => None,
    };
    let display_debug = matches!(&base, BaseType::Primitive(PrimitiveType::Bytes));

    let model = match type_spec.cardinality() {
        Cardinality::Single => {
            let (accessor_ret, accessor_body, setter_param, setter_assign, field_type) =
                match &base {
                    BaseType::Primitive(PrimitiveType::String) => (
                        "Option<&str>".to_string(),
                        format!("self.{rust_name}.as_deref()"),
                        "impl Into<String>".to_string(),
                        "Some(value.into())".to_string(),
                        "Option<String>".to_string(),
                    ),
                    BaseType::Primitive(PrimitiveType::Bytes) => (
                        "Option<&[u8]>".to_string(),
                        format!("self.{rust_name}.as_deref()"),
                        "Vec<u8>".to_string(),
                        "Some(value)".to_string(),
                        "Option<Vec<u8>>".to_string(),
                    ),
                    BaseType::Primitive(_) | BaseType::Enum(_) => (
                        format!("Option<{element_type}>"),
                        format!("self.{rust_name}"),
                        element_type.clone(),
                        "Some(value)".to_string(),
                        format!("Option<{element_type}>"),
                    ),
                    BaseType::External(_) => (
                        format!("Option<&{element_type}>"),
                        format!("self.{rust_name}.as_ref()"),
                        element_type.clone(),
                        "Some(value)".to_string(),
                        format!("Option<{element_type}>"),
                    ),
                    BaseType::Value(_) => (
                        format!("Option<&{element_type}>"),
                        format!("self.{rust_name}.as_deref()"),
                        element_type.clone(),
                        "Some(Box::new(value))".to_string(),
                        format!("Option<Box<{element_type}>>"),
                    ),
                };

            let eq_expr = match float_suffix {
                Some(float) => format!(
                    "self.{rust_name}.map({float}::to_bits) == other.{rust_name}.map({float}::to_bits)"
                ),
                None => format!("self.{rust_name} == other.{rust_name}"),
            };
            let hash_stmt = match float_suffix {
                Some(float) => format!("self.{rust_name}.map({float}::to_bits).hash(state);"),
                None => format!("self.{rust_name}.hash(state);"),
            };

            PropertyModel {
                declared_name: property.name().to_string(),
                snake_name,
                rust_name,
                field_type,
                accessor_ret,
                accessor_body,
                setter_param,
                setter_assign,
                eq_expr,
                hash_stmt,
                display_debug,
                collection: None,
                value_ref: base_value_ref(&base),
                enum_model: base_enum(&base),
            }
        }
        Cardinality::List | Cardinality::Set => {
            let wrapper = match type_spec.cardinality() {
                Cardinality::List => "ValueList",
                _ => "ValueSet",
            };
            let collection_type = format!("{wrapper}<{element_type}>");
            let eq_expr = format!("self.{rust_name} == other.{rust_name}");
            let hash_stmt = match (float_suffix, wrapper) {
                (Some(_), "ValueList") => format!(
                    "self.{rust_name}.as_ref().map(|c| c.iter().map(|e| e.to_bits()).collect::<Vec<_>>()).hash(state);"
                ),
                (Some(_), _) => format!(
                    "self.{rust_name}.as_ref().map(|c| {{ let mut bits: Vec<_> = c.iter().map(|e| e.to_bits()).collect(); bits.sort_unstable(); bits }}).hash(state);"
                ),
                (None, _) => format!("self.{rust_name}.hash(state);"),
            };

            PropertyModel {
                declared_name: property.name().to_string(),
                snake_name,
                rust_name: rust_name.clone(),
                field_type: format!("Option<{collection_type}>"),
                accessor_ret: format!("Option<&{collection_type}>"),
                accessor_body: format!("self.{rust_name}.as_ref()"),
                setter_param: format!("impl Into<{collection_type}>"),
                setter_assign: "Some(value.into())".to_string(),
                eq_expr,
                hash_stmt,
                display_debug,
                collection: Some(CollectionModel {
                    wrapper,
                    element_type,
                    collection_type,
                }),
                value_ref: base_value_ref(&base),
                enum_model: base_enum(&base),
            }
        }
    };
    Ok(model)
}

fn base_value_ref(base: &BaseType) -> Option<ValueRef> {
    match base {
        BaseType::Value(value_ref) => Some(value_ref.clone()),
        _ => None,
    }
}

fn base_enum(base: &BaseType) -> Option<EnumModel> {
    match base {
        BaseType::Enum(enum_model) => Some(enum_model.clone()),
        _ => None,
    }
}

/// Target type for each primitive token.
fn primitive_rust_type(primitive: PrimitiveType) -> &'static str {
    match primitive {
        PrimitiveType::String => "String",
        PrimitiveType::Int => "i32",
        PrimitiveType::Long => "i64",
        PrimitiveType::Float => "f32",
        PrimitiveType::Double => "f64",
        PrimitiveType::Bool => "bool",
        PrimitiveType::Bytes => "Vec<u8>",
        PrimitiveType::Date => "chrono::NaiveDate",
        PrimitiveType::Time => "chrono::NaiveTime",
        PrimitiveType::DateTime => "chrono::NaiveDateTime",
        PrimitiveType::TzDateTime => "chrono::DateTime<chrono::Utc>",
    }
}
