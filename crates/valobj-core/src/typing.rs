//! Type classification tags and the primitive type vocabulary.
//!
//! Every property carries a [`TypeSpec`]: the declared type reference
//! string, a [`TypeKind`] tag telling where the type comes from, and a
//! [`Cardinality`] tag telling whether the property holds one value, an
//! ordered list or an unordered set. The tags are the only type information
//! backends may rely on; no target-syntax concern leaks into the model.

use serde::Serialize;

/// Classification of where a property type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    /// A token from the closed primitive vocabulary ([`PrimitiveType`]).
    Primitive,
    /// A reference to a value type declared in the same spec document.
    InSpecReference,
    /// A fully qualified name resolved outside the spec document.
    ExternalReference,
    /// An inline enumeration of named constants.
    Enumeration,
    /// An anonymous nested value type hoisted out of its declaring property.
    Nested,
}

impl TypeKind {
    /// Returns true if the type resolves to a generated value type
    /// (in-spec reference or hoisted nested type).
    pub fn is_value_object(self) -> bool {
        matches!(self, TypeKind::InSpecReference | TypeKind::Nested)
    }
}

/// Whether a property holds one value, an ordered list or an unordered set.
///
/// Cardinality is encoded in the declared type token (`list(...)`,
/// `set(...)`), which is the sole source of per-property cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cardinality {
    Single,
    List,
    Set,
}

/// The resolved type of one property.
///
/// Immutable once built. For [`TypeKind::Enumeration`] the reference string
/// holds the normalized comma-separated variant list; for
/// [`TypeKind::Nested`] it holds the synthesized name of the hoisted value
/// spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeSpec {
    type_ref: String,
    type_kind: TypeKind,
    cardinality: Cardinality,
}

impl TypeSpec {
    /// Starts building a type spec.
    pub fn builder() -> TypeSpecBuilder {
        TypeSpecBuilder::default()
    }

    /// The declared type reference string.
    pub fn type_ref(&self) -> &str {
        &self.type_ref
    }

    /// The type classification tag.
    pub fn type_kind(&self) -> TypeKind {
        self.type_kind
    }

    /// The cardinality tag.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// The enumeration variants for an [`TypeKind::Enumeration`] type.
    pub fn enum_values(&self) -> Vec<&str> {
        match self.type_kind {
            TypeKind::Enumeration => self.type_ref.split(',').collect(),
            _ => Vec::new(),
        }
    }
}

/// Builder for [`TypeSpec`].
#[derive(Debug, Default)]
pub struct TypeSpecBuilder {
    type_ref: String,
    type_kind: Option<TypeKind>,
    cardinality: Option<Cardinality>,
}

impl TypeSpecBuilder {
    /// Sets the type reference string.
    pub fn type_ref(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = type_ref.into();
        self
    }

    /// Sets the type kind tag.
    pub fn type_kind(mut self, type_kind: TypeKind) -> Self {
        self.type_kind = Some(type_kind);
        self
    }

    /// Sets the cardinality tag. Defaults to [`Cardinality::Single`].
    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = Some(cardinality);
        self
    }

    /// Builds the immutable type spec.
    pub fn build(self) -> TypeSpec {
        TypeSpec {
            type_ref: self.type_ref,
            type_kind: self.type_kind.unwrap_or(TypeKind::Primitive),
            cardinality: self.cardinality.unwrap_or(Cardinality::Single),
        }
    }
}

/// The closed vocabulary of primitive type tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    String,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Bytes,
    Date,
    Time,
    DateTime,
    TzDateTime,
}

impl PrimitiveType {
    /// All primitive types, in vocabulary order.
    pub const ALL: [PrimitiveType; 11] = [
        PrimitiveType::String,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Bool,
        PrimitiveType::Bytes,
        PrimitiveType::Date,
        PrimitiveType::Time,
        PrimitiveType::DateTime,
        PrimitiveType::TzDateTime,
    ];

    /// Resolves a declared token, or `None` when the token is not part of
    /// the vocabulary.
    pub fn from_token(token: &str) -> Option<PrimitiveType> {
        PrimitiveType::ALL
            .into_iter()
            .find(|primitive| primitive.token() == token)
    }

    /// The declared token form of this primitive.
    pub fn token(self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Bytes => "bytes",
            PrimitiveType::Date => "date",
            PrimitiveType::Time => "time",
            PrimitiveType::DateTime => "datetime",
            PrimitiveType::TzDateTime => "tz-datetime",
        }
    }

    /// The full vocabulary as a comma-separated list, for error messages.
    pub fn valid_tokens_spec() -> String {
        PrimitiveType::ALL
            .iter()
            .map(|primitive| primitive.token())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns true for the floating point primitives, which need bitwise
    /// handling in generated equality and hash code.
    pub fn is_float(self) -> bool {
        matches!(self, PrimitiveType::Float | PrimitiveType::Double)
    }
}
