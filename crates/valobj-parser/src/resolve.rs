//! Type token resolution.
//!
//! A declared type token is classified by an ordered chain of matchers,
//! each returning a tagged result or [`TokenMatch::NoMatch`]:
//!
//! 1. cardinality wrapper: `list(inner)` / `set(inner)` (wrappers do not
//!    nest),
//! 2. enumeration: `enum(A, B, C)`,
//! 3. external fully qualified name: identifier segments joined by `.`,
//!    at least one separator,
//! 4. in-spec reference: `$` followed by a declared value type name,
//! 5. the closed primitive vocabulary.
//!
//! In-spec references are only recorded here; the closure check against the
//! complete set of declared names happens after the whole document has been
//! parsed, so forward and self references are legal.

use valobj_core::identifier;
use valobj_core::typing::{Cardinality, PrimitiveType, TypeKind, TypeSpec};

use crate::context::Context;
use crate::error::SpecSyntaxError;

/// An in-spec reference awaiting the whole-document closure check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingReference {
    pub(crate) name: String,
    pub(crate) path: String,
}

/// Tagged result of one classification matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenMatch {
    Enumeration(Vec<String>),
    External(String),
    InSpec(String),
    Primitive(PrimitiveType),
    NoMatch,
}

/// Resolves a declared type token into a [`TypeSpec`], together with the
/// pending reference to record when the token is an in-spec reference.
pub(crate) fn resolve_token(
    token: &str,
    context: &Context,
) -> Result<(TypeSpec, Option<PendingReference>), SpecSyntaxError> {
    let (cardinality, inner) = match cardinality_wrapper(token) {
        Some((cardinality, inner)) => {
            if cardinality_wrapper(inner).is_some() {
                return Err(SpecSyntaxError::new(
                    format!(
                        "nested cardinality for property \"{}\" : list/set cannot be nested",
                        context.path()
                    ),
                    context.path(),
                ));
            }
            (cardinality, inner)
        }
        None => (Cardinality::Single, token.trim()),
    };

    let matched = classify(inner);
    let (type_kind, type_ref, pending) = match matched {
        TokenMatch::Enumeration(variants) => {
            for variant in &variants {
                if !identifier::is_valid(variant) {
                    return Err(SpecSyntaxError::new(
                        format!(
                            "malformed enum value \"{}\" for property \"{}\" : should be a valid identifier",
                            variant,
                            context.path()
                        ),
                        context.path(),
                    ));
                }
            }
            (TypeKind::Enumeration, variants.join(","), None)
        }
        TokenMatch::External(name) => (TypeKind::ExternalReference, name, None),
        TokenMatch::InSpec(name) => {
            let pending = PendingReference {
                name: name.clone(),
                path: context.path(),
            };
            (TypeKind::InSpecReference, name, Some(pending))
        }
        TokenMatch::Primitive(primitive) => {
            (TypeKind::Primitive, primitive.token().to_string(), None)
        }
        TokenMatch::NoMatch => {
            return Err(SpecSyntaxError::new(
                format!(
                    "invalid type for property \"{}\" : {}, should be one of {}, an $in-spec reference or a fully qualified type name",
                    context.path(),
                    inner,
                    PrimitiveType::valid_tokens_spec()
                ),
                context.path(),
            ));
        }
    };

    let type_spec = TypeSpec::builder()
        .type_ref(type_ref)
        .type_kind(type_kind)
        .cardinality(cardinality)
        .build();
    Ok((type_spec, pending))
}

/// The ordered matcher chain for a cardinality-free token.
fn classify(token: &str) -> TokenMatch {
    for matcher in [
        match_enumeration,
        match_external,
        match_in_spec,
        match_primitive,
    ] {
        match matcher(token) {
            TokenMatch::NoMatch => continue,
            matched => return matched,
        }
    }
    TokenMatch::NoMatch
}

/// Detects a `list(...)` or `set(...)` cardinality wrapper.
fn cardinality_wrapper(token: &str) -> Option<(Cardinality, &str)> {
    let token = token.trim();
    for (prefix, cardinality) in [("list(", Cardinality::List), ("set(", Cardinality::Set)] {
        if let Some(inner) = token
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Some((cardinality, inner.trim()));
        }
    }
    None
}

fn match_enumeration(token: &str) -> TokenMatch {
    let Some(rest) = token.strip_prefix("enum(") else {
        return TokenMatch::NoMatch;
    };
    let Some(inner) = rest.strip_suffix(')') else {
        return TokenMatch::NoMatch;
    };
    let variants: Vec<String> = inner
        .split(',')
        .map(|variant| variant.trim().to_string())
        .collect();
    TokenMatch::Enumeration(variants)
}

fn match_external(token: &str) -> TokenMatch {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() >= 2 && segments.iter().all(|segment| identifier::is_valid(segment)) {
        TokenMatch::External(token.to_string())
    } else {
        TokenMatch::NoMatch
    }
}

fn match_in_spec(token: &str) -> TokenMatch {
    match token.strip_prefix('$') {
        Some(name) if identifier::is_valid(name) => TokenMatch::InSpec(name.to_string()),
        _ => TokenMatch::NoMatch,
    }
}

fn match_primitive(token: &str) -> TokenMatch {
    match PrimitiveType::from_token(token) {
        Some(primitive) => TokenMatch::Primitive(primitive),
        None => TokenMatch::NoMatch,
    }
}
