//! Valobj Core Spec Model
//!
//! This crate provides the foundational types for the valobj value object
//! generator. It includes:
//!
//! - **Identifiers**: Identifier validation and case conversion rules
//!   ([`identifier`] module)
//! - **Spec**: The immutable spec model describing value types and their
//!   properties ([`spec`] module)
//! - **Typing**: Type classification tags and the primitive type vocabulary
//!   ([`typing`] module)
//!
//! The spec model is deliberately free of any target-syntax concerns: type
//! references are classified by [`typing::TypeKind`] and
//! [`typing::Cardinality`] tags only, so independent code generation
//! backends can share one parsed spec.

pub mod identifier;
pub mod spec;
pub mod typing;
