// Generated by valobj; do not edit.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Read accessors for the `marker` value type.
pub trait MarkerValue {}

/// Immutable value, assembled through [`MarkerBuilder`].
#[derive(Debug, Clone)]
pub struct Marker {}

impl Marker {
    /// A fresh builder with no property set.
    pub fn builder() -> MarkerBuilder {
        MarkerBuilder::default()
    }

    /// Applies `change` to a builder seeded from this value and builds the
    /// result, committing every change in one new snapshot.
    pub fn changed(&self, change: impl FnOnce(MarkerBuilder) -> MarkerBuilder) -> Marker {
        change(MarkerBuilder::from_value(self)).build()
    }
}

impl MarkerValue for Marker {}

impl PartialEq for Marker {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker{{}}")
    }
}

/// Mutable staging builder for [`Marker`] values.
///
/// `build` may be called repeatedly; every call produces an independent
/// snapshot of the current state.
#[derive(Debug, Default)]
pub struct MarkerBuilder {}

impl MarkerBuilder {
    /// A builder seeded with every property of `value`.
    pub fn from_value(_value: &Marker) -> MarkerBuilder {
        MarkerBuilder::default()
    }

    /// Builds an independent immutable snapshot of the current state.
    pub fn build(&self) -> Marker {
        Marker {}
    }
}
