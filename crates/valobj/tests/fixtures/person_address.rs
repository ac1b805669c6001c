// Generated by valobj; do not edit.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Read accessors for the `personAddress` value type.
pub trait PersonAddressValue {
    fn street(&self) -> Option<&str>;
    fn city(&self) -> Option<&str>;
}

/// Immutable value, assembled through [`PersonAddressBuilder`].
#[derive(Debug, Clone)]
pub struct PersonAddress {
    street: Option<String>,
    city: Option<String>,
}

impl PersonAddress {
    /// A fresh builder with no property set.
    pub fn builder() -> PersonAddressBuilder {
        PersonAddressBuilder::default()
    }

    /// Applies `change` to a builder seeded from this value and builds the
    /// result, committing every change in one new snapshot.
    pub fn changed(&self, change: impl FnOnce(PersonAddressBuilder) -> PersonAddressBuilder) -> PersonAddress {
        change(PersonAddressBuilder::from_value(self)).build()
    }

    /// A copy of this value with only `street` replaced.
    pub fn with_street(&self, value: impl Into<String>) -> PersonAddress {
        PersonAddressBuilder::from_value(self).street(value).build()
    }

    /// A copy of this value with only `city` replaced.
    pub fn with_city(&self, value: impl Into<String>) -> PersonAddress {
        PersonAddressBuilder::from_value(self).city(value).build()
    }
}

impl PersonAddressValue for PersonAddress {
    fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

impl PartialEq for PersonAddress {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street
            && self.city == other.city
    }
}

impl Eq for PersonAddress {}

impl Hash for PersonAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.street.hash(state);
        self.city.hash(state);
    }
}

impl fmt::Display for PersonAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonAddress{{")?;
        match &self.street {
            Some(value) => write!(f, "street={value}")?,
            None => write!(f, "street=null")?,
        }
        write!(f, ", ")?;
        match &self.city {
            Some(value) => write!(f, "city={value}")?,
            None => write!(f, "city=null")?,
        }
        write!(f, "}}")
    }
}

/// Mutable staging builder for [`PersonAddress`] values.
///
/// `build` may be called repeatedly; every call produces an independent
/// snapshot of the current state.
#[derive(Debug, Default)]
pub struct PersonAddressBuilder {
    street: Option<String>,
    city: Option<String>,
}

impl PersonAddressBuilder {
    /// A builder seeded with every property of `value`.
    pub fn from_value(value: &PersonAddress) -> PersonAddressBuilder {
        PersonAddressBuilder {
            street: value.street.clone(),
            city: value.city.clone(),
        }
    }

    /// Sets `street`.
    pub fn street(mut self, value: impl Into<String>) -> Self {
        self.street = Some(value.into());
        self
    }

    /// Sets `city`.
    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    /// Builds an independent immutable snapshot of the current state.
    pub fn build(&self) -> PersonAddress {
        PersonAddress {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }
}
