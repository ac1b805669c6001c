// Generated by valobj; do not edit.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::collections::{ValueList, ValueSet};
use super::person_address::{PersonAddress, PersonAddressBuilder};

/// Enumerated values for the `role` property of [`Person`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonRole {
    Admin,
    Guest,
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonRole::Admin => f.write_str("ADMIN"),
            PersonRole::Guest => f.write_str("GUEST"),
        }
    }
}

/// Read accessors for the `person` value type.
pub trait PersonValue {
    fn name(&self) -> Option<&str>;
    fn age(&self) -> Option<i32>;
    fn score(&self) -> Option<f64>;
    fn address(&self) -> Option<&PersonAddress>;
    fn nicknames(&self) -> Option<&ValueList<String>>;
    fn ratings(&self) -> Option<&ValueSet<i32>>;
    fn role(&self) -> Option<PersonRole>;
    fn friends(&self) -> Option<&ValueList<Person>>;
}

/// Immutable value, assembled through [`PersonBuilder`].
#[derive(Debug, Clone)]
pub struct Person {
    name: Option<String>,
    age: Option<i32>,
    score: Option<f64>,
    address: Option<Box<PersonAddress>>,
    nicknames: Option<ValueList<String>>,
    ratings: Option<ValueSet<i32>>,
    role: Option<PersonRole>,
    friends: Option<ValueList<Person>>,
}

impl Person {
    /// A fresh builder with no property set.
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Applies `change` to a builder seeded from this value and builds the
    /// result, committing every change in one new snapshot.
    pub fn changed(&self, change: impl FnOnce(PersonBuilder) -> PersonBuilder) -> Person {
        change(PersonBuilder::from_value(self)).build()
    }

    /// A copy of this value with only `name` replaced.
    pub fn with_name(&self, value: impl Into<String>) -> Person {
        PersonBuilder::from_value(self).name(value).build()
    }

    /// A copy of this value with only `age` replaced.
    pub fn with_age(&self, value: i32) -> Person {
        PersonBuilder::from_value(self).age(value).build()
    }

    /// A copy of this value with only `score` replaced.
    pub fn with_score(&self, value: f64) -> Person {
        PersonBuilder::from_value(self).score(value).build()
    }

    /// A copy of this value with only `address` replaced.
    pub fn with_address(&self, value: PersonAddress) -> Person {
        PersonBuilder::from_value(self).address(value).build()
    }

    /// A copy of this value with only `nicknames` replaced.
    pub fn with_nicknames(&self, value: impl Into<ValueList<String>>) -> Person {
        PersonBuilder::from_value(self).nicknames(value).build()
    }

    /// A copy of this value with `nicknames` replaced by `transform` applied
    /// to the current collection (empty when unset).
    pub fn with_nicknames_changed(&self, transform: impl FnOnce(&ValueList<String>) -> ValueList<String>) -> Person {
        let current = self.nicknames.clone().unwrap_or_default();
        PersonBuilder::from_value(self).nicknames(transform(&current)).build()
    }

    /// A copy of this value with only `ratings` replaced.
    pub fn with_ratings(&self, value: impl Into<ValueSet<i32>>) -> Person {
        PersonBuilder::from_value(self).ratings(value).build()
    }

    /// A copy of this value with `ratings` replaced by `transform` applied
    /// to the current collection (empty when unset).
    pub fn with_ratings_changed(&self, transform: impl FnOnce(&ValueSet<i32>) -> ValueSet<i32>) -> Person {
        let current = self.ratings.clone().unwrap_or_default();
        PersonBuilder::from_value(self).ratings(transform(&current)).build()
    }

    /// A copy of this value with only `role` replaced.
    pub fn with_role(&self, value: PersonRole) -> Person {
        PersonBuilder::from_value(self).role(value).build()
    }

    /// A copy of this value with only `friends` replaced.
    pub fn with_friends(&self, value: impl Into<ValueList<Person>>) -> Person {
        PersonBuilder::from_value(self).friends(value).build()
    }

    /// A copy of this value with `friends` replaced by `transform` applied
    /// to the current collection (empty when unset).
    pub fn with_friends_changed(&self, transform: impl FnOnce(&ValueList<Person>) -> ValueList<Person>) -> Person {
        let current = self.friends.clone().unwrap_or_default();
        PersonBuilder::from_value(self).friends(transform(&current)).build()
    }
}

impl PersonValue for Person {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn age(&self) -> Option<i32> {
        self.age
    }

    fn score(&self) -> Option<f64> {
        self.score
    }

    fn address(&self) -> Option<&PersonAddress> {
        self.address.as_deref()
    }

    fn nicknames(&self) -> Option<&ValueList<String>> {
        self.nicknames.as_ref()
    }

    fn ratings(&self) -> Option<&ValueSet<i32>> {
        self.ratings.as_ref()
    }

    fn role(&self) -> Option<PersonRole> {
        self.role
    }

    fn friends(&self) -> Option<&ValueList<Person>> {
        self.friends.as_ref()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.age == other.age
            && self.score.map(f64::to_bits) == other.score.map(f64::to_bits)
            && self.address == other.address
            && self.nicknames == other.nicknames
            && self.ratings == other.ratings
            && self.role == other.role
            && self.friends == other.friends
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.age.hash(state);
        self.score.map(f64::to_bits).hash(state);
        self.address.hash(state);
        self.nicknames.hash(state);
        self.ratings.hash(state);
        self.role.hash(state);
        self.friends.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{")?;
        match &self.name {
            Some(value) => write!(f, "name={value}")?,
            None => write!(f, "name=null")?,
        }
        write!(f, ", ")?;
        match &self.age {
            Some(value) => write!(f, "age={value}")?,
            None => write!(f, "age=null")?,
        }
        write!(f, ", ")?;
        match &self.score {
            Some(value) => write!(f, "score={value}")?,
            None => write!(f, "score=null")?,
        }
        write!(f, ", ")?;
        match &self.address {
            Some(value) => write!(f, "address={value}")?,
            None => write!(f, "address=null")?,
        }
        write!(f, ", ")?;
        match &self.nicknames {
            Some(value) => write!(f, "nicknames={value}")?,
            None => write!(f, "nicknames=null")?,
        }
        write!(f, ", ")?;
        match &self.ratings {
            Some(value) => write!(f, "ratings={value}")?,
            None => write!(f, "ratings=null")?,
        }
        write!(f, ", ")?;
        match &self.role {
            Some(value) => write!(f, "role={value}")?,
            None => write!(f, "role=null")?,
        }
        write!(f, ", ")?;
        match &self.friends {
            Some(value) => write!(f, "friends={value}")?,
            None => write!(f, "friends=null")?,
        }
        write!(f, "}}")
    }
}

/// Mutable staging builder for [`Person`] values.
///
/// `build` may be called repeatedly; every call produces an independent
/// snapshot of the current state.
#[derive(Debug, Default)]
pub struct PersonBuilder {
    name: Option<String>,
    age: Option<i32>,
    score: Option<f64>,
    address: Option<Box<PersonAddress>>,
    nicknames: Option<ValueList<String>>,
    ratings: Option<ValueSet<i32>>,
    role: Option<PersonRole>,
    friends: Option<ValueList<Person>>,
}

impl PersonBuilder {
    /// A builder seeded with every property of `value`.
    pub fn from_value(value: &Person) -> PersonBuilder {
        PersonBuilder {
            name: value.name.clone(),
            age: value.age.clone(),
            score: value.score.clone(),
            address: value.address.clone(),
            nicknames: value.nicknames.clone(),
            ratings: value.ratings.clone(),
            role: value.role.clone(),
            friends: value.friends.clone(),
        }
    }

    /// Sets `name`.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Sets `age`.
    pub fn age(mut self, value: i32) -> Self {
        self.age = Some(value);
        self
    }

    /// Sets `score`.
    pub fn score(mut self, value: f64) -> Self {
        self.score = Some(value);
        self
    }

    /// Sets `address`.
    pub fn address(mut self, value: PersonAddress) -> Self {
        self.address = Some(Box::new(value));
        self
    }

    /// Configures `address` with a fresh [`PersonAddressBuilder`].
    pub fn address_with(self, config: impl FnOnce(PersonAddressBuilder) -> PersonAddressBuilder) -> Self {
        self.address(config(PersonAddress::builder()).build())
    }

    /// Sets `nicknames`.
    pub fn nicknames(mut self, value: impl Into<ValueList<String>>) -> Self {
        self.nicknames = Some(value.into());
        self
    }

    /// Sets `ratings`.
    pub fn ratings(mut self, value: impl Into<ValueSet<i32>>) -> Self {
        self.ratings = Some(value.into());
        self
    }

    /// Sets `role`.
    pub fn role(mut self, value: PersonRole) -> Self {
        self.role = Some(value);
        self
    }

    /// Sets `friends`.
    pub fn friends(mut self, value: impl Into<ValueList<Person>>) -> Self {
        self.friends = Some(value.into());
        self
    }

    /// Configures `friends` with one fresh [`PersonBuilder`] per element.
    pub fn friends_with<F>(self, configs: impl IntoIterator<Item = F>) -> Self
    where
        F: FnOnce(PersonBuilder) -> PersonBuilder,
    {
        let elements: Vec<Person> = configs
            .into_iter()
            .map(|config| config(Person::builder()).build())
            .collect();
        self.friends(elements)
    }

    /// Builds an independent immutable snapshot of the current state.
    pub fn build(&self) -> Person {
        Person {
            name: self.name.clone(),
            age: self.age.clone(),
            score: self.score.clone(),
            address: self.address.clone(),
            nicknames: self.nicknames.clone(),
            ratings: self.ratings.clone(),
            role: self.role.clone(),
            friends: self.friends.clone(),
        }
    }
}
