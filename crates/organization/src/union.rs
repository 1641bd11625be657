//! Union-wide identifier scheme.
//!
//! A union identifier carries its own issuing country. It can be built from
//! text, from an integer, from an identifier that already exists, or from a
//! person who already holds one. The accepted inputs form the closed
//! [`UnionIdentifierSource`] enum, so anything else fails to compile.

use serde::{Deserialize, Serialize};

use organization_core::ValueObject;

use crate::citizen::{Citizen, Identifiable};
use crate::person::Person;

/// Identifier issued under the union-wide scheme.
///
/// `Default` is the empty identifier (empty id, empty country).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnionIdentifier {
    id: String,
    country: String,
}

/// Inputs a [`UnionIdentifier`] can be built from.
#[derive(Debug, Clone)]
pub enum UnionIdentifierSource<'a> {
    /// Identifier text, used verbatim.
    Text(String),
    /// Numeric identifier, already rendered in decimal form.
    Number(String),
    /// An identifier that already exists; copied unchanged.
    Existing(UnionIdentifier),
    /// A person whose identifier is extracted if it is a union identifier.
    Person(&'a Person),
}

impl UnionIdentifier {
    /// Build a union identifier.
    ///
    /// `country` only applies to text and numeric sources. An existing
    /// identifier keeps its own country, and a person-sourced one keeps the
    /// person's. A person that does not hold a union identifier yields the
    /// empty identifier.
    pub fn new<'a>(
        source: impl Into<UnionIdentifierSource<'a>>,
        country: impl Into<String>,
    ) -> Self {
        let country = country.into();
        match source.into() {
            UnionIdentifierSource::Text(id) => Self { id, country },
            UnionIdentifierSource::Number(id) => Self { id, country },
            UnionIdentifierSource::Existing(existing) => {
                if existing.country != country {
                    tracing::debug!(
                        id = %existing.id,
                        kept = %existing.country,
                        ignored = %country,
                        "reusing union identifier; supplied country ignored"
                    );
                }
                existing
            }
            UnionIdentifierSource::Person(person) => match person.citizen().as_union_identifier() {
                Some(existing) => existing.clone(),
                None => {
                    tracing::debug!(
                        country = %person.citizen().country(),
                        "person does not hold a union identifier; using empty identifier"
                    );
                    Self::default()
                }
            },
        }
    }

    /// Whether this is the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.country.is_empty()
    }
}

impl ValueObject for UnionIdentifier {}

impl Identifiable for UnionIdentifier {
    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Citizen for UnionIdentifier {
    fn country(&self) -> &str {
        &self.country
    }

    fn as_union_identifier(&self) -> Option<&UnionIdentifier> {
        Some(self)
    }
}

impl From<String> for UnionIdentifierSource<'_> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for UnionIdentifierSource<'_> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for UnionIdentifierSource<'_> {
                fn from(value: $t) -> Self {
                    Self::Number(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<UnionIdentifier> for UnionIdentifierSource<'_> {
    fn from(value: UnionIdentifier) -> Self {
        Self::Existing(value)
    }
}

impl From<&UnionIdentifier> for UnionIdentifierSource<'_> {
    fn from(value: &UnionIdentifier) -> Self {
        Self::Existing(value.clone())
    }
}

impl<'a> From<&'a Person> for UnionIdentifierSource<'a> {
    fn from(value: &'a Person) -> Self {
        Self::Person(value)
    }
}
