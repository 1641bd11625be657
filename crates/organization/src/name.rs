use serde::{Deserialize, Serialize};

use organization_core::ValueObject;

/// A person's first and last name. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    first: String,
    last: String,
}

impl Name {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }
}

impl ValueObject for Name {}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_fields_compare_equal() {
        assert_eq!(Name::new("John", "Smith"), Name::new("John", "Smith"));
        assert_ne!(Name::new("John", "Smith"), Name::new("Smith", "John"));
    }

    #[test]
    fn displays_first_then_last() {
        let name = Name::new("Ada", "Lovelace");
        assert_eq!(name.to_string(), "Ada Lovelace");
        assert_eq!(name.first(), "Ada");
        assert_eq!(name.last(), "Lovelace");
    }
}
