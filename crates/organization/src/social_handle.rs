//! Social media handle.
//!
//! A handle is either unset (empty) or set, in which case it starts with `@`.
//! There is no other state.

use serde::{Deserialize, Serialize};

use organization_core::{DomainError, DomainResult, ValueObject};

/// Prefix of the canonical profile URL; the handle without its `@` is appended.
pub const PROFILE_URL_BASE: &str = "https://www.twitter.com/";

const SIGIL: char = '@';

/// Validated social handle. `Default` is the unset handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SocialHandle(String);

impl SocialHandle {
    /// Validate `value` as a handle.
    ///
    /// Empty input is accepted and means "no handle". Anything else must
    /// start with `@`.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() || value.starts_with(SIGIL) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation("social handle must start with @"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_set(&self) -> bool {
        !self.0.is_empty()
    }

    /// Canonical profile URL: one leading `@` stripped, then appended to
    /// [`PROFILE_URL_BASE`].
    pub fn profile_url(&self) -> String {
        let cleaned = self.0.strip_prefix(SIGIL).unwrap_or(&self.0);
        format!("{PROFILE_URL_BASE}{cleaned}")
    }
}

impl ValueObject for SocialHandle {}

impl TryFrom<String> for SocialHandle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SocialHandle> for String {
    fn from(value: SocialHandle) -> Self {
        value.0
    }
}

impl core::fmt::Display for SocialHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn profile_url_strips_sigil() {
        let handle = SocialHandle::parse("@helloworld").unwrap();
        assert_eq!(handle.profile_url(), "https://www.twitter.com/helloworld");
    }

    #[test]
    fn profile_url_strips_only_one_sigil() {
        let handle = SocialHandle::parse("@@double").unwrap();
        assert_eq!(handle.profile_url(), "https://www.twitter.com/@double");
    }

    #[test]
    fn empty_is_unset() {
        let handle = SocialHandle::parse("").unwrap();
        assert!(!handle.is_set());
        assert_eq!(handle, SocialHandle::default());
    }

    #[test]
    fn missing_sigil_is_a_validation_error() {
        let err = SocialHandle::parse("helloworld").unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("social handle must start with @".to_string())
        );
    }

    #[test]
    fn sigil_must_be_the_first_character() {
        assert!(SocialHandle::parse(" @leading_space").is_err());
        assert!(SocialHandle::parse("\t@tab").is_err());
        assert!(SocialHandle::parse("ñandú").is_err());
        assert!(SocialHandle::parse("name@example").is_err());
    }

    #[test]
    fn deserialization_enforces_the_sigil() {
        let ok: SocialHandle = serde_json::from_str("\"@rustlang\"").unwrap();
        assert_eq!(ok.as_str(), "@rustlang");

        assert!(serde_json::from_str::<SocialHandle>("\"rustlang\"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"@rustlang\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: non-empty input without a leading `@` is rejected.
        #[test]
        fn rejects_without_sigil(value in "[^@].{0,30}") {
            prop_assert!(SocialHandle::parse(value).is_err());
        }

        /// Property: input with a leading `@` is kept verbatim.
        #[test]
        fn accepts_with_sigil(value in "@[A-Za-z0-9_]{0,30}") {
            let handle = SocialHandle::parse(value.clone()).unwrap();
            prop_assert_eq!(handle.as_str(), value.as_str());
            prop_assert_eq!(handle.to_string(), value);
        }
    }
}
