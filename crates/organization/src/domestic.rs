//! Domestic identifier scheme.

use serde::{Deserialize, Serialize};

use organization_core::ValueObject;

use crate::citizen::{Citizen, Identifiable};

/// Country reported by every domestic identifier.
pub const DOMESTIC_COUNTRY: &str = "USA";

/// Domestic identifier (social security number).
///
/// The value is opaque: no checksum or format rules are applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialSecurityNumber(String);

impl SocialSecurityNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SocialSecurityNumber {}

impl Identifiable for SocialSecurityNumber {
    fn id(&self) -> String {
        self.0.clone()
    }
}

impl Citizen for SocialSecurityNumber {
    fn country(&self) -> &str {
        DOMESTIC_COUNTRY
    }
}
