//! Person entity.
//!
//! A person composes a [`Name`], a [`SocialHandle`] and a shared [`Citizen`]
//! capability. Identifier and country lookups are forwarded to the capability
//! and never stored twice.

use std::sync::Arc;

use organization_core::DomainResult;

use crate::citizen::{Citizen, Identifiable};
use crate::name::Name;
use crate::social_handle::SocialHandle;

#[derive(Debug, Clone)]
pub struct Person {
    name: Name,
    social_handle: SocialHandle,
    citizen: Arc<dyn Citizen>,
}

impl Person {
    /// Create a person with no social handle set.
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        citizen: impl Citizen + 'static,
    ) -> Self {
        Self::with_citizen(Name::new(first, last), Arc::new(citizen))
    }

    /// Create a person around an already shared capability.
    pub fn with_citizen(name: Name, citizen: Arc<dyn Citizen>) -> Self {
        Self {
            name,
            social_handle: SocialHandle::default(),
            citizen,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn full_name(&self) -> String {
        self.name.to_string()
    }

    pub fn citizen(&self) -> &dyn Citizen {
        self.citizen.as_ref()
    }

    pub fn social_handle(&self) -> &SocialHandle {
        &self.social_handle
    }

    /// Replace the social handle.
    ///
    /// An empty handle clears it. A non-empty handle without a leading `@` is
    /// rejected and the stored handle is left untouched.
    pub fn set_social_handle(&mut self, handle: impl Into<String>) -> DomainResult<()> {
        let handle = handle.into();
        match SocialHandle::parse(handle.as_str()) {
            Ok(parsed) => {
                self.social_handle = parsed;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    handle = %handle,
                    person = %self.name,
                    "rejected social handle: {}",
                    err.reason()
                );
                Err(err)
            }
        }
    }
}

impl Identifiable for Person {
    fn id(&self) -> String {
        format!("Person's identifier: {}", self.citizen.id())
    }
}

impl Citizen for Person {
    fn country(&self) -> &str {
        self.citizen.country()
    }
}
