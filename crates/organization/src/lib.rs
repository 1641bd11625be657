//! Organization domain module (people and the identifiers that locate them).
//!
//! Pure, deterministic domain logic: no IO, no storage, no shared mutable state.
//! A [`Person`] composes a [`Name`], a [`SocialHandle`] and any [`Citizen`]
//! capability, delegating identity questions to the capability it holds.

pub mod citizen;
pub mod domestic;
pub mod employee;
pub mod name;
pub mod person;
pub mod social_handle;
pub mod union;

pub use citizen::{Citizen, Identifiable};
pub use domestic::{DOMESTIC_COUNTRY, SocialSecurityNumber};
pub use employee::Employee;
pub use name::Name;
pub use organization_core::{DomainError, DomainResult, ValueObject};
pub use person::Person;
pub use social_handle::{PROFILE_URL_BASE, SocialHandle};
pub use union::{UnionIdentifier, UnionIdentifierSource};
