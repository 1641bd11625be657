//! Identity capabilities.

use crate::union::UnionIdentifier;

/// Anything that can name itself with an identifier string.
pub trait Identifiable {
    fn id(&self) -> String;
}

/// An identifier that also knows which country issued it.
///
/// Callers that only need "who is this and where are they from" depend on
/// this trait and never on a concrete identifier scheme.
pub trait Citizen: Identifiable + core::fmt::Debug + Send + Sync {
    /// Issuing country.
    fn country(&self) -> &str;

    /// The union-wide identifier behind this capability, if that is what it is.
    fn as_union_identifier(&self) -> Option<&UnionIdentifier> {
        None
    }
}
