//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A person's
/// name or an issued identifier is a value object; the person holding them
/// is not.
///
/// Equality is also bound to the type: two structurally identical types
/// (same field names and layout) never compare equal to each other, because
/// `PartialEq` is implemented per type.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Name {
///     first: String,
///     last: String,
/// }
///
/// impl ValueObject for Name {}
///
/// let a = Name { first: "John".into(), last: "Smith".into() };
/// let b = Name { first: "John".into(), last: "Smith".into() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
