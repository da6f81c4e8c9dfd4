//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity — two instances with the same attribute
/// values are interchangeable. Implementors stay immutable: to "change" one,
/// build a new value. Quotes, rates and shipping details are value objects;
/// a catalog product (keyed by its id) is not.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
