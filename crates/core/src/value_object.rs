//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two
/// [`crate::Money`] amounts of the same number of cents are the same money,
/// and a recorded ledger entry never changes after the fact. To "modify" a
/// value object, build a new one.
///
/// The bounds keep value objects cheap to copy around, comparable by their
/// attributes, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
