//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: a `Price` of
/// 39.99 is interchangeable with any other `Price` of 39.99. To "modify" one,
/// build a new value.
///
/// - **Value Object**: no identity (prices, weights, shared book attributes)
/// - **Entity**: has identity (a book, identified by its ISBN)
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Weight(f64);
///
/// impl ValueObject for Weight {}
///
/// assert_eq!(Weight(0.9), Weight(0.9));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
