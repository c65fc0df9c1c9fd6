//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Books are entities keyed by their ISBN: two stock entries for the same ISBN
/// refer to the same catalog entry even if their other attributes differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` carries the same identity as `self`.
    fn same_identity<E>(&self, other: &E) -> bool
    where
        E: Entity<Id = Self::Id> + ?Sized,
    {
        self.id() == other.id()
    }
}
