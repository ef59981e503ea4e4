//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier denote the same record, even when
/// their other attributes differ (e.g. before and after a save).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` carries the same identity as `self`.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
