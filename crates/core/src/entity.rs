//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A bank is an entity: renaming it or registering accounts does not change
/// which bank it is.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
