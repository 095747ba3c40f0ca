//! Entity trait: identity that survives quantity changes.

/// Entity marker + minimal interface.
///
/// Inventory records are keyed by their item name, so two records with the
/// same name describe the same stock line even when quantities differ.
pub trait Entity {
    /// Identity key (unique within one snapshot).
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the identity key.
    fn id(&self) -> &Self::Id;
}
