//! Shared traits for expense primitives.

use uuid::Uuid;

/// Exposes a stable identifier for entities kept in the store.
pub trait Identifiable {
    fn id(&self) -> Uuid;

    /// Returns `true` when both values refer to the same entity, regardless of content.
    fn same_identity(&self, other: &impl Identifiable) -> bool {
        self.id() == other.id()
    }
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving whole-unit amounts.
pub trait Amounted {
    fn amount(&self) -> u64;
}
