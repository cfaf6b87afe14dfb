use super::{EntityMetadata, EventStore};

/// Trait for aggregate roots
///
/// Defines the methods and class-level metadata every aggregate of the
/// system provides.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance methods (data of a concrete record)
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Human-readable name of the record for lists and notifications
    fn display_name(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Pending domain events
    fn events(&self) -> &EventStore;

    /// Mutable event store
    fn events_mut(&mut self) -> &mut EventStore;

    // ============================================================================
    // Aggregate class metadata (static data)
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for storage (e.g. "motorcycle")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular, e.g. "Motorcycle")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "Motorcycles")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_motorcycle")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Table prefix for storage (e.g. "a001_motorcycle_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
