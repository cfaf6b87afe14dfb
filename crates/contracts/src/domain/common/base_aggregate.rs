use super::{EntityMetadata, EventStore};
use serde::{Deserialize, Serialize};

/// Base aggregate with the fields shared by every aggregate.
///
/// Metadata is flattened so serialized aggregates keep the flat shape the
/// REST API exposes (`id`, `created_at`, `updated_at`, then the specific
/// fields). Pending events are an in-process concern and never hit the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Lifecycle metadata
    #[serde(flatten)]
    pub metadata: EntityMetadata,
    /// Events pending dispatch
    #[serde(skip)]
    pub events: EventStore,
}

impl<Id> BaseAggregate<Id> {
    /// Create a new base aggregate
    pub fn new(id: Id) -> Self {
        Self {
            id,
            metadata: EntityMetadata::new(),
            events: EventStore::new(),
        }
    }

    /// Create a base aggregate with existing metadata (for loading from storage)
    pub fn with_metadata(id: Id, metadata: EntityMetadata) -> Self {
        Self {
            id,
            metadata,
            events: EventStore::new(),
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
