use serde::{Deserialize, Serialize};

/// Event type codes emitted by the aggregates.
///
/// The backend forwards these to webhook dispatch, so the strings are part
/// of the wire contract and must stay stable.
pub mod event_types {
    pub const MAINTENANCE_DUE: &str = "maintenance_due";
    pub const SERVICE_COMPLETED: &str = "service_completed";
    pub const MILEAGE_UPDATED: &str = "mileage_updated";
    pub const MOTORCYCLE_ARCHIVED: &str = "motorcycle_archived";
    pub const MOTORCYCLE_RESTORED: &str = "motorcycle_restored";
    pub const PART_STOCK_USED: &str = "part_stock_used";
    pub const PART_RESTOCKED: &str = "part_restocked";
    pub const PART_LOW_STOCK: &str = "part_low_stock";
}

/// A single domain event recorded by an aggregate mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Event type code (see [`event_types`])
    pub event_type: String,
    /// When the event was recorded
    pub occurred_at: chrono::DateTime<chrono::Utc>,
    /// Event payload as free-form JSON
    pub payload: serde_json::Value,
}

/// In-memory store of events pending dispatch.
///
/// Aggregates append events while mutating; the caller drains them after a
/// successful write and hands them to webhook delivery. Events are never
/// serialized as part of the aggregate itself.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<DomainEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, stamping it with the current time
    pub fn record(&mut self, event_type: &str, payload: serde_json::Value) {
        self.events.push(DomainEvent {
            event_type: event_type.to_string(),
            occurred_at: chrono::Utc::now(),
            payload,
        });
    }

    /// Take all pending events, leaving the store empty
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events without consuming them
    pub fn pending(&self) -> &[DomainEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_drain() {
        let mut store = EventStore::new();
        assert!(store.is_empty());

        store.record(event_types::MILEAGE_UPDATED, serde_json::json!({ "mileage": 12500.0 }));
        store.record(event_types::SERVICE_COMPLETED, serde_json::json!({}));
        assert_eq!(store.len(), 2);
        assert_eq!(store.pending()[0].event_type, "mileage_updated");

        let drained = store.drain();
        assert_eq!(drained.len(), 2);
        assert!(store.is_empty());
    }
}
