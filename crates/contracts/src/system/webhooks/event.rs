use crate::domain::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire payload delivered to webhook endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

impl WebhookEvent {
    pub fn new(event_type: impl Into<String>, data: serde_json::Value, now: DateTime<Utc>) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp: now,
            data,
        }
    }

    /// Wrap a pending domain event, keeping its original occurrence time
    pub fn from_domain(event: &DomainEvent) -> Self {
        Self {
            event_type: event.event_type.clone(),
            timestamp: event.occurred_at,
            data: event.payload.clone(),
        }
    }
}
