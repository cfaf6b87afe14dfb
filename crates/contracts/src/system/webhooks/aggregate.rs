use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a webhook endpoint configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebhookConfigId(pub i64);

impl WebhookConfigId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for WebhookConfigId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(WebhookConfigId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Outbound notification endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(flatten)]
    pub base: BaseAggregate<WebhookConfigId>,

    pub name: String,

    /// Target URL, http or https
    pub url: String,

    /// Shared secret for payload signing
    pub secret: Option<String>,

    pub is_active: bool,

    /// Subscribed event types; `None` or empty means every event
    pub event_types: Option<Vec<String>>,

    /// Receiver flavor, e.g. "generic", "discord", "slack"
    pub service_type: String,

    pub max_retries: i32,

    /// Delay between retries, seconds
    pub retry_delay: i32,

    /// Last successful delivery
    pub last_triggered: Option<DateTime<Utc>>,

    pub total_calls: i64,
    pub successful_calls: i64,
    pub failed_calls: i64,
}

impl WebhookConfig {
    pub fn new_with_id(id: WebhookConfigId, name: String, url: String) -> Self {
        Self {
            base: BaseAggregate::new(id),
            name,
            url,
            secret: None,
            is_active: true,
            event_types: None,
            service_type: "generic".to_string(),
            max_retries: 3,
            retry_delay: 60,
            last_triggered: None,
            total_calls: 0,
            successful_calls: 0,
            failed_calls: 0,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Apply changes from a form DTO
    pub fn update(&mut self, dto: &WebhookConfigDto) {
        self.name = dto.name.clone();
        self.url = dto.url.clone();
        self.secret = dto.secret.clone();
        self.is_active = dto.is_active;
        self.event_types = dto.event_types.clone();
        self.service_type = dto.service_type.clone();
        self.max_retries = dto.max_retries;
        self.retry_delay = dto.retry_delay;
        self.touch_updated();
    }

    /// Whether this endpoint wants the given event. Inactive endpoints
    /// never fire; an endpoint with no subscription list takes everything.
    pub fn should_trigger(&self, event_type: &str) -> bool {
        if !self.is_active {
            return false;
        }
        match &self.event_types {
            None => true,
            Some(subscribed) if subscribed.is_empty() => true,
            Some(subscribed) => subscribed.iter().any(|wanted| wanted == event_type),
        }
    }

    /// Record a delivery attempt. Only a success updates `last_triggered`.
    pub fn record_result(&mut self, success: bool, now: DateTime<Utc>) {
        self.total_calls += 1;
        if success {
            self.successful_calls += 1;
            self.last_triggered = Some(now);
        } else {
            self.failed_calls += 1;
        }
        self.touch_updated();
    }

    /// Delivery success rate in percent, `None` before the first call
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_calls == 0 {
            return None;
        }
        Some(self.successful_calls as f64 / self.total_calls as f64 * 100.0)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Webhook name cannot be empty".into());
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err("Webhook URL must start with http:// or https://".into());
        }
        if self.max_retries < 0 {
            return Err("Max retries cannot be negative".into());
        }
        if self.retry_delay < 0 {
            return Err("Retry delay cannot be negative".into());
        }
        Ok(())
    }

    /// Hook before persisting
    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for WebhookConfig {
    type Id = WebhookConfigId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "sys_webhook_config"
    }

    fn collection_name() -> &'static str {
        "sys_webhook_configs"
    }

    fn element_name() -> &'static str {
        "Webhook"
    }

    fn list_name() -> &'static str {
        "Webhooks"
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Form payload for creating or editing a webhook endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfigDto {
    pub id: Option<i64>,
    pub name: String,
    pub url: String,
    pub secret: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub event_types: Option<Vec<String>>,
    #[serde(default = "default_service_type")]
    pub service_type: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: i32,
    #[serde(default = "default_retry_delay")]
    pub retry_delay: i32,
}

fn default_active() -> bool {
    true
}

fn default_service_type() -> String {
    "generic".to_string()
}

fn default_max_retries() -> i32 {
    3
}

fn default_retry_delay() -> i32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::event_types;

    fn webhook() -> WebhookConfig {
        WebhookConfig::new_with_id(
            WebhookConfigId::new(1),
            "Garage Discord".to_string(),
            "https://discord.example/hook".to_string(),
        )
    }

    #[test]
    fn test_should_trigger() {
        let mut hook = webhook();
        // No subscription list takes everything
        assert!(hook.should_trigger(event_types::MAINTENANCE_DUE));

        hook.event_types = Some(Vec::new());
        assert!(hook.should_trigger(event_types::SERVICE_COMPLETED));

        hook.event_types = Some(vec![event_types::MAINTENANCE_DUE.to_string()]);
        assert!(hook.should_trigger(event_types::MAINTENANCE_DUE));
        assert!(!hook.should_trigger(event_types::SERVICE_COMPLETED));

        hook.is_active = false;
        assert!(!hook.should_trigger(event_types::MAINTENANCE_DUE));
    }

    #[test]
    fn test_record_result_statistics() {
        let mut hook = webhook();
        let first = Utc::now();
        hook.record_result(true, first);
        hook.record_result(false, Utc::now());

        assert_eq!(hook.total_calls, 2);
        assert_eq!(hook.successful_calls, 1);
        assert_eq!(hook.failed_calls, 1);
        // Failures leave the last successful delivery untouched
        assert_eq!(hook.last_triggered, Some(first));
        assert_eq!(hook.success_rate(), Some(50.0));
    }

    #[test]
    fn test_success_rate_before_first_call() {
        assert_eq!(webhook().success_rate(), None);
    }

    #[test]
    fn test_validate() {
        let mut hook = webhook();
        assert!(hook.validate().is_ok());

        hook.url = "ftp://discord.example/hook".to_string();
        assert!(hook.validate().is_err());

        hook.url = "https://discord.example/hook".to_string();
        hook.name = "  ".to_string();
        assert!(hook.validate().is_err());
    }

    #[test]
    fn test_update_from_dto() {
        let mut hook = webhook();
        let dto = WebhookConfigDto {
            id: Some(1),
            name: "Garage Slack".to_string(),
            url: "https://slack.example/hook".to_string(),
            secret: Some("s3cret".to_string()),
            is_active: false,
            event_types: Some(vec![event_types::PART_LOW_STOCK.to_string()]),
            service_type: "slack".to_string(),
            max_retries: 5,
            retry_delay: 120,
        };
        hook.update(&dto);

        assert_eq!(hook.name, "Garage Slack");
        assert_eq!(hook.service_type, "slack");
        assert!(!hook.is_active);
        assert_eq!(hook.max_retries, 5);
    }
}
