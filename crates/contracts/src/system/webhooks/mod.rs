pub mod aggregate;
pub mod event;

pub use aggregate::{WebhookConfig, WebhookConfigDto, WebhookConfigId};
pub use event::WebhookEvent;
