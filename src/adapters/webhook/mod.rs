//! Webhook adapters for outbound chat delivery.

mod notifier;

pub use notifier::{WebhookConfig, WebhookNotifier};
