//! Webhook Notifier - delivers messages to the chat platform over HTTP.
//!
//! The chat front end exposes two inbound webhooks: one that posts into an
//! event's channel and one that opens a direct message to a user. Both take
//! a small JSON payload and respond with a 2xx status on acceptance.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::ports::Notifier;

/// Configuration for the webhook notifier.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// URL that posts into an event's channel.
    pub channel_url: String,
    /// URL that opens a direct message to a user.
    pub direct_message_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl WebhookConfig {
    /// Creates a configuration with the default 10 second timeout.
    pub fn new(channel_url: impl Into<String>, direct_message_url: impl Into<String>) -> Self {
        Self {
            channel_url: channel_url.into(),
            direct_message_url: direct_message_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct ChannelPayload<'a> {
    event_id: i64,
    text: &'a str,
}

#[derive(Serialize)]
struct DirectMessagePayload<'a> {
    user_id: &'a str,
    text: &'a str,
}

/// Notifier that posts messages to the chat platform's webhooks.
pub struct WebhookNotifier {
    config: WebhookConfig,
    client: Client,
}

impl WebhookNotifier {
    /// Creates a new webhook notifier.
    pub fn new(config: WebhookConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::storage(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    async fn post<T: Serialize>(&self, url: &str, payload: &T) -> Result<(), DomainError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::storage(format!(
                "Webhook returned status {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn broadcast(&self, event_id: EventId, text: &str) -> Result<(), DomainError> {
        self.post(
            &self.config.channel_url,
            &ChannelPayload {
                event_id: event_id.as_i64(),
                text,
            },
        )
        .await
    }

    async fn direct_message(&self, user_id: &UserId, text: &str) -> Result<(), DomainError> {
        self.post(
            &self.config.direct_message_url,
            &DirectMessagePayload {
                user_id: user_id.as_str(),
                text,
            },
        )
        .await
    }
}
