//! Notifier configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Outbound webhook configuration for chat delivery
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    /// Webhook that posts into an event's channel
    pub channel_url: String,

    /// Webhook that opens a direct message to a user
    pub direct_message_url: String,

    /// Delivery timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

impl NotifierConfig {
    /// Get the delivery timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate notifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for url in [&self.channel_url, &self.direct_message_url] {
            if url.is_empty() {
                return Err(ValidationError::MissingRequired("NOTIFIER webhook URLs"));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidWebhookUrl);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NotifierConfig {
        NotifierConfig {
            channel_url: "https://chat.example/hooks/channel".to_string(),
            direct_message_url: "https://chat.example/hooks/dm".to_string(),
            timeout_secs: 10,
        }
    }

    #[test]
    fn test_timeout_defaults_when_omitted() {
        let config: NotifierConfig = serde_json::from_str(
            r#"{
                "channel_url": "https://chat.example/hooks/channel",
                "direct_message_url": "https://chat.example/hooks/dm"
            }"#,
        )
        .unwrap();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_accepts_https_urls() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_missing_url() {
        let config = NotifierConfig {
            channel_url: String::new(),
            ..valid()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = NotifierConfig {
            direct_message_url: "ftp://chat.example/hooks/dm".to_string(),
            ..valid()
        };
        assert!(config.validate().is_err());
    }
}
