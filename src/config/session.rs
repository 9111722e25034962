//! Session engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Session lifecycle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Minutes before the deadline at which the warning fires
    #[serde(default = "default_warning_lead")]
    pub warning_lead_minutes: i64,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.warning_lead_minutes <= 0 {
            return Err(ValidationError::InvalidWarningLead);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            warning_lead_minutes: default_warning_lead(),
        }
    }
}

fn default_warning_lead() -> i64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.warning_lead_minutes, 5);
    }

    #[test]
    fn test_validation_rejects_non_positive_lead() {
        let config = SessionConfig {
            warning_lead_minutes: 0,
        };
        assert!(config.validate().is_err());
    }
}
