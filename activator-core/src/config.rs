use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;
pub const DEFAULT_COUNTER_ATTRIBUTE: &str = "data-counter";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid activator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("threshold {0} outside 0.0..=1.0")]
    Threshold(f64),
    #[error("counter duration must be greater than zero")]
    ZeroDuration,
    #[error("counter attribute name is empty")]
    EmptyAttribute,
}

/// Tunables for the scroll Activator. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivatorConfig {
    /// Fraction of an element that must be visible before it fires.
    pub threshold: f64,
    pub counter_duration_ms: u32,
    pub counter_attribute: String,
}

impl Default for ActivatorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_attribute: DEFAULT_COUNTER_ATTRIBUTE.to_string(),
        }
    }
}

impl ActivatorConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: ActivatorConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.counter_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.counter_attribute.trim().is_empty() {
            return Err(ConfigError::EmptyAttribute);
        }
        Ok(())
    }

    /// CSS selector matching every counter element.
    pub fn counter_selector(&self) -> String {
        format!("[{}]", self.counter_attribute)
    }
}
