//! Configuration for the sermon generator

use crate::assembler::CitationPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the sermon generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum time for a single provider call (seconds)
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,

    /// How repeated citation lines within one point are combined
    #[serde(default)]
    pub citation_policy: CitationPolicy,
}

fn default_generation_timeout_secs() -> u64 {
    120
}

impl GeneratorConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generation_timeout_secs: default_generation_timeout_secs(),
            citation_policy: CitationPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation_timeout(), Duration::from_secs(120));
        assert_eq!(config.citation_policy, CitationPolicy::Replace);
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = GeneratorConfig::default();
        config.generation_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GeneratorConfig {
            generation_timeout_secs: 30,
            citation_policy: CitationPolicy::Merge,
        };
        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("citation_policy = \"merge\""));
        let parsed = GeneratorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = GeneratorConfig::from_toml("").unwrap();
        assert_eq!(parsed, GeneratorConfig::default());
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(GeneratorConfig::from_toml("citation_policy = \"append\"").is_err());
    }
}
