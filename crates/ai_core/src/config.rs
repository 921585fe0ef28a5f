//! Configuration for the inference engine

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for bearer authentication (sensitive - uses `SecretString`)
    ///
    /// When absent, no client is constructed and the pipelines degrade to
    /// the canned sample report.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

const fn default_max_tokens() -> u32 {
    2048
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl InferenceConfig {
    /// Whether an API key is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the API key as a string reference, if configured
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_ms, 60000);
        assert_eq!(config.max_tokens, 2048);
        assert!((config.temperature - 0.7).abs() < 0.01);
        assert!(!config.is_configured());
    }

    #[test]
    fn with_api_key_configures_the_client() {
        let config = InferenceConfig::default().with_api_key("sk-test");
        assert!(config.is_configured());
        assert_eq!(config.api_key_str(), Some("sk-test"));
    }

    #[test]
    fn debug_redacts_the_api_key() {
        let config = InferenceConfig::default().with_api_key("sk-very-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-very-secret"));
    }

    #[test]
    fn deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.timeout_ms, 60000);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn deserialization_reads_api_key() {
        let json = r#"{"api_key":"sk-from-env","model":"my-model"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_key_str(), Some("sk-from-env"));
        assert_eq!(config.model, "my-model");
    }

    #[test]
    fn serialization_skips_the_api_key() {
        let config = InferenceConfig::default().with_api_key("sk-test");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-test"));
        assert!(!json.contains("api_key"));
    }
}
