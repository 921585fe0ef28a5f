//! Application configuration
//!
//! Layered the usual way: built-in defaults, then an optional `config.toml`,
//! then `PUSHREVIEW_*` environment variables (double-underscore separator,
//! e.g. `PUSHREVIEW_INFERENCE__API_KEY`). Missing credentials are not an
//! error: the affected feature degrades instead of crashing the run.

use ai_core::InferenceConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// SMTP settings for the notification email
///
/// `sender` and `app_password` default to absent; without both, delivery
/// degrades to the log-only channel.
#[derive(Clone, Serialize, Deserialize)]
pub struct MailSettings {
    /// Mail submission host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// Mail submission port (implicit TLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Sender address, also used as the login name
    #[serde(default)]
    pub sender: Option<String>,

    /// App-specific password (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub app_password: Option<SecretString>,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

const fn default_smtp_port() -> u16 {
    465
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            sender: None,
            app_password: None,
        }
    }
}

impl std::fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSettings")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("sender", &self.sender)
            .field("app_password", &self.app_password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl MailSettings {
    /// Whether both credentials are present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.sender.is_some() && self.app_password.is_some()
    }

    /// Convert to `integration_mail`'s `MailConfig`, if configured
    #[must_use]
    pub fn to_mail_config(&self) -> Option<integration_mail::MailConfig> {
        let sender = self.sender.clone()?;
        let password = self.app_password.as_ref()?;
        Some(integration_mail::MailConfig {
            smtp_host: self.smtp_host.clone(),
            smtp_port: self.smtp_port,
            sender,
            password: SecretString::from(password.expose_secret().to_string()),
        })
    }
}

/// Settings for the external type checker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeCheckSettings {
    /// Checker binary
    #[serde(default = "default_typecheck_command")]
    pub command: String,

    /// Arguments passed on every run
    #[serde(default = "default_typecheck_args")]
    pub args: Vec<String>,
}

fn default_typecheck_command() -> String {
    "mypy".to_string()
}

fn default_typecheck_args() -> Vec<String> {
    vec![".".to_string(), "--ignore-missing-imports".to_string()]
}

impl Default for TypeCheckSettings {
    fn default() -> Self {
        Self {
            command: default_typecheck_command(),
            args: default_typecheck_args(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Mail configuration
    #[serde(default)]
    pub mail: MailSettings,

    /// Type-checker configuration
    #[serde(default)]
    pub typecheck: TypeCheckSettings,
}

impl AppConfig {
    /// Load configuration from defaults, optional file, and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("inference.base_url", "https://api.openai.com")?
            .set_default("inference.model", "gpt-4o-mini")?
            .set_default("mail.smtp_host", "smtp.gmail.com")?
            .set_default("mail.smtp_port", 465)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., PUSHREVIEW_MAIL__SENDER)
            .add_source(
                config::Environment::with_prefix("PUSHREVIEW")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mail_settings_are_unconfigured() {
        let settings = MailSettings::default();
        assert_eq!(settings.smtp_host, "smtp.gmail.com");
        assert_eq!(settings.smtp_port, 465);
        assert!(!settings.is_configured());
        assert!(settings.to_mail_config().is_none());
    }

    #[test]
    fn configured_mail_settings_convert() {
        let settings = MailSettings {
            sender: Some("ci@example.com".to_string()),
            app_password: Some(SecretString::from("app-pass".to_string())),
            ..MailSettings::default()
        };
        assert!(settings.is_configured());

        let config = settings.to_mail_config().unwrap();
        assert_eq!(config.sender, "ci@example.com");
        assert_eq!(config.smtp_port, 465);
    }

    #[test]
    fn partial_credentials_stay_unconfigured() {
        let settings = MailSettings {
            sender: Some("ci@example.com".to_string()),
            ..MailSettings::default()
        };
        assert!(!settings.is_configured());
        assert!(settings.to_mail_config().is_none());
    }

    #[test]
    fn mail_debug_redacts_password() {
        let settings = MailSettings {
            app_password: Some(SecretString::from("super-secret".to_string())),
            ..MailSettings::default()
        };
        let debug = format!("{settings:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn default_typecheck_runs_mypy_with_suppressed_imports() {
        let settings = TypeCheckSettings::default();
        assert_eq!(settings.command, "mypy");
        assert_eq!(settings.args, [".", "--ignore-missing-imports"]);
    }

    #[test]
    fn app_config_deserializes_from_toml_fragment() {
        let fragment = r#"
            [inference]
            model = "gpt-4o"

            [mail]
            sender = "bot@example.com"
        "#;
        let config: AppConfig = toml::from_str(fragment).unwrap();
        assert_eq!(config.inference.model, "gpt-4o");
        assert_eq!(config.mail.sender.as_deref(), Some("bot@example.com"));
        // Untouched sections keep their defaults
        assert_eq!(config.typecheck.command, "mypy");
    }
}
