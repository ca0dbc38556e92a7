//! Giftbox Configuration
//!
//! Parses giftbox.toml and applies environment overrides. The EmailJS
//! keys are never compiled in; they come from the file or the environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// EmailJS REST endpoint for sending a templated email
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Environment variables that override the file
pub const ENV_PUBLIC_KEY: &str = "GIFTBOX_EMAILJS_PUBLIC_KEY";
pub const ENV_SERVICE_ID: &str = "GIFTBOX_EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "GIFTBOX_EMAILJS_TEMPLATE_ID";
pub const ENV_PRIVATE_KEY: &str = "GIFTBOX_EMAILJS_PRIVATE_KEY";

/// The main configuration structure matching giftbox.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiftboxConfig {
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

/// EmailJS account settings
#[derive(Debug, Clone, Deserialize)]
pub struct EmailJsConfig {
    /// Public key, sent as `user_id`
    #[serde(default)]
    pub public_key: String,

    #[serde(default)]
    pub service_id: String,

    #[serde(default)]
    pub template_id: String,

    /// Private key, sent as `accessToken` when the account requires it
    #[serde(default)]
    pub private_key: Option<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            service_id: String::new(),
            template_id: String::new(),
            private_key: None,
            endpoint: default_endpoint(),
        }
    }
}

/// Wizard behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// How long the sending animation stays up after the email is accepted
    #[serde(default = "default_confirmation_delay")]
    pub confirmation_delay_ms: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            confirmation_delay_ms: default_confirmation_delay(),
        }
    }
}

impl WizardConfig {
    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_confirmation_delay() -> u64 {
    3000
}

impl GiftboxConfig {
    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Failed to parse giftbox.toml")
    }

    /// `~/.config/giftbox/giftbox.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("giftbox").join("giftbox.toml"))
    }

    /// Load from `path` if given, else from the default location if it
    /// exists, else defaults; then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    tracing::info!("Using config {}", path.display());
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Replace values with whatever `lookup` returns for the override keys
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = non_empty(ENV_PUBLIC_KEY) {
            self.emailjs.public_key = value;
        }
        if let Some(value) = non_empty(ENV_SERVICE_ID) {
            self.emailjs.service_id = value;
        }
        if let Some(value) = non_empty(ENV_TEMPLATE_ID) {
            self.emailjs.template_id = value;
        }
        if let Some(value) = non_empty(ENV_PRIVATE_KEY) {
            self.emailjs.private_key = Some(value);
        }
    }

    /// Check that the EmailJS credentials are present
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("public_key", &self.emailjs.public_key),
            ("service_id", &self.emailjs.service_id),
            ("template_id", &self.emailjs.template_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            anyhow::bail!(
                "EmailJS is not configured (missing: {}).\n\
                 Set them under [emailjs] in giftbox.toml or via {}, {} and {}.",
                missing.join(", "),
                ENV_PUBLIC_KEY,
                ENV_SERVICE_ID,
                ENV_TEMPLATE_ID
            );
        }

        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Generate a template giftbox.toml file
pub fn generate_template() -> String {
    format!(
        r#"# Giftbox Configuration
# Place this file at ~/.config/giftbox/giftbox.toml
# Keep it out of version control: it holds your EmailJS keys.

[emailjs]
public_key = ""
service_id = ""
template_id = ""

# Optional: private key if your EmailJS account requires it
# private_key = ""

# Optional: override the API endpoint
# endpoint = "{endpoint}"

[wizard]
# How long the wrapping animation stays up after the email is accepted
confirmation_delay_ms = {delay}
"#,
        endpoint = DEFAULT_ENDPOINT,
        delay = default_confirmation_delay(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_empty_config() {
        let config = GiftboxConfig::parse("").unwrap();
        assert_eq!(config.emailjs.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.wizard.confirmation_delay(), Duration::from_secs(3));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [emailjs]
            public_key = "pk_123"
            service_id = "service_gift"
            template_id = "template_gift"
            private_key = "secret"
            endpoint = "http://localhost:9000/send"

            [wizard]
            confirmation_delay_ms = 500
        "#;

        let config = GiftboxConfig::parse(toml).unwrap();
        assert_eq!(config.emailjs.public_key, "pk_123");
        assert_eq!(config.emailjs.private_key.as_deref(), Some("secret"));
        assert_eq!(config.emailjs.endpoint, "http://localhost:9000/send");
        assert_eq!(config.wizard.confirmation_delay(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = GiftboxConfig::parse(
            r#"
            [emailjs]
            public_key = "from_file"
            service_id = "service_file"
            "#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            (ENV_PUBLIC_KEY, "from_env"),
            (ENV_TEMPLATE_ID, "template_env"),
            (ENV_SERVICE_ID, "  "),
        ]
        .into_iter()
        .collect();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.emailjs.public_key, "from_env");
        assert_eq!(config.emailjs.service_id, "service_file");
        assert_eq!(config.emailjs.template_id, "template_env");
        assert!(config.emailjs.private_key.is_none());
    }

    #[test]
    fn test_validate_names_missing_keys() {
        let mut config = GiftboxConfig::default();
        config.emailjs.public_key = "pk".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("service_id"));
        assert!(err.contains("template_id"));
        assert!(!err.contains("public_key,"));
    }

    #[test]
    fn test_template_parses() {
        let config = GiftboxConfig::parse(&generate_template()).unwrap();
        assert_eq!(config.wizard.confirmation_delay_ms, 3000);
        assert_eq!(config.emailjs.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_from_file_reports_path() {
        let err = GiftboxConfig::from_file(Path::new("/nonexistent/giftbox.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/giftbox.toml"));
    }
}
