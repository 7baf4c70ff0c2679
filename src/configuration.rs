use std::{env, time};

use anyhow::Context;
use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use url::Url;

use crate::domain::EmailAddress;
use crate::email_client::EmailClient;

/// Settings
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

impl Settings {
    /// Get settings from configuration files
    pub fn get_config() -> Result<Self, ConfigError> {
        let path = env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        let config_dir = path.join("config");

        // Detect the running environment (default: `dev`)
        let env: Env = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "dev".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        // Read the configuration from files and environment variables
        Config::builder()
            // Base configuration file
            .add_source(File::from(config_dir.join("base.yaml")).required(true))
            // Environment-specific configuration file
            .add_source(File::from(config_dir.join(env.as_str())).required(true))
            // Environment variables (e.g., `LEADS__EMAIL_CLIENT__AUTHORIZATION_TOKEN=...`
            // would set Settings.email_client.authorization_token)
            .add_source(Environment::with_prefix("LEADS").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Application settings
#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub app_host: String,
    pub app_port: u16,
    /// Public URL of the marketing site
    pub base_url: String,
    /// Where owner notifications go; the sender address when unset
    pub owner_email: Option<String>,
}

/// Email client settings
#[derive(Clone, serde::Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: SecretString,
    pub timeout_millis: u64,
}

impl EmailClientSettings {
    /// Build the email client
    pub fn client(self) -> anyhow::Result<EmailClient> {
        let base_url = self.base_url().context("Invalid email API base URL")?;
        let sender_email = self
            .sender_email()
            .map_err(anyhow::Error::msg)
            .context("Invalid sender email address")?;
        let timeout = self.timeout();
        EmailClient::new(&base_url, sender_email, self.authorization_token, timeout)
    }

    /// Parse base URL
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    /// Parse sender email
    pub fn sender_email(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.sender_email.clone())
    }

    /// Get configured timeout
    pub const fn timeout(&self) -> time::Duration {
        time::Duration::from_millis(self.timeout_millis)
    }
}

impl Settings {
    /// Parse the address owner notifications are sent to
    pub fn owner_email(&self) -> Result<EmailAddress, String> {
        self.application
            .owner_email
            .clone()
            .map_or_else(|| self.email_client.sender_email(), EmailAddress::parse)
    }
}

/// Available runtime environments
#[derive(Debug)]
pub enum Env {
    Development,
    Production,
}

impl Env {
    /// Represent environment as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prd",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "dev" => Ok(Self::Development),
            "prd" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `dev` or `prd`"
            )),
        }
    }
}
