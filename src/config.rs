//! Mailer configuration from environment variables or JSON.
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `EMAIL_FROM` | Sender address (required) |
//! | `SMTP_HOST` | SMTP server host (required) |
//! | `SMTP_PORT` | SMTP server port (default: 587) |
//! | `SMTP_USERNAME` | SMTP username (required) |
//! | `SMTP_PASSWORD` | SMTP password (default: empty) |
//! | `SMTP_TLS` | `none`, `starttls` or `tls` (default: `starttls`) |
//! | `SMTP_TIMEOUT_SECS` | Connection timeout in seconds (optional) |

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::error::MailError;
use crate::transport::TlsMode;

const DEFAULT_PORT: u16 = 587;

/// Raw mailer settings, validated by [`Mailer::from_config`](crate::Mailer::from_config).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailerConfig {
    pub sender: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub tls: TlsMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl fmt::Debug for MailerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailerConfig")
            .field("sender", &self.sender)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("tls", &self.tls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MailerConfig {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse the configuration from a JSON document.
    ///
    /// ```
    /// use mailsend::MailerConfig;
    ///
    /// let config = MailerConfig::from_json(r#"{
    ///     "sender": "noreply@example.com",
    ///     "host": "smtp.example.com",
    ///     "username": "mailer"
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.port, 587);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, MailError> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, MailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| MailError::Configuration(format!("{} not set", key)))
        };

        let port = match lookup("SMTP_PORT") {
            Some(port) => port.trim().parse().map_err(|_| {
                MailError::Configuration(format!("SMTP_PORT is not a valid port: {}", port))
            })?,
            None => DEFAULT_PORT,
        };

        let tls = match lookup("SMTP_TLS") {
            Some(tls) => tls.parse()?,
            None => TlsMode::default(),
        };

        let timeout_secs = match lookup("SMTP_TIMEOUT_SECS") {
            Some(secs) => Some(secs.trim().parse().map_err(|_| {
                MailError::Configuration(format!("SMTP_TIMEOUT_SECS is not a number: {}", secs))
            })?),
            None => None,
        };

        Ok(Self {
            sender: required("EMAIL_FROM")?,
            host: required("SMTP_HOST")?,
            port,
            username: required("SMTP_USERNAME")?,
            password: lookup("SMTP_PASSWORD").unwrap_or_default(),
            tls,
            timeout_secs,
        })
    }
}
