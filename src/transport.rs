//! Transport trait and delivery result types.
//!
//! A [`Transport`] is the collaborator that turns an addressed message into
//! bytes on the wire. The [`Mailer`](crate::Mailer) validates its own
//! configuration and the recipients, then hands each send to its transport
//! together with the connection parameters in [`Server`].
//!
//! Implementations in this crate:
//!
//! - [`SmtpTransport`](crate::providers::SmtpTransport) - delivers through
//!   lettre's blocking SMTP client
//! - [`LocalTransport`](crate::providers::LocalTransport) - stores deliveries
//!   in memory for tests
//! - [`LoggerTransport`](crate::providers::LoggerTransport) - logs deliveries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::MailError;
use crate::host::Host;
use crate::message::Outbound;

/// Result of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Message ID reported by the server, or generated locally
    pub message_id: String,
    /// Optional raw server response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl DeliveryResult {
    /// Create a new delivery result with just a message ID.
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            response: None,
        }
    }

    /// Create a delivery result with the server response.
    pub fn with_response(message_id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            response: Some(response.into()),
        }
    }
}

/// TLS mode for the SMTP connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsMode {
    /// No TLS (dangerous, only for localhost)
    None,
    /// STARTTLS - upgrade to TLS after connecting (port 587)
    #[default]
    #[serde(alias = "starttls")]
    StartTls,
    /// Implicit TLS - connect with TLS from start (port 465)
    Tls,
}

impl FromStr for TlsMode {
    type Err = MailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "starttls" | "start_tls" => Ok(Self::StartTls),
            "tls" => Ok(Self::Tls),
            other => Err(MailError::Configuration(format!(
                "Unknown TLS mode: {}. Valid modes are: none, starttls, tls",
                other
            ))),
        }
    }
}

/// Connection parameters for one SMTP server.
///
/// Built by [`Mailer::new`](crate::Mailer::new); fields are already
/// validated.
#[derive(Clone, PartialEq, Eq)]
pub struct Server {
    pub host: Host,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub tls: TlsMode,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("tls", &self.tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Trait for delivery collaborators.
///
/// # Example
///
/// ```
/// use mailsend::{DeliveryResult, MailError, Outbound, Server, Transport};
///
/// struct Discard;
///
/// impl Transport for Discard {
///     fn deliver(&self, _server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError> {
///         Ok(DeliveryResult::new(format!("discarded:{}", email.to().len())))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Encode and send one addressed email to `server`.
    ///
    /// Called only with a non-empty recipient list.
    fn deliver(&self, server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError>;

    /// Get the transport name (for logging/debugging).
    fn name(&self) -> &'static str {
        "unknown"
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn deliver(&self, server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError> {
        (**self).deliver(server, email)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn deliver(&self, server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError> {
        (**self).deliver(server, email)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn deliver(&self, server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError> {
        (**self).deliver(server, email)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
