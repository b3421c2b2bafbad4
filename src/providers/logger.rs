//! Logger transport that only logs emails.
//!
//! Useful for staging environments or when you want to see what would be sent
//! without actually sending or storing emails.

use crate::error::MailError;
use crate::message::Outbound;
use crate::transport::{DeliveryResult, Server, Transport};

/// Logger transport that emits tracing events for emails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerTransport {
    /// If true, log full email details. If false, just log recipient summary.
    log_full: bool,
}

impl LoggerTransport {
    /// Create a logger transport with brief output (just recipients).
    pub fn new() -> Self {
        Self { log_full: false }
    }

    /// Create a logger transport with full email details.
    pub fn full() -> Self {
        Self { log_full: true }
    }

    /// Set whether to log full email details.
    pub fn log_full(mut self, full: bool) -> Self {
        self.log_full = full;
        self
    }
}

impl Transport for LoggerTransport {
    fn deliver(&self, server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError> {
        let message_id = uuid::Uuid::new_v4().to_string();

        if self.log_full {
            tracing::info!(
                message_id = %message_id,
                from = %email.from(),
                to = ?email.to(),
                subject = %email.subject(),
                server = %format!("{}:{}", server.host, server.port),
                username = %server.username,
                attachments = ?email
                    .attachments()
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
                "Email logged (full)"
            );

            tracing::debug!(body = %email.text(), "Text body");
        } else {
            tracing::info!(
                message_id = %message_id,
                to = ?email.to(),
                subject = %email.subject(),
                "Email logged"
            );
        }

        Ok(DeliveryResult::new(message_id))
    }

    fn name(&self) -> &'static str {
        "logger"
    }
}
