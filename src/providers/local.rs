//! Local transport for development and testing.
//!
//! Records every delivery in memory instead of opening a connection, so
//! tests can assert on what a [`Mailer`](crate::Mailer) would have sent.
//!
//! ```
//! use mailsend::{Mailer, Message};
//! use mailsend::providers::LocalTransport;
//!
//! let local = LocalTransport::new();
//! let mailer = Mailer::new("noreply@example.com", "smtp.example.com", 587, "user", "pass")
//!     .unwrap()
//!     .transport(local.clone());
//!
//! mailer.send(&Message::new("Welcome", "Hello!"), &["user@example.com"]).unwrap();
//!
//! assert_eq!(local.email_count(), 1);
//! assert!(local.sent_to("user@example.com"));
//! ```

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::MailError;
use crate::message::Outbound;
use crate::transport::{DeliveryResult, Server, Transport};

/// An attachment as recorded by [`LocalTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentAttachment {
    pub name: String,
    pub content_type: String,
    pub size: usize,
}

/// A delivery recorded by [`LocalTransport`].
#[derive(Debug, Clone)]
pub struct SentEmail {
    /// Message ID returned to the caller.
    pub id: String,
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub attachments: Vec<SentAttachment>,
    /// Server the email would have been sent to.
    pub host: String,
    pub port: u16,
    pub username: String,
    pub sent_at: DateTime<Utc>,
}

/// Transport that stores emails in memory.
///
/// Clones share the same store and failure setting.
#[derive(Debug, Clone, Default)]
pub struct LocalTransport {
    emails: Arc<RwLock<Vec<SentEmail>>>,
    /// If set, deliver() will return this error (for testing error paths).
    fail_with: Arc<RwLock<Option<String>>>,
}

impl LocalTransport {
    /// Create a new local transport with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Failure Simulation (for testing)
    // =========================================================================

    /// Make every delivery fail with a transport error carrying `message`.
    ///
    /// ```
    /// use mailsend::providers::LocalTransport;
    ///
    /// let local = LocalTransport::new();
    /// local.set_failure("SMTP connection refused");
    /// ```
    pub fn set_failure(&self, message: impl Into<String>) {
        *self.fail_with.write() = Some(message.into());
    }

    /// Clear the failure state.
    pub fn clear_failure(&self) {
        *self.fail_with.write() = None;
    }

    // =========================================================================
    // Email Access (for testing assertions)
    // =========================================================================

    /// All recorded emails, oldest first.
    pub fn emails(&self) -> Vec<SentEmail> {
        self.emails.read().clone()
    }

    /// Get the most recently sent email.
    pub fn last_email(&self) -> Option<SentEmail> {
        self.emails.read().last().cloned()
    }

    pub fn email_count(&self) -> usize {
        self.emails.read().len()
    }

    pub fn has_emails(&self) -> bool {
        !self.emails.read().is_empty()
    }

    /// Check if an email was sent to a specific address (case-insensitive).
    pub fn sent_to(&self, address: &str) -> bool {
        self.emails
            .read()
            .iter()
            .any(|sent| sent.to.iter().any(|to| to.eq_ignore_ascii_case(address)))
    }

    /// Check if an email with matching subject was sent.
    pub fn sent_with_subject(&self, subject: &str) -> bool {
        self.emails.read().iter().any(|sent| sent.subject == subject)
    }

    /// Find emails matching a predicate.
    pub fn find_emails<F>(&self, predicate: F) -> Vec<SentEmail>
    where
        F: Fn(&SentEmail) -> bool,
    {
        self.emails
            .read()
            .iter()
            .filter(|sent| predicate(sent))
            .cloned()
            .collect()
    }

    /// Clear all recorded emails.
    pub fn clear(&self) {
        self.emails.write().clear();
    }

    /// Remove and return all recorded emails, oldest first.
    ///
    /// Useful for multi-phase tests where you want to check emails
    /// from one phase without them affecting assertions in the next.
    pub fn flush(&self) -> Vec<SentEmail> {
        std::mem::take(&mut *self.emails.write())
    }
}

impl Transport for LocalTransport {
    fn deliver(&self, server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError> {
        if let Some(ref message) = *self.fail_with.read() {
            return Err(MailError::transport(message.clone()));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let sent = SentEmail {
            id: id.clone(),
            from: email.from().to_string(),
            to: email.to().to_vec(),
            subject: email.subject().to_string(),
            text: email.text().to_string(),
            attachments: email
                .attachments()
                .iter()
                .map(|file| SentAttachment {
                    name: file.name().to_string(),
                    content_type: file.content_type_str().to_string(),
                    size: file.size(),
                })
                .collect(),
            host: server.host.to_string(),
            port: server.port,
            username: server.username.clone(),
            sent_at: Utc::now(),
        };

        self.emails.write().push(sent);
        Ok(DeliveryResult::new(id))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
