//! The SMTP client: validated connection settings plus a transport.

use std::fmt;
use std::time::Duration;

use crate::config::MailerConfig;
use crate::error::MailError;
use crate::host::Host;
use crate::message::Message;
use crate::providers::SmtpTransport;
use crate::transport::{DeliveryResult, Server, TlsMode, Transport};

/// Sends [`Message`]s from one sender through one SMTP server.
///
/// Configuration is validated once by [`Mailer::new`]; the mailer is
/// immutable afterwards and can be reused for any number of sends.
///
/// # Example
///
/// ```rust,no_run
/// use mailsend::{Mailer, Message};
///
/// let mailer = Mailer::new("noreply@example.com", "smtp.example.com", 587, "user", "secret")?;
///
/// let message = Message::new("Welcome!", "Thanks for signing up.");
/// mailer.send(&message, &["alice@example.com"])?;
/// # Ok::<(), mailsend::MailError>(())
/// ```
///
/// Swap the transport for tests:
///
/// ```
/// use mailsend::{Mailer, Message};
/// use mailsend::providers::LocalTransport;
///
/// let local = LocalTransport::new();
/// let mailer = Mailer::new("a@x.com", "smtp.x.com", 587, "user", "pass")?
///     .transport(local.clone());
///
/// mailer.send(&Message::new("Hi", "body"), &["b@y.com"])?;
/// assert!(local.sent_to("b@y.com"));
/// # Ok::<(), mailsend::MailError>(())
/// ```
#[derive(Clone)]
pub struct Mailer<T: Transport = SmtpTransport> {
    sender: String,
    server: Server,
    transport: T,
}

impl Mailer<SmtpTransport> {
    /// Create a mailer that delivers over SMTP.
    ///
    /// All text fields are trimmed. No connection is opened here.
    ///
    /// # Errors
    ///
    /// - `EmptyValue` - sender, host or username is empty or whitespace-only
    /// - `InvalidHost` - host is not a DNS name or IP literal
    /// - `ZeroPort` - port is zero
    pub fn new(
        sender: &str,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, MailError> {
        let sender = sender.trim();
        if sender.is_empty() {
            return Err(MailError::EmptyValue("sender"));
        }
        let host = Host::parse(host)?;
        if port == 0 {
            return Err(MailError::ZeroPort);
        }
        let username = username.trim();
        if username.is_empty() {
            return Err(MailError::EmptyValue("username"));
        }

        Ok(Self {
            sender: sender.to_string(),
            server: Server {
                host,
                port,
                username: username.to_string(),
                password: password.to_string(),
                tls: TlsMode::default(),
                timeout: None,
            },
            transport: SmtpTransport::new(),
        })
    }

    /// Create a mailer from a [`MailerConfig`].
    pub fn from_config(config: MailerConfig) -> Result<Self, MailError> {
        let mailer = Self::new(
            &config.sender,
            &config.host,
            config.port,
            &config.username,
            &config.password,
        )?
        .tls(config.tls);

        Ok(match config.timeout_secs {
            Some(secs) => mailer.timeout(Duration::from_secs(secs)),
            None => mailer,
        })
    }
}

impl<T: Transport> Mailer<T> {
    /// Replace the transport, keeping the validated settings.
    pub fn transport<U: Transport>(self, transport: U) -> Mailer<U> {
        Mailer {
            sender: self.sender,
            server: self.server,
            transport,
        }
    }

    /// Set the TLS mode (default: STARTTLS).
    pub fn tls(mut self, mode: TlsMode) -> Self {
        self.server.tls = mode;
        self
    }

    /// Set the connection timeout passed to the transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.server.timeout = Some(timeout);
        self
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn transport_ref(&self) -> &T {
        &self.transport
    }

    /// Send `message` from the configured sender to `recipients`.
    ///
    /// The message itself is not modified. Transport errors are returned
    /// as-is; nothing is retried.
    ///
    /// # Errors
    ///
    /// - `EmptyRecipients` - `recipients` is empty; the transport is not called
    /// - anything the transport returns
    pub fn send<S: AsRef<str>>(
        &self,
        message: &Message,
        recipients: &[S],
    ) -> Result<DeliveryResult, MailError> {
        if recipients.is_empty() {
            return Err(MailError::EmptyRecipients);
        }

        let to: Vec<String> = recipients.iter().map(|r| r.as_ref().to_string()).collect();
        let outbound = message.prepare(&self.sender, to);

        let span = tracing::info_span!(
            "mailsend.send",
            transport = self.transport.name(),
            host = %self.server.host,
            port = self.server.port,
            to = ?outbound.to(),
            subject = %outbound.subject(),
        );
        let _guard = span.enter();

        tracing::debug!(attachments = outbound.attachments().len(), "Sending email");

        let result = self.transport.deliver(&self.server, &outbound);

        match &result {
            Ok(r) => tracing::info!(message_id = %r.message_id, "Email sent"),
            Err(e) => tracing::error!(error = %e, "Email delivery failed"),
        }

        result
    }
}

impl<T: Transport> fmt::Debug for Mailer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailer")
            .field("sender", &self.sender)
            .field("server", &self.server)
            .field("transport", &self.transport.name())
            .finish()
    }
}
