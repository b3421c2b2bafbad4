//! # mailsend
//!
//! Compose emails with attachments and send them over authenticated SMTP.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mailsend::{File, Mailer, Message};
//!
//! let mailer = Mailer::new("noreply@example.com", "smtp.example.com", 587, "user", "secret")?;
//!
//! let mut message = Message::new("Monthly report", "The report is attached.");
//! message.include_file(File::new("report.csv", b"month,total\n".to_vec())?);
//!
//! mailer.send(&message, &["alice@example.com", "bob@example.com"])?;
//! # Ok::<(), mailsend::MailError>(())
//! ```
//!
//! `Mailer::new` only validates its arguments; a connection is opened for
//! each call to [`Mailer::send`], which blocks until the server accepts or
//! rejects the message.
//!
//! ## Configuration
//!
//! [`MailerConfig`] reads the same settings from environment variables or
//! JSON:
//!
//! ```rust,no_run
//! use mailsend::{Mailer, MailerConfig};
//!
//! let mailer = Mailer::from_config(MailerConfig::from_env()?)?;
//! # Ok::<(), mailsend::MailError>(())
//! ```
//!
//! ## Testing
//!
//! Swap in [`providers::LocalTransport`] to capture emails instead of
//! sending them:
//!
//! ```
//! use mailsend::{Mailer, Message};
//! use mailsend::providers::LocalTransport;
//!
//! let local = LocalTransport::new();
//! let mailer = Mailer::new("noreply@example.com", "smtp.example.com", 587, "user", "secret")?
//!     .transport(local.clone());
//!
//! mailer.send(&Message::new("Hello", "World"), &["alice@example.com"])?;
//! assert!(local.sent_with_subject("Hello"));
//! # Ok::<(), mailsend::MailError>(())
//! ```
//!
//! ## Logging
//!
//! Sends are wrapped in a `mailsend.send` [`tracing`] span. Install a
//! subscriber in your application to see them.

/// The version of the mailsend crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod attachment;
mod config;
mod error;
mod host;
mod mailer;
mod message;
mod transport;

pub mod providers;

// Re-exports
pub use attachment::File;
pub use config::MailerConfig;
pub use error::{BoxError, ErrorKind, MailError};
pub use host::Host;
pub use mailer::Mailer;
pub use message::{Message, Outbound};
pub use transport::{DeliveryResult, Server, TlsMode, Transport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::DeliveryResult;
    pub use crate::ErrorKind;
    pub use crate::File;
    pub use crate::MailError;
    pub use crate::Mailer;
    pub use crate::MailerConfig;
    pub use crate::Message;
    pub use crate::Transport;
}
