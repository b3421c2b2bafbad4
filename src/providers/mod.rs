//! Transport implementations.
//!
//! Each transport implements the [`Transport`](crate::Transport) trait.
//!
//! | Transport | Description |
//! |-----------|-------------|
//! | [`SmtpTransport`] | SMTP via lettre (default for [`Mailer`](crate::Mailer)) |
//! | [`LocalTransport`] | In-memory storage for dev/testing |
//! | [`LoggerTransport`] | Logs emails without sending or storing |

mod local;
mod logger;
mod smtp;

pub use local::{LocalTransport, SentAttachment, SentEmail};
pub use logger::LoggerTransport;
pub use smtp::SmtpTransport;
