//! Error types for mailsend.

use thiserror::Error;

/// Boxed error raised by a transport collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when building or sending emails.
#[derive(Debug, Error)]
pub enum MailError {
    /// A required text field (sender, host, username, file name) was empty
    /// or whitespace-only.
    #[error("Empty value: {0}")]
    EmptyValue(&'static str),

    /// Host is neither a DNS name nor an IP literal.
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// Port number was zero.
    #[error("Port must not be zero")]
    ZeroPort,

    /// Attachment content was empty.
    #[error("Attachment is empty: {0}")]
    EmptyBody(String),

    /// Send was attempted without recipients.
    #[error("No recipients given")]
    EmptyRecipients,

    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Attachment file not found.
    #[error("Attachment file not found: {0}")]
    AttachmentFileNotFound(String),

    /// Failed to read attachment file.
    #[error("Failed to read attachment: {0}")]
    AttachmentReadError(String),

    /// Error building the MIME message.
    #[error("Build error: {0}")]
    Build(String),

    /// Configuration error (missing env var, invalid value, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure reported by the transport (network, authentication, rejection).
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),
}

/// Discriminant of [`MailError`], for matching on the kind of failure
/// without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyValue,
    InvalidHost,
    ZeroPort,
    EmptyBody,
    EmptyRecipients,
    InvalidAddress,
    AttachmentFileNotFound,
    AttachmentReadError,
    Build,
    Configuration,
    Transport,
}

impl MailError {
    /// Wrap any collaborator error as a transport failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyValue(_) => ErrorKind::EmptyValue,
            Self::InvalidHost(_) => ErrorKind::InvalidHost,
            Self::ZeroPort => ErrorKind::ZeroPort,
            Self::EmptyBody(_) => ErrorKind::EmptyBody,
            Self::EmptyRecipients => ErrorKind::EmptyRecipients,
            Self::InvalidAddress(_) => ErrorKind::InvalidAddress,
            Self::AttachmentFileNotFound(_) => ErrorKind::AttachmentFileNotFound,
            Self::AttachmentReadError(_) => ErrorKind::AttachmentReadError,
            Self::Build(_) => ErrorKind::Build,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Whether this error came from the transport rather than local validation.
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

impl From<serde_json::Error> for MailError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        Self::Build(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::InvalidAddress(err.to_string())
    }
}
