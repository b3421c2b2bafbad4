//! File attachments.

use serde::Serialize;
use std::io::Cursor;
use std::path::Path;

use crate::error::MailError;

/// A named file attached to a [`Message`](crate::Message).
///
/// The name must not be blank and the content must not be empty. The content
/// type is guessed from the file extension.
///
/// # Examples
///
/// ```
/// use mailsend::File;
///
/// let file = File::new("report.pdf", b"%PDF-1.7".to_vec()).unwrap();
/// assert_eq!(file.name(), "report.pdf");
/// assert_eq!(file.content_type_str(), "application/pdf");
///
/// assert!(File::new("  ", vec![1, 2]).is_err());
/// assert!(File::new("empty.txt", Vec::<u8>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    name: String,
    content_type: String,
    content: Vec<u8>,
}

impl File {
    /// Create an attachment from a name and raw bytes.
    ///
    /// # Errors
    ///
    /// - `EmptyValue` - name is empty or whitespace-only
    /// - `EmptyBody` - content has zero length
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Result<Self, MailError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(MailError::EmptyValue("file name"));
        }
        if content.is_empty() {
            return Err(MailError::EmptyBody(name));
        }

        let content_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .to_string();

        Ok(Self {
            name,
            content_type,
            content,
        })
    }

    /// Read an attachment from disk.
    ///
    /// The attachment is named after the file name component of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MailError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let content = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MailError::AttachmentFileNotFound(path.display().to_string())
            } else {
                MailError::AttachmentReadError(format!("{}: {}", path.display(), e))
            }
        })?;

        Self::new(name, content)
    }

    /// Set the content type explicitly.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// MIME content type (e.g. "application/pdf").
    pub fn content_type_str(&self) -> &str {
        &self.content_type
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// A fresh reader over the content. Can be called any number of times.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.content.as_slice())
    }
}
