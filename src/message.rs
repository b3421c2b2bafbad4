//! Outbound message content and its addressed form.

use serde::Serialize;

use crate::attachment::File;

/// The content of one outbound email: subject, plain text body and
/// attachments.
///
/// Sender and recipients are not part of the message. They are supplied by
/// [`Mailer::send`](crate::Mailer::send), so the same message can be sent
/// several times to different recipients.
///
/// ```
/// use mailsend::{File, Message};
///
/// let mut message = Message::new("Monthly report", "See attached.");
/// message.include_file(File::new("report.csv", b"a,b\n1,2\n".to_vec()).unwrap());
///
/// assert_eq!(message.attachments().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    subject: String,
    text: String,
    attachments: Vec<File>,
}

impl Message {
    /// Create a message with a subject and plain text body.
    ///
    /// Empty subjects and bodies are allowed.
    pub fn new(subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    /// Attach a file. Files with the same name are all kept.
    pub fn include_file(&mut self, file: File) {
        self.attachments.push(file);
    }

    /// Builder-style variant of [`include_file`](Self::include_file).
    pub fn with_file(mut self, file: File) -> Self {
        self.include_file(file);
        self
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attachments(&self) -> &[File] {
        &self.attachments
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Address the message for delivery.
    pub(crate) fn prepare<'a>(&'a self, from: &'a str, to: Vec<String>) -> Outbound<'a> {
        Outbound {
            from,
            to,
            message: self,
        }
    }
}

/// A message addressed for delivery: sender, recipients and content.
///
/// Produced by [`Mailer::send`](crate::Mailer::send) and handed to a
/// [`Transport`](crate::Transport).
#[derive(Debug, Clone)]
pub struct Outbound<'a> {
    from: &'a str,
    to: Vec<String>,
    message: &'a Message,
}

impl<'a> Outbound<'a> {
    pub fn from(&self) -> &str {
        self.from
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn message(&self) -> &'a Message {
        self.message
    }

    pub fn subject(&self) -> &str {
        self.message.subject()
    }

    pub fn text(&self) -> &str {
        self.message.text()
    }

    pub fn attachments(&self) -> &[File] {
        self.message.attachments()
    }

    /// Header fields set on the encoded email, in order: From, To, Subject.
    pub fn headers(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![
            ("From", vec![self.from.to_string()]),
            ("To", self.to.clone()),
            ("Subject", vec![self.message.subject.clone()]),
        ]
    }
}
