//! SMTP transport using lettre.
//!
//! A connection is opened for every delivery and closed afterwards. TLS,
//! authentication and MIME encoding are handled by lettre.

use lettre::{
    message::{
        header::ContentType, Attachment as MimeAttachment, Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::{authentication::Credentials, extension::ClientId},
    Transport as _,
};
use std::net::IpAddr;

use crate::error::MailError;
use crate::host::Host;
use crate::message::Outbound;
use crate::transport::{DeliveryResult, Server, TlsMode, Transport};

/// SMTP transport. Holds no connection state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpTransport;

impl SmtpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for SmtpTransport {
    fn deliver(&self, server: &Server, email: &Outbound<'_>) -> Result<DeliveryResult, MailError> {
        // Encode before dialing so bad addresses never open a connection.
        let message = build_message(email)?;
        let transport = build_transport(server)?;

        let response = transport.send(&message)?;

        let lines: Vec<&str> = response.message().collect();
        let message_id = lines
            .first()
            .and_then(|m| m.lines().next())
            .map(|s| s.to_string())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(DeliveryResult::with_response(message_id, lines.join("\n")))
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}

/// Build a lettre Message from an addressed email.
pub(crate) fn build_message(email: &Outbound<'_>) -> Result<lettre::Message, MailError> {
    let mut builder = lettre::Message::builder()
        .from(parse_mailbox(email.from())?)
        .subject(email.subject());

    for to in email.to() {
        builder = builder.to(parse_mailbox(to)?);
    }

    let message = if email.attachments().is_empty() {
        builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.text().to_string())?
    } else {
        let mut multipart =
            MultiPart::mixed().singlepart(SinglePart::plain(email.text().to_string()));

        for file in email.attachments() {
            let content_type: ContentType = file.content_type_str().parse().map_err(|e| {
                MailError::Build(format!(
                    "invalid content type for {}: {}",
                    file.name(),
                    e
                ))
            })?;

            multipart = multipart.singlepart(
                MimeAttachment::new(file.name().to_string())
                    .body(file.content().to_vec(), content_type),
            );
        }

        builder.multipart(multipart)?
    };

    Ok(message)
}

/// Build a one-shot blocking transport for `server`.
fn build_transport(server: &Server) -> Result<lettre::SmtpTransport, MailError> {
    let host = server.host.to_dial_string();

    let builder = match server.tls {
        TlsMode::None => lettre::SmtpTransport::builder_dangerous(&host),
        TlsMode::StartTls => lettre::SmtpTransport::starttls_relay(&host)?,
        TlsMode::Tls => lettre::SmtpTransport::relay(&host)?,
    };

    let mut builder = builder
        .port(server.port)
        .credentials(Credentials::new(
            server.username.clone(),
            server.password.clone(),
        ))
        .hello_name(client_id(&server.host));

    if let Some(timeout) = server.timeout {
        builder = builder.timeout(Some(timeout));
    }

    Ok(builder.build())
}

/// The server host doubles as the EHLO name.
fn client_id(host: &Host) -> ClientId {
    match host {
        Host::Domain(domain) => ClientId::Domain(domain.clone()),
        Host::Ip(IpAddr::V4(ip)) => ClientId::Ipv4(*ip),
        Host::Ip(IpAddr::V6(ip)) => ClientId::Ipv6(*ip),
    }
}

fn parse_mailbox(addr: &str) -> Result<Mailbox, MailError> {
    Ok(addr.trim().parse::<Mailbox>()?)
}
