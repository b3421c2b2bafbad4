//! Local transport tests.

use mailsend::providers::LocalTransport;
use mailsend::{File, Mailer, Message, TlsMode};

fn mailer(local: &LocalTransport) -> Mailer<LocalTransport> {
    Mailer::new("tony.stark@example.com", "smtp.example.com", 2525, "tony", "jarvis")
        .unwrap()
        .tls(TlsMode::None)
        .transport(local.clone())
}

// ============================================================================
// Basic Delivery Tests
// ============================================================================

#[test]
fn send_returns_message_id() {
    let local = LocalTransport::new();

    let result = mailer(&local)
        .send(
            &Message::new("Hello, Avengers!", "Hello!"),
            &["steve.rogers@example.com"],
        )
        .unwrap();

    assert_eq!(local.last_email().unwrap().id, result.message_id);
}

#[test]
fn captures_sent_emails() {
    let local = LocalTransport::new();

    mailer(&local)
        .send(
            &Message::new("Hello, Avengers!", "Hello!"),
            &["steve.rogers@example.com", "natasha.romanoff@example.com"],
        )
        .unwrap();

    assert!(local.has_emails());
    assert_eq!(local.email_count(), 1);
    assert!(local.sent_to("steve.rogers@example.com"));
    assert!(local.sent_to("natasha.romanoff@example.com"));
    assert!(local.sent_with_subject("Hello, Avengers!"));

    let sent = local.last_email().unwrap();
    assert_eq!(sent.from, "tony.stark@example.com");
    assert_eq!(sent.text, "Hello!");
    assert_eq!(sent.port, 2525);
    assert_eq!(sent.username, "tony");
}

#[test]
fn captures_attachments() {
    let local = LocalTransport::new();
    let message = Message::new("Plans", "Attached.")
        .with_file(File::new("suit.pdf", b"mark 42".to_vec()).unwrap())
        .with_file(File::new("suit.pdf", b"mark 43".to_vec()).unwrap());

    mailer(&local)
        .send(&message, &["pepper.potts@example.com"])
        .unwrap();

    let sent = local.last_email().unwrap();
    assert_eq!(sent.attachments.len(), 2);
    assert!(sent
        .attachments
        .iter()
        .all(|a| a.name == "suit.pdf" && a.content_type == "application/pdf"));
}

// ============================================================================
// Storage Tests
// ============================================================================

#[test]
fn can_flush_emails() {
    let local = LocalTransport::new();
    let mailer = mailer(&local);

    mailer
        .send(&Message::new("Test 1", ""), &["c@d.com"])
        .unwrap();
    mailer
        .send(&Message::new("Test 2", ""), &["c@d.com"])
        .unwrap();

    let flushed = local.flush();
    assert_eq!(flushed.len(), 2);
    assert_eq!(flushed[0].subject, "Test 1");
    assert_eq!(local.email_count(), 0);
}

#[test]
fn sent_at_is_recorded() {
    let local = LocalTransport::new();
    let before = chrono::Utc::now();

    mailer(&local)
        .send(&Message::new("Timing", ""), &["c@d.com"])
        .unwrap();

    let sent = local.last_email().unwrap();
    assert!(sent.sent_at >= before);
}

// ============================================================================
// Failure Simulation Tests
// ============================================================================

#[test]
fn failure_is_reported_and_nothing_stored() {
    let local = LocalTransport::new();
    local.set_failure("421 service not available");

    let result = mailer(&local).send(&Message::new("Hi", ""), &["c@d.com"]);

    assert!(result.unwrap_err().is_transport());
    assert!(!local.has_emails());

    local.clear_failure();
    assert!(mailer(&local)
        .send(&Message::new("Hi", ""), &["c@d.com"])
        .is_ok());
}
