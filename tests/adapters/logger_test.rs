//! Logger transport tests.

use mailsend::providers::LoggerTransport;
use mailsend::{File, Mailer, Message};

// ============================================================================
// Basic Delivery Tests
// ============================================================================

#[test]
fn send_returns_ok() {
    let mailer = Mailer::new("tony.stark@example.com", "smtp.example.com", 587, "tony", "")
        .unwrap()
        .transport(LoggerTransport::new());

    let result = mailer
        .send(
            &Message::new("Hello, Avengers!", "Hello!"),
            &["steve.rogers@example.com"],
        )
        .unwrap();

    assert!(!result.message_id.is_empty());
}

#[test]
fn send_with_full_logging_returns_ok() {
    let mailer = Mailer::new("tony.stark@example.com", "smtp.example.com", 587, "tony", "")
        .unwrap()
        .transport(LoggerTransport::full());

    let message = Message::new("Hello, Avengers!", "Hello!")
        .with_file(File::new("roster.txt", b"steve\nnatasha\n".to_vec()).unwrap());

    let result = mailer
        .send(
            &message,
            &["steve.rogers@example.com", "bruce.banner@example.com"],
        )
        .unwrap();

    assert!(!result.message_id.is_empty());
}

#[test]
fn message_ids_are_unique() {
    let mailer = Mailer::new("tony.stark@example.com", "smtp.example.com", 587, "tony", "")
        .unwrap()
        .transport(LoggerTransport::new());
    let message = Message::new("Ping", "");

    let first = mailer.send(&message, &["a@example.com"]).unwrap();
    let second = mailer.send(&message, &["a@example.com"]).unwrap();

    assert_ne!(first.message_id, second.message_id);
}
