//! Message tests.

use mailsend::Message;

#[test]
fn new_sets_subject_and_text() {
    let message = Message::new("Hello, Avengers!", "Assemble.");
    assert_eq!(message.subject(), "Hello, Avengers!");
    assert_eq!(message.text(), "Assemble.");
    assert!(message.attachments().is_empty());
}

#[test]
fn empty_subject_and_body_are_allowed() {
    let message = Message::new("", "");
    assert_eq!(message.subject(), "");
    assert_eq!(message.text(), "");
}

#[test]
fn default_is_empty() {
    assert_eq!(Message::default(), Message::new("", ""));
}

#[test]
fn unicode_content_is_preserved() {
    let message = Message::new("Grüße", "こんにちは\nzweite Zeile");
    assert_eq!(message.subject(), "Grüße");
    assert!(message.text().contains('\n'));
}

#[test]
fn message_serializes() {
    let message = Message::new("Hi", "body");
    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json["subject"], "Hi");
    assert_eq!(json["text"], "body");
    assert_eq!(json["attachments"], serde_json::json!([]));
}
