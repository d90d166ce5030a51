//! Unit tests for the plain message leaf.

use crate::message::domain::{MessageContent, PlainMessage};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("")]
#[case("hello")]
#[case("2 + 2 = 4")]
#[case("  Привіт,   це    базове   повідомлення. ")]
fn plain_message_returns_text_verbatim(#[case] text: &str) {
    let message = PlainMessage::new(text);
    assert_eq!(message.content(), text);
}

#[rstest]
fn plain_message_exposes_stored_text() {
    let message = PlainMessage::new("hi");
    assert_eq!(message.text(), "hi");
}

#[rstest]
fn plain_message_content_is_stable_across_calls() {
    let message = PlainMessage::new("hi");
    assert_eq!(message.content(), message.content());
}

#[rstest]
fn plain_message_serialises_as_text_object() {
    let message = PlainMessage::new("hi");
    let value = serde_json::to_value(&message).expect("leaf should serialise");
    assert_eq!(value, json!({"text": "hi"}));
}
