//! The leaf message type terminating every decoration chain.

use super::content::MessageContent;
use serde::{Deserialize, Serialize};

/// A plain chat message holding fixed text.
///
/// `PlainMessage` is the leaf of every decoration chain: it returns its
/// stored text verbatim and applies no transformation.
///
/// # Examples
///
/// ```
/// use palimpsest::message::domain::{MessageContent, PlainMessage};
///
/// let message = PlainMessage::new("Привіт");
/// assert_eq!(message.content(), "Привіт");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainMessage {
    /// The stored message text.
    text: String,
}

impl PlainMessage {
    /// Creates a message from the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the stored text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl MessageContent for PlainMessage {
    fn content(&self) -> String {
        self.text.clone()
    }
}
