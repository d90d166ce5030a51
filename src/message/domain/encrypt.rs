//! Letter-shift scrambling decorator.

use super::content::MessageContent;
use serde::{Deserialize, Serialize};

/// Scrambles the wrapped message by shifting every letter one code point
/// forward.
///
/// Only alphabetic characters move; digits, punctuation, and whitespace
/// pass through unchanged. The shift does not wrap at the end of an
/// alphabet, so `'z'` becomes `'{'`: a toy obfuscation, not a cipher.
///
/// # Examples
///
/// ```
/// use palimpsest::message::domain::{EncryptDecorator, MessageContent, PlainMessage};
///
/// let message = EncryptDecorator::new(PlainMessage::new("ab1"));
/// assert_eq!(message.content(), "bc1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptDecorator<M> {
    /// The wrapped message.
    inner: M,
}

impl<M> EncryptDecorator<M> {
    /// Wraps `inner` in the scrambling decorator.
    #[must_use]
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Returns the wrapped message.
    #[must_use]
    pub const fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwraps the decorator, returning the inner message.
    #[must_use]
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: MessageContent> MessageContent for EncryptDecorator<M> {
    fn content(&self) -> String {
        self.inner.content().chars().map(shift_letter).collect()
    }
}

/// Shifts an alphabetic character one code point forward.
///
/// A successor that is not a valid scalar value leaves the character
/// unchanged; no alphabetic character currently has one.
fn shift_letter(c: char) -> char {
    if c.is_alphabetic() {
        char::from_u32(u32::from(c) + 1).unwrap_or(c)
    } else {
        c
    }
}
