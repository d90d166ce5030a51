//! Whitespace compression decorator.

use super::content::MessageContent;
use serde::{Deserialize, Serialize};

/// Collapses every maximal whitespace run in the wrapped message to a
/// single space and trims the ends.
///
/// Whitespace is classified per Unicode, so tabs, newlines, and exotic
/// spaces all collapse.
///
/// # Examples
///
/// ```
/// use palimpsest::message::domain::{CompressDecorator, MessageContent, PlainMessage};
///
/// let message = CompressDecorator::new(PlainMessage::new("  a   b "));
/// assert_eq!(message.content(), "a b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressDecorator<M> {
    /// The wrapped message.
    inner: M,
}

impl<M> CompressDecorator<M> {
    /// Wraps `inner` in the compression decorator.
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

impl<M: MessageContent> MessageContent for CompressDecorator<M> {
    fn content(&self) -> String {
        self.inner.content().split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
