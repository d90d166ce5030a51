//! Author attribution decorator.

use super::content::MessageContent;
use serde::{Deserialize, Serialize};

/// Appends an author attribution to the wrapped message.
///
/// The suffix has the form ` [Автор: <name>]`.
///
/// # Examples
///
/// ```
/// use palimpsest::message::domain::{AuthorDecorator, MessageContent, PlainMessage};
///
/// let message = AuthorDecorator::new(PlainMessage::new("hi"), "Бережняк І.Ю.");
/// assert_eq!(message.content(), "hi [Автор: Бережняк І.Ю.]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDecorator<M> {
    /// The wrapped message.
    inner: M,
    /// Name of the attributed author.
    author: String,
}

impl<M> AuthorDecorator<M> {
    /// Wraps `inner`, attributing it to `author`.
    #[must_use]
    pub fn new(inner: M, author: impl Into<String>) -> Self {
        Self {
            inner,
            author: author.into(),
        }
    }

    /// Returns the attributed author name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
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

impl<M: MessageContent> MessageContent for AuthorDecorator<M> {
    fn content(&self) -> String {
        format!("{} [Автор: {}]", self.inner.content(), self.author)
    }
}
