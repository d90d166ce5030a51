//! The message content capability and chain-building combinators.
//!
//! Every link in a decoration chain, the leaf message included, implements
//! [`MessageContent`]. Rendering the outermost link recurses to the leaf
//! and applies each transformation on the way back out.

use super::author::AuthorDecorator;
use super::compress::CompressDecorator;
use super::encrypt::EncryptDecorator;
use super::timestamp::TimestampDecorator;
use mockable::Clock;

/// The capability shared by every link in a decoration chain: producing
/// textual content on demand.
///
/// Decorators implement this by delegating to their wrapped message and
/// post-processing the result. Rendering is pure with respect to program
/// state, except that [`TimestampDecorator`] reads its clock at call time.
///
/// # Examples
///
/// ```
/// use palimpsest::message::domain::{EncryptDecorator, MessageContent, PlainMessage};
///
/// let message = EncryptDecorator::new(PlainMessage::new("ab1"));
/// assert_eq!(message.content(), "bc1");
/// ```
pub trait MessageContent {
    /// Renders the full content of this message, transformations included.
    fn content(&self) -> String;
}

/// Chain-building adapters for any [`MessageContent`] value.
///
/// These read left-to-right, innermost first, in the manner of iterator
/// adapters. Each method consumes the receiver and returns the wrapped
/// chain; they are sugar over the decorator constructors.
///
/// # Examples
///
/// ```
/// use palimpsest::message::domain::{MessageContent, MessageContentExt, PlainMessage};
///
/// let signed = PlainMessage::new("hi").encrypted().authored("X");
/// assert_eq!(signed.content(), "ij [Автор: X]");
/// ```
pub trait MessageContentExt: MessageContent {
    /// Wraps this message in an [`EncryptDecorator`].
    fn encrypted(self) -> EncryptDecorator<Self>
    where
        Self: Sized,
    {
        EncryptDecorator::new(self)
    }

    /// Wraps this message in a [`CompressDecorator`].
    fn compressed(self) -> CompressDecorator<Self>
    where
        Self: Sized,
    {
        CompressDecorator::new(self)
    }

    /// Wraps this message in a [`TimestampDecorator`] reading `clock`.
    fn timestamped<C>(self, clock: C) -> TimestampDecorator<Self, C>
    where
        Self: Sized,
        C: Clock,
    {
        TimestampDecorator::new(self, clock)
    }

    /// Wraps this message in an [`AuthorDecorator`] attributing `author`.
    fn authored(self, author: impl Into<String>) -> AuthorDecorator<Self>
    where
        Self: Sized,
    {
        AuthorDecorator::new(self, author)
    }
}

impl<T: MessageContent + ?Sized> MessageContentExt for T {}
