//! Wall-clock timestamp prefixing decorator.

use super::content::MessageContent;
use mockable::Clock;

/// Stamp layout: local date-time, whole seconds.
const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Prefixes the wrapped message with the local wall-clock time.
///
/// The clock is read on every [`content`](MessageContent::content) call,
/// not at construction, and the stamp is truncated to whole seconds:
/// `[2026-08-07T13:05:09] <inner content>`.
///
/// Time comes through the [`Clock`] port so tests can freeze it;
/// production chains use [`mockable::DefaultClock`].
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use palimpsest::message::domain::{MessageContent, PlainMessage, TimestampDecorator};
///
/// let message = TimestampDecorator::new(PlainMessage::new("hi"), DefaultClock);
/// assert!(message.content().ends_with("] hi"));
/// ```
#[derive(Debug, Clone)]
pub struct TimestampDecorator<M, C> {
    /// The wrapped message.
    inner: M,
    /// Source of wall-clock time, read on every render.
    clock: C,
}

impl<M, C> TimestampDecorator<M, C> {
    /// Wraps `inner` in the stamping decorator, reading time from `clock`.
    #[must_use]
    pub const fn new(inner: M, clock: C) -> Self {
        Self { inner, clock }
    }

    /// Returns the wrapped message.
    #[must_use]
    pub const fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwraps the decorator, returning the inner message and discarding
    /// the clock.
    #[must_use]
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M, C> MessageContent for TimestampDecorator<M, C>
where
    M: MessageContent,
    C: Clock,
{
    fn content(&self) -> String {
        let stamp = self.clock.local().format(STAMP_FORMAT);
        format!("[{stamp}] {}", self.inner.content())
    }
}
