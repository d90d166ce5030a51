//! Chat message content and its decoration chain.
//!
//! This module implements the content capability, the plain leaf message,
//! and the four decorators that layer transformations over it. Chains are
//! assembled bottom-up, innermost first; rendering recurses to the leaf and
//! applies each transform on the way back out.
//!
//! # Example
//!
//! ```
//! use mockable::DefaultClock;
//! use palimpsest::message::domain::{
//!     MessageContent, MessageContentExt, PlainMessage,
//! };
//!
//! let message = PlainMessage::new("  Привіт   світ ")
//!     .compressed()
//!     .timestamped(DefaultClock)
//!     .authored("X");
//!
//! let rendered = message.content();
//! assert!(rendered.ends_with("Привіт світ [Автор: X]"));
//! ```

pub mod domain;

#[cfg(test)]
mod tests;
