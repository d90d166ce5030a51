//! Palimpsest: layered chat-message decoration.
//!
//! This crate demonstrates the decorator pattern applied to chat-message
//! text: a plain message is wrapped by decorators that each contribute one
//! transformation (letter-shift scrambling, whitespace compression,
//! timestamp prefixing, author attribution) while preserving a uniform
//! content contract.
//!
//! # Architecture
//!
//! - **Domain**: pure message types and decorators with no infrastructure
//!   dependencies beyond the clock port
//! - **Demo**: the console showcase that assembles two decoration chains
//!   and writes the labelled transcript to an injected sink
//!
//! # Modules
//!
//! - [`message`]: the content capability, the leaf message, and the four
//!   decorators
//! - [`demo`]: the showcase runner backing the `chat_demo` binary
//!
//! # Example
//!
//! ```
//! use palimpsest::message::domain::{
//!     AuthorDecorator, EncryptDecorator, MessageContent, PlainMessage,
//! };
//!
//! let plain = PlainMessage::new("hi");
//! let signed = AuthorDecorator::new(EncryptDecorator::new(plain), "X");
//! assert_eq!(signed.content(), "ij [Автор: X]");
//! ```

pub mod demo;
pub mod message;
