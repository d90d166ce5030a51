//! Console showcase of message decoration chains.
//!
//! Builds two independent chains and prints the content after each wrap so
//! the effect of every layer is visible:
//!
//! 1. plain → scramble → timestamp → author, with numbered headers and a
//!    dashed separator after each block;
//! 2. plain → compress → author, under its own banner.
//!
//! Output goes to an injected sink and time comes through the [`Clock`]
//! port, keeping the transcript byte-for-byte testable. The `chat_demo`
//! binary wires in stdout and the system clock.

use crate::message::domain::{
    AuthorDecorator, CompressDecorator, EncryptDecorator, MessageContent, PlainMessage,
    TimestampDecorator,
};
use mockable::Clock;
use std::io::{self, Write};
use thiserror::Error;

/// Separator line printed after each block of the layered chain.
const SEPARATOR: &str = "----------------------------------------";

/// Author attributed by both chains.
const AUTHOR_NAME: &str = "Бережняк І.Ю.";

/// Base text of the layered chain.
const LAYERED_TEXT: &str = "  Привіт,   це    базове   повідомлення. ";

/// Base text of the compression chain.
const COMPACT_TEXT: &str = "  Ще   одне    повідомлення. ";

/// Errors that can occur while printing the showcase.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing to the output sink failed.
    #[error("failed to write demo output: {0}")]
    Output(#[from] io::Error),
}

/// Prints the full two-chain transcript to `out`, reading time from
/// `clock`.
///
/// # Errors
///
/// Returns [`DemoError::Output`] if writing to `out` fails. Transform
/// rendering itself cannot fail.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
///
/// let mut transcript = Vec::new();
/// palimpsest::demo::run(&mut transcript, DefaultClock).expect("demo should print");
/// assert!(!transcript.is_empty());
/// ```
pub fn run<W, C>(out: &mut W, clock: C) -> Result<(), DemoError>
where
    W: Write,
    C: Clock,
{
    layered_chain(out, clock)?;
    compact_chain(out)?;
    Ok(())
}

/// Chain one: scramble, stamp, and attribute the base message, printing
/// after each wrap.
fn layered_chain<W, C>(out: &mut W, clock: C) -> Result<(), DemoError>
where
    W: Write,
    C: Clock,
{
    let plain = PlainMessage::new(LAYERED_TEXT);
    writeln!(out, "1. Базове повідомлення:\n'{}'", plain.content())?;
    writeln!(out, "{SEPARATOR}")?;

    let scrambled = EncryptDecorator::new(plain);
    writeln!(out, "2. Після шифрування:\n'{}'", scrambled.content())?;
    writeln!(out, "{SEPARATOR}")?;

    let stamped = TimestampDecorator::new(scrambled, clock);
    writeln!(out, "3. Після додавання дати:\n'{}'", stamped.content())?;
    writeln!(out, "{SEPARATOR}")?;

    let signed = AuthorDecorator::new(stamped, AUTHOR_NAME);
    writeln!(out, "4. Фінальне повідомлення (з автором):\n'{}'", signed.content())?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Chain two: compress and attribute a second message, printing after each
/// wrap.
fn compact_chain<W: Write>(out: &mut W) -> Result<(), DemoError> {
    writeln!(out, "\n*** Інша комбінація (Стискання + Автор) ***")?;

    let plain = PlainMessage::new(COMPACT_TEXT);
    writeln!(out, "Базове:\n'{}'", plain.content())?;

    let compressed = CompressDecorator::new(plain);
    writeln!(out, "Після стискання:\n'{}'", compressed.content())?;

    let signed = AuthorDecorator::new(compressed, AUTHOR_NAME);
    writeln!(out, "Фінальне (стиснуте + автор):\n'{}'", signed.content())?;
    Ok(())
}
