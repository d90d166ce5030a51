//! Prints the chat-message decoration showcase to standard output.
//!
//! The showcase assembles two decoration chains and prints the content
//! after each wrap; see [`palimpsest::demo`] for the transcript layout.
//! A write failure on stdout is fatal and surfaces as the exit status.

use mockable::DefaultClock;
use palimpsest::demo::{self, DemoError};
use std::io;

fn main() -> Result<(), DemoError> {
    let stdout = io::stdout();
    demo::run(&mut stdout.lock(), DefaultClock)
}
