//! Behavioural integration tests for the decoration showcase.
//!
//! These tests exercise the complete flow from chain assembly through
//! transcript printing, verifying that the published console output is
//! reproduced byte for byte under a frozen clock.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use palimpsest::demo;
use palimpsest::message::domain::{MessageContent, MessageContentExt, PlainMessage};

/// A clock frozen at a fixed local time so the transcript is deterministic.
struct FrozenClock(DateTime<Local>);

impl FrozenClock {
    fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let frozen = Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .expect("fixture time should be unambiguous in the local zone");
        Self(frozen)
    }
}

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

const SEPARATOR: &str = "----------------------------------------";

// ============================================================================
// Scenario: The showcase prints the full two-chain transcript
// ============================================================================

/// With a frozen clock the transcript is fully deterministic: four numbered
/// blocks for the layered chain, then the compression combination under its
/// own banner.
#[test]
fn showcase_prints_the_published_transcript() {
    let clock = FrozenClock::at(2026, 8, 7, 13, 5, 9);
    let mut sink = Vec::new();

    demo::run(&mut sink, clock).expect("demo should print");

    let transcript = String::from_utf8(sink).expect("transcript should be UTF-8");
    let stamp = "[2026-08-07T13:05:09]";
    let scrambled = "  Рсйгїу,   чж    вбипгж   рпгїепнмжооѐ. ";
    let expected = format!(
        "1. Базове повідомлення:\n\
         '  Привіт,   це    базове   повідомлення. '\n\
         {SEPARATOR}\n\
         2. Після шифрування:\n\
         '{scrambled}'\n\
         {SEPARATOR}\n\
         3. Після додавання дати:\n\
         '{stamp} {scrambled}'\n\
         {SEPARATOR}\n\
         4. Фінальне повідомлення (з автором):\n\
         '{stamp} {scrambled} [Автор: Бережняк І.Ю.]'\n\
         {SEPARATOR}\n\
         \n\
         *** Інша комбінація (Стискання + Автор) ***\n\
         Базове:\n\
         '  Ще   одне    повідомлення. '\n\
         Після стискання:\n\
         'Ще одне повідомлення.'\n\
         Фінальне (стиснуте + автор):\n\
         'Ще одне повідомлення. [Автор: Бережняк І.Ю.]'\n"
    );
    assert_eq!(transcript, expected);
}

// ============================================================================
// Scenario: Composition order is visible in the rendered content
// ============================================================================

/// Scrambling before attribution keeps the attribution readable; attribution
/// before scrambling shifts the suffix too.
#[test]
fn composition_order_is_visible_end_to_end() {
    let readable = PlainMessage::new("hi").encrypted().authored("X");
    let scrambled = PlainMessage::new("hi").authored("X").encrypted();

    assert_eq!(readable.content(), "ij [Автор: X]");
    assert_eq!(scrambled.content(), "ij [Бгупс: Y]");
    assert_ne!(readable.content(), scrambled.content());
}

// ============================================================================
// Scenario: Repeated rendering of a frozen chain is stable
// ============================================================================

/// A chain is immutable after assembly; with a frozen clock every render of
/// the same chain produces identical output.
#[test]
fn frozen_chain_renders_identically_every_time() {
    let clock = FrozenClock::at(2026, 8, 7, 13, 5, 9);
    let message = PlainMessage::new("hi").timestamped(clock).authored("X");

    assert_eq!(message.content(), message.content());
    assert_eq!(message.content(), "[2026-08-07T13:05:09] hi [Автор: X]");
}
