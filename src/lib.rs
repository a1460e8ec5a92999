#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LedPattern`**: An on/off pattern across the three indicator LEDs
//! - **`SequenceState`**: Position in the fixed shutdown chain (`Idle -> AllOn -> TwoOn -> OneOn -> Idle`)
//! - **`SharedFlags`**: Lock-free press-intent and busy flags shared with the interrupt context
//! - **`ButtonMonitor`**: Debounces button edge interrupts into press intents
//! - **`ShutdownSequencer`**: Arms on a press intent and steps the chain one alarm at a time
//! - **`ButtonInput`**: Trait to implement for your button input line
//! - **`LedDriver`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your monotonic timer
//!
//! The library never talks to hardware or a scheduler directly: the
//! interrupt handler calls into the monitor, the idle loop polls the
//! sequencer, and every alarm the sequencer needs is returned as a delay
//! for the platform's one-shot alarm facility to honor.

pub mod button;
pub mod flags;
pub mod sequencer;
pub mod time;
pub mod types;

pub use button::{ButtonInput, ButtonMonitor};
pub use flags::SharedFlags;
pub use sequencer::{LedDriver, ShutdownSequencer};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{LedPattern, SequenceState, Transition};

#[cfg(feature = "std")]
pub use time::StdClock;

/// Minimum spacing between accepted button edges, in milliseconds.
///
/// Edges closer together than this are treated as contact bounce of a
/// single press and discarded.
pub const DEBOUNCE_WINDOW_MS: u64 = 50;

/// Delay between successive shutdown transitions, in milliseconds.
pub const SEQUENCE_INTERVAL_MS: u64 = 3000;

/// Recommended idle-loop polling period, in milliseconds.
///
/// The idle loop only sleeps this long between [`ShutdownSequencer::poll`]
/// calls, so it bounds the worst-case latency from an accepted press to the
/// sequence arming. An event-driven wakeup may replace fixed polling as
/// long as that latency stays bounded.
pub const POLL_PERIOD_MS: u64 = 10;
