//! Lock-free flags shared between the button interrupt and the main context.
//!
//! The interrupt handler and the polling/alarm side communicate through two
//! independent booleans, each with a single designated writer role:
//!
//! - **press intent** — raised by the interrupt handler, consumed by the
//!   arming step of the polling loop.
//! - **busy** — set by the arming step, cleared by the terminal transition
//!   of the shutdown chain; the interrupt handler only reads it.
//!
//! No compound state crosses the boundary, so plain atomics suffice and
//! nothing ever blocks.

use core::sync::atomic::{AtomicBool, Ordering};

/// Press-intent and busy flags shared with the interrupt context.
///
/// Designed to live in a `static` so both the interrupt handler and the
/// main context can reference it:
///
/// ```
/// use shutdown_sequencer::SharedFlags;
///
/// static FLAGS: SharedFlags = SharedFlags::new();
/// ```
#[derive(Debug)]
pub struct SharedFlags {
    press_intent: AtomicBool,
    busy: AtomicBool,
}

impl SharedFlags {
    /// Creates flags in the idle state: no pending press, not busy.
    pub const fn new() -> Self {
        Self {
            press_intent: AtomicBool::new(false),
            busy: AtomicBool::new(false),
        }
    }

    /// Raises the press intent. Called from the interrupt handler.
    pub fn raise_press(&self) {
        self.press_intent.store(true, Ordering::Release);
    }

    /// Returns true if a press is pending, without consuming it.
    pub fn press_pending(&self) -> bool {
        self.press_intent.load(Ordering::Acquire)
    }

    /// Consumes a pending press intent, returning whether one was pending.
    pub fn take_press(&self) -> bool {
        self.press_intent.swap(false, Ordering::AcqRel)
    }

    /// Returns true while a shutdown sequence is in progress.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Marks a sequence as in progress. Called by the arming step.
    pub fn set_busy(&self) {
        self.busy.store(true, Ordering::Release);
    }

    /// Marks the sequence as finished. Called by the terminal transition.
    pub fn clear_busy(&self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl Default for SharedFlags {
    fn default() -> Self {
        Self::new()
    }
}
