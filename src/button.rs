//! Debounced button monitor for the shutdown trigger input.
//!
//! Provides [`ButtonMonitor`], which turns noisy falling-edge interrupts
//! from a momentary button into at most one press intent per debounce
//! window. Also defines the [`ButtonInput`] trait for hardware abstraction.

use crate::DEBOUNCE_WINDOW_MS;
use crate::flags::SharedFlags;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Trait for abstracting the button input line.
///
/// Implement this for your input pin. `is_pressed` must return the logical
/// level synchronously; the implementation handles electrical polarity
/// (e.g. a pull-up wired button reads pressed when the pin is low).
pub trait ButtonInput {
    /// Returns true if the button currently reads pressed.
    fn is_pressed(&self) -> bool;
}

/// Debounces edge interrupts and raises press intents for the sequencer.
///
/// Call [`on_falling_edge`](ButtonMonitor::on_falling_edge) from the GPIO
/// interrupt handler. Edges inside the 50 ms debounce window are discarded,
/// and a surviving edge only raises a press intent when no shutdown
/// sequence is in flight and the line still reads pressed once sampled.
///
/// The monitor is owned by the interrupt context; the last accepted event
/// timestamp never crosses the interrupt boundary, so it needs no atomicity.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source and shared flag references
/// * `I` - Time instant type
/// * `B` - Button input implementation type
/// * `T` - Time source implementation type
pub struct ButtonMonitor<'t, I: TimeInstant, B: ButtonInput, T: TimeSource<I>> {
    input: B,
    time_source: &'t T,
    flags: &'t SharedFlags,
    last_event: Option<I>,
}

impl<'t, I: TimeInstant, B: ButtonInput, T: TimeSource<I>> ButtonMonitor<'t, I, B, T> {
    /// Creates a monitor with no accepted events yet.
    pub fn new(input: B, time_source: &'t T, flags: &'t SharedFlags) -> Self {
        Self {
            input,
            time_source,
            flags,
            last_event: None,
        }
    }

    /// Handles one falling-edge interrupt from the button line.
    ///
    /// Mechanical contacts bounce for a few milliseconds around a real
    /// press, producing a burst of edges; only the first edge per 50 ms
    /// window is accepted, and a discarded edge leaves the monitor
    /// untouched. The level re-check guards against an edge latched
    /// mid-bounce after the pin has already settled back high.
    ///
    /// A press while a sequence is running is dropped, not queued. Never
    /// fails; at worst this is a no-op.
    pub fn on_falling_edge(&mut self) {
        let now = self.time_source.now();

        if let Some(last) = self.last_event {
            let since = now.duration_since(last);
            if since.as_micros() < DEBOUNCE_WINDOW_MS * 1_000 {
                return;
            }
        }
        self.last_event = Some(now);

        if !self.flags.is_busy() && self.input.is_pressed() {
            self.flags.raise_press();
        }
    }

    /// Returns the timestamp of the last accepted edge, if any.
    pub fn last_event(&self) -> Option<I> {
        self.last_event
    }
}
