//! Shutdown sequencer: arming and the alarm-driven transition chain.
//!
//! Provides [`ShutdownSequencer`], which arms on a consumed press intent
//! and then steps the three-LED shutdown chain one alarm at a time. Also
//! defines the [`LedDriver`] trait for hardware abstraction.

use crate::SEQUENCE_INTERVAL_MS;
use crate::flags::SharedFlags;
use crate::time::TimeDuration;
use crate::types::{LedPattern, SequenceState};
use core::marker::PhantomData;

/// Trait for abstracting the three indicator output lines.
///
/// Implement this for your LED hardware (GPIO, shift register, etc.).
/// Handle any hardware errors internally - this method cannot fail.
pub trait LedDriver {
    /// Drives each output line to the given level.
    fn apply(&mut self, pattern: LedPattern);
}

/// Drives the staged shutdown sequence across three LEDs.
///
/// The sequencer has two entry points, matching the two execution contexts
/// that drive it:
///
/// - [`poll`](ShutdownSequencer::poll) from the idle loop, at a short fixed
///   cadence (see [`POLL_PERIOD_MS`](crate::POLL_PERIOD_MS)). When a press
///   intent is pending and no sequence is running it arms: all LEDs on,
///   busy raised, and the returned delay must be turned into a one-shot
///   alarm by the caller.
/// - [`on_alarm`](ShutdownSequencer::on_alarm) from the alarm callback.
///   Each firing applies exactly one transition and requests the next alarm
///   until the chain reaches idle, which clears busy and re-enables the
///   button.
///
/// Returning the delay instead of owning a scheduler keeps the alarm
/// facility behind the platform boundary and makes the chain host-testable.
/// Successive firings stay strictly ordered because each transition alone
/// requests its successor; once armed, a sequence always runs to
/// completion.
///
/// # Type Parameters
/// * `'t` - Lifetime of the shared flag reference
/// * `D` - Duration type handed to the platform's alarm facility
/// * `L` - LED driver implementation type
pub struct ShutdownSequencer<'t, D: TimeDuration, L: LedDriver> {
    leds: L,
    flags: &'t SharedFlags,
    state: SequenceState,
    _duration: PhantomData<D>,
}

impl<'t, D: TimeDuration, L: LedDriver> ShutdownSequencer<'t, D, L> {
    /// Creates an idle sequencer with all LEDs turned off.
    pub fn new(mut leds: L, flags: &'t SharedFlags) -> Self {
        leds.apply(LedPattern::ALL_OFF);

        Self {
            leds,
            flags,
            state: SequenceState::Idle,
            _duration: PhantomData,
        }
    }

    /// Services one idle-loop iteration, arming a sequence if one is due.
    ///
    /// # Returns
    /// * `Some(delay)` - A sequence was armed; schedule a one-shot alarm
    ///   after `delay` and call [`on_alarm`](ShutdownSequencer::on_alarm)
    ///   when it fires
    /// * `None` - Nothing to do (no pending press, or a sequence is
    ///   already running)
    pub fn poll(&mut self) -> Option<D> {
        if self.flags.is_busy() || !self.flags.press_pending() {
            return None;
        }

        // Raise busy before consuming the intent so an interrupt landing
        // between the two sees the sequence as already in flight.
        self.flags.set_busy();
        self.flags.take_press();

        self.state = SequenceState::AllOn;
        self.leds.apply(LedPattern::ALL_ON);
        Some(D::from_millis(SEQUENCE_INTERVAL_MS))
    }

    /// Handles one alarm firing, applying a single transition.
    ///
    /// # Returns
    /// * `Some(delay)` - Chain continues; schedule the next one-shot alarm
    /// * `None` - Chain finished (busy cleared), or spurious firing while
    ///   idle
    pub fn on_alarm(&mut self) -> Option<D> {
        let transition = self.state.advance()?;

        self.leds.apply(transition.pattern);
        self.state = transition.next;

        if transition.reschedule {
            Some(D::from_millis(SEQUENCE_INTERVAL_MS))
        } else {
            self.flags.clear_busy();
            None
        }
    }

    /// Returns the current position in the shutdown sequence.
    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Returns true while a sequence is in progress.
    pub fn is_busy(&self) -> bool {
        self.flags.is_busy()
    }
}
