//! Shared test infrastructure for shutdown-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use shutdown_sequencer::{
    ButtonInput, LedDriver, LedPattern, POLL_PERIOD_MS, ShutdownSequencer, TimeDuration,
    TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockClock {
    now_micros: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now_micros: Cell::new(0),
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.now_micros.get() / 1_000
    }

    pub fn advance_millis(&self, millis: u64) {
        self.now_micros.set(self.now_micros.get() + millis * 1_000);
    }

    pub fn set_millis(&self, millis: u64) {
        self.now_micros.set(millis * 1_000);
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        TestInstant(self.now_micros.get())
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Mock button input with controllable logical level
pub struct MockButton {
    level: Cell<bool>,
}

impl MockButton {
    /// Creates a button that reads pressed.
    pub fn pressed() -> Self {
        Self {
            level: Cell::new(true),
        }
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.level.set(pressed);
    }
}

impl ButtonInput for &MockButton {
    fn is_pressed(&self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Mock LEDs
// ============================================================================

/// Mock LED bank that records all applied patterns for testing
pub struct MockLeds {
    history: RefCell<heapless::Vec<LedPattern, 32>>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            history: RefCell::new(heapless::Vec::new()),
        }
    }

    /// The pattern currently driven onto the LEDs.
    pub fn current(&self) -> Option<LedPattern> {
        self.history.borrow().last().copied()
    }

    /// Every pattern applied so far, oldest first.
    pub fn history(&self) -> heapless::Vec<LedPattern, 32> {
        self.history.borrow().clone()
    }
}

impl LedDriver for &MockLeds {
    fn apply(&mut self, pattern: LedPattern) {
        let _ = self.history.borrow_mut().push(pattern);
    }
}

// ============================================================================
// Idle Loop / Alarm Emulation
// ============================================================================

/// A pending one-shot alarm deadline, in microseconds of mock time.
pub type AlarmSlot = Option<u64>;

/// Emulates the platform idle loop and alarm facility up to `target_ms`.
///
/// Advances mock time in poll-period steps; at each step any due alarm
/// fires first (scheduling its successor), then the sequencer is polled
/// and a returned delay is turned into a new alarm deadline.
pub fn run_to(
    clock: &MockClock,
    sequencer: &mut ShutdownSequencer<TestDuration, &MockLeds>,
    alarm: &mut AlarmSlot,
    target_ms: u64,
) {
    while clock.now_millis() < target_ms {
        let step = POLL_PERIOD_MS.min(target_ms - clock.now_millis());
        clock.advance_millis(step);

        if let Some(deadline) = *alarm {
            if clock.now_micros.get() >= deadline {
                *alarm = None;
                if let Some(delay) = sequencer.on_alarm() {
                    *alarm = Some(deadline + delay.as_micros());
                }
            }
        }

        if let Some(delay) = sequencer.poll() {
            *alarm = Some(clock.now_micros.get() + delay.as_micros());
        }
    }
}
