//! Time abstraction traits for platform-agnostic timing.
//!
//! Debounce decisions compare microsecond timestamps, so the duration trait
//! is microsecond-centric. Implement [`TimeSource`] for your platform's
//! monotonic timer; the `fugit` and `std` features provide ready-made
//! implementations for common instant types.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds.
    fn from_micros(micros: u64) -> Self;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self {
        Self::from_micros(millis * 1_000)
    }
}

/// Trait abstraction for instant types.
///
/// Instants only need to measure elapsed time; the sequencer never adds
/// durations back onto an instant.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

#[cfg(feature = "fugit")]
mod fugit_impls {
    use super::{TimeDuration, TimeInstant};
    use fugit::{MicrosDurationU64, TimerInstantU64};

    impl TimeDuration for MicrosDurationU64 {
        const ZERO: Self = MicrosDurationU64::from_ticks(0);

        fn as_micros(&self) -> u64 {
            self.to_micros()
        }

        fn from_micros(micros: u64) -> Self {
            MicrosDurationU64::micros(micros)
        }
    }

    impl TimeInstant for TimerInstantU64<1_000_000> {
        type Duration = MicrosDurationU64;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            let ticks = self.ticks().saturating_sub(earlier.ticks());
            MicrosDurationU64::from_ticks(ticks)
        }
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::{TimeDuration, TimeInstant, TimeSource};

    impl TimeDuration for core::time::Duration {
        const ZERO: Self = core::time::Duration::ZERO;

        fn as_micros(&self) -> u64 {
            core::time::Duration::as_micros(self) as u64
        }

        fn from_micros(micros: u64) -> Self {
            core::time::Duration::from_micros(micros)
        }
    }

    impl TimeInstant for std::time::Instant {
        type Duration = core::time::Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            std::time::Instant::duration_since(self, earlier)
        }
    }

    /// Time source backed by the OS monotonic clock, for host-side use.
    #[derive(Debug, Default)]
    pub struct StdClock;

    impl TimeSource<std::time::Instant> for StdClock {
        fn now(&self) -> std::time::Instant {
            std::time::Instant::now()
        }
    }
}

#[cfg(feature = "std")]
pub use std_impls::StdClock;
