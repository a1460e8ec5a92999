//! Core types: LED patterns and the shutdown state machine.

/// An on/off pattern across the three indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern {
    /// Green LED level.
    pub green: bool,

    /// Blue LED level.
    pub blue: bool,

    /// Red LED level.
    pub red: bool,
}

impl LedPattern {
    /// All three LEDs lit.
    pub const ALL_ON: Self = Self::new(true, true, true);

    /// Green and blue lit, red off.
    pub const GREEN_BLUE: Self = Self::new(true, true, false);

    /// Green lit only.
    pub const GREEN_ONLY: Self = Self::new(true, false, false);

    /// All three LEDs off.
    pub const ALL_OFF: Self = Self::new(false, false, false);

    /// Creates a pattern from individual LED levels.
    #[inline]
    pub const fn new(green: bool, blue: bool, red: bool) -> Self {
        Self { green, blue, red }
    }
}

/// The current position in the shutdown sequence.
///
/// States advance only in the fixed order
/// `Idle -> AllOn -> TwoOn -> OneOn -> Idle`; there is no way to skip,
/// reverse, or abort a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceState {
    /// No sequence in progress. All LEDs off.
    Idle,
    /// Sequence armed. All three LEDs lit.
    AllOn,
    /// First interval elapsed. Green and blue lit.
    TwoOn,
    /// Second interval elapsed. Green lit only.
    OneOn,
}

/// One step of the shutdown sequence, as produced by [`SequenceState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// State to commit after applying the pattern.
    pub next: SequenceState,

    /// Pattern to apply to the LEDs.
    pub pattern: LedPattern,

    /// Whether another alarm must be scheduled to continue the chain.
    pub reschedule: bool,
}

impl SequenceState {
    /// Returns the LED pattern displayed while in this state.
    pub const fn pattern(self) -> LedPattern {
        match self {
            SequenceState::Idle => LedPattern::ALL_OFF,
            SequenceState::AllOn => LedPattern::ALL_ON,
            SequenceState::TwoOn => LedPattern::GREEN_BLUE,
            SequenceState::OneOn => LedPattern::GREEN_ONLY,
        }
    }

    /// Computes the next step of the shutdown chain.
    ///
    /// Pure transition table; applying the pattern and scheduling the next
    /// alarm are the caller's side effects. Returns `None` from `Idle`,
    /// where an alarm firing is a no-op.
    pub const fn advance(self) -> Option<Transition> {
        match self {
            SequenceState::Idle => None,
            SequenceState::AllOn => Some(Transition {
                next: SequenceState::TwoOn,
                pattern: LedPattern::GREEN_BLUE,
                reschedule: true,
            }),
            SequenceState::TwoOn => Some(Transition {
                next: SequenceState::OneOn,
                pattern: LedPattern::GREEN_ONLY,
                reschedule: true,
            }),
            SequenceState::OneOn => Some(Transition {
                next: SequenceState::Idle,
                pattern: LedPattern::ALL_OFF,
                reschedule: false,
            }),
        }
    }
}
