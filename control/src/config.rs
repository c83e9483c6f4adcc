//! Compile-time configuration of the controller.
//!
//! None of these values can be changed at runtime. The firmware picks them
//! when it builds the controller and they stay fixed until power off.

/// Frequency of the control loop, in ticks per second.
pub const TICK_FREQUENCY: u32 = 1000;

/// Number of buttons, and the number of relays paired with them.
pub const BUTTONS: usize = 4;

/// Number of most recent raw samples kept per button for majority voting.
///
/// With the default tick frequency this covers 20 ms of contact bounce.
pub const DEBOUNCE_WINDOW: usize = 20;

/// Capacity of the event queue between the debouncer and the parser.
pub const QUEUE_CAPACITY: usize = 16;

const DEFAULT_SEQUENCE_GAP_MS: u32 = 400;
const DEFAULT_SAFETY_CUTOFF_MS: u32 = 10 * 60 * 1000;

/// Durations of both timers, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Silence after the last raw press before the sequence is considered
    /// finished.
    pub sequence_gap: u32,
    /// Maximum time a relay stays on after a short press.
    pub safety_cutoff: u32,
}

impl Config {
    #[must_use]
    pub const fn new(sequence_gap: u32, safety_cutoff: u32) -> Self {
        Self {
            sequence_gap,
            safety_cutoff,
        }
    }

    /// Build the configuration from durations in milliseconds.
    ///
    /// Durations are rounded down to whole ticks.
    #[must_use]
    pub const fn from_millis(
        tick_frequency: u32,
        sequence_gap_ms: u32,
        safety_cutoff_ms: u32,
    ) -> Self {
        Self {
            sequence_gap: millis_to_ticks(tick_frequency, sequence_gap_ms),
            safety_cutoff: millis_to_ticks(tick_frequency, safety_cutoff_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_millis(
            TICK_FREQUENCY,
            DEFAULT_SEQUENCE_GAP_MS,
            DEFAULT_SAFETY_CUTOFF_MS,
        )
    }
}

// Widened to avoid overflow of long cutoffs on fast ticks.
const fn millis_to_ticks(tick_frequency: u32, millis: u32) -> u32 {
    let ticks = tick_frequency as u64 * millis as u64 / 1000;
    if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}
