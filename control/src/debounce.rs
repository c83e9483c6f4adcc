//! Turn noisy button contacts into stable presses and releases.

/// Change of the debounced state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Down,
    Up,
}

/// Outcome of a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Debounced state changed during this sample.
    pub edge: Option<Edge>,
    /// A set sample replaced an unset one in the window, ignoring debouncing.
    pub rising: bool,
}

/// Sliding window majority vote with hysteresis.
///
/// The last `W` raw samples are kept in a circular buffer together with
/// their running sum. The button is registered as pressed once the sum
/// climbs above `HIGH` and as released once it falls below `LOW`. The gap
/// between the two thresholds prevents flapping when the raw signal hovers
/// around the middle.
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer<const W: usize> {
    buffer: [bool; W],
    pointer: usize,
    sum: usize,
    pressed: bool,
}

impl<const W: usize> Default for Debouncer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> Debouncer<W> {
    /// The sum must fall below this to register a release.
    pub const LOW: usize = 4 * W / 9;

    /// The sum must climb above this to register a press.
    pub const HIGH: usize = (10 * W + 9) / 18;

    const VALID_WINDOW: () = assert!(
        Self::LOW >= 1 && Self::LOW < Self::HIGH && Self::HIGH < W,
        "debounce window must hold at least 3 samples"
    );

    #[must_use]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_WINDOW;
        Self {
            buffer: [false; W],
            pointer: 0,
            sum: 0,
            pressed: false,
        }
    }

    pub fn update(&mut self, raw: bool) -> Sample {
        let oldest = self.buffer[self.pointer];
        self.buffer[self.pointer] = raw;
        self.pointer = (self.pointer + 1) % W;

        // The sum tracks exactly the number of set samples, so it can never
        // underflow or exceed the window.
        let rising = raw && !oldest;
        if rising {
            self.sum += 1;
        } else if oldest && !raw {
            self.sum -= 1;
        }

        let edge = if self.sum > Self::HIGH && !self.pressed {
            self.pressed = true;
            Some(Edge::Down)
        } else if self.sum < Self::LOW && self.pressed {
            self.pressed = false;
            Some(Edge::Up)
        } else {
            None
        };

        Sample { edge, rising }
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn sum(&self) -> usize {
        self.sum
    }
}
