//! Classified button sequences.

use crate::event::ButtonId;

/// Sequence of presses of a single button, closed by the sequence gap.
///
/// The number of presses is carried along, although relays react only to
/// the button and the kind of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// The sequence ended with the button released.
    ShortPress { presses: usize, button: ButtonId },
    /// The sequence ended with the button still held.
    LongPress { presses: usize, button: ButtonId },
}

impl Action {
    pub fn button(&self) -> ButtonId {
        match self {
            Self::ShortPress { button, .. } | Self::LongPress { button, .. } => *button,
        }
    }

    pub fn presses(&self) -> usize {
        match self {
            Self::ShortPress { presses, .. } | Self::LongPress { presses, .. } => *presses,
        }
    }
}
