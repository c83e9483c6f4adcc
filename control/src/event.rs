//! Events passed from the debouncer and timers to the sequence parser.

/// Index of a button, and of the relay paired with it.
pub type ButtonId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The button became pressed after debouncing.
    Down(ButtonId),
    /// The button became released after debouncing.
    Up(ButtonId),
    /// No raw press arrived for the whole sequence gap.
    SequenceEnd,
}
