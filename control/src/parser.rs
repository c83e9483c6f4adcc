//! Recognize press sequences at the front of the event queue.
//!
//! A well formed sequence consists of alternating presses and releases of a
//! single button, closed by `SequenceEnd`:
//!
//! ```text
//! Down(b) Up(b) Down(b) Up(b) SequenceEnd   -> short press, 2 presses
//! Down(b) Up(b) Down(b) SequenceEnd         -> long press, 2 presses
//! ```
//!
//! Anything else at the front of the queue is malformed and gets discarded.

use crate::action::Action;
use crate::event::Event;
use crate::queue::EventQueue;

/// Result of scanning the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scan {
    /// The queue is empty or the sequence is still being entered.
    Incomplete,
    /// The front of the queue does not form a sequence. The given number of
    /// events should be discarded.
    Malformed { consumed: usize },
    /// A sequence was recognized in the given number of events.
    Resolved { action: Action, consumed: usize },
}

#[must_use]
pub fn scan(queue: &EventQueue) -> Scan {
    let button = match queue.get(0) {
        None => return Scan::Incomplete,
        Some(Event::Down(button)) => button,
        Some(Event::Up(_) | Event::SequenceEnd) => return Scan::Malformed { consumed: 1 },
    };

    let mut presses = 1;
    for index in 1..queue.len() {
        let release_expected = index % 2 == 1;
        match queue.get(index) {
            None => break,
            Some(Event::SequenceEnd) => {
                let action = if release_expected {
                    Action::LongPress { presses, button }
                } else {
                    Action::ShortPress { presses, button }
                };
                return Scan::Resolved {
                    action,
                    consumed: index + 1,
                };
            }
            Some(Event::Up(b)) if release_expected && b == button => {}
            Some(Event::Down(b)) if !release_expected && b == button => presses += 1,
            Some(_) => return Scan::Malformed { consumed: index + 1 },
        }
    }

    Scan::Incomplete
}
