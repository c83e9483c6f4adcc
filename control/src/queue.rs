//! Bounded queue of events waiting to be parsed.

use heapless::Vec;

use crate::config::QUEUE_CAPACITY;
use crate::event::Event;
use crate::log;

/// Ordered queue of events, oldest in front.
///
/// Occupied slots always form a prefix, so free slots are contiguous at the
/// tail. Reading past the prefix returns `None`.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventQueue {
    queue: Vec<Event, QUEUE_CAPACITY>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the event after the last occupied slot.
    ///
    /// If the queue is full, the event is lost.
    pub fn enqueue(&mut self, event: Event) {
        if self.queue.push(event).is_err() {
            log::debug!("Queue full, dropping {:?}", event);
        }
    }

    /// Remove `n` events from the front, shifting the rest forward.
    pub fn dequeue_front(&mut self, n: usize) {
        let n = n.min(self.queue.len());
        if n == 0 {
            return;
        }
        let remaining = self.queue.len() - n;
        self.queue.rotate_left(n);
        self.queue.truncate(remaining);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Event> {
        self.queue.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(events: &[Event]) -> EventQueue {
        let mut queue = EventQueue::new();
        for event in events {
            queue.enqueue(*event);
        }
        queue
    }

    #[test]
    fn when_events_are_enqueued_they_keep_their_order() {
        let queue = queue_of(&[Event::Down(1), Event::Up(1), Event::SequenceEnd]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.get(0), Some(Event::Down(1)));
        assert_eq!(queue.get(1), Some(Event::Up(1)));
        assert_eq!(queue.get(2), Some(Event::SequenceEnd));
        assert_eq!(queue.get(3), None);
    }

    #[test]
    fn when_front_is_dequeued_rest_shifts_forward() {
        let mut queue = queue_of(&[Event::Down(0), Event::Up(1), Event::Down(2)]);
        queue.dequeue_front(2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(0), Some(Event::Down(2)));
        assert_eq!(queue.get(1), None);
    }

    #[test]
    fn when_zero_is_dequeued_nothing_changes() {
        let mut queue = queue_of(&[Event::Down(0), Event::Up(0)]);
        queue.dequeue_front(0);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.get(0), Some(Event::Down(0)));
    }

    #[test]
    fn when_fully_drained_next_event_lands_in_first_slot() {
        let mut queue = queue_of(&[Event::Down(3), Event::Up(3), Event::SequenceEnd]);
        queue.dequeue_front(3);
        assert!(queue.is_empty());
        for i in 0..QUEUE_CAPACITY {
            assert_eq!(queue.get(i), None);
        }

        queue.enqueue(Event::Down(2));
        assert_eq!(queue.get(0), Some(Event::Down(2)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn when_more_than_length_is_dequeued_it_empties() {
        let mut queue = queue_of(&[Event::Down(0)]);
        queue.dequeue_front(5);
        assert!(queue.is_empty());
    }

    #[test]
    fn when_full_new_events_are_dropped() {
        let mut queue = EventQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            queue.enqueue(Event::Down(0));
        }
        assert!(queue.is_full());

        queue.enqueue(Event::SequenceEnd);
        assert_eq!(queue.len(), QUEUE_CAPACITY);
        assert!(queue.iter().all(|e| *e == Event::Down(0)));
    }
}
