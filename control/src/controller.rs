//! The whole control loop, advanced one tick at a time.

use crate::config::Config;
use crate::debounce::{Debouncer, Edge};
use crate::dispatcher::Dispatcher;
use crate::event::{ButtonId, Event};
use crate::log;
use crate::output::DesiredOutput;
use crate::parser::{self, Scan};
use crate::queue::EventQueue;
use crate::timer::Timer;

/// Controller of `N` buttons and relays, debouncing over `W` samples.
///
/// All the state of the system lives here. The caller is expected to invoke
/// `tick` in a fixed interval and to never run two ticks at once.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controller<const N: usize, const W: usize> {
    buttons: [Debouncer<W>; N],
    queue: EventQueue,
    gap: Timer,
    sequence_gap: u32,
    dispatcher: Dispatcher<N>,
}

impl<const N: usize, const W: usize> Controller<N, W> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            buttons: core::array::from_fn(|_| Debouncer::new()),
            queue: EventQueue::new(),
            gap: Timer::disarmed(),
            sequence_gap: config.sequence_gap,
            dispatcher: Dispatcher::new(config.safety_cutoff),
        }
    }

    /// Process raw input levels, with `true` standing for a pressed button.
    pub fn tick(&mut self, raw: [bool; N]) -> DesiredOutput<N> {
        self.gap.tick();
        self.dispatcher.tick();

        self.sample_buttons(raw);

        if self.gap.take_expired() {
            self.queue.enqueue(Event::SequenceEnd);
        }

        self.parse();

        self.dispatcher.output()
    }

    fn sample_buttons(&mut self, raw: [bool; N]) {
        for (id, (button, raw)) in self.buttons.iter_mut().zip(raw).enumerate() {
            let sample = button.update(raw);
            if sample.rising {
                self.gap.arm(self.sequence_gap);
            }
            match sample.edge {
                Some(Edge::Down) => self.queue.enqueue(Event::Down(id)),
                Some(Edge::Up) => self.queue.enqueue(Event::Up(id)),
                None => (),
            }
        }
    }

    fn parse(&mut self) {
        match parser::scan(&self.queue) {
            Scan::Incomplete => {}
            Scan::Malformed { consumed } => {
                log::info!("Discarding malformed sequence of {:?} events", consumed);
                self.dispatcher.reset();
                self.queue.dequeue_front(consumed);
            }
            Scan::Resolved { action, consumed } => {
                log::info!("Recognized {:?}", action);
                self.dispatcher.dispatch(action);
                self.queue.dequeue_front(consumed);
            }
        }
    }

    pub fn output(&self) -> DesiredOutput<N> {
        self.dispatcher.output()
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn is_pressed(&self, button: ButtonId) -> bool {
        self.buttons.get(button).map_or(false, Debouncer::pressed)
    }

    pub fn is_cutoff_armed(&self) -> bool {
        self.dispatcher.is_cutoff_armed()
    }
}

impl<const N: usize, const W: usize> Default for Controller<N, W> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
