//! React to recognized sequences by switching relays.

use crate::action::Action;
use crate::event::ButtonId;
use crate::log;
use crate::output::DesiredOutput;
use crate::timer::Timer;

/// Owner of relay states and the safety cutoff.
///
/// A short press turns its relay on for a limited time, a repeated short
/// press while the relay is on cancels it. A long press turns the relay on
/// without any time limit.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatcher<const N: usize> {
    output: DesiredOutput<N>,
    cutoff: Timer,
    safety_cutoff: u32,
}

impl<const N: usize> Dispatcher<N> {
    #[must_use]
    pub fn new(safety_cutoff: u32) -> Self {
        Self {
            output: DesiredOutput::default(),
            cutoff: Timer::disarmed(),
            safety_cutoff,
        }
    }

    /// Advance the safety cutoff, turning everything off once it runs out.
    pub fn tick(&mut self) {
        self.cutoff.tick();
        if self.cutoff.take_expired() {
            log::info!("Safety cutoff, turning all relays off");
            self.reset();
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ShortPress { button, .. } => {
                if self.cutoff.is_armed() {
                    log::info!("Cancelling active relay");
                    self.cutoff.disarm();
                    self.reset();
                } else {
                    log::info!("Turning relay={:?} on with cutoff", button);
                    self.switch_exclusively(button);
                    self.cutoff.arm(self.safety_cutoff);
                }
            }
            // NOTE: A cutoff armed by an earlier short press keeps running.
            Action::LongPress { button, .. } => {
                log::info!("Turning relay={:?} on", button);
                self.switch_exclusively(button);
            }
        }
    }

    /// Force all relays off.
    pub fn reset(&mut self) {
        self.output = DesiredOutput::default();
    }

    pub fn output(&self) -> DesiredOutput<N> {
        self.output
    }

    pub fn is_cutoff_armed(&self) -> bool {
        self.cutoff.is_armed()
    }

    fn switch_exclusively(&mut self, button: ButtonId) {
        self.reset();
        if let Some(relay) = self.output.relays.get_mut(button) {
            *relay = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(button: ButtonId) -> Action {
        Action::ShortPress { presses: 1, button }
    }

    fn long(button: ButtonId) -> Action {
        Action::LongPress { presses: 1, button }
    }

    #[test]
    fn when_short_pressed_it_turns_relay_on_and_arms_cutoff() {
        let mut dispatcher: Dispatcher<4> = Dispatcher::new(10);
        dispatcher.dispatch(short(2));
        assert_eq!(dispatcher.output().relays, [false, false, true, false]);
        assert!(dispatcher.is_cutoff_armed());
    }

    #[test]
    fn when_short_pressed_while_relay_is_on_it_cancels() {
        let mut dispatcher: Dispatcher<4> = Dispatcher::new(10);
        dispatcher.dispatch(short(2));
        dispatcher.dispatch(short(1));
        assert!(!dispatcher.output().any_on());
        assert!(!dispatcher.is_cutoff_armed());
    }

    #[test]
    fn when_cutoff_runs_out_relay_turns_off() {
        let mut dispatcher: Dispatcher<4> = Dispatcher::new(3);
        dispatcher.dispatch(short(1));
        for _ in 0..3 {
            dispatcher.tick();
            assert!(dispatcher.output().relays[1]);
        }
        dispatcher.tick();
        assert!(!dispatcher.output().any_on());
        assert!(!dispatcher.is_cutoff_armed());
    }

    #[test]
    fn when_long_pressed_it_turns_relay_on_without_cutoff() {
        let mut dispatcher: Dispatcher<4> = Dispatcher::new(3);
        dispatcher.dispatch(long(3));
        assert!(!dispatcher.is_cutoff_armed());
        for _ in 0..100 {
            dispatcher.tick();
        }
        assert_eq!(dispatcher.output().relays, [false, false, false, true]);
    }

    #[test]
    fn when_long_pressed_after_short_press_earlier_cutoff_still_applies() {
        let mut dispatcher: Dispatcher<4> = Dispatcher::new(3);
        dispatcher.dispatch(short(0));
        dispatcher.tick();
        dispatcher.dispatch(long(3));
        assert_eq!(dispatcher.output().relays, [false, false, false, true]);
        assert!(dispatcher.is_cutoff_armed());

        for _ in 0..3 {
            dispatcher.tick();
        }
        assert!(!dispatcher.output().any_on());
    }

    #[test]
    fn when_reset_cutoff_keeps_running() {
        let mut dispatcher: Dispatcher<4> = Dispatcher::new(3);
        dispatcher.dispatch(short(0));
        dispatcher.reset();
        assert!(!dispatcher.output().any_on());
        assert!(dispatcher.is_cutoff_armed());
    }
}
