//! Countdown counted in ticks.

/// Countdown timer, decremented once per tick.
///
/// An armed timer with `n` remaining ticks expires on the `n + 1`-th call to
/// `tick`. The expiry is held until it is observed through `take_expired`,
/// unless the timer gets armed again first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    state: State,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    #[default]
    Disarmed,
    Armed(u32),
    Expired,
}

impl Timer {
    #[must_use]
    pub const fn disarmed() -> Self {
        Self {
            state: State::Disarmed,
        }
    }

    pub fn arm(&mut self, ticks: u32) {
        self.state = State::Armed(ticks);
    }

    pub fn disarm(&mut self) {
        self.state = State::Disarmed;
    }

    pub fn tick(&mut self) {
        self.state = match self.state {
            State::Armed(0) => State::Expired,
            State::Armed(remaining) => State::Armed(remaining - 1),
            state => state,
        };
    }

    /// Returns true exactly once after the countdown ran out, disarming the
    /// timer.
    pub fn take_expired(&mut self) -> bool {
        if self.state == State::Expired {
            self.state = State::Disarmed;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, State::Armed(_))
    }

    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            State::Armed(remaining) => Some(remaining),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_disarmed_it_never_expires() {
        let mut timer = Timer::disarmed();
        for _ in 0..100 {
            timer.tick();
            assert!(!timer.take_expired());
        }
        assert!(!timer.is_armed());
    }

    #[test]
    fn when_armed_it_expires_after_countdown_passes_zero() {
        let mut timer = Timer::disarmed();
        timer.arm(3);
        for remaining in [2, 1, 0] {
            timer.tick();
            assert_eq!(timer.remaining(), Some(remaining));
            assert!(!timer.take_expired());
        }
        timer.tick();
        assert!(!timer.is_armed());
        assert!(timer.take_expired());
    }

    #[test]
    fn expiry_is_observed_only_once() {
        let mut timer = Timer::disarmed();
        timer.arm(0);
        timer.tick();
        assert!(timer.take_expired());
        assert!(!timer.take_expired());
        timer.tick();
        assert!(!timer.take_expired());
    }

    #[test]
    fn when_rearmed_after_expiry_the_expiry_is_lost() {
        let mut timer = Timer::disarmed();
        timer.arm(0);
        timer.tick();
        timer.arm(5);
        assert!(!timer.take_expired());
        assert_eq!(timer.remaining(), Some(5));
    }

    #[test]
    fn when_disarmed_while_running_it_does_not_expire() {
        let mut timer = Timer::disarmed();
        timer.arm(1);
        timer.tick();
        timer.disarm();
        timer.tick();
        timer.tick();
        assert!(!timer.take_expired());
    }
}
