use klik_control::config::BUTTONS;
use klik_control::DesiredOutput;

use crate::system::hal::gpio;

pub type Pin = gpio::ErasedPin<gpio::Output>;

/// Relay drivers, one per button.
pub struct Relays {
    pins: [Pin; BUTTONS],
}

impl Relays {
    /// Take over the pins and switch all relays off.
    #[must_use]
    pub fn new(pins: [Pin; BUTTONS]) -> Self {
        let mut relays = Self { pins };
        relays.set(&DesiredOutput::default());
        relays
    }

    pub fn set(&mut self, desired: &DesiredOutput<BUTTONS>) {
        for (pin, on) in self.pins.iter_mut().zip(desired.relays) {
            pin.set_state(on.into());
        }
    }
}
