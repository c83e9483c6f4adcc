//! Raw button inputs.
//!
//! No filtering happens here, debouncing is left to the controller.

use klik_control::config::BUTTONS;

use crate::system::hal::gpio;

pub type Pin = gpio::ErasedPin<gpio::Input>;

pub struct Buttons {
    pins: [Pin; BUTTONS],
}

impl Buttons {
    #[must_use]
    pub fn new(pins: [Pin; BUTTONS]) -> Self {
        Self { pins }
    }

    /// Read levels of all buttons, `true` meaning pressed.
    ///
    /// Buttons pull their pins to the ground when pressed.
    pub fn sample(&self) -> [bool; BUTTONS] {
        let mut snapshot = [false; BUTTONS];
        for (pressed, pin) in snapshot.iter_mut().zip(self.pins.iter()) {
            *pressed = pin.is_low();
        }
        snapshot
    }
}
