use klik_control::debounce::{Debouncer, Edge};

use crate::system::inputs::Buttons;

/// Block until any of the buttons gets pressed and released again.
pub fn wait_until_any_button_is_clicked(buttons: &Buttons) {
    let mut debouncer: Debouncer<8> = Debouncer::new();
    loop {
        let any_down = buttons.sample().iter().any(|b| *b);
        if debouncer.update(any_down).edge == Some(Edge::Up) {
            break;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
