#![no_std]
#![no_main]

use klik_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use klik_control::config::BUTTONS;
    use klik_control::DesiredOutput;
    use klik_firmware::system::System;
    use klik_firmware::testlib::wait_until_any_button_is_clicked;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp)
    }

    #[test]
    fn buttons_read_as_released_when_untouched(system: &mut System) {
        defmt::info!("Do not touch any button");
        defmt::assert_eq!(system.buttons.sample(), [false; BUTTONS]);
    }

    #[test]
    fn relays_go_on_one_by_one(system: &mut System) {
        for i in 0..BUTTONS {
            let mut desired = DesiredOutput::default();
            desired.relays[i] = true;
            system.relays.set(&desired);
            defmt::info!("Click any button if only relay {} is on", i + 1);
            wait_until_any_button_is_clicked(&system.buttons);
        }

        system.relays.set(&DesiredOutput::default());
        defmt::info!("Click any button if all relays are off");
        wait_until_any_button_is_clicked(&system.buttons);
        defmt::info!("OK");
    }
}
