pub mod inputs;
pub mod outputs;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::pac::TIM2;
use hal::prelude::*;
use hal::timer::{Event, Timer};

use klik_control::config::TICK_FREQUENCY;

use inputs::Buttons;
use outputs::Relays;

pub struct System {
    pub tick_timer: Timer<TIM2>,
    pub status_led: LedUser,
    pub buttons: Buttons,
    pub relays: Relays,
}

impl System {
    /// Initialize system abstraction
    ///
    /// All relays are switched off and the tick timer starts firing its
    /// interrupt right away.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        cp.SCB.enable_icache();

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut tick_timer =
            dp.TIM2
                .timer(TICK_FREQUENCY.Hz(), ccdr.peripheral.TIM2, &ccdr.clocks);
        tick_timer.listen(Event::TimeOut);

        let status_led = daisy::board_split_leds!(pins).USER;
        let buttons = Buttons::new([
            pins.GPIO.PIN_B10.into_floating_input().erase(),
            pins.GPIO.PIN_B9.into_floating_input().erase(),
            pins.GPIO.PIN_A9.into_floating_input().erase(),
            pins.GPIO.PIN_D9.into_floating_input().erase(),
        ]);
        let relays = Relays::new([
            pins.GPIO.PIN_A8.into_push_pull_output().erase(),
            pins.GPIO.PIN_A3.into_push_pull_output().erase(),
            pins.GPIO.PIN_A2.into_push_pull_output().erase(),
            pins.GPIO.PIN_B6.into_push_pull_output().erase(),
        ]);

        defmt::info!("System initialized, ticking at {}Hz", TICK_FREQUENCY);

        Self {
            tick_timer,
            status_led,
            buttons,
            relays,
        }
    }
}
