#![no_main]
#![no_std]

use klik_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true)]
mod app {
    use daisy::led::{Led, LedUser};
    use stm32h7xx_hal::pac::TIM2;
    use stm32h7xx_hal::timer::Timer;

    use klik_control::config::{BUTTONS, DEBOUNCE_WINDOW};
    use klik_control::{Config, Controller};
    use klik_firmware::system::inputs::Buttons;
    use klik_firmware::system::outputs::Relays;
    use klik_firmware::system::System;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        tick_timer: Timer<TIM2>,
        status_led: LedUser,
        buttons: Buttons,
        relays: Relays,
        controller: Controller<BUTTONS, DEBOUNCE_WINDOW>,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let config = Config::default();
        defmt::info!("Starting with {}", config);

        (
            Shared {},
            Local {
                tick_timer: system.tick_timer,
                status_led: system.status_led,
                buttons: system.buttons,
                relays: system.relays,
                controller: Controller::new(config),
            },
            init::Monotonics(),
        )
    }

    // Being the only task bound to the timer, the tick can never preempt
    // itself.
    #[task(binds = TIM2, local = [tick_timer, status_led, buttons, relays, controller], priority = 2)]
    fn tick(cx: tick::Context) {
        cx.local.tick_timer.clear_irq();

        let raw = cx.local.buttons.sample();
        let desired = cx.local.controller.tick(raw);
        cx.local.relays.set(&desired);

        if desired.any_on() {
            cx.local.status_led.on();
        } else {
            cx.local.status_led.off();
        }
    }
}
