//! Controller guarded against overlapping ticks.
//!
//! On the firmware the tick runs in a single interrupt task and can never
//! overlap with itself. Hosts without such a guarantee, e.g. when the tick
//! may be triggered from multiple interrupt sources, should go through
//! `Shared`.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::controller::Controller;
use crate::log;
use crate::output::DesiredOutput;

pub struct Shared<const N: usize, const W: usize> {
    controller: Mutex<RefCell<Controller<N, W>>>,
}

impl<const N: usize, const W: usize> Shared<N, W> {
    #[must_use]
    pub const fn new(controller: Controller<N, W>) -> Self {
        Self {
            controller: Mutex::new(RefCell::new(controller)),
        }
    }

    /// Run a single tick of the controller.
    ///
    /// Returns `None` when another tick is still in progress, in which case
    /// the given input is dropped.
    pub fn tick(&self, raw: [bool; N]) -> Option<DesiredOutput<N>> {
        critical_section::with(|cs| {
            let Ok(mut controller) = self.controller.borrow(cs).try_borrow_mut() else {
                log::debug!("Tick is already running, skipping");
                return None;
            };
            Some(controller.tick(raw))
        })
    }

    /// Access the controller outside of a tick.
    pub fn inspect<R>(&self, f: impl FnOnce(&Controller<N, W>) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let controller = self.controller.borrow(cs).try_borrow().ok()?;
            Some(f(&controller))
        })
    }
}
