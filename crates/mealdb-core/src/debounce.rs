//! Debounce
//!
//! Cancellable one-shot timers behind a driver trait, and a debouncer that
//! restarts its timer on every trigger so only the last value in a burst
//! reaches the action.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Starts and cancels one-shot timers
pub trait TimerDriver {
    type Handle;

    /// Run `callback` once after `delay`
    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Stop a timer that may or may not have fired already
    fn cancel(&self, handle: Self::Handle);
}

/// Runs `action` with the latest value once triggers stop for `delay`
///
/// Dropping the debouncer cancels a pending run.
pub struct Debouncer<D: TimerDriver, T> {
    driver: D,
    delay: Duration,
    pending: RefCell<Option<D::Handle>>,
    action: Rc<dyn Fn(T)>,
}

impl<D: TimerDriver, T: 'static> Debouncer<D, T> {
    pub fn new(driver: D, delay: Duration, action: impl Fn(T) + 'static) -> Self {
        Self {
            driver,
            delay,
            pending: RefCell::new(None),
            action: Rc::new(action),
        }
    }

    /// Restart the quiet period with a new value
    pub fn trigger(&self, value: T) {
        self.cancel();
        let action = Rc::clone(&self.action);
        let handle = self
            .driver
            .start(self.delay, Box::new(move || action(value)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending value, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.driver.cancel(handle);
        }
    }
}

impl<D: TimerDriver, T> Drop for Debouncer<D, T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            self.driver.cancel(handle);
        }
    }
}
