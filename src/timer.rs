//! Browser timer driver for the core debouncer

use std::time::Duration;

use gloo_timers::callback::Timeout;
use mealdb_core::TimerDriver;

/// `setTimeout` / `clearTimeout` via gloo
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDriver;

impl TimerDriver for GlooDriver {
    type Handle = Timeout;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }

    fn cancel(&self, handle: Timeout) {
        // Clearing an already-fired timeout is a no-op
        let _ = handle.cancel();
    }
}
