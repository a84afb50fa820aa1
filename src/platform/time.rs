//! Wall clock on the web

use crate::sim::Clock;

/// `Date.now()` in milliseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct DateClock;

impl Clock for DateClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
