// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use kawara_core::application::ports::time::Clock;
use std::sync::Mutex;

/// Clock returning a programmable instant, so timestamp rules can be
/// asserted exactly.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
