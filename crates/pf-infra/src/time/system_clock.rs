use std::time::{SystemTime, UNIX_EPOCH};

use pf_core::ports::ClockPort;

/// Wall clock in Unix milliseconds.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        // A clock set before 1970 reads as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }
}
