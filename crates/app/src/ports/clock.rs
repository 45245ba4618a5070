//! Clock port: current time for cookie expiry.

use daytrader_domain::session::Timestamp;

/// Source of the current UTC time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the host (`Date.now()` in the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}
