//! System clock - the production time source.

use chrono::{DateTime, FixedOffset, Local};

use blog_core::ports::Clock;

/// Reads the local wall clock, keeping the local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
