use chrono::{DateTime, FixedOffset};

/// Clock trait - the single source of "now" for the domain.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current point in time, with its offset.
    fn now(&self) -> DateTime<FixedOffset>;
}
