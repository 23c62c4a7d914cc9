//! Clock adapters.

use freshcart_core::{application::ports::Clock, domain::YearMonth};

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> YearMonth {
        YearMonth::current()
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    month: YearMonth,
}

impl FixedClock {
    pub fn new(month: YearMonth) -> Self {
        Self { month }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> YearMonth {
        self.month
    }
}
