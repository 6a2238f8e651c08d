use crate::domain::ports::Clock;
use chrono::{Datelike, Local};

/// Reads the current year from the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock pinned to one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(2024).current_year(), 2024);
    }

    #[test]
    fn test_system_clock_matches_chrono() {
        let before = Local::now().year();
        let year = SystemClock.current_year();
        let after = Local::now().year();
        assert!(year == before || year == after);
    }
}
