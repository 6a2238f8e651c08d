use crate::core::clock::{FixedClock, SystemClock};
use crate::domain::ports::Clock;
use crate::utils::error::{CalcError, Result};

/// Computes ages from `YYYY-MM-DD` birthdates by year subtraction.
///
/// Month and day are ignored: someone born on 2000-12-31 is reported as
/// `current_year - 2000` for the whole of the current year.
#[derive(Debug, Clone, Default)]
pub struct AgeCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl AgeCalculator<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl AgeCalculator<FixedClock> {
    pub fn with_reference_year(year: i32) -> Self {
        Self {
            clock: FixedClock(year),
        }
    }
}

impl<C: Clock> AgeCalculator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn get_age(&self, birthdate: &str) -> Result<i32> {
        let segment = year_segment(birthdate).ok_or_else(|| CalcError::MissingYear {
            input: birthdate.to_string(),
        })?;

        let year: i32 = segment.parse().map_err(|source| CalcError::InvalidYear {
            input: birthdate.to_string(),
            source,
        })?;

        let current_year = self.clock.current_year();
        let age = current_year
            .checked_sub(year)
            .ok_or_else(|| CalcError::AgeOutOfRange {
                input: birthdate.to_string(),
                current_year,
            })?;
        tracing::debug!(birthdate, year, current_year, age, "computed age");
        Ok(age)
    }

    /// Like [`get_age`](Self::get_age), but reports a birthdate without any
    /// year segment as `-1` instead of an error. Parse errors still propagate.
    pub fn get_age_or_sentinel(&self, birthdate: &str) -> Result<i32> {
        match self.get_age(birthdate) {
            Err(CalcError::MissingYear { .. }) => Ok(-1),
            other => other,
        }
    }
}

/// First hyphen-delimited segment, with trailing empty segments dropped.
///
/// An empty input is one empty segment; an input made only of hyphens has none.
fn year_segment(birthdate: &str) -> Option<&str> {
    if !birthdate.is_empty() && birthdate.split('-').all(str::is_empty) {
        return None;
    }
    birthdate.split('-').next()
}
