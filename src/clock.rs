//! Sources of "today".

use crate::date::LocalDate;
use crate::error::CalendarError;

/// Supplies the current date. Each call is one synchronous read.
pub trait Clock {
    /// # Errors
    /// Returns an error if the underlying time source cannot produce a
    /// supported date.
    fn today(&self) -> Result<LocalDate, CalendarError>;
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: LocalDate,
}

impl FixedClock {
    pub const fn new(date: LocalDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<LocalDate, CalendarError> {
        Ok(self.date)
    }
}

/// The system clock in the local time zone.
#[cfg(feature = "clock")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "clock")]
impl Clock for SystemClock {
    fn today(&self) -> Result<LocalDate, CalendarError> {
        LocalDate::try_from(chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = LocalDate::of(2010, 12, 31).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), Ok(date));
        assert_eq!(clock.today(), Ok(date));
    }

    #[cfg(feature = "clock")]
    #[test]
    fn test_system_clock_matches_chrono() {
        let clock = SystemClock;
        // Retry in case the test straddles midnight.
        for _ in 0..100 {
            let expected = LocalDate::try_from(chrono::Local::now().date_naive()).unwrap();
            if clock.today().unwrap() == expected {
                return;
            }
        }
        panic!("system clock never agreed with chrono");
    }
}
