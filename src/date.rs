use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendrical::Calendrical;
use crate::error::CalendarError;
use crate::rule::{FieldRule, FieldValue};
use crate::types::{Day, MonthOfYear, Year, days_in_month};

/// A real date in the proleptic ISO calendar.
///
/// Fields are declared year, month, day so the derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, u8, u8)", into = "(i32, u8, u8)")]
pub struct LocalDate {
    year: Year,
    month: MonthOfYear,
    day: Day,
}

impl LocalDate {
    /// Creates a date from raw numbers.
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` naming the first field outside
    /// its static range, or `CalendarError::InvalidForContext` for the day rule
    /// when the day does not exist in that month of that year.
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        Self::of_month(year, MonthOfYear::of(month)?, day)
    }

    /// Creates a date from a year, an already valid month and a raw day.
    ///
    /// # Errors
    /// See [`of`](Self::of).
    pub fn of_month(year: i32, month: MonthOfYear, day: i32) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let day = Day::new(day)?;
        let length = month.length(year.is_leap());
        if day.get() > length {
            return Err(CalendarError::invalid(
                FieldRule::DayOfMonth,
                format!("{month} {year} has {length} days, got {}", day.get()),
            ));
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    #[inline]
    pub const fn month_of_year(&self) -> MonthOfYear {
        self.month
    }

    #[inline]
    pub const fn day_of_month(&self) -> u8 {
        self.day.get()
    }

    pub(crate) const fn day(&self) -> Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this date's month.
    pub const fn length_of_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month)
    }

    /// One-based position of this date within its year.
    pub const fn day_of_year(&self) -> u16 {
        self.month.first_day_of_year(self.is_leap_year()) + self.day.get() as u16 - 1
    }

    /// Converts to (year, month, day) numbers.
    pub const fn to_columns(&self) -> (i32, u8, u8) {
        (self.year.get(), self.month.number(), self.day.get())
    }
}

impl Calendrical for LocalDate {
    fn query(&self, rule: FieldRule) -> Option<FieldValue> {
        let value = match rule {
            FieldRule::Year => self.year(),
            FieldRule::MonthOfYear => i32::from(self.month.number()),
            FieldRule::MonthOfQuarter => i32::from(self.month.month_of_quarter()),
            FieldRule::DayOfMonth => i32::from(self.day.get()),
            FieldRule::DayOfYear => i32::from(self.day_of_year()),
            FieldRule::HourOfDay | FieldRule::MinuteOfHour => return None,
        };
        rule.validate(value).ok()
    }
}

impl TryFrom<(i32, u8, u8)> for LocalDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::of(year, i32::from(month), i32::from(day))
    }
}

impl From<LocalDate> for (i32, u8, u8) {
    fn from(date: LocalDate) -> Self {
        date.to_columns()
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}")?;
        } else if year < 0 {
            write!(f, "-{:04}", year.unsigned_abs())?;
        } else {
            write!(f, "+{year}")?;
        }
        write!(f, "-{:02}-{:02}", self.month.number(), self.day.get())
    }
}

#[cfg(feature = "clock")]
impl TryFrom<chrono::NaiveDate> for LocalDate {
    type Error = CalendarError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        // chrono's month and day are at most 12 and 31
        Self::of(date.year(), date.month() as i32, date.day() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_valid() {
        let date = LocalDate::of(2007, 7, 15).unwrap();
        assert_eq!(date.year(), 2007);
        assert_eq!(date.month_of_year(), MonthOfYear::July);
        assert_eq!(date.day_of_month(), 15);
        assert_eq!(date.length_of_month(), 31);
    }

    #[test]
    fn test_of_leap_day() {
        assert!(LocalDate::of(2008, 2, 29).is_ok());
        let err = LocalDate::of(2007, 2, 29).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::InvalidForContext { rule: FieldRule::DayOfMonth, .. }
        ));
    }

    #[test]
    fn test_of_out_of_range() {
        assert_eq!(
            LocalDate::of(2007, 13, 1).unwrap_err().rule(),
            Some(FieldRule::MonthOfYear)
        );
        assert_eq!(
            LocalDate::of(2007, 1, 32).unwrap_err().rule(),
            Some(FieldRule::DayOfMonth)
        );
        assert_eq!(
            LocalDate::of(i32::MIN, 1, 1).unwrap_err().rule(),
            Some(FieldRule::Year)
        );
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(LocalDate::of(2007, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(LocalDate::of(2007, 12, 31).unwrap().day_of_year(), 365);
        assert_eq!(LocalDate::of(2008, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(LocalDate::of(2008, 3, 1).unwrap().day_of_year(), 61);
    }

    #[test]
    fn test_query() {
        let date = LocalDate::of(2007, 6, 12).unwrap();
        assert_eq!(date.query(FieldRule::Year).map(|f| f.value()), Some(2007));
        assert_eq!(date.query(FieldRule::MonthOfYear).map(|f| f.value()), Some(6));
        assert_eq!(date.query(FieldRule::MonthOfQuarter).map(|f| f.value()), Some(3));
        assert_eq!(date.query(FieldRule::DayOfMonth).map(|f| f.value()), Some(12));
        assert_eq!(date.query(FieldRule::DayOfYear).map(|f| f.value()), Some(163));
        assert_eq!(date.query(FieldRule::HourOfDay), None);
    }

    #[test]
    fn test_ordering() {
        let a = LocalDate::of(2007, 12, 31).unwrap();
        let b = LocalDate::of(2008, 1, 1).unwrap();
        let c = LocalDate::of(2008, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_display() {
        assert_eq!(LocalDate::of(2008, 2, 29).unwrap().to_string(), "2008-02-29");
        assert_eq!(LocalDate::of(7, 1, 2).unwrap().to_string(), "0007-01-02");
        assert_eq!(LocalDate::of(-12, 1, 2).unwrap().to_string(), "-0012-01-02");
        assert_eq!(LocalDate::of(12345, 1, 2).unwrap().to_string(), "+12345-01-02");
    }

    #[test]
    fn test_serde() {
        let date = LocalDate::of(2008, 2, 29).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "[2008,2,29]");
        let parsed: LocalDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<LocalDate, _> = serde_json::from_str("[2007,2,29]");
        assert!(result.is_err());
    }

    #[cfg(feature = "clock")]
    #[test]
    fn test_from_chrono() {
        let naive = chrono::NaiveDate::from_ymd_opt(2010, 12, 31).unwrap();
        let date = LocalDate::try_from(naive).unwrap();
        assert_eq!(date, LocalDate::of(2010, 12, 31).unwrap());
    }
}
