use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MONTHS_PER_QUARTER, MONTHS_PER_YEAR,
};
use crate::error::CalendarError;
use crate::rule::FieldRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A proleptic ISO year in the range `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year, validating it against the year rule
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` for the year rule if the value is
    /// outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        FieldRule::Year.validate(value)?;
        Ok(Self(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month-of-year.
///
/// Months are ordered January first. The discriminant is the ISO month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum MonthOfYear {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

const MONTHS: [MonthOfYear; MONTHS_PER_YEAR as usize] = [
    MonthOfYear::January,
    MonthOfYear::February,
    MonthOfYear::March,
    MonthOfYear::April,
    MonthOfYear::May,
    MonthOfYear::June,
    MonthOfYear::July,
    MonthOfYear::August,
    MonthOfYear::September,
    MonthOfYear::October,
    MonthOfYear::November,
    MonthOfYear::December,
];

impl MonthOfYear {
    /// Looks up a month by its ISO number.
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` for the month-of-year rule if the
    /// value is not in `1..=12`.
    pub fn of(value: i32) -> Result<Self, CalendarError> {
        let field = FieldRule::MonthOfYear.validate(value)?;
        Ok(Self::from_index(field.value() - 1))
    }

    /// All twelve months, January first.
    pub const fn all() -> [Self; MONTHS_PER_YEAR as usize] {
        MONTHS
    }

    // `index` must already be reduced to 0..12.
    const fn from_index(index: i32) -> Self {
        MONTHS[index as usize]
    }

    /// Returns the ISO month number (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Number of days in this month for a year with the given leap status.
    pub const fn length(self, leap_year: bool) -> u8 {
        if leap_year && self.number() == FEBRUARY {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self as usize]
        }
    }

    /// Largest day count this month reaches in any year.
    pub const fn max_length(self) -> u8 {
        self.length(true)
    }

    /// Smallest day count this month reaches in any year.
    pub const fn min_length(self) -> u8 {
        self.length(false)
    }

    /// Moves `amount` months forward (or backward), wrapping around the year.
    pub const fn roll(self, amount: i64) -> Self {
        let months = MONTHS_PER_YEAR as i64;
        let index = (self.number() as i64 - 1 + amount.rem_euclid(months)) % months;
        Self::from_index(index as i32)
    }

    /// The following month; December wraps to January.
    pub const fn next(self) -> Self {
        self.roll(1)
    }

    /// The preceding month; January wraps to December.
    pub const fn previous(self) -> Self {
        self.roll(-1)
    }

    /// Position of this month within its quarter (1..=3)
    pub const fn month_of_quarter(self) -> u8 {
        (self.number() - 1) % MONTHS_PER_QUARTER + 1
    }

    /// Quarter of the year this month falls in (1..=4)
    pub const fn quarter(self) -> u8 {
        (self.number() - 1) / MONTHS_PER_QUARTER + 1
    }

    /// The month that opens this month's quarter.
    pub const fn first_month_of_quarter(self) -> Self {
        Self::from_index(((self.quarter() - 1) * MONTHS_PER_QUARTER) as i32)
    }

    /// Day-of-year of the first day of this month.
    pub const fn first_day_of_year(self, leap_year: bool) -> u16 {
        let mut total: u16 = 1;
        let mut m = 1;
        while m < self.number() {
            total += DAYS_IN_MONTH[m as usize] as u16;
            m += 1;
        }
        if leap_year && self.number() > FEBRUARY {
            total += 1;
        }
        total
    }
}

impl TryFrom<u8> for MonthOfYear {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(i32::from(value))
    }
}

impl From<MonthOfYear> for u8 {
    fn from(month: MonthOfYear) -> Self {
        month.number()
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A day-of-month in `1..=MAX_DAY`, checked without month context.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the day-of-month rule
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` for the day-of-month rule if the
    /// value is not in `1..=31`.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        FieldRule::DayOfMonth.validate(value)?;
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or_else(|| CalendarError::out_of_range(FieldRule::DayOfMonth, value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Checks the day against a month's longest possible length.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidForContext` for the day-of-month rule if
    /// the month never has this many days.
    pub fn check_month(self, month: MonthOfYear) -> Result<Self, CalendarError> {
        if self.get() > month.max_length() {
            return Err(CalendarError::invalid(
                FieldRule::DayOfMonth,
                format!("{month} has at most {} days, got {}", month.max_length(), self.get()),
            ));
        }
        Ok(self)
    }

    /// Lowers the day to `length` if it is larger.
    pub const fn clamp_to(self, length: u8) -> Self {
        match NonZeroU8::new(length) {
            Some(max) if max.get() < self.get() => Self(max),
            _ => self,
        }
    }

    /// Moves `amount` days within a month of `length` days, wrapping at both ends.
    pub const fn roll(self, amount: i64, length: u8) -> Self {
        if length == 0 {
            return self;
        }
        let length = length as i64;
        let index = (self.get() as i64 - 1 + amount.rem_euclid(length)) % length;
        match NonZeroU8::new(index as u8 + 1) {
            Some(day) => Self(day),
            None => self,
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Calendar facts

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: MonthOfYear) -> u8 {
    month.length(is_leap_year(year))
}
