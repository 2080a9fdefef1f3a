mod calendrical;
mod clock;
mod consts;
mod date;
mod error;
mod format;
mod prelude;
mod resolver;
mod rule;
mod types;

pub use calendrical::{Calendrical, CalendricalMatcher, DateAdjuster, FieldSet};
#[cfg(feature = "clock")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use consts::*;
pub use date::LocalDate;
pub use error::CalendarError;
pub use format::{MonthDayFormat, ParseError};
pub use resolver::{DateResolver, DateResolvers};
pub use rule::{FieldRule, FieldValue};
pub use types::{Day, MonthOfYear, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A month and day-of-month without a year, such as `--12-03`.
///
/// The day never exceeds the longest length its month can have, so
/// `--02-29` is valid even though it only becomes a real date in leap years.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, serde::Serialize, serde::Deserialize,
)]
#[display(fmt = "--{:02}-{:02}", "month.number()", "day.get()")]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct MonthDay {
    month: MonthOfYear,
    day: Day,
}

impl MonthDay {
    /// Creates a month-day from raw numbers.
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` if either number is outside its
    /// rule, or `CalendarError::InvalidForContext` if the month never has that
    /// many days.
    pub fn of(month: i32, day: i32) -> Result<Self, CalendarError> {
        Self::of_month(MonthOfYear::of(month)?, day)
    }

    pub fn of_month(month: MonthOfYear, day: i32) -> Result<Self, CalendarError> {
        let day = Day::new(day)?.check_month(month)?;
        Ok(Self { month, day })
    }

    /// Extracts the month and day from any calendrical, asking for the month first.
    pub fn from_calendrical<C: Calendrical + ?Sized>(source: &C) -> Result<Self, CalendarError> {
        let month = source.require(FieldRule::MonthOfYear)?;
        let day = source.require(FieldRule::DayOfMonth)?;
        Self::of(month.value(), day.value())
    }

    /// Parses the ISO-8601 form `--MM-DD`.
    pub fn parse(text: &str) -> Result<Self, CalendarError> {
        let (month, day) = format::lex_month_day(text)?;
        Self::of(month, day)
    }

    /// Parses text laid out by `format`.
    pub fn parse_with(text: &str, format: &MonthDayFormat) -> Result<Self, CalendarError> {
        let (month, day) = format.lex(text)?;
        Self::of(month, day)
    }

    pub fn format_with(&self, format: &MonthDayFormat) -> String {
        format.write(self.month.number(), self.day.get())
    }

    pub fn now<C: Clock + ?Sized>(clock: &C) -> Result<Self, CalendarError> {
        Ok(Self::from(clock.today()?))
    }

    /// Today's month-day in the local time zone.
    #[cfg(feature = "clock")]
    pub fn now_local() -> Result<Self, CalendarError> {
        Self::now(&SystemClock)
    }

    #[inline]
    pub const fn month_of_year(&self) -> MonthOfYear {
        self.month
    }

    #[inline]
    pub const fn day_of_month(&self) -> u8 {
        self.day.get()
    }

    /// Returns a copy with the month replaced, lowering the day to the
    /// month's last day if it does not fit.
    #[must_use]
    pub fn with_month(&self, month: MonthOfYear) -> Self {
        if month == self.month {
            return *self;
        }
        let day = self.day.clamp_to(month.max_length());
        if day != self.day {
            tracing::trace!(
                from = %self,
                month = month.number(),
                day = day.get(),
                "Clamped day-of-month to fit the new month"
            );
        }
        Self { month, day }
    }

    pub fn with_month_of_year(&self, month: i32) -> Result<Self, CalendarError> {
        Ok(self.with_month(MonthOfYear::of(month)?))
    }

    /// Returns a copy with the day replaced. Unlike the month, the day is not clamped.
    pub fn with_day_of_month(&self, day: i32) -> Result<Self, CalendarError> {
        let day = Day::new(day)?;
        if day == self.day {
            return Ok(*self);
        }
        Ok(Self {
            month: self.month,
            day: day.check_month(self.month)?,
        })
    }

    #[must_use]
    pub fn roll_month_of_year(&self, amount: i64) -> Self {
        self.with_month(self.month.roll(amount))
    }

    /// Rolls the day within the current month; February wraps after day 29.
    #[must_use]
    pub fn roll_day_of_month(&self, amount: i64) -> Self {
        if amount == 0 {
            return *self;
        }
        Self {
            month: self.month,
            day: self.day.roll(amount, self.month.max_length()),
        }
    }

    /// Whether this month-day exists in `year`. Only `--02-29` can fail.
    pub const fn is_valid_year(&self, year: i32) -> bool {
        self.day.get() <= self.month.length(is_leap_year(year))
    }

    pub fn at_year(&self, year: i32) -> Result<LocalDate, CalendarError> {
        self.at_year_with(year, &DateResolvers::Strict)
    }

    /// Combines with `year`, letting `resolver` decide what to do when the
    /// date does not exist.
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` for an unsupported year, any
    /// error raised by the resolver, and `CalendarError::Precondition` if the
    /// resolver produces no date.
    pub fn at_year_with<R: DateResolver + ?Sized>(
        &self,
        year: i32,
        resolver: &R,
    ) -> Result<LocalDate, CalendarError> {
        let year = Year::new(year)?;
        resolver
            .resolve(year, self.month, self.day.get())?
            .ok_or(CalendarError::Precondition("date resolver returned no date"))
    }

    pub fn adjust_date(&self, date: LocalDate) -> Result<LocalDate, CalendarError> {
        self.adjust_date_with(date, &DateResolvers::Strict)
    }

    /// Moves `date` onto this month-day within the same year. A date that
    /// already matches is returned without consulting `resolver`.
    pub fn adjust_date_with<R: DateResolver + ?Sized>(
        &self,
        date: LocalDate,
        resolver: &R,
    ) -> Result<LocalDate, CalendarError> {
        if date.month_of_year() == self.month && date.day_of_month() == self.day.get() {
            return Ok(date);
        }
        self.at_year_with(date.year(), resolver)
    }

    pub fn to_fields(&self) -> FieldSet {
        [FieldRule::MonthOfYear, FieldRule::DayOfMonth]
            .into_iter()
            .filter_map(|rule| self.query(rule))
            .collect()
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Days fit in five bits, so shifting the month past them keeps all 366
    /// values apart.
    #[inline]
    pub const fn hash_code(&self) -> u32 {
        ((self.month.number() as u32) << 6) + self.day.get() as u32
    }

    /// Converts to database columns: (month, day)
    pub const fn to_columns(&self) -> (u8, u8) {
        (self.month.number(), self.day.get())
    }

    /// Creates from database columns: (month, day)
    pub fn from_columns(month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::of(i32::from(month), i32::from(day))
    }
}

impl Calendrical for MonthDay {
    fn query(&self, rule: FieldRule) -> Option<FieldValue> {
        let value = match rule {
            FieldRule::MonthOfYear => i32::from(self.month.number()),
            FieldRule::DayOfMonth => i32::from(self.day.get()),
            FieldRule::Year
            | FieldRule::MonthOfQuarter
            | FieldRule::DayOfYear
            | FieldRule::HourOfDay
            | FieldRule::MinuteOfHour => return None,
        };
        rule.validate(value).ok()
    }
}

impl CalendricalMatcher for MonthDay {
    fn matches_calendrical(&self, calendrical: &dyn Calendrical) -> bool {
        calendrical.query(FieldRule::MonthOfYear) == self.query(FieldRule::MonthOfYear)
            && calendrical.query(FieldRule::DayOfMonth) == self.query(FieldRule::DayOfMonth)
    }
}

impl DateAdjuster for MonthDay {
    fn adjust_date(&self, date: LocalDate) -> Result<LocalDate, CalendarError> {
        Self::adjust_date(self, date)
    }
}

impl Hash for MonthDay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl From<LocalDate> for MonthDay {
    fn from(date: LocalDate) -> Self {
        Self {
            month: date.month_of_year(),
            day: date.day(),
        }
    }
}

impl FromStr for MonthDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<(u8, u8)> for MonthDay {
    type Error = CalendarError;

    fn try_from(value: (u8, u8)) -> Result<Self, Self::Error> {
        Self::from_columns(value.0, value.1)
    }
}

impl From<MonthDay> for (u8, u8) {
    fn from(month_day: MonthDay) -> Self {
        month_day.to_columns()
    }
}
