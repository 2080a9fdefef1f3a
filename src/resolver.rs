//! Strategies for turning a (year, month, day) triple into a real date.
//!
//! A month-day combined with a year does not always name a real date:
//! February 29 only exists in leap years. A [`DateResolver`] decides what to
//! do in that case. The built-in policies live in [`DateResolvers`]; the
//! trait is the extension point for anything else.

use serde::{Deserialize, Serialize};

use crate::consts::MIN_DAY;
use crate::date::LocalDate;
use crate::error::CalendarError;
use crate::prelude::*;
use crate::types::{Day, MonthOfYear, Year};

/// Resolves a possibly invalid date triple.
///
/// `year` has already passed the year rule; `day` is raw and implementations
/// reject anything outside `1..=31`.
pub trait DateResolver {
    /// Returns the resolved date, or `Ok(None)` if the resolver produced
    /// nothing. Callers treat `Ok(None)` as a broken resolver.
    ///
    /// # Errors
    /// Returns an error if the resolver refuses the triple.
    fn resolve(
        &self,
        year: Year,
        month: MonthOfYear,
        day: u8,
    ) -> Result<Option<LocalDate>, CalendarError>;
}

/// The standard resolution policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum DateResolvers {
    /// Rejects anything that is not a real date.
    #[default]
    Strict,
    /// Clamps an overflowing day to the last day of the month.
    PreviousValid,
    /// Moves an overflowing day to the first day of the following month.
    NextValid,
}

impl DateResolvers {
    pub const fn strict() -> Self {
        Self::Strict
    }

    pub const fn previous_valid() -> Self {
        Self::PreviousValid
    }

    pub const fn next_valid() -> Self {
        Self::NextValid
    }

    /// Applies the policy, always producing a date or an error.
    ///
    /// # Errors
    /// Every policy returns `CalendarError::FieldOutOfRange` for the day rule
    /// if `day` is not in `1..=31`. `Strict` returns
    /// `CalendarError::InvalidForContext` for the day rule if the date does not
    /// exist. `NextValid` returns
    /// `CalendarError::FieldOutOfRange` for the year rule if moving past
    /// December leaves the supported year range.
    pub fn resolve_date(
        self,
        year: Year,
        month: MonthOfYear,
        day: u8,
    ) -> Result<LocalDate, CalendarError> {
        let day = Day::new(i32::from(day))?.get();
        let length = month.length(year.is_leap());
        if day <= length {
            return LocalDate::of_month(year.get(), month, i32::from(day));
        }

        let resolved = match self {
            Self::Strict => return LocalDate::of_month(year.get(), month, i32::from(day)),
            Self::PreviousValid => LocalDate::of_month(year.get(), month, i32::from(length))?,
            Self::NextValid => {
                let next = month.next();
                let next_year = if next == MonthOfYear::January {
                    year.get().saturating_add(1)
                } else {
                    year.get()
                };
                LocalDate::of_month(next_year, next, i32::from(MIN_DAY))?
            },
        };

        tracing::debug!(
            resolver = %self,
            year = year.get(),
            month = month.number(),
            day,
            resolved = %resolved,
            "Substituted a real date for an invalid one"
        );
        Ok(resolved)
    }
}

impl DateResolver for DateResolvers {
    fn resolve(
        &self,
        year: Year,
        month: MonthOfYear,
        day: u8,
    ) -> Result<Option<LocalDate>, CalendarError> {
        self.resolve_date(year, month, day).map(Some)
    }
}
