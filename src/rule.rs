//! Calendar field rules and the validated values they produce.
//!
//! A [`FieldRule`] names one calendar field and its static legal range. The
//! set of rules is closed: every field this crate can reason about is a
//! variant here, and queries dispatch on the variant rather than on runtime
//! type inspection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_LEAP_YEAR, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR};
use crate::error::CalendarError;
use crate::prelude::*;

/// Identity of a calendar field, ordered from the shortest field to the longest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum FieldRule {
    MinuteOfHour,
    HourOfDay,
    DayOfMonth,
    DayOfYear,
    MonthOfQuarter,
    MonthOfYear,
    Year,
}

impl FieldRule {
    /// Human readable name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinuteOfHour => "MinuteOfHour",
            Self::HourOfDay => "HourOfDay",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::MonthOfQuarter => "MonthOfQuarter",
            Self::MonthOfYear => "MonthOfYear",
            Self::Year => "Year",
        }
    }

    /// Smallest legal value (inclusive).
    pub const fn minimum(self) -> i32 {
        match self {
            Self::MinuteOfHour | Self::HourOfDay => 0,
            Self::DayOfMonth => MIN_DAY as i32,
            Self::DayOfYear => 1,
            Self::MonthOfQuarter | Self::MonthOfYear => MIN_MONTH as i32,
            Self::Year => MIN_YEAR,
        }
    }

    /// Largest legal value (inclusive).
    pub const fn maximum(self) -> i32 {
        match self {
            Self::MinuteOfHour => 59,
            Self::HourOfDay => 23,
            Self::DayOfMonth => MAX_DAY as i32,
            Self::DayOfYear => DAYS_PER_LEAP_YEAR as i32,
            Self::MonthOfQuarter => 3,
            Self::MonthOfYear => MAX_MONTH as i32,
            Self::Year => MAX_YEAR,
        }
    }

    #[inline]
    pub const fn is_valid_value(self, value: i32) -> bool {
        value >= self.minimum() && value <= self.maximum()
    }

    /// Checks `value` against this rule's static range only.
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` naming this rule.
    pub fn validate(self, value: i32) -> Result<FieldValue, CalendarError> {
        if !self.is_valid_value(value) {
            return Err(CalendarError::out_of_range(self, value));
        }
        Ok(FieldValue { rule: self, value })
    }

    /// Alias of [`validate`](Self::validate).
    pub fn field(self, value: i32) -> Result<FieldValue, CalendarError> {
        self.validate(value)
    }

    /// Orders two values of this rule; values of another rule are a precondition error.
    pub fn compare(self, a: &FieldValue, b: &FieldValue) -> Result<Ordering, CalendarError> {
        if a.rule != self || b.rule != self {
            return Err(CalendarError::Precondition(
                "field values compared under a rule they do not belong to",
            ));
        }
        Ok(a.value.cmp(&b.value))
    }
}

/// A value that has passed its rule's range check.
///
/// Values of different rules have no ordering; `partial_cmp` returns `None`
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{rule}={value}")]
pub struct FieldValue {
    rule: FieldRule,
    value: i32,
}

impl FieldValue {
    #[inline]
    pub const fn rule(&self) -> FieldRule {
        self.rule
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.rule == other.rule).then(|| self.value.cmp(&other.value))
    }
}

#[derive(Deserialize)]
struct RawFieldValue {
    rule: FieldRule,
    value: i32,
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFieldValue::deserialize(deserializer)?;
        raw.rule.validate(raw.value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        struct TestCase {
            rule: FieldRule,
            min: i32,
            max: i32,
        }

        let cases = [
            TestCase { rule: FieldRule::MinuteOfHour, min: 0, max: 59 },
            TestCase { rule: FieldRule::HourOfDay, min: 0, max: 23 },
            TestCase { rule: FieldRule::DayOfMonth, min: 1, max: 31 },
            TestCase { rule: FieldRule::DayOfYear, min: 1, max: 366 },
            TestCase { rule: FieldRule::MonthOfQuarter, min: 1, max: 3 },
            TestCase { rule: FieldRule::MonthOfYear, min: 1, max: 12 },
            TestCase { rule: FieldRule::Year, min: MIN_YEAR, max: MAX_YEAR },
        ];

        for case in &cases {
            assert!(case.rule.minimum() <= case.rule.maximum());
            assert_eq!(case.rule.minimum(), case.min, "{}", case.rule);
            assert_eq!(case.rule.maximum(), case.max, "{}", case.rule);
        }
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(FieldRule::MonthOfYear.validate(1).unwrap().value(), 1);
        assert_eq!(FieldRule::MonthOfYear.validate(12).unwrap().value(), 12);

        let err = FieldRule::MonthOfYear.validate(0).unwrap_err();
        assert_eq!(
            err,
            CalendarError::FieldOutOfRange { rule: FieldRule::MonthOfYear, value: 0 }
        );

        let err = FieldRule::DayOfMonth.validate(32).unwrap_err();
        assert_eq!(
            err,
            CalendarError::FieldOutOfRange { rule: FieldRule::DayOfMonth, value: 32 }
        );

        assert!(FieldRule::Year.validate(i32::MIN).is_err());
    }

    #[test]
    fn test_validate_keeps_rule() {
        let field = FieldRule::DayOfMonth.field(15).unwrap();
        assert_eq!(field.rule(), FieldRule::DayOfMonth);
        assert_eq!(field.value(), 15);
        assert_eq!(field.to_string(), "DayOfMonth=15");
    }

    #[test]
    fn test_compare_same_rule() {
        let a = FieldRule::DayOfMonth.field(3).unwrap();
        let b = FieldRule::DayOfMonth.field(20).unwrap();
        assert_eq!(FieldRule::DayOfMonth.compare(&a, &b), Ok(Ordering::Less));
        assert_eq!(FieldRule::DayOfMonth.compare(&b, &a), Ok(Ordering::Greater));
        assert_eq!(FieldRule::DayOfMonth.compare(&a, &a), Ok(Ordering::Equal));
        assert!(a < b);
    }

    #[test]
    fn test_compare_mixed_rules() {
        let day = FieldRule::DayOfMonth.field(3).unwrap();
        let month = FieldRule::MonthOfYear.field(3).unwrap();
        assert!(matches!(
            FieldRule::DayOfMonth.compare(&day, &month),
            Err(CalendarError::Precondition(_))
        ));
        assert_eq!(day.partial_cmp(&month), None);
        assert_ne!(day, month);
    }

    #[test]
    fn test_serde_revalidates() {
        let field = FieldRule::MonthOfYear.field(7).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"rule":"MonthOfYear","value":7}"#);
        let parsed: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, field);

        let result: Result<FieldValue, _> =
            serde_json::from_str(r#"{"rule":"MonthOfYear","value":13}"#);
        assert!(result.is_err());
    }
}
