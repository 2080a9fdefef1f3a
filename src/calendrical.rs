//! The field query protocol shared by every calendar value.
//!
//! Anything that can report calendar fields implements [`Calendrical`]. Value
//! types use it to pull just the fields they need out of a richer source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::LocalDate;
use crate::error::CalendarError;
use crate::rule::{FieldRule, FieldValue};

/// Answers "what is the value of this field?" for a set of supported rules.
pub trait Calendrical {
    /// Returns the field for `rule`, or `None` when this value does not carry it.
    fn query(&self, rule: FieldRule) -> Option<FieldValue>;

    /// Like [`query`](Self::query), but a missing field is an error.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRule` if `rule` cannot be answered.
    fn require(&self, rule: FieldRule) -> Result<FieldValue, CalendarError> {
        self.query(rule).ok_or(CalendarError::UnsupportedRule(rule))
    }
}

impl<T: Calendrical + ?Sized> Calendrical for &T {
    fn query(&self, rule: FieldRule) -> Option<FieldValue> {
        (**self).query(rule)
    }
}

/// A value that can decide whether another calendrical matches it.
pub trait CalendricalMatcher {
    fn matches_calendrical(&self, calendrical: &dyn Calendrical) -> bool;
}

/// A value that can move a date onto itself.
pub trait DateAdjuster {
    /// # Errors
    /// Returns an error when the adjusted date does not exist.
    fn adjust_date(&self, date: LocalDate) -> Result<LocalDate, CalendarError>;
}

/// A loose bag of validated fields, at most one per rule.
///
/// Carries no cross-field invariant; it is the neutral container used to
/// hand fields between value types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<FieldValue>", into = "Vec<FieldValue>")]
pub struct FieldSet {
    fields: BTreeMap<FieldRule, FieldValue>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `field` added, replacing any value for the same rule.
    #[must_use]
    pub fn with(mut self, field: FieldValue) -> Self {
        self.fields.insert(field.rule(), field);
        self
    }

    /// Validates `value` against `rule` and adds it.
    ///
    /// # Errors
    /// Returns `CalendarError::FieldOutOfRange` if the value fails validation.
    pub fn with_value(self, rule: FieldRule, value: i32) -> Result<Self, CalendarError> {
        Ok(self.with(rule.validate(value)?))
    }

    pub fn get(&self, rule: FieldRule) -> Option<FieldValue> {
        self.fields.get(&rule).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in rule order.
    pub fn iter(&self) -> impl Iterator<Item = FieldValue> + '_ {
        self.fields.values().copied()
    }
}

impl Calendrical for FieldSet {
    fn query(&self, rule: FieldRule) -> Option<FieldValue> {
        self.get(rule)
    }
}

impl FromIterator<FieldValue> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldValue>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl From<Vec<FieldValue>> for FieldSet {
    fn from(fields: Vec<FieldValue>) -> Self {
        fields.into_iter().collect()
    }
}

impl From<FieldSet> for Vec<FieldValue> {
    fn from(set: FieldSet) -> Self {
        set.fields.into_values().collect()
    }
}
