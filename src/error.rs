use crate::format::ParseError;
use crate::rule::FieldRule;

/// Errors raised while building or deriving calendar values.
///
/// Every operation in this crate either returns a fully valid value or one of
/// these; there is no partially constructed state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A raw value lies outside the static bounds of its rule.
    #[error(
        "Illegal value for {rule} field, value {value} is not in the range {} to {}",
        .rule.minimum(),
        .rule.maximum()
    )]
    FieldOutOfRange { rule: FieldRule, value: i64 },

    /// A value is within bounds but conflicts with another, already fixed field.
    #[error("Invalid value for {rule} field: {reason}")]
    InvalidForContext { rule: FieldRule, reason: String },

    /// A source could not answer a field query that construction depends on.
    #[error("Rule {0} is not supported")]
    UnsupportedRule(FieldRule),

    /// Text did not match the expected layout.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A format pattern could not be compiled.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    /// A caller-supplied collaborator broke its contract.
    #[error("Precondition violated: {0}")]
    Precondition(&'static str),
}

impl CalendarError {
    pub(crate) fn out_of_range(rule: FieldRule, value: impl Into<i64>) -> Self {
        Self::FieldOutOfRange {
            rule,
            value: value.into(),
        }
    }

    pub(crate) fn invalid(rule: FieldRule, reason: impl Into<String>) -> Self {
        Self::InvalidForContext {
            rule,
            reason: reason.into(),
        }
    }

    /// Returns the field rule this error is about, if it names one.
    pub const fn rule(&self) -> Option<FieldRule> {
        match self {
            Self::FieldOutOfRange { rule, .. } | Self::InvalidForContext { rule, .. } => Some(*rule),
            Self::UnsupportedRule(rule) => Some(*rule),
            Self::Parse(_) | Self::InvalidPattern { .. } | Self::Precondition(_) => None,
        }
    }
}
