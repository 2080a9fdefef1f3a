/// Minimum supported year (inclusive)
pub const MIN_YEAR: i32 = -999_999_999;

/// Maximum supported year (inclusive)
pub const MAX_YEAR: i32 = 999_999_999;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Largest day-of-month any month can have
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Number of months in a quarter
pub const MONTHS_PER_QUARTER: u8 = 3;

/// Days in a leap year
pub const DAYS_PER_LEAP_YEAR: u16 = 366;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Literal that starts the ISO-8601 month-day form (`--MM-DD`)
pub const MONTH_DAY_PREFIX: &str = "--";
/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
