//! Month-day text forms.
//!
//! The default form is ISO-8601 `--MM-DD`. [`MonthDayFormat`] also accepts
//! short patterns built from `MM`/`M` (month), `dd`/`d` (day) and literal text,
//! such as `"MM dd"` or `"d/M"`.
//!
//! Lexing only checks shape. Whether the numbers form a valid month-day is
//! decided afterwards by the value type, so `--13-25` lexes fine and fails
//! later with a field range error.

use crate::consts::{DATE_SEPARATOR, MONTH_DAY_PREFIX};
use crate::error::CalendarError;

/// Text that could not be lexed, with the index of the first bad token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Text '{text}' could not be parsed at index {index}: {reason}")]
pub struct ParseError {
    text: String,
    index: usize,
    reason: &'static str,
}

impl ParseError {
    fn new(text: &str, index: usize, reason: &'static str) -> Self {
        Self {
            text: text.to_owned(),
            index,
            reason,
        }
    }

    /// The complete input that was being parsed.
    pub fn parsed_string(&self) -> &str {
        &self.text
    }

    /// Zero-based index of the token that failed.
    pub const fn error_index(&self) -> usize {
        self.index
    }

    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn literal(&mut self, literal: &str, reason: &'static str) -> Result<(), ParseError> {
        if !self.text[self.pos..].starts_with(literal) {
            return Err(ParseError::new(self.text, self.pos, reason));
        }
        self.pos += literal.len();
        Ok(())
    }

    fn two_digits(&mut self, reason: &'static str) -> Result<i32, ParseError> {
        let bytes = &self.text.as_bytes()[self.pos..];
        match bytes {
            [tens @ b'0'..=b'9', units @ b'0'..=b'9', ..] => {
                self.pos += 2;
                Ok(i32::from(tens - b'0') * 10 + i32::from(units - b'0'))
            },
            _ => Err(ParseError::new(self.text, self.pos, reason)),
        }
    }

    // One digit, or two if the second is also a digit.
    fn one_or_two_digits(&mut self, reason: &'static str) -> Result<i32, ParseError> {
        let bytes = &self.text.as_bytes()[self.pos..];
        match bytes {
            [tens @ b'0'..=b'9', units @ b'0'..=b'9', ..] => {
                self.pos += 2;
                Ok(i32::from(tens - b'0') * 10 + i32::from(units - b'0'))
            },
            [units @ b'0'..=b'9', ..] => {
                self.pos += 1;
                Ok(i32::from(units - b'0'))
            },
            _ => Err(ParseError::new(self.text, self.pos, reason)),
        }
    }

    fn end(&self) -> Result<(), ParseError> {
        if self.pos != self.text.len() {
            return Err(ParseError::new(
                self.text,
                self.pos,
                "unexpected trailing text",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Minimal,
    Padded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Month(Width),
    Day(Width),
}

/// A compiled month-day pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDayFormat {
    pattern: String,
    tokens: Vec<Token>,
}

impl MonthDayFormat {
    /// The ISO-8601 form, `--MM-DD`.
    pub fn iso() -> Self {
        Self {
            pattern: format!("{MONTH_DAY_PREFIX}MM{DATE_SEPARATOR}dd"),
            tokens: vec![
                Token::Literal(MONTH_DAY_PREFIX.to_owned()),
                Token::Month(Width::Padded),
                Token::Literal(DATE_SEPARATOR.to_string()),
                Token::Day(Width::Padded),
            ],
        }
    }

    /// Compiles a pattern.
    ///
    /// `MM` and `dd` are two-digit fields, `M` and `d` take one or two digits.
    /// Text inside single quotes is literal and `''` is a quote. Any other
    /// non-letter is literal as is.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` for unknown letters, runs of
    /// more than two letters, an unclosed quote, or a pattern that does not
    /// hold exactly one month field and one day field.
    pub fn pattern(pattern: &str) -> Result<Self, CalendarError> {
        let invalid = |reason| CalendarError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason,
        };

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    if chars.next_if_eq(&'\'').is_some() {
                        literal.push('\'');
                        continue;
                    }
                    loop {
                        match chars.next() {
                            Some('\'') if chars.next_if_eq(&'\'').is_some() => literal.push('\''),
                            Some('\'') => break,
                            Some(quoted) => literal.push(quoted),
                            None => return Err(invalid("unclosed quote")),
                        }
                    }
                },
                'M' | 'd' => {
                    let width = match chars.next_if_eq(&c) {
                        Some(_) => Width::Padded,
                        None => Width::Minimal,
                    };
                    if chars.peek() == Some(&c) {
                        return Err(invalid("too many pattern letters"));
                    }
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(if c == 'M' {
                        Token::Month(width)
                    } else {
                        Token::Day(width)
                    });
                },
                c if c.is_ascii_alphabetic() => return Err(invalid("unknown pattern letter")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        let months = tokens.iter().filter(|t| matches!(t, Token::Month(_))).count();
        let days = tokens.iter().filter(|t| matches!(t, Token::Day(_))).count();
        if months != 1 || days != 1 {
            return Err(invalid("expected exactly one month field and one day field"));
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            tokens,
        })
    }

    /// The pattern text this format was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Splits text into its raw month and day numbers.
    ///
    /// # Errors
    /// Returns a `ParseError` pointing at the first token that does not match.
    pub fn lex(&self, text: &str) -> Result<(i32, i32), ParseError> {
        let mut cursor = Cursor::new(text);
        let (mut month, mut day) = (0, 0);
        for token in &self.tokens {
            match token {
                Token::Literal(literal) => cursor.literal(literal, "expected literal text")?,
                Token::Month(Width::Padded) => month = cursor.two_digits("expected two-digit month")?,
                Token::Month(Width::Minimal) => {
                    month = cursor.one_or_two_digits("expected month digits")?;
                },
                Token::Day(Width::Padded) => day = cursor.two_digits("expected two-digit day")?,
                Token::Day(Width::Minimal) => day = cursor.one_or_two_digits("expected day digits")?,
            }
        }
        cursor.end()?;
        Ok((month, day))
    }

    /// Writes month and day numbers in this format.
    pub fn write(&self, month: u8, day: u8) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        for token in &self.tokens {
            match token {
                Token::Literal(literal) => out.push_str(literal),
                Token::Month(Width::Padded) => out.push_str(&format!("{month:02}")),
                Token::Month(Width::Minimal) => out.push_str(&month.to_string()),
                Token::Day(Width::Padded) => out.push_str(&format!("{day:02}")),
                Token::Day(Width::Minimal) => out.push_str(&day.to_string()),
            }
        }
        out
    }
}

impl Default for MonthDayFormat {
    fn default() -> Self {
        Self::iso()
    }
}

/// Splits `--MM-DD` into its raw month and day numbers.
///
/// # Errors
/// Returns a `ParseError` pointing at the first token that does not match.
pub fn lex_month_day(text: &str) -> Result<(i32, i32), ParseError> {
    MonthDayFormat::iso().lex(text)
}
