use super::*;
use chronon_math::{add_exact, multiply_exact};
use std::str::FromStr;

const PARSE_FAILURE: &str = "Text cannot be parsed to a Duration";

/// Strict parser for ISO-8601 style duration text.
///
/// The accepted grammar, matched case-insensitively against the whole input:
///
/// ```text
/// [-+]? P ( [-+]?digits D )?
///         ( T ( [-+]?digits H )? ( [-+]?digits M )? ( [-+]?digits ( [.,] digit{0,9} )? S )? )?
/// ```
///
/// At least one of the day, hour, minute or second components must be
/// present, and a `T` must be followed by at least one time component. Each
/// component carries its own optional sign, and a leading sign before `P`
/// negates the whole value. Calendar units (years, months, weeks) are not
/// supported, and no surrounding whitespace is tolerated.
///
/// # Examples
///
/// ```
/// # use chronon_duration::{Duration, DurationParser};
/// let d = DurationParser::parse("P2DT3H4M").unwrap();
/// assert_eq!(d, Duration::of_seconds(2 * 86_400 + 3 * 3_600 + 4 * 60));
///
/// let d = DurationParser::parse("pt-6h3m").unwrap();
/// assert_eq!(d, Duration::of_seconds(-6 * 3_600 + 3 * 60));
///
/// let d = DurationParser::parse("-PT6H3M").unwrap();
/// assert_eq!(d, Duration::of_seconds(-6 * 3_600 - 3 * 60));
///
/// assert!(DurationParser::parse("P1Y2M").is_err());
/// assert!(DurationParser::parse("PT").is_err());
/// ```
pub struct DurationParser;

impl DurationParser {
    /// Parses `text` into a [`Duration`].
    ///
    /// Failures are parse errors carrying the input and a byte offset: the
    /// offending character for malformed text, the start of the component
    /// for a count that does not fit, and `0` when only the combined total
    /// overflows.
    pub fn parse(text: &str) -> Result<Duration> {
        Self::parse_components(text)
            .and_then(|components| components.to_duration(text))
            .inspect_err(|e| log::debug!("failed to parse duration {text:?}: {e}"))
    }

    /// Like [`DurationParser::parse`], discarding the error.
    pub fn try_parse(text: &str) -> Option<Duration> {
        Self::parse(text).ok()
    }

    fn parse_components(text: &str) -> Result<Components<'_>> {
        let mut cursor = Cursor::new(text);
        let mut components = Components::default();

        components.negate = match cursor.peek() {
            Some(b'-') => {
                cursor.advance();
                true
            }
            Some(b'+') => {
                cursor.advance();
                false
            }
            _ => false,
        };
        cursor.expect(b'P')?;

        if cursor.at_number() {
            let number = cursor.number()?;
            cursor.expect(b'D')?;
            components.days = Some(number);
        }

        if cursor.peek_ignore_case(b'T') {
            cursor.advance();
            let time_start = cursor.pos;
            Self::parse_time(&mut cursor, &mut components)?;
            if components.hours.is_none()
                && components.minutes.is_none()
                && components.seconds.is_none()
            {
                return Err(cursor.fail_at(time_start));
            }
        }

        if !cursor.at_end() {
            return Err(cursor.fail());
        }
        if components.days.is_none()
            && components.hours.is_none()
            && components.minutes.is_none()
            && components.seconds.is_none()
        {
            return Err(cursor.fail());
        }
        Ok(components)
    }

    /// Hours, minutes and seconds, each optional, in that order.
    fn parse_time<'a>(cursor: &mut Cursor<'a>, components: &mut Components<'a>) -> Result<()> {
        while cursor.at_number() {
            let number = cursor.number()?;
            match cursor.peek().map(|b| b.to_ascii_uppercase()) {
                Some(b'H') if components.hours.is_none() && components.minutes.is_none() => {
                    cursor.advance();
                    components.hours = Some(number);
                }
                Some(b'M') if components.minutes.is_none() => {
                    cursor.advance();
                    components.minutes = Some(number);
                }
                Some(b'.' | b',' | b'S') => {
                    components.fraction = cursor.fraction();
                    cursor.expect(b'S')?;
                    components.seconds = Some(number);
                    // Seconds close the time section.
                    return Ok(());
                }
                _ => return Err(cursor.fail()),
            }
        }
        Ok(())
    }
}

impl Duration {
    /// Parses ISO-8601 style text such as `PT15M` or `P2DT-3.5S`.
    ///
    /// See [`DurationParser`] for the grammar.
    ///
    /// ```
    /// # use chronon_duration::Duration;
    /// let d = Duration::parse("PT-0.1S").unwrap();
    /// assert_eq!(d, Duration::of_seconds_nanos(-1, 900_000_000).unwrap());
    /// ```
    pub fn parse(text: &str) -> Result<Duration> {
        DurationParser::parse(text)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Duration> {
        DurationParser::parse(s)
    }
}

/// A signed integer literal as it appeared in the input.
#[derive(Clone, Copy)]
struct Number<'a> {
    literal: &'a str,
    start: usize,
}

impl Number<'_> {
    fn is_negative(&self) -> bool {
        self.literal.starts_with('-')
    }

    /// The literal scaled to seconds; fails when either the literal or the
    /// product leaves the `i64` range.
    fn to_seconds(self, text: &str, unit_seconds: i64, unit: &str) -> Result<i64> {
        let message = || format!("{PARSE_FAILURE}: {unit}");
        let value = self.literal.parse::<i64>().map_err(|_| {
            Error::parse_with_source(message(), text, self.start, Error::overflow("parse"))
        })?;
        multiply_exact(value, unit_seconds)
            .map_err(|e| Error::parse_with_source(message(), text, self.start, e))
    }
}

#[derive(Default)]
struct Components<'a> {
    negate: bool,
    days: Option<Number<'a>>,
    hours: Option<Number<'a>>,
    minutes: Option<Number<'a>>,
    seconds: Option<Number<'a>>,
    /// Fraction digits, at most nine.
    fraction: &'a str,
}

impl Components<'_> {
    fn to_duration(&self, text: &str) -> Result<Duration> {
        let scaled = |number: Option<Number<'_>>, unit_seconds: i64, unit: &str| match number {
            Some(number) => number.to_seconds(text, unit_seconds, unit),
            None => Ok(0),
        };
        let days = scaled(self.days, SECONDS_PER_DAY, "days")?;
        let hours = scaled(self.hours, SECONDS_PER_HOUR, "hours")?;
        let minutes = scaled(self.minutes, SECONDS_PER_MINUTE, "minutes")?;
        let seconds = scaled(self.seconds, 1, "seconds")?;

        let mut nanos = self.fraction_nanos();
        if self.seconds.is_some_and(|s| s.is_negative()) {
            nanos = -nanos;
        }

        self.combine(days, hours, minutes, seconds, nanos)
            .map_err(|e| {
                Error::parse_with_source(format!("{PARSE_FAILURE}: overflow"), text, 0, e)
            })
    }

    fn combine(
        &self,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        nanos: i64,
    ) -> Result<Duration> {
        let total = add_exact(days, add_exact(hours, add_exact(minutes, seconds)?)?)?;
        let duration = Duration::of_seconds_nanos(total, nanos)?;
        if self.negate {
            duration.negated()
        } else {
            Ok(duration)
        }
    }

    /// The fraction digits right-padded to nanoseconds.
    fn fraction_nanos(&self) -> i64 {
        self.fraction
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(9)
            .fold(0, |nanos, digit| nanos * 10 + (digit - b'0') as i64)
    }
}

/// Byte cursor over ASCII input. Any non-ASCII byte is simply a mismatch.
struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Cursor<'a> {
        Cursor {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    fn peek_ignore_case(&self, expected: u8) -> bool {
        self.peek().is_some_and(|b| b.eq_ignore_ascii_case(&expected))
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Whether a signed number could start here.
    fn at_number(&self) -> bool {
        matches!(self.peek(), Some(b'-' | b'+' | b'0'..=b'9'))
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.peek_ignore_case(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.fail())
        }
    }

    /// `[-+]?[0-9]+`
    fn number(&mut self) -> Result<Number<'a>> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'-' | b'+')) {
            self.advance();
        }
        let digits_start = self.pos;
        self.skip_digits(usize::MAX);
        if self.pos == digits_start {
            return Err(self.fail());
        }
        Ok(Number {
            literal: &self.text[start..self.pos],
            start,
        })
    }

    /// `( [.,] [0-9]{0,9} )?`, returning the digits.
    fn fraction(&mut self) -> &'a str {
        if !matches!(self.peek(), Some(b'.' | b',')) {
            return "";
        }
        self.advance();
        let start = self.pos;
        self.skip_digits(9);
        &self.text[start..self.pos]
    }

    fn skip_digits(&mut self, max: usize) {
        let start = self.pos;
        while self.pos - start < max && self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }
    }

    fn fail(&self) -> Error {
        self.fail_at(self.pos)
    }

    fn fail_at(&self, index: usize) -> Error {
        Error::parse(PARSE_FAILURE, self.text, index)
    }
}
