use super::*;
use chronon_common::verify_arg;
use chronon_math::{add_exact, floor_div, floor_mod, multiply_exact};

/// A time-based amount of time, such as `34.5 seconds`.
///
/// `Duration` is a signed quantity with nanosecond precision, stored as two
/// fields:
///
/// - **seconds**: whole seconds as an `i64`; carries the sign of the value
/// - **nanos**: a nanosecond residue in `0..1_000_000_000`, non-negative
///   regardless of the sign
///
/// The decomposition is floor-based: `-0.1s` is stored as `seconds = -1`,
/// `nanos = 900_000_000`. The represented value is always exactly
/// `seconds + nanos / 10^9`.
///
/// # Range
///
/// From [`Duration::MIN`] (`i64::MIN` seconds) to [`Duration::MAX`]
/// (`i64::MAX` seconds plus 999,999,999 nanoseconds), roughly ±292 billion
/// years.
///
/// # Normalization
///
/// Every factory and operation folds an arbitrary `(seconds, nano_adjustment)`
/// pair into canonical form with
///
/// ```text
/// seconds = seconds + floor_div(nano_adjustment, 10^9)   (overflow-checked)
/// nanos   = floor_mod(nano_adjustment, 10^9)
/// ```
///
/// # Ordering
///
/// Equality, hashing and ordering are lexicographic on `(seconds, nanos)`,
/// which agrees with the numeric order of the represented values.
///
/// # Examples
///
/// ```
/// # use chronon_duration::Duration;
/// let d = Duration::of_seconds_nanos(3, -100_000_000).unwrap();
/// assert_eq!(d.seconds(), 2);
/// assert_eq!(d.nanos(), 900_000_000);
///
/// let negative = Duration::of_millis(-100);
/// assert_eq!(negative.seconds(), -1);
/// assert_eq!(negative.nanos(), 900_000_000);
/// assert!(negative.is_negative());
/// ```
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Duration {
    seconds: i64,
    nanos: u32,
}

impl Duration {
    /// The zero-length duration.
    pub const ZERO: Duration = Duration {
        seconds: 0,
        nanos: 0,
    };

    /// The most negative representable duration.
    pub const MIN: Duration = Duration {
        seconds: i64::MIN,
        nanos: 0,
    };

    /// The most positive representable duration.
    pub const MAX: Duration = Duration {
        seconds: i64::MAX,
        nanos: 999_999_999,
    };

    /// Builds a duration from already-normalized fields.
    ///
    /// `nanos` must be below one second; callers in this crate guarantee it.
    #[inline]
    pub(crate) const fn from_parts(seconds: i64, nanos: u32) -> Duration {
        if seconds == 0 && nanos == 0 {
            return Duration::ZERO;
        }
        Duration { seconds, nanos }
    }
}

// Constructors
impl Duration {
    /// Creates a duration of whole seconds.
    pub const fn of_seconds(seconds: i64) -> Duration {
        Duration::from_parts(seconds, 0)
    }

    /// Creates a duration from seconds and a nanosecond adjustment of any
    /// sign and magnitude.
    ///
    /// Fails with an overflow error when the carried seconds leave the
    /// `i64` range.
    ///
    /// ```
    /// # use chronon_duration::Duration;
    /// let d = Duration::of_seconds_nanos(-1, -1).unwrap();
    /// assert_eq!((d.seconds(), d.nanos()), (-2, 999_999_999));
    ///
    /// assert!(Duration::of_seconds_nanos(i64::MAX, 1_000_000_000).is_err());
    /// ```
    pub fn of_seconds_nanos(seconds: i64, nano_adjustment: i64) -> Result<Duration> {
        let seconds = add_exact(seconds, floor_div(nano_adjustment, NANOS_PER_SECOND)?)?;
        let nanos = floor_mod(nano_adjustment, NANOS_PER_SECOND)?;
        Ok(Duration::from_parts(seconds, nanos as u32))
    }

    /// Creates a duration from milliseconds. Every `i64` millisecond count
    /// is representable.
    pub const fn of_millis(millis: i64) -> Duration {
        // Euclidean division by a positive divisor is floor division.
        let seconds = millis.div_euclid(MILLIS_PER_SECOND);
        let millis_of_second = millis.rem_euclid(MILLIS_PER_SECOND);
        Duration::from_parts(seconds, (millis_of_second * NANOS_PER_MILLI) as u32)
    }

    /// Creates a duration from nanoseconds. Every `i64` nanosecond count is
    /// representable.
    pub const fn of_nanos(nanos: i64) -> Duration {
        let seconds = nanos.div_euclid(NANOS_PER_SECOND);
        let nanos_of_second = nanos.rem_euclid(NANOS_PER_SECOND);
        Duration::from_parts(seconds, nanos_of_second as u32)
    }

    /// Creates a duration of whole minutes; fails when the seconds overflow.
    pub fn of_minutes(minutes: i64) -> Result<Duration> {
        Ok(Duration::of_seconds(multiply_exact(minutes, SECONDS_PER_MINUTE)?))
    }

    /// Creates a duration of whole hours; fails when the seconds overflow.
    pub fn of_hours(hours: i64) -> Result<Duration> {
        Ok(Duration::of_seconds(multiply_exact(hours, SECONDS_PER_HOUR)?))
    }

    /// Creates a duration of standard 24-hour days; fails when the seconds
    /// overflow.
    pub fn of_days(days: i64) -> Result<Duration> {
        Ok(Duration::of_seconds(multiply_exact(days, SECONDS_PER_DAY)?))
    }
}

// Getters
impl Duration {
    /// The whole-second component, floor-based: `-0.5s` has `-1` seconds.
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The nanosecond residue in `0..1_000_000_000`.
    #[inline]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Returns `true` for durations strictly below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// Returns a copy with the given whole seconds and the same nanosecond
    /// residue.
    pub const fn with_seconds(&self, seconds: i64) -> Duration {
        Duration::from_parts(seconds, self.nanos)
    }

    /// Returns a copy with the given nanosecond residue and the same
    /// seconds.
    ///
    /// Fails with an invalid argument error unless `nanos_of_second` is in
    /// `0..1_000_000_000`.
    pub fn with_nanos(&self, nanos_of_second: u32) -> Result<Duration> {
        verify_arg!(nanos_of_second, (nanos_of_second as i64) < NANOS_PER_SECOND);
        Ok(Duration::from_parts(self.seconds, nanos_of_second))
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Duration, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(DurationVisitor)
    }
}

#[cfg(feature = "serde")]
struct DurationVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "an ISO-8601 duration such as \"PT1H30M\"")
    }

    fn visit_str<E>(self, s: &str) -> std::result::Result<Duration, E>
    where
        E: serde::de::Error,
    {
        use serde::de::Unexpected;
        Duration::parse(s).map_err(|_| E::invalid_value(Unexpected::Str(s), &self))
    }
}
