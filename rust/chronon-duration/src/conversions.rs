use super::*;
use chronon_math::{add_exact, multiply_exact};

// Totals
impl Duration {
    /// Whole standard days, truncating the floor-based seconds toward zero.
    pub const fn to_days(&self) -> i64 {
        self.seconds() / SECONDS_PER_DAY
    }

    pub const fn to_hours(&self) -> i64 {
        self.seconds() / SECONDS_PER_HOUR
    }

    pub const fn to_minutes(&self) -> i64 {
        self.seconds() / SECONDS_PER_MINUTE
    }

    /// Same as [`Duration::seconds`].
    pub const fn to_seconds(&self) -> i64 {
        self.seconds()
    }

    /// Total milliseconds, truncated toward zero.
    ///
    /// ```
    /// # use chronon_duration::Duration;
    /// assert_eq!(Duration::of_nanos(-1_500_000).to_millis().unwrap(), -1);
    /// assert!(Duration::MAX.to_millis().is_err());
    /// ```
    pub fn to_millis(&self) -> Result<i64> {
        let (seconds, nanos) = self.truncating_parts();
        add_exact(
            multiply_exact(seconds, MILLIS_PER_SECOND)?,
            nanos / NANOS_PER_MILLI,
        )
    }

    /// Total nanoseconds; fails when the count leaves the `i64` range.
    pub fn to_nanos(&self) -> Result<i64> {
        let (seconds, nanos) = self.truncating_parts();
        add_exact(multiply_exact(seconds, NANOS_PER_SECOND)?, nanos)
    }

    /// Seconds and nanos sharing the sign of the value, so that dividing the
    /// nanos truncates toward zero.
    fn truncating_parts(&self) -> (i64, i64) {
        if self.seconds() < 0 {
            (self.seconds() + 1, self.nanos() as i64 - NANOS_PER_SECOND)
        } else {
            (self.seconds(), self.nanos() as i64)
        }
    }
}

// Parts
impl Duration {
    pub const fn to_days_part(&self) -> i64 {
        self.seconds() / SECONDS_PER_DAY
    }

    /// Hours within the day, in `-23..=23`.
    pub const fn to_hours_part(&self) -> i32 {
        (self.to_hours() % HOURS_PER_DAY) as i32
    }

    /// Minutes within the hour, in `-59..=59`.
    pub const fn to_minutes_part(&self) -> i32 {
        (self.to_minutes() % MINUTES_PER_HOUR) as i32
    }

    /// Seconds within the minute, in `-59..=59`.
    pub const fn to_seconds_part(&self) -> i32 {
        (self.seconds() % SECONDS_PER_MINUTE) as i32
    }

    pub const fn to_millis_part(&self) -> i32 {
        (self.nanos() as i64 / NANOS_PER_MILLI) as i32
    }

    pub const fn to_nanos_part(&self) -> i32 {
        self.nanos() as i32
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = Error;

    fn try_from(value: std::time::Duration) -> Result<Duration> {
        let seconds = i64::try_from(value.as_secs())?;
        Ok(Duration::from_parts(seconds, value.subsec_nanos()))
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = Error;

    fn try_from(value: Duration) -> Result<std::time::Duration> {
        if value.is_negative() {
            return Err(Error::invalid_arg(
                "duration",
                "negative durations have no unsigned equivalent",
            ));
        }
        Ok(std::time::Duration::new(
            value.seconds() as u64,
            value.nanos(),
        ))
    }
}
