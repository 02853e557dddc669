//! Exact arithmetic on [`Duration`].
//!
//! The inherent methods return `Result` and fail with an arithmetic error on
//! overflow or division by zero. The operator traits are thin wrappers that
//! panic with the same error, matching `std::time::Duration`; the
//! `num_traits` checked traits map the error to `None`.

use super::*;
use chronon_math::{add_exact, floor_div, floor_mod, multiply_exact, negate_exact};
use num_traits::{CheckedAdd, CheckedNeg, CheckedSub, Zero};
use std::iter::Sum;
use std::ops::*;

// Addition
impl Duration {
    /// Returns `self + other`.
    ///
    /// Adding a zero duration returns `self` unchanged.
    ///
    /// ```
    /// # use chronon_duration::Duration;
    /// let a = Duration::of_seconds_nanos(1, 600_000_000).unwrap();
    /// let b = Duration::of_seconds_nanos(2, 700_000_000).unwrap();
    /// assert_eq!(a.plus(&b).unwrap(), Duration::of_seconds_nanos(4, 300_000_000).unwrap());
    ///
    /// assert!(Duration::MAX.plus(&Duration::of_nanos(1)).is_err());
    /// ```
    pub fn plus(&self, other: &Duration) -> Result<Duration> {
        self.plus_parts(other.seconds(), other.nanos() as i64)
    }

    pub fn plus_days(&self, days: i64) -> Result<Duration> {
        self.plus_parts(multiply_exact(days, SECONDS_PER_DAY)?, 0)
    }

    pub fn plus_hours(&self, hours: i64) -> Result<Duration> {
        self.plus_parts(multiply_exact(hours, SECONDS_PER_HOUR)?, 0)
    }

    pub fn plus_minutes(&self, minutes: i64) -> Result<Duration> {
        self.plus_parts(multiply_exact(minutes, SECONDS_PER_MINUTE)?, 0)
    }

    pub fn plus_seconds(&self, seconds: i64) -> Result<Duration> {
        self.plus_parts(seconds, 0)
    }

    pub fn plus_millis(&self, millis: i64) -> Result<Duration> {
        self.plus_parts(
            millis / MILLIS_PER_SECOND,
            (millis % MILLIS_PER_SECOND) * NANOS_PER_MILLI,
        )
    }

    pub fn plus_nanos(&self, nanos: i64) -> Result<Duration> {
        self.plus_parts(0, nanos)
    }

    /// Shared kernel of every addition: adds whole seconds and a nanosecond
    /// delta of any sign, carrying through the normalization rule.
    fn plus_parts(&self, seconds_to_add: i64, nanos_to_add: i64) -> Result<Duration> {
        if seconds_to_add == 0 && nanos_to_add == 0 {
            return Ok(*self);
        }
        let seconds = add_exact(
            add_exact(self.seconds(), seconds_to_add)?,
            nanos_to_add / NANOS_PER_SECOND,
        )?;
        // Stays well inside i64: below one second plus less than one second.
        let nano_adjustment = self.nanos() as i64 + nanos_to_add % NANOS_PER_SECOND;
        Duration::of_seconds_nanos(seconds, nano_adjustment)
    }
}

// Subtraction
impl Duration {
    /// Returns `self - other`.
    ///
    /// `other` is never negated directly, so subtracting a duration whose
    /// seconds are `i64::MIN` works whenever the result is representable.
    pub fn minus(&self, other: &Duration) -> Result<Duration> {
        let seconds_to_subtract = other.seconds();
        let nanos_to_subtract = other.nanos() as i64;
        if seconds_to_subtract == i64::MIN {
            self.plus_parts(i64::MAX, -nanos_to_subtract)?
                .plus_parts(1, 0)
        } else {
            self.plus_parts(-seconds_to_subtract, -nanos_to_subtract)
        }
    }

    pub fn minus_days(&self, days: i64) -> Result<Duration> {
        self.minus_amount(days, Duration::plus_days)
    }

    pub fn minus_hours(&self, hours: i64) -> Result<Duration> {
        self.minus_amount(hours, Duration::plus_hours)
    }

    pub fn minus_minutes(&self, minutes: i64) -> Result<Duration> {
        self.minus_amount(minutes, Duration::plus_minutes)
    }

    pub fn minus_seconds(&self, seconds: i64) -> Result<Duration> {
        self.minus_amount(seconds, Duration::plus_seconds)
    }

    pub fn minus_millis(&self, millis: i64) -> Result<Duration> {
        self.minus_amount(millis, Duration::plus_millis)
    }

    pub fn minus_nanos(&self, nanos: i64) -> Result<Duration> {
        self.minus_amount(nanos, Duration::plus_nanos)
    }

    /// Subtracts `amount` units through the matching `plus_*` function.
    /// `i64::MIN` has no negation, so it is added as `i64::MAX` then `1`.
    fn minus_amount(
        &self,
        amount: i64,
        plus: fn(&Duration, i64) -> Result<Duration>,
    ) -> Result<Duration> {
        if amount == i64::MIN {
            plus(&plus(self, i64::MAX)?, 1)
        } else {
            plus(self, -amount)
        }
    }
}

// Scaling, negation
impl Duration {
    /// Returns `self * multiplicand`.
    ///
    /// ```
    /// # use chronon_duration::Duration;
    /// let d = Duration::of_seconds_nanos(3, 333_333_333).unwrap();
    /// assert_eq!(d.multiplied_by(3).unwrap(), Duration::of_seconds_nanos(9, 999_999_999).unwrap());
    /// assert_eq!(d.multiplied_by(-1).unwrap(), Duration::of_seconds_nanos(-4, 666_666_667).unwrap());
    /// ```
    pub fn multiplied_by(&self, multiplicand: i64) -> Result<Duration> {
        match multiplicand {
            0 => Ok(Duration::ZERO),
            1 => Ok(*self),
            _ => Duration::from_total_nanos(multiply_exact(
                self.total_nanos(),
                multiplicand as i128,
            )?),
        }
    }

    /// Returns `self / divisor`, truncated toward zero at nanosecond
    /// precision.
    ///
    /// Fails with division by zero for a zero divisor, and with overflow for
    /// `Duration::MIN / -1`.
    pub fn divided_by(&self, divisor: i64) -> Result<Duration> {
        match divisor {
            0 => Err(Error::division_by_zero("divided_by")),
            1 => Ok(*self),
            _ => Duration::from_total_nanos(self.total_nanos() / divisor as i128),
        }
    }

    /// Returns how many whole times `divisor` fits into `self`, truncated
    /// toward zero.
    ///
    /// ```
    /// # use chronon_duration::Duration;
    /// let day = Duration::of_days(1).unwrap();
    /// let shift = Duration::of_hours(7).unwrap();
    /// assert_eq!(day.divided_by_duration(&shift).unwrap(), 3);
    /// ```
    pub fn divided_by_duration(&self, divisor: &Duration) -> Result<i64> {
        if divisor.is_zero() {
            return Err(Error::division_by_zero("divided_by_duration"));
        }
        let quotient = self.total_nanos() / divisor.total_nanos();
        Ok(i64::try_from(quotient)?)
    }

    /// Returns `-self`; fails when the seconds are `i64::MIN`.
    pub fn negated(&self) -> Result<Duration> {
        Duration::of_seconds_nanos(negate_exact(self.seconds())?, -(self.nanos() as i64))
    }

    /// Returns the magnitude of `self`; fails when the seconds are `i64::MIN`.
    pub fn abs(&self) -> Result<Duration> {
        if self.is_negative() {
            self.negated()
        } else {
            Ok(*self)
        }
    }

    /// The exact value in nanoseconds; always fits in 128 bits.
    #[inline]
    fn total_nanos(&self) -> i128 {
        self.seconds() as i128 * NANOS_PER_SECOND as i128 + self.nanos() as i128
    }

    fn from_total_nanos(total_nanos: i128) -> Result<Duration> {
        let seconds = floor_div(total_nanos, NANOS_PER_SECOND as i128)?;
        let nanos = floor_mod(total_nanos, NANOS_PER_SECOND as i128)?;
        Ok(Duration::from_parts(i64::try_from(seconds)?, nanos as u32))
    }
}

#[cold]
#[track_caller]
fn arithmetic_panic(operator: &str, err: Error) -> ! {
    log::error!("duration operator '{operator}' failed: {err}");
    panic!("duration {operator} failed: {err}")
}

// Operators
impl Add for Duration {
    type Output = Duration;

    #[track_caller]
    fn add(self, other: Duration) -> Duration {
        self.plus(&other)
            .unwrap_or_else(|e| arithmetic_panic("add", e))
    }
}

impl Sub for Duration {
    type Output = Duration;

    #[track_caller]
    fn sub(self, other: Duration) -> Duration {
        self.minus(&other)
            .unwrap_or_else(|e| arithmetic_panic("sub", e))
    }
}

impl AddAssign for Duration {
    #[track_caller]
    fn add_assign(&mut self, other: Duration) {
        *self = *self + other;
    }
}

impl SubAssign for Duration {
    #[track_caller]
    fn sub_assign(&mut self, other: Duration) {
        *self = *self - other;
    }
}

impl Neg for Duration {
    type Output = Duration;

    #[track_caller]
    fn neg(self) -> Duration {
        self.negated().unwrap_or_else(|e| arithmetic_panic("neg", e))
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    #[track_caller]
    fn mul(self, multiplicand: i64) -> Duration {
        self.multiplied_by(multiplicand)
            .unwrap_or_else(|e| arithmetic_panic("mul", e))
    }
}

impl MulAssign<i64> for Duration {
    #[track_caller]
    fn mul_assign(&mut self, multiplicand: i64) {
        *self = *self * multiplicand;
    }
}

impl Div<i64> for Duration {
    type Output = Duration;

    #[track_caller]
    fn div(self, divisor: i64) -> Duration {
        self.divided_by(divisor)
            .unwrap_or_else(|e| arithmetic_panic("div", e))
    }
}

impl DivAssign<i64> for Duration {
    #[track_caller]
    fn div_assign(&mut self, divisor: i64) {
        *self = *self / divisor;
    }
}

impl Div for Duration {
    type Output = i64;

    #[track_caller]
    fn div(self, divisor: Duration) -> i64 {
        self.divided_by_duration(&divisor)
            .unwrap_or_else(|e| arithmetic_panic("div", e))
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, |acc, d| acc + d)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, |acc, d| acc + *d)
    }
}

impl Zero for Duration {
    fn zero() -> Self {
        Duration::ZERO
    }

    fn is_zero(&self) -> bool {
        self.seconds() == 0 && self.nanos() == 0
    }
}

impl CheckedAdd for Duration {
    fn checked_add(&self, other: &Duration) -> Option<Duration> {
        self.plus(other).ok()
    }
}

impl CheckedSub for Duration {
    fn checked_sub(&self, other: &Duration) -> Option<Duration> {
        self.minus(other).ok()
    }
}

impl CheckedNeg for Duration {
    fn checked_neg(&self) -> Option<Duration> {
        self.negated().ok()
    }
}
