//! Exact integer arithmetic.
//!
//! Every operation here either produces the mathematically exact result or
//! fails with an arithmetic error; nothing wraps, saturates or rounds.
//! Division and remainder round toward negative infinity, which keeps a
//! remainder taken against a positive divisor non-negative regardless of the
//! sign of the dividend.
//!
//! The functions are generic over the signed primitive integers so that the
//! same checks serve both the `i64` fields of a duration and the `i128`
//! intermediates used by scaling.

use chronon_common::{Result, error::Error};
use num_traits::{CheckedNeg, CheckedRem, PrimInt, Signed};

#[cfg(test)]
mod tests;

/// Returns `a + b`, or an overflow error when the sum leaves the range of `T`.
#[inline]
pub fn add_exact<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_add(&b).ok_or_else(|| Error::overflow("add"))
}

/// Returns `a - b`, or an overflow error when the difference leaves the range of `T`.
#[inline]
pub fn subtract_exact<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_sub(&b).ok_or_else(|| Error::overflow("subtract"))
}

/// Returns `a * b`, or an overflow error when the product leaves the range of `T`.
///
/// `T::min_value() * -1` is reported as overflow as well.
#[inline]
pub fn multiply_exact<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_mul(&b).ok_or_else(|| Error::overflow("multiply"))
}

/// Returns `-a`; fails for `T::min_value()`.
#[inline]
pub fn negate_exact<T: PrimInt + CheckedNeg>(a: T) -> Result<T> {
    a.checked_neg().ok_or_else(|| Error::overflow("negate"))
}

/// Quotient of `a / b` rounded toward negative infinity.
///
/// ```
/// # use chronon_math::floor_div;
/// assert_eq!(floor_div(7i64, 2).unwrap(), 3);
/// assert_eq!(floor_div(-7i64, 2).unwrap(), -4);
/// assert_eq!(floor_div(-1i64, 1_000_000_000).unwrap(), -1);
/// ```
#[inline]
pub fn floor_div<T: PrimInt + Signed>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(Error::division_by_zero("floor_div"));
    }
    let q = a.checked_div(&b).ok_or_else(|| Error::overflow("floor_div"))?;
    // Truncation rounded toward zero; step down when the signs differ and
    // the division was inexact.
    if (a ^ b) < T::zero() && q * b != a {
        Ok(q - T::one())
    } else {
        Ok(q)
    }
}

/// Remainder matching [`floor_div`]: the result carries the sign of `b`.
///
/// `floor_div(a, b) * b + floor_mod(a, b) == a` for every `b != 0`.
#[inline]
pub fn floor_mod<T: PrimInt + Signed + CheckedRem>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(Error::division_by_zero("floor_mod"));
    }
    // checked_rem only refuses min_value() % -1, whose remainder is zero.
    let r = a.checked_rem(&b).unwrap_or_else(T::zero);
    if !r.is_zero() && (r ^ b) < T::zero() {
        Ok(r + b)
    } else {
        Ok(r)
    }
}
