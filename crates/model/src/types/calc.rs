// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Pure arithmetic over minor-unit amounts.
//!
//! Every function here is stateless and side-effect free: inputs are taken by
//! value and each result is a new [`Amount`]. All arithmetic is checked:
//! any result outside the `i64` range surfaces as
//! [`MoneyError::ArithmeticOverflow`], never as silent wraparound.
//!
//! Division and modulus truncate toward zero, matching native integer
//! semantics; the remainder therefore carries the sign of the dividend.

use crate::{
    errors::{MoneyError, MoneyResult},
    types::Amount,
};

/// Adds two amounts.
///
/// # Errors
///
/// Returns [`MoneyError::ArithmeticOverflow`] if the sum exceeds the `i64` range.
pub fn add(a: Amount, b: Amount) -> MoneyResult<Amount> {
    a.as_raw()
        .checked_add(b.as_raw())
        .map(Amount::new)
        .ok_or(MoneyError::ArithmeticOverflow("add"))
}

/// Subtracts `b` from `a`.
///
/// # Errors
///
/// Returns [`MoneyError::ArithmeticOverflow`] if the difference exceeds the `i64` range.
pub fn subtract(a: Amount, b: Amount) -> MoneyResult<Amount> {
    a.as_raw()
        .checked_sub(b.as_raw())
        .map(Amount::new)
        .ok_or(MoneyError::ArithmeticOverflow("subtract"))
}

/// Multiplies an amount by an integer scalar.
///
/// # Errors
///
/// Returns [`MoneyError::ArithmeticOverflow`] if the product exceeds the `i64` range.
pub fn multiply(a: Amount, scalar: i64) -> MoneyResult<Amount> {
    a.as_raw()
        .checked_mul(scalar)
        .map(Amount::new)
        .ok_or(MoneyError::ArithmeticOverflow("multiply"))
}

/// Divides an amount by an integer divisor, truncating toward zero.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidDivisor`] if `divisor` is zero, or
/// [`MoneyError::ArithmeticOverflow`] for `i64::MIN / -1`.
pub fn divide(a: Amount, divisor: i64) -> MoneyResult<Amount> {
    if divisor == 0 {
        return Err(MoneyError::InvalidDivisor(0));
    }
    a.as_raw()
        .checked_div(divisor)
        .map(Amount::new)
        .ok_or(MoneyError::ArithmeticOverflow("divide"))
}

/// Returns the remainder of `a / divisor`, carrying the sign of `a`.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidDivisor`] if `divisor` is zero, or
/// [`MoneyError::ArithmeticOverflow`] for `i64::MIN % -1`.
pub fn modulus(a: Amount, divisor: i64) -> MoneyResult<Amount> {
    if divisor == 0 {
        return Err(MoneyError::InvalidDivisor(0));
    }
    a.as_raw()
        .checked_rem(divisor)
        .map(Amount::new)
        .ok_or(MoneyError::ArithmeticOverflow("modulus"))
}

/// Computes the truncated proportional share `a * numerator / denominator_sum`.
///
/// The intermediate product is widened to `i128` so the share itself never
/// loses precision; only the final result must fit the `i64` backing. The
/// truncated remainder is the caller's responsibility; the distributor
/// redistributes it so no total is ever lossy.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidDivisor`] if `denominator_sum` is zero, or
/// [`MoneyError::ArithmeticOverflow`] if the share exceeds the `i64` range.
pub fn allocate(a: Amount, numerator: i64, denominator_sum: i64) -> MoneyResult<Amount> {
    if denominator_sum == 0 {
        return Err(MoneyError::InvalidDivisor(0));
    }
    let share =
        i128::from(a.as_raw()) * i128::from(numerator) / i128::from(denominator_sum);
    Amount::try_from_widened(share).map_err(|_| MoneyError::ArithmeticOverflow("allocate"))
}

/// Returns the absolute value of an amount.
///
/// # Errors
///
/// Returns [`MoneyError::ArithmeticOverflow`] for `i64::MIN`, whose magnitude
/// is not representable.
pub fn absolute(a: Amount) -> MoneyResult<Amount> {
    a.as_raw()
        .checked_abs()
        .map(Amount::new)
        .ok_or(MoneyError::ArithmeticOverflow("absolute"))
}

/// Returns the negation of an amount. Negating zero yields zero.
///
/// # Errors
///
/// Returns [`MoneyError::ArithmeticOverflow`] for `i64::MIN`.
pub fn negate(a: Amount) -> MoneyResult<Amount> {
    a.as_raw()
        .checked_neg()
        .map(Amount::new)
        .ok_or(MoneyError::ArithmeticOverflow("negate"))
}

/// Rounds an amount to the nearest multiple of `10^fraction` minor units.
///
/// The rule operates on the absolute value and reapplies the sign: with
/// `exp = 10^fraction` and `m = |a| mod exp`, the magnitude is rounded up by
/// `exp - m` when `m > exp / 2` (strictly) and down by `m` otherwise, so an
/// exact half rounds toward zero. Zero maps to zero unconditionally, and the
/// operation is idempotent.
///
/// # Errors
///
/// Returns [`MoneyError::ArithmeticOverflow`] if `10^fraction` or the rounded
/// magnitude exceeds the `i64` range.
pub fn round(a: Amount, fraction: u8) -> MoneyResult<Amount> {
    if a.is_zero() {
        return Ok(Amount::ZERO);
    }

    let exp = 10_i64
        .checked_pow(u32::from(fraction))
        .ok_or(MoneyError::ArithmeticOverflow("round"))?;
    let magnitude = absolute(a)?.as_raw();
    let m = magnitude % exp;

    let rounded = if m > exp / 2 {
        magnitude
            .checked_add(exp - m)
            .ok_or(MoneyError::ArithmeticOverflow("round"))?
    } else {
        magnitude - m
    };

    if a.is_negative() {
        Ok(Amount::new(-rounded))
    } else {
        Ok(Amount::new(rounded))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 2, 3)]
    #[case(-1, -2, -3)]
    #[case(10, -4, 6)]
    #[case(i64::MAX, 0, i64::MAX)]
    fn test_add(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        assert_eq!(
            add(Amount::new(a), Amount::new(b)).unwrap(),
            Amount::new(expected)
        );
    }

    #[rstest]
    fn test_add_overflow() {
        let result = add(Amount::new(i64::MAX), Amount::new(1));
        assert_eq!(result, Err(MoneyError::ArithmeticOverflow("add")));
    }

    #[rstest]
    #[case(10, 4, 6)]
    #[case(-10, -4, -6)]
    #[case(0, 5, -5)]
    fn test_subtract(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        assert_eq!(
            subtract(Amount::new(a), Amount::new(b)).unwrap(),
            Amount::new(expected)
        );
    }

    #[rstest]
    fn test_subtract_overflow() {
        let result = subtract(Amount::new(i64::MIN), Amount::new(1));
        assert_eq!(result, Err(MoneyError::ArithmeticOverflow("subtract")));
    }

    #[rstest]
    #[case(5, 5, 25)]
    #[case(5, -5, -25)]
    #[case(0, 1_000, 0)]
    fn test_multiply(#[case] a: i64, #[case] scalar: i64, #[case] expected: i64) {
        assert_eq!(
            multiply(Amount::new(a), scalar).unwrap(),
            Amount::new(expected)
        );
    }

    #[rstest]
    fn test_multiply_overflow() {
        let result = multiply(Amount::new(i64::MAX / 2 + 1), 2);
        assert_eq!(result, Err(MoneyError::ArithmeticOverflow("multiply")));
    }

    #[rstest]
    #[case(9, 2, 4)] // Truncates toward zero
    #[case(-9, 2, -4)]
    #[case(9, -2, -4)]
    #[case(10, 5, 2)]
    fn test_divide(#[case] a: i64, #[case] divisor: i64, #[case] expected: i64) {
        assert_eq!(
            divide(Amount::new(a), divisor).unwrap(),
            Amount::new(expected)
        );
    }

    #[rstest]
    fn test_divide_by_zero() {
        assert_eq!(
            divide(Amount::new(1), 0),
            Err(MoneyError::InvalidDivisor(0))
        );
    }

    #[rstest]
    fn test_divide_min_by_negative_one() {
        assert_eq!(
            divide(Amount::new(i64::MIN), -1),
            Err(MoneyError::ArithmeticOverflow("divide"))
        );
    }

    #[rstest]
    #[case(9, 2, 1)]
    #[case(-9, 2, -1)] // Remainder carries the dividend sign
    #[case(9, -2, 1)]
    #[case(8, 2, 0)]
    fn test_modulus(#[case] a: i64, #[case] divisor: i64, #[case] expected: i64) {
        assert_eq!(
            modulus(Amount::new(a), divisor).unwrap(),
            Amount::new(expected)
        );
    }

    #[rstest]
    fn test_modulus_by_zero() {
        assert_eq!(
            modulus(Amount::new(1), 0),
            Err(MoneyError::InvalidDivisor(0))
        );
    }

    #[rstest]
    #[case(100, 1, 3, 33)]
    #[case(100, 2, 3, 66)]
    #[case(200, 25, 100, 50)]
    #[case(-100, 1, 3, -33)]
    #[case(100, 0, 3, 0)]
    fn test_allocate(
        #[case] a: i64,
        #[case] numerator: i64,
        #[case] denominator_sum: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(
            allocate(Amount::new(a), numerator, denominator_sum).unwrap(),
            Amount::new(expected)
        );
    }

    #[rstest]
    fn test_allocate_zero_denominator() {
        assert_eq!(
            allocate(Amount::new(100), 1, 0),
            Err(MoneyError::InvalidDivisor(0))
        );
    }

    #[rstest]
    fn test_allocate_wide_intermediate() {
        // The i64 product would overflow; the i128 widening must not.
        let result = allocate(Amount::new(i64::MAX), 1_000, 1_000).unwrap();
        assert_eq!(result, Amount::new(i64::MAX));
    }

    #[rstest]
    #[case(5, 5)]
    #[case(-5, 5)]
    #[case(0, 0)]
    fn test_absolute(#[case] a: i64, #[case] expected: i64) {
        assert_eq!(absolute(Amount::new(a)).unwrap(), Amount::new(expected));
    }

    #[rstest]
    #[case(5, -5)]
    #[case(-5, 5)]
    #[case(0, 0)] // Never a negative-zero artifact
    fn test_negate(#[case] a: i64, #[case] expected: i64) {
        assert_eq!(negate(Amount::new(a)).unwrap(), Amount::new(expected));
    }

    #[rstest]
    fn test_absolute_and_negate_min_overflow() {
        assert_eq!(
            absolute(Amount::new(i64::MIN)),
            Err(MoneyError::ArithmeticOverflow("absolute"))
        );
        assert_eq!(
            negate(Amount::new(i64::MIN)),
            Err(MoneyError::ArithmeticOverflow("negate"))
        );
    }

    #[rstest]
    #[case(125, 2, 100)]
    #[case(175, 2, 200)]
    #[case(150, 2, 100)] // Exact half rounds down
    #[case(151, 2, 200)]
    #[case(-125, 2, -100)]
    #[case(-175, 2, -200)]
    #[case(0, 2, 0)]
    #[case(49, 2, 0)]
    #[case(51, 2, 100)]
    #[case(7, 0, 7)] // fraction 0 is the identity
    #[case(1_500, 3, 1_000)]
    #[case(1_501, 3, 2_000)]
    fn test_round(#[case] a: i64, #[case] fraction: u8, #[case] expected: i64) {
        assert_eq!(round(Amount::new(a), fraction).unwrap(), Amount::new(expected));
    }

    #[rstest]
    #[case(125, 2)]
    #[case(-175, 2)]
    #[case(987_654_321, 3)]
    fn test_round_idempotent(#[case] a: i64, #[case] fraction: u8) {
        let once = round(Amount::new(a), fraction).unwrap();
        let twice = round(once, fraction).unwrap();
        assert_eq!(once, twice);
    }

    #[rstest]
    fn test_round_overflow() {
        // i64::MAX ends in ...807: at fraction 1 the remainder 7 exceeds half
        // of 10, so the magnitude would round up past the representable range.
        let result = round(Amount::new(i64::MAX), 1);
        assert_eq!(result, Err(MoneyError::ArithmeticOverflow("round")));
    }
}
