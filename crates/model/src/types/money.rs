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

//! A monetary value bound to a currency, with checked arithmetic and
//! exact-sum distribution.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use ducat_core::formatting::Separable;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::{
    errors::{MoneyError, MoneyResult},
    types::{Amount, Currency, MoneyFormatter, calc},
};

/// An immutable amount of a specific currency, stored in minor units.
///
/// Values are `Copy`; every operation produces a new value and reports
/// failure through [`MoneyError`] instead of wrapping, saturating, or
/// terminating the process. Binary operations require both operands to carry
/// the same currency code.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Money {
    amount: Amount,
    currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] from an amount of minor units.
    #[must_use]
    pub const fn from_minor(minor: i64, currency: Currency) -> Self {
        Self {
            amount: Amount::new(minor),
            currency,
        }
    }

    /// Creates a new [`Money`] from minor units and a registered currency code.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyNotFound`] if `code` is not registered.
    pub fn from_minor_with_code(minor: i64, code: &str) -> MoneyResult<Self> {
        Ok(Self::from_minor(minor, Currency::from_code(code)?))
    }

    /// Creates a new [`Money`] from a major-unit decimal value.
    ///
    /// The value is scaled by `10^fraction` and rounded half-even at the
    /// minor-unit boundary.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] if the scaled value does
    /// not fit the `i64` minor-unit range.
    pub fn from_decimal(value: Decimal, currency: Currency) -> MoneyResult<Self> {
        let scale = Decimal::from(10u64.pow(u32::from(currency.fraction)));
        let minor = value
            .checked_mul(scale)
            .ok_or(MoneyError::ArithmeticOverflow("from_decimal"))?
            .round()
            .to_i64()
            .ok_or(MoneyError::ArithmeticOverflow("from_decimal"))?;
        Ok(Self::from_minor(minor, currency))
    }

    /// Creates a zero-valued [`Money`] in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Parses a formatted amount in the display conventions of a registered
    /// currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyNotFound`] if `code` is not registered,
    /// or [`MoneyError::Parse`] if `text` is not a valid rendering.
    pub fn parse(text: &str, code: &str) -> MoneyResult<Self> {
        let currency = Currency::from_code(code)?;
        let minor = MoneyFormatter::new(&currency).parse(text)?;
        Ok(Self::from_minor(minor, currency))
    }

    /// Returns the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.amount.as_raw()
    }

    /// Returns the currency descriptor this value was constructed with.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency_code(&self) -> Ustr {
        self.currency.code
    }

    /// Returns the amount in major units as an exact decimal.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.minor_units(), u32::from(self.currency.fraction))
    }

    /// Returns the amount in major units as a float (lossy for large values).
    #[must_use]
    pub fn to_major_units(&self) -> f64 {
        self.minor_units() as f64 / 10f64.powi(i32::from(self.currency.fraction))
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Returns `true` if the amount is less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Returns `true` if `other` carries the same currency code.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    fn check_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                lhs: self.currency.code,
                rhs: other.currency.code,
            })
        }
    }

    /// Compares two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.check_same_currency(other)?;
        Ok(self.minor_units().cmp(&other.minor_units()))
    }

    /// Returns `true` if both values are equal amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Returns `true` if `self` is strictly greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns `true` if `self` is greater than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Returns `true` if `self` is strictly less than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Returns `true` if `self` is less than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Returns the sum of two same-currency amounts.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ, or
    /// [`MoneyError::ArithmeticOverflow`] if the sum exceeds the `i64` range.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.check_same_currency(other)?;
        Ok(self.with_amount(calc::add(self.amount, other.amount)?))
    }

    /// Returns the difference of two same-currency amounts.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ, or
    /// [`MoneyError::ArithmeticOverflow`] on overflow.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.check_same_currency(other)?;
        Ok(self.with_amount(calc::subtract(self.amount, other.amount)?))
    }

    /// Returns the amount multiplied by a bare scalar.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] on overflow.
    pub fn multiply(&self, scalar: i64) -> MoneyResult<Self> {
        Ok(self.with_amount(calc::multiply(self.amount, scalar)?))
    }

    /// Returns the amount divided by a bare scalar, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDivisor`] for a zero divisor, or
    /// [`MoneyError::ArithmeticOverflow`] for `i64::MIN / -1`.
    pub fn divide(&self, divisor: i64) -> MoneyResult<Self> {
        Ok(self.with_amount(calc::divide(self.amount, divisor)?))
    }

    /// Returns the remainder of division by a bare scalar.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDivisor`] for a zero divisor, or
    /// [`MoneyError::ArithmeticOverflow`] for `i64::MIN % -1`.
    pub fn modulus(&self, divisor: i64) -> MoneyResult<Self> {
        Ok(self.with_amount(calc::modulus(self.amount, divisor)?))
    }

    /// Returns the absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] for `i64::MIN`.
    pub fn absolute(&self) -> MoneyResult<Self> {
        Ok(self.with_amount(calc::absolute(self.amount)?))
    }

    /// Returns the negated value.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] for `i64::MIN`.
    pub fn negated(&self) -> MoneyResult<Self> {
        Ok(self.with_amount(calc::negate(self.amount)?))
    }

    /// Rounds the amount to the nearest whole major unit, in minor units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] if rounding away from zero
    /// exceeds the `i64` range.
    pub fn round(&self) -> MoneyResult<Self> {
        Ok(self.with_amount(calc::round(self.amount, self.currency.fraction)?))
    }

    /// Splits the amount into `n` parts that differ by at most one minor
    /// unit and sum exactly to the original amount.
    ///
    /// A positive remainder is assigned one extra unit to the leading parts;
    /// for negative amounts the extra unit is negative.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDivisor`] if `n` is not positive.
    pub fn split(&self, n: i64) -> MoneyResult<Vec<Self>> {
        if n <= 0 {
            return Err(MoneyError::InvalidDivisor(n));
        }

        let base = calc::divide(self.amount, n)?;
        let remainder = calc::modulus(self.amount, n)?.as_raw();
        let step: i64 = if remainder < 0 { -1 } else { 1 };

        let mut parts = vec![self.with_amount(base); n as usize];
        for part in parts.iter_mut().take(remainder.unsigned_abs() as usize) {
            part.amount = calc::add(part.amount, Amount::new(step))?;
        }
        Ok(parts)
    }

    /// Allocates the amount across weighted parties, exactly.
    ///
    /// Each party first receives its truncated proportional share; any
    /// leftover is then redistributed one minor unit at a time starting at
    /// party 0. A ratio of zero is a valid weight and its party remains
    /// eligible for the redistribution. When all ratios are zero every party
    /// receives zero.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidRatios`] if `ratios` is empty or contains
    /// a negative entry, or [`MoneyError::ArithmeticOverflow`] if the ratio
    /// sum overflows.
    pub fn allocate(&self, ratios: &[i64]) -> MoneyResult<Vec<Self>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidRatios("no ratios given".to_string()));
        }
        let mut sum: i64 = 0;
        for &ratio in ratios {
            if ratio < 0 {
                return Err(MoneyError::InvalidRatios(format!(
                    "negative ratio {ratio}"
                )));
            }
            sum = sum
                .checked_add(ratio)
                .ok_or(MoneyError::ArithmeticOverflow("ratio sum"))?;
        }
        if sum == 0 {
            return Ok(vec![self.with_amount(Amount::ZERO); ratios.len()]);
        }

        let mut parts = Vec::with_capacity(ratios.len());
        let mut total: i64 = 0;
        for &ratio in ratios {
            let share = calc::allocate(self.amount, ratio, sum)?;
            total = total
                .checked_add(share.as_raw())
                .ok_or(MoneyError::ArithmeticOverflow("allocate"))?;
            parts.push(self.with_amount(share));
        }

        let mut leftover = self
            .minor_units()
            .checked_sub(total)
            .ok_or(MoneyError::ArithmeticOverflow("allocate"))?;
        let step = Amount::new(if leftover < 0 { -1 } else { 1 });
        let mut index = 0;
        while leftover != 0 {
            let part = &mut parts[index % ratios.len()];
            part.amount = calc::add(part.amount, step)?;
            leftover -= step.as_raw();
            index += 1;
        }
        Ok(parts)
    }

    /// Renders the amount with the currency symbol.
    #[must_use]
    pub fn display(&self) -> String {
        MoneyFormatter::new(&self.currency).format(self.minor_units())
    }

    /// Renders the amount with the currency code at the symbol slot.
    #[must_use]
    pub fn display_with_code(&self) -> String {
        MoneyFormatter::new(&self.currency).format_with_code(self.minor_units())
    }

    /// Returns a string with the major-unit amount underscore-grouped.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        format!(
            "{} {}",
            self.as_decimal().to_string().separate_with_underscores(),
            self.currency
        )
    }

    const fn with_amount(&self, amount: Amount) -> Self {
        Self {
            amount,
            currency: self.currency,
        }
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {})",
            stringify!(Money),
            self.as_decimal(),
            self.currency
        )
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_decimal(), self.currency)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount_str, code) = s.rsplit_once(' ').ok_or_else(|| {
            MoneyError::Parse(format!(
                "expected '<amount> <currency>' format, was '{s}'"
            ))
        })?;
        let currency = Currency::from_code(code)?;
        let value = Decimal::from_str(&amount_str.replace('_', ""))
            .map_err(|e| MoneyError::Parse(format!("invalid amount '{amount_str}': {e}")))?;
        Self::from_decimal(value, currency)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn usd(minor: i64) -> Money {
        Money::from_minor(minor, Currency::USD())
    }

    #[rstest]
    fn test_from_minor_with_code() {
        let money = Money::from_minor_with_code(101, "usd").unwrap();
        assert_eq!(money.minor_units(), 101);
        assert_eq!(money.currency_code().as_str(), "USD");
        assert_eq!(
            Money::from_minor_with_code(1, "ZZZZ"),
            Err(MoneyError::CurrencyNotFound("ZZZZ".to_string()))
        );
    }

    #[rstest]
    #[case(dec!(10.10), 1010)]
    #[case(dec!(-0.01), -1)]
    #[case(dec!(0), 0)]
    #[case(dec!(1.005), 100)] // half-even at the minor-unit boundary
    #[case(dec!(1.015), 102)]
    fn test_from_decimal(#[case] value: Decimal, #[case] expected: i64) {
        let money = Money::from_decimal(value, Currency::USD()).unwrap();
        assert_eq!(money.minor_units(), expected);
    }

    #[rstest]
    fn test_from_decimal_overflow() {
        let result = Money::from_decimal(dec!(100_000_000_000_000_000), Currency::USD());
        assert_eq!(result, Err(MoneyError::ArithmeticOverflow("from_decimal")));
    }

    #[rstest]
    fn test_zero_and_predicates() {
        assert!(Money::zero(Currency::USD()).is_zero());
        assert!(usd(1).is_positive());
        assert!(usd(-1).is_negative());
        assert!(!usd(0).is_positive());
        assert!(!usd(0).is_negative());
    }

    #[rstest]
    fn test_parse_with_code() {
        let money = Money::parse("$1,234.56", "USD").unwrap();
        assert_eq!(money, usd(123456));
        assert!(Money::parse("1", "ZZZZ").is_err());
    }

    #[rstest]
    fn test_as_decimal_and_major_units() {
        let money = usd(101012);
        assert_eq!(money.as_decimal(), dec!(1010.12));
        assert!((money.to_major_units() - 1010.12).abs() < f64::EPSILON);
        assert!(
            (Money::from_minor(500, Currency::JPY()).to_major_units() - 500.0).abs()
                < f64::EPSILON
        );
    }

    #[rstest]
    fn test_comparisons() {
        let a = usd(100);
        let b = usd(200);
        assert_eq!(a.compare(&b), Ok(Ordering::Less));
        assert_eq!(a.equals(&usd(100)), Ok(true));
        assert_eq!(b.greater_than(&a), Ok(true));
        assert_eq!(a.greater_than_or_equal(&usd(100)), Ok(true));
        assert_eq!(a.less_than(&b), Ok(true));
        assert_eq!(b.less_than_or_equal(&a), Ok(false));
    }

    #[rstest]
    fn test_cross_currency_operations_error() {
        let dollars = usd(100);
        let euros = Money::from_minor(100, Currency::EUR());
        let mismatch = Err(MoneyError::CurrencyMismatch {
            lhs: Ustr::from("USD"),
            rhs: Ustr::from("EUR"),
        });
        assert_eq!(dollars.add(&euros), mismatch);
        assert_eq!(dollars.subtract(&euros), mismatch);
        assert_eq!(
            dollars.compare(&euros),
            Err(MoneyError::CurrencyMismatch {
                lhs: Ustr::from("USD"),
                rhs: Ustr::from("EUR"),
            })
        );
    }

    #[rstest]
    fn test_arithmetic() {
        assert_eq!(usd(100).add(&usd(25)), Ok(usd(125)));
        assert_eq!(usd(100).subtract(&usd(25)), Ok(usd(75)));
        assert_eq!(usd(100).multiply(3), Ok(usd(300)));
        assert_eq!(usd(100).divide(3), Ok(usd(33)));
        assert_eq!(usd(100).modulus(3), Ok(usd(1)));
        assert_eq!(usd(-5).absolute(), Ok(usd(5)));
        assert_eq!(usd(5).negated(), Ok(usd(-5)));
    }

    #[rstest]
    fn test_arithmetic_errors() {
        assert_eq!(usd(1).divide(0), Err(MoneyError::InvalidDivisor(0)));
        assert_eq!(usd(1).modulus(0), Err(MoneyError::InvalidDivisor(0)));
        assert_eq!(
            usd(i64::MAX).add(&usd(1)),
            Err(MoneyError::ArithmeticOverflow("add"))
        );
        assert_eq!(
            usd(i64::MIN).absolute(),
            Err(MoneyError::ArithmeticOverflow("absolute"))
        );
    }

    #[rstest]
    #[case(125, 100)]
    #[case(175, 200)]
    #[case(150, 100)] // exact half rounds down
    #[case(-125, -100)]
    #[case(-175, -200)]
    fn test_round_to_major_units(#[case] minor: i64, #[case] expected: i64) {
        assert_eq!(usd(minor).round(), Ok(usd(expected)));
    }

    #[rstest]
    fn test_round_zero_fraction_currency_is_identity() {
        let yen = Money::from_minor(127, Currency::JPY());
        assert_eq!(yen.round(), Ok(yen));
    }

    #[rstest]
    #[case(100, 3, vec![34, 33, 33])]
    #[case(100, 4, vec![25, 25, 25, 25])]
    #[case(-100, 3, vec![-34, -33, -33])]
    #[case(0, 3, vec![0, 0, 0])]
    #[case(2, 3, vec![1, 1, 0])]
    fn test_split(#[case] minor: i64, #[case] n: i64, #[case] expected: Vec<i64>) {
        let parts = usd(minor).split(n).unwrap();
        let raws: Vec<i64> = parts.iter().map(Money::minor_units).collect();
        assert_eq!(raws, expected);
        assert_eq!(raws.iter().sum::<i64>(), minor);
    }

    #[rstest]
    #[case(0)]
    #[case(-2)]
    fn test_split_invalid_n(#[case] n: i64) {
        assert_eq!(usd(100).split(n), Err(MoneyError::InvalidDivisor(n)));
    }

    #[rstest]
    #[case(200, vec![25, 25, 50], vec![50, 50, 100])]
    #[case(100, vec![1, 1, 1], vec![34, 33, 33])]
    #[case(5, vec![0, 1], vec![0, 5])]
    #[case(7, vec![0, 0], vec![0, 0])] // all-zero ratios allocate nothing
    #[case(-100, vec![1, 1, 1], vec![-34, -33, -33])]
    fn test_allocate(#[case] minor: i64, #[case] ratios: Vec<i64>, #[case] expected: Vec<i64>) {
        let parts = usd(minor).allocate(&ratios).unwrap();
        let raws: Vec<i64> = parts.iter().map(Money::minor_units).collect();
        assert_eq!(raws, expected);
    }

    #[rstest]
    fn test_allocate_invalid_ratios() {
        assert!(matches!(
            usd(100).allocate(&[]),
            Err(MoneyError::InvalidRatios(_))
        ));
        assert!(matches!(
            usd(100).allocate(&[1, -1]),
            Err(MoneyError::InvalidRatios(_))
        ));
    }

    #[rstest]
    fn test_allocate_large_amount_uses_wide_intermediate() {
        let parts = usd(i64::MAX).allocate(&[500, 500]).unwrap();
        let total: i128 = parts.iter().map(|p| i128::from(p.minor_units())).sum();
        assert_eq!(total, i128::from(i64::MAX));
    }

    #[rstest]
    fn test_display_surfaces() {
        let money = usd(123456789);
        assert_eq!(money.display(), "$1,234,567.89");
        assert_eq!(money.display_with_code(), "USD1,234,567.89");
        assert_eq!(money.to_string(), "1234567.89 USD");
        assert_eq!(money.to_formatted_string(), "1_234_567.89 USD");
        assert_eq!(format!("{money:?}"), "Money(1234567.89, USD)");
    }

    #[rstest]
    #[case("1010.12 USD", 101012)]
    #[case("-0.01 USD", -1)]
    #[case("1_234.56 USD", 123456)]
    fn test_from_str(#[case] input: &str, #[case] expected: i64) {
        let money = Money::from_str(input).unwrap();
        assert_eq!(money.minor_units(), expected);
        assert_eq!(money.currency_code().as_str(), "USD");
    }

    #[rstest]
    #[case("10.00")]
    #[case("abc USD")]
    #[case("10.00 ZZZZ")]
    fn test_from_str_invalid(#[case] input: &str) {
        assert!(Money::from_str(input).is_err());
    }

    #[rstest]
    fn test_serde_round_trip() {
        let money = usd(101012);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "\"1010.12 USD\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }

    #[rstest]
    fn test_hash_and_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(usd(100));
        set.insert(usd(100));
        set.insert(Money::from_minor(100, Currency::EUR()));
        assert_eq!(set.len(), 2);
    }
}
