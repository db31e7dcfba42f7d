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

//! Template-driven rendering and parsing of minor-unit amounts.

use ducat_core::formatting::separate_with;
use ustr::Ustr;

use crate::{
    errors::{MoneyError, MoneyResult},
    types::Currency,
};

/// Renders and parses minor-unit amounts using a currency's display conventions.
///
/// The formatter holds a snapshot of the descriptor it was built from, so a
/// registry override after construction does not change its output. The
/// `template` uses `1` as the numeral slot and `$` as the symbol slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoneyFormatter {
    pub code: Ustr,
    pub fraction: u8,
    pub symbol: Ustr,
    pub template: Ustr,
    pub decimal_separator: Ustr,
    pub thousands_separator: Ustr,
}

impl MoneyFormatter {
    /// Creates a new [`MoneyFormatter`] from a currency descriptor.
    #[must_use]
    pub fn new(currency: &Currency) -> Self {
        Self {
            code: currency.code,
            fraction: currency.fraction,
            symbol: currency.symbol,
            template: currency.template,
            decimal_separator: currency.decimal_separator,
            thousands_separator: currency.thousands_separator,
        }
    }

    /// Renders `minor` with the currency symbol at the template's `$` slot.
    #[must_use]
    pub fn format(&self, minor: i64) -> String {
        self.render(minor, self.symbol.as_str())
    }

    /// Renders `minor` with the currency code at the template's `$` slot.
    #[must_use]
    pub fn format_with_code(&self, minor: i64) -> String {
        self.render(minor, self.code.as_str())
    }

    fn render(&self, minor: i64, token: &str) -> String {
        let fraction = self.fraction as usize;
        let mut digits = minor.unsigned_abs().to_string();

        // Pad so at least one digit lands left of the fraction boundary.
        if digits.len() <= fraction {
            digits = "0".repeat(fraction - digits.len() + 1) + &digits;
        }

        let (whole, frac) = digits.split_at(digits.len() - fraction);
        let mut numeral = separate_with(whole, self.thousands_separator.as_str());
        if fraction > 0 {
            numeral.push_str(self.decimal_separator.as_str());
            numeral.push_str(frac);
        }

        let rendered = self
            .template
            .replacen('1', &numeral, 1)
            .replacen('$', token, 1);

        if minor < 0 {
            format!("-{rendered}")
        } else {
            rendered
        }
    }

    /// Parses a rendered amount back into minor units.
    ///
    /// Accepts the output of both [`Self::format`] and
    /// [`Self::format_with_code`], with or without grouping. Empty input
    /// parses to zero.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] if the residue after stripping the
    /// currency tokens is not a valid numeral, if more fractional digits are
    /// given than the currency carries, or if the value exceeds the `i64`
    /// minor-unit range.
    pub fn parse(&self, text: &str) -> MoneyResult<i64> {
        if text.is_empty() {
            return Ok(0);
        }

        let stripped: String = text
            .replace(self.code.as_str(), "")
            .replace(self.symbol.as_str(), "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let (negative, body) = match stripped.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, stripped.as_str()),
        };

        let (whole, frac) = match body.split_once(self.decimal_separator.as_str()) {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };

        if frac.len() > self.fraction as usize {
            return Err(MoneyError::Parse(format!(
                "'{text}' carries more than {} fractional digits",
                self.fraction
            )));
        }

        let whole = whole.replace(self.thousands_separator.as_str(), "");
        if whole.is_empty() && frac.is_empty() {
            return Err(MoneyError::Parse(format!("'{text}' contains no digits")));
        }

        let mut magnitude: u64 = 0;
        for c in whole
            .chars()
            .chain(frac.chars())
            .chain(std::iter::repeat_n('0', self.fraction as usize - frac.len()))
        {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| MoneyError::Parse(format!("invalid character '{c}' in '{text}'")))?;
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u64::from(digit)))
                .ok_or(MoneyError::ArithmeticOverflow("parse"))?;
        }

        if negative {
            if magnitude > i64::MAX as u64 + 1 {
                return Err(MoneyError::ArithmeticOverflow("parse"));
            }
            Ok((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).map_err(|_| MoneyError::ArithmeticOverflow("parse"))
        }
    }

    /// Converts `minor` into major units as a float.
    ///
    /// Lossy for large magnitudes; intended for display and interoperability,
    /// never for arithmetic.
    #[must_use]
    pub fn to_major_units(&self, minor: i64) -> f64 {
        minor as f64 / 10f64.powi(i32::from(self.fraction))
    }
}
