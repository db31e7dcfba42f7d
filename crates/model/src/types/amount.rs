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

//! An opaque count of currency minor units.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::errors::{MoneyError, MoneyResult};

/// A signed count of the smallest subunit of some currency (e.g. cents).
///
/// `Amount` carries no currency information itself; pairing an amount with a
/// [`Currency`](crate::types::Currency) descriptor is the job of
/// [`Money`](crate::types::Money). Values are immutable: every arithmetic
/// operation in [`calc`](crate::types::calc) returns a new `Amount`.
///
/// The backing representation is a fixed-width `i64`. An arbitrary-precision
/// backing is a deliberate extension point and would slot in behind this same
/// API rather than widening it.
#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Amount {
    raw: i64,
}

impl Amount {
    /// An amount of zero minor units.
    pub const ZERO: Self = Self { raw: 0 };

    /// Creates a new [`Amount`] from a count of minor units.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the backing minor-unit count.
    #[must_use]
    pub const fn as_raw(&self) -> i64 {
        self.raw
    }

    /// Returns `true` if this amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Returns `true` if this amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.raw > 0
    }

    /// Returns `true` if this amount is less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.raw < 0
    }

    /// Narrows a widened intermediate value back to the `i64` backing.
    ///
    /// This is the single sanctioned conversion from a wider integer; there is
    /// no open-ended construction from arbitrary integer widths.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] if `value` is outside the
    /// `i64` range.
    pub fn try_from_widened(value: i128) -> MoneyResult<Self> {
        let raw =
            i64::try_from(value).map_err(|_| MoneyError::ArithmeticOverflow("narrowing"))?;
        Ok(Self { raw })
    }
}

impl From<i64> for Amount {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.raw
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
