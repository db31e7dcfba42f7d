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

//! A currency descriptor and the process-wide currency registry.

use std::{
    collections::HashMap,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
    sync::{LazyLock, RwLock},
};

use ducat_core::correctness::{FAILED, check_in_range_inclusive_u8, check_valid_string};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::{
    enums::CurrencyType,
    errors::{MoneyError, MoneyResult},
    types::currencies::built_in_currency_map,
};

/// The maximum minor-unit fraction a currency may declare.
///
/// `10^18` is the largest power of ten representable in the `i64` backing, so
/// larger fractions could not express even a single major unit.
pub const MAX_CURRENCY_FRACTION: u8 = 18;

/// Process-wide registry of currency descriptors, keyed by uppercase code.
///
/// Seeded once with the built-in table. Lookups take the read guard and copy
/// the descriptor out; [`Currency::register`] takes the write guard. Later
/// overrides never reach into values constructed earlier.
static CURRENCY_MAP: LazyLock<RwLock<HashMap<Ustr, Currency>>> =
    LazyLock::new(|| RwLock::new(built_in_currency_map()));

/// An immutable descriptor of a currency's identity and display conventions.
///
/// All string fields are interned, making the descriptor a cheap `Copy`
/// value. Equality and hashing consider the `code` alone: two descriptors for
/// the same code are the same currency for the purpose of binary operations.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Currency {
    /// The uppercase currency code which uniquely identifies the currency.
    pub code: Ustr,
    /// The number of minor-unit digits (2 for cents, 0 for yen-like, 3 for dinar-like).
    pub fraction: u8,
    /// The display symbol (grapheme), e.g. `$`.
    pub symbol: Ustr,
    /// The display template, with `1` marking the numeral slot and `$` the symbol slot.
    pub template: Ustr,
    /// The separator between the whole and fractional parts of the numeral.
    pub decimal_separator: Ustr,
    /// The separator between digit groups of the whole part (may be empty).
    pub thousands_separator: Ustr,
    /// The broad category of the currency.
    pub currency_type: CurrencyType,
}

impl Currency {
    /// Creates a new [`Currency`] descriptor with correctness checking.
    ///
    /// The code is canonicalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is empty or contains non-alphanumeric
    /// characters, or if `fraction` exceeds [`MAX_CURRENCY_FRACTION`].
    #[allow(clippy::too_many_arguments)]
    pub fn new_checked(
        code: &str,
        fraction: u8,
        symbol: &str,
        template: &str,
        decimal_separator: &str,
        thousands_separator: &str,
        currency_type: CurrencyType,
    ) -> anyhow::Result<Self> {
        check_valid_string(code, "code")?;
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            anyhow::bail!("invalid `code` '{code}', must be ASCII alphanumeric");
        }
        check_in_range_inclusive_u8(fraction, 0, MAX_CURRENCY_FRACTION, "fraction")?;
        check_valid_string(template, "template")?;

        Ok(Self {
            code: Ustr::from(&code.to_uppercase()),
            fraction,
            symbol: Ustr::from(symbol),
            template: Ustr::from(template),
            decimal_separator: Ustr::from(decimal_separator),
            thousands_separator: Ustr::from(thousands_separator),
            currency_type,
        })
    }

    /// Creates a new [`Currency`] descriptor.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: &str,
        fraction: u8,
        symbol: &str,
        template: &str,
        decimal_separator: &str,
        thousands_separator: &str,
        currency_type: CurrencyType,
    ) -> Self {
        Self::new_checked(
            code,
            fraction,
            symbol,
            template,
            decimal_separator,
            thousands_separator,
            currency_type,
        )
        .expect(FAILED)
    }

    /// Looks up a descriptor in the registry by code.
    ///
    /// Matching is case-insensitive at this boundary; the registry itself is
    /// keyed by uppercase codes. The returned value is a snapshot: a later
    /// override of the same code does not affect it.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyNotFound`] if no descriptor is registered
    /// for `code`.
    pub fn from_code(code: &str) -> MoneyResult<Self> {
        let key = Ustr::from(&code.to_uppercase());
        let map = CURRENCY_MAP
            .read()
            .expect("currency registry lock poisoned");
        map.get(&key)
            .copied()
            .ok_or_else(|| MoneyError::CurrencyNotFound(code.to_string()))
    }

    /// Returns `true` if a descriptor is registered for `code` (case-insensitive).
    #[must_use]
    pub fn is_registered(code: &str) -> bool {
        let key = Ustr::from(&code.to_uppercase());
        CURRENCY_MAP
            .read()
            .expect("currency registry lock poisoned")
            .contains_key(&key)
    }

    /// Inserts `currency` into the registry, or replaces the existing entry
    /// for its code when `overwrite` is true.
    ///
    /// Returns `Ok(true)` if a previous entry was replaced. With `overwrite`
    /// false an existing entry is kept untouched and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry lock is poisoned.
    pub fn register(currency: Self, overwrite: bool) -> anyhow::Result<bool> {
        let mut map = CURRENCY_MAP
            .write()
            .map_err(|e| anyhow::anyhow!("currency registry lock poisoned: {e}"))?;
        let exists = map.contains_key(&currency.code);
        if exists && !overwrite {
            return Ok(false);
        }
        if exists {
            log::debug!("Replacing registered currency {}", currency.code);
        }
        map.insert(currency.code, currency);
        Ok(exists)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code: String = Deserialize::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}
