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

//! The built-in currency descriptor table.
//!
//! Each descriptor records the display conventions used by the formatter: the
//! `template` positions the numeral (`1`) and the symbol (`$`), and the two
//! separators define the numeral's grouping. The table seeds the registry at
//! first use; processes needing additional or corrected entries register them
//! through [`Currency::register`] before constructing values.

use std::{collections::HashMap, sync::LazyLock};

use ustr::Ustr;

use crate::{enums::CurrencyType, types::Currency};

macro_rules! fiat {
    ($name:ident, $code:literal, $fraction:literal, $symbol:literal, $template:literal, $decimal:literal, $thousand:literal) => {
        pub static $name: LazyLock<Currency> = LazyLock::new(|| {
            Currency::new(
                $code,
                $fraction,
                $symbol,
                $template,
                $decimal,
                $thousand,
                CurrencyType::Fiat,
            )
        });
    };
}

macro_rules! crypto {
    ($name:ident, $code:literal, $fraction:literal, $symbol:literal, $template:literal, $decimal:literal, $thousand:literal) => {
        pub static $name: LazyLock<Currency> = LazyLock::new(|| {
            Currency::new(
                $code,
                $fraction,
                $symbol,
                $template,
                $decimal,
                $thousand,
                CurrencyType::Crypto,
            )
        });
    };
}

fiat!(CURRENCY_AED, "AED", 2, "\u{62f}.\u{625}", "1 $", ".", ",");
fiat!(CURRENCY_AUD, "AUD", 2, "A$", "$1", ".", ",");
fiat!(CURRENCY_BHD, "BHD", 3, "BD", "1 $", ".", ",");
fiat!(CURRENCY_BRL, "BRL", 2, "R$", "$1", ",", ".");
fiat!(CURRENCY_CAD, "CAD", 2, "CA$", "$1", ".", ",");
fiat!(CURRENCY_CHF, "CHF", 2, "CHF", "1 $", ".", ",");
fiat!(CURRENCY_CNY, "CNY", 2, "\u{5143}", "1 $", ".", ",");
fiat!(CURRENCY_DKK, "DKK", 2, "kr", "$ 1", ",", ".");
fiat!(CURRENCY_EUR, "EUR", 2, "\u{20ac}", "$1", ",", ".");
fiat!(CURRENCY_GBP, "GBP", 2, "\u{a3}", "$1", ".", ",");
fiat!(CURRENCY_HKD, "HKD", 2, "HK$", "$1", ".", ",");
fiat!(CURRENCY_INR, "INR", 2, "\u{20b9}", "$1", ".", ",");
fiat!(CURRENCY_JPY, "JPY", 0, "\u{a5}", "$1", ".", ",");
fiat!(CURRENCY_KRW, "KRW", 0, "\u{20a9}", "$1", ".", ",");
fiat!(CURRENCY_KWD, "KWD", 3, "KD", "1 $", ".", ",");
fiat!(CURRENCY_MXN, "MXN", 2, "$", "$1", ".", ",");
fiat!(CURRENCY_NOK, "NOK", 2, "kr", "1 $", ",", ".");
fiat!(CURRENCY_NZD, "NZD", 2, "NZ$", "$1", ".", ",");
fiat!(CURRENCY_OMR, "OMR", 3, "OMR", "1 $", ".", ",");
fiat!(CURRENCY_PLN, "PLN", 2, "z\u{142}", "1 $", ",", " ");
fiat!(CURRENCY_RUB, "RUB", 2, "\u{20bd}", "1 $", ",", ".");
fiat!(CURRENCY_SAR, "SAR", 2, "SR", "1 $", ".", ",");
fiat!(CURRENCY_SEK, "SEK", 2, "kr", "1 $", ",", " ");
fiat!(CURRENCY_SGD, "SGD", 2, "S$", "$1", ".", ",");
fiat!(CURRENCY_THB, "THB", 2, "\u{e3f}", "$1", ".", ",");
fiat!(CURRENCY_TRY, "TRY", 2, "\u{20ba}", "$1", ",", ".");
fiat!(CURRENCY_USD, "USD", 2, "$", "$1", ".", ",");
fiat!(CURRENCY_VND, "VND", 0, "\u{20ab}", "1 $", ",", ".");
fiat!(CURRENCY_ZAR, "ZAR", 2, "R", "$1", ".", " ");

// Crypto fractions are capped at what the i64 minor-unit backing can carry:
// BTC at satoshi granularity, ETH at gwei granularity.
crypto!(CURRENCY_BTC, "BTC", 8, "\u{20bf}", "$1", ".", ",");
crypto!(CURRENCY_ETH, "ETH", 9, "\u{39e}", "$1", ".", ",");

impl Currency {
    /// United Arab Emirates dirham.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn AED() -> Self {
        *CURRENCY_AED
    }

    /// Australian dollar.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn AUD() -> Self {
        *CURRENCY_AUD
    }

    /// Bahraini dinar (three minor-unit digits).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn BHD() -> Self {
        *CURRENCY_BHD
    }

    /// Brazilian real.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn BRL() -> Self {
        *CURRENCY_BRL
    }

    /// Canadian dollar.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CAD() -> Self {
        *CURRENCY_CAD
    }

    /// Swiss franc.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CHF() -> Self {
        *CURRENCY_CHF
    }

    /// Chinese yuan.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CNY() -> Self {
        *CURRENCY_CNY
    }

    /// Danish krone.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn DKK() -> Self {
        *CURRENCY_DKK
    }

    /// Euro.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn EUR() -> Self {
        *CURRENCY_EUR
    }

    /// Pound sterling.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn GBP() -> Self {
        *CURRENCY_GBP
    }

    /// Hong Kong dollar.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn HKD() -> Self {
        *CURRENCY_HKD
    }

    /// Indian rupee.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn INR() -> Self {
        *CURRENCY_INR
    }

    /// Japanese yen (no minor unit).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn JPY() -> Self {
        *CURRENCY_JPY
    }

    /// South Korean won (no minor unit).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn KRW() -> Self {
        *CURRENCY_KRW
    }

    /// Kuwaiti dinar (three minor-unit digits).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn KWD() -> Self {
        *CURRENCY_KWD
    }

    /// Mexican peso.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn MXN() -> Self {
        *CURRENCY_MXN
    }

    /// Norwegian krone.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn NOK() -> Self {
        *CURRENCY_NOK
    }

    /// New Zealand dollar.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn NZD() -> Self {
        *CURRENCY_NZD
    }

    /// Omani rial (three minor-unit digits).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn OMR() -> Self {
        *CURRENCY_OMR
    }

    /// Polish złoty.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn PLN() -> Self {
        *CURRENCY_PLN
    }

    /// Russian ruble.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn RUB() -> Self {
        *CURRENCY_RUB
    }

    /// Saudi riyal.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn SAR() -> Self {
        *CURRENCY_SAR
    }

    /// Swedish krona.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn SEK() -> Self {
        *CURRENCY_SEK
    }

    /// Singapore dollar.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn SGD() -> Self {
        *CURRENCY_SGD
    }

    /// Thai baht.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn THB() -> Self {
        *CURRENCY_THB
    }

    /// Turkish lira.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn TRY() -> Self {
        *CURRENCY_TRY
    }

    /// United States dollar.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn USD() -> Self {
        *CURRENCY_USD
    }

    /// Vietnamese dong (no minor unit).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn VND() -> Self {
        *CURRENCY_VND
    }

    /// South African rand.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn ZAR() -> Self {
        *CURRENCY_ZAR
    }

    /// Bitcoin (satoshi minor units).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn BTC() -> Self {
        *CURRENCY_BTC
    }

    /// Ether (gwei minor units).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn ETH() -> Self {
        *CURRENCY_ETH
    }
}

/// Builds the seed map for the currency registry.
pub(crate) fn built_in_currency_map() -> HashMap<Ustr, Currency> {
    let currencies = [
        Currency::AED(),
        Currency::AUD(),
        Currency::BHD(),
        Currency::BRL(),
        Currency::CAD(),
        Currency::CHF(),
        Currency::CNY(),
        Currency::DKK(),
        Currency::EUR(),
        Currency::GBP(),
        Currency::HKD(),
        Currency::INR(),
        Currency::JPY(),
        Currency::KRW(),
        Currency::KWD(),
        Currency::MXN(),
        Currency::NOK(),
        Currency::NZD(),
        Currency::OMR(),
        Currency::PLN(),
        Currency::RUB(),
        Currency::SAR(),
        Currency::SEK(),
        Currency::SGD(),
        Currency::THB(),
        Currency::TRY(),
        Currency::USD(),
        Currency::VND(),
        Currency::ZAR(),
        Currency::BTC(),
        Currency::ETH(),
    ];

    currencies
        .into_iter()
        .map(|currency| (currency.code, currency))
        .collect()
}
