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

//! Value types for monetary amounts and their currencies.
//!
//! This module provides immutable value types for exact money handling:
//! [`Amount`], [`Currency`], [`Money`], and [`MoneyFormatter`]. Amounts are
//! stored as `i64` minor units (cents for two-fraction currencies), so every
//! operation is integer arithmetic with no representation error.
//!
//! # Immutability
//!
//! All value types are **immutable** - once constructed, their values cannot
//! change. Arithmetic operations return new instances rather than modifying
//! existing ones, which keeps values trivially shareable across threads.
//!
//! # Failure handling
//!
//! No operation wraps, saturates, or terminates the process. Overflow,
//! zero divisors, invalid allocation ratios, unknown currency codes, and
//! malformed input all surface as [`MoneyError`](crate::errors::MoneyError)
//! variants through explicit `Result` returns.
//!
//! # Constraints
//!
//! - [`Amount`]: the full signed `i64` range; widening to `i128` is internal
//!   to proportional allocation.
//! - [`Currency`]: at most [`MAX_CURRENCY_FRACTION`] minor-unit digits.
//! - [`Money`]: binary operations between different currencies raise an error.

pub mod amount;
pub mod calc;
pub mod currencies;
pub mod currency;
pub mod format;
pub mod money;

// Re-exports
pub use amount::Amount;
pub use currency::{Currency, MAX_CURRENCY_FRACTION};
pub use format::MoneyFormatter;
pub use money::Money;
