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

//! Typed errors for monetary operations.
//!
//! Every fallible operation in this crate reports one of these variants; none
//! of them is ever swallowed, auto-corrected, or promoted to a process abort.

use thiserror::Error;
use ustr::Ustr;

/// Errors produced by monetary operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A binary operation was attempted between two different currencies.
    #[error("currency mismatch: {lhs} vs {rhs}")]
    CurrencyMismatch {
        /// Currency code of the left-hand operand.
        lhs: Ustr,
        /// Currency code of the right-hand operand.
        rhs: Ustr,
    },
    /// Division or modulus by zero, or a split into a non-positive part count.
    #[error("invalid divisor: {0}")]
    InvalidDivisor(i64),
    /// An empty allocation ratio list, or a negative ratio entry.
    #[error("invalid ratios: {0}")]
    InvalidRatios(String),
    /// A checked arithmetic operation exceeded the signed 64-bit range.
    #[error("arithmetic overflow in {0}")]
    ArithmeticOverflow(&'static str),
    /// The currency registry holds no descriptor for the requested code.
    #[error("currency not found: {0}")]
    CurrencyNotFound(String),
    /// A display string did not match the currency's expected grammar.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for monetary operations.
pub type MoneyResult<T> = Result<T, MoneyError>;
