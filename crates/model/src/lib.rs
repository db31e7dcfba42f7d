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

//! Currency-aware monetary values with exact minor-unit arithmetic.
//!
//! The `ducat-model` crate defines the money domain model for the Ducat
//! framework: a [`Money`](types::Money) value type backed by `i64` minor
//! units, a process-wide [`Currency`](types::Currency) registry, checked
//! calculator and allocation primitives, and a template-driven formatter and
//! parser.
//!
//! Design constraints:
//!
//! - **Exactness**: amounts are integers of the currency's smallest unit;
//!   no floating point participates in arithmetic.
//! - **Totality**: every fallible operation returns a typed
//!   [`MoneyError`](errors::MoneyError); nothing wraps, saturates, or
//!   terminates the process.
//! - **Immutability**: values are `Copy` and operations produce new values,
//!   so sharing across threads needs no synchronization beyond the registry's
//!   own lock.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod enums;
pub mod errors;
pub mod types;
