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

//! Condition checks for function and constructor arguments.
//!
//! Each function returns `Ok(())` when the condition holds and a descriptive
//! error otherwise, so callers can either propagate with `?` or promote the
//! failure to a panic with `.expect(FAILED)` at infallible construction sites.

/// Standard expect message for failed correctness checks.
pub const FAILED: &str = "Condition failed";

/// Checks that `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if `predicate` is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks that `value` is a valid string: non-empty and containing at least
/// one non-whitespace character.
///
/// # Errors
///
/// Returns an error if `value` is empty or whitespace-only.
pub fn check_valid_string(value: &str, param: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }
    if value.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace")
    }
    Ok(())
}

/// Checks that `value` is within the inclusive range [`low`, `high`].
///
/// # Errors
///
/// Returns an error if `value` is outside the range.
pub fn check_in_range_inclusive_u8(value: u8, low: u8, high: u8, param: &str) -> anyhow::Result<()> {
    if value < low || value > high {
        anyhow::bail!("invalid u8 for '{param}' not in range [{low}, {high}], was {value}")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn test_check_predicate_true(#[case] predicate: bool, #[case] expect_ok: bool) {
        let result = check_predicate_true(predicate, "predicate was false");
        assert_eq!(result.is_ok(), expect_ok);
    }

    #[rstest]
    #[case("USD", true)]
    #[case("a", true)]
    #[case(" a ", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t\n", false)]
    fn test_check_valid_string(#[case] value: &str, #[case] expect_ok: bool) {
        let result = check_valid_string(value, "value");
        assert_eq!(result.is_ok(), expect_ok);
    }

    #[rstest]
    #[case(0, true)]
    #[case(9, true)]
    #[case(10, false)]
    fn test_check_in_range_inclusive_u8(#[case] value: u8, #[case] expect_ok: bool) {
        let result = check_in_range_inclusive_u8(value, 0, 9, "fraction");
        assert_eq!(result.is_ok(), expect_ok);
    }

    #[rstest]
    fn test_error_message_names_param() {
        let result = check_valid_string("", "code");
        assert!(result.unwrap_err().to_string().contains("'code'"));
    }
}
