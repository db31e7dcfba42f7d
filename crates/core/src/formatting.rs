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

//! Number formatting utilities.

/// Inserts `separator` between every group of three digits in the integer
/// part of `s`, working right-to-left from the decimal point (or the end of
/// the string when there is none).
///
/// A leading `-` and any fractional part are preserved untouched. The
/// separator may be any string, including multi-byte sequences such as a
/// non-breaking space; an empty separator returns the input unchanged.
pub fn separate_with(s: &str, separator: &str) -> String {
    if separator.is_empty() {
        return s.to_string();
    }

    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (int_part, dec_part) = match digits.find('.') {
        Some(pos) => (&digits[..pos], Some(&digits[pos..])),
        None => (digits, None),
    };

    let mut result = String::with_capacity(s.len() + (int_part.len() / 3) * separator.len());

    if neg {
        result.push('-');
    }

    let len = int_part.chars().count();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push_str(separator);
        }
        result.push(c);
    }

    if let Some(dec) = dec_part {
        result.push_str(dec);
    }

    result
}

/// Extension trait for formatting numbers with separators.
pub trait Separable {
    /// Formats the number with commas as thousand separators.
    fn separate_with_commas(&self) -> String;

    /// Formats the number with underscores as thousand separators.
    fn separate_with_underscores(&self) -> String;
}

macro_rules! impl_separable {
    ($($t:ty),*) => {
        $(
            impl Separable for $t {
                fn separate_with_commas(&self) -> String {
                    separate_with(&self.to_string(), ",")
                }

                fn separate_with_underscores(&self) -> String {
                    separate_with(&self.to_string(), "_")
                }
            }
        )*
    };
}

impl_separable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Separable for String {
    fn separate_with_commas(&self) -> String {
        separate_with(self, ",")
    }

    fn separate_with_underscores(&self) -> String {
        separate_with(self, "_")
    }
}

impl Separable for &str {
    fn separate_with_commas(&self) -> String {
        separate_with(self, ",")
    }

    fn separate_with_underscores(&self) -> String {
        separate_with(self, "_")
    }
}
