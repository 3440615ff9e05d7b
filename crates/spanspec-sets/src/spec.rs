// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Token-level helpers for the textual spec grammars.

use spanspec_core::error::RangeError;
use std::str::FromStr;

/// Splits a spec into its comma separated tokens.
///
/// A blank spec has no tokens. Empty tokens between commas are kept so the
/// grammar can reject them.
pub fn tokens(spec: &str) -> impl Iterator<Item = &str> {
    let blank = spec.trim().is_empty();
    spec.split(',').filter(move |_| !blank)
}

/// Removes every whitespace character from `token`.
pub fn strip_whitespace(token: &str) -> String {
    token.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses an unsigned run of ASCII digits. `token` names the enclosing token
/// in the error.
pub fn parse_digits<T>(digits: &str, token: &str) -> Result<T, RangeError>
where
    T: FromStr,
{
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::invalid_spec(token, "expected only digits"));
    }
    digits
        .parse()
        .map_err(|_| RangeError::invalid_spec(token, "number out of range"))
}
