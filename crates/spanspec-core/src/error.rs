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

//! Errors raised while building, parsing, or indexing ranges.

/// The error type for every fallible operation in the range algebra.
///
/// All variants describe caller or input errors. None of them are transient,
/// so retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A token of a textual spec could not be decoded.
    #[error("invalid spec token `{token}`: {reason}")]
    InvalidSpecFormat {
        /// The offending token, after whitespace handling.
        token: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A positional lookup went past the values covered by a set.
    #[error("index {index} is out of range for {len} covered values")]
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// The number of values covered by the set.
        len: usize,
    },

    /// A range was built from bounds that do not describe a range.
    #[error("invalid range construction: {reason}")]
    InvalidRangeConstruction {
        /// Which constraint the bounds violated.
        reason: &'static str,
    },
}

impl RangeError {
    /// Shorthand for [`RangeError::InvalidSpecFormat`].
    #[inline]
    pub fn invalid_spec(token: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidSpecFormat {
            token: token.into(),
            reason,
        }
    }
}
