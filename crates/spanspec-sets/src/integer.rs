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

use spanspec_core::{
    algorithm::{self, IndexBoundary},
    error::RangeError,
    math::{interval_set::IntervalSet, range::Range},
};
use std::{fmt, str::FromStr};

use crate::spec;

/// An immutable set of `i64` ranges with a `"1-3,5,8-9"` textual form.
///
/// Ranges are kept sorted by start but are merged only by
/// [`IntegerIntervals::normalize`]; until then they may overlap or touch.
/// Equality is structural over the range list.
///
/// # Examples
///
/// ```rust
/// use spanspec_sets::{IntegerIntervals, IntervalSet};
///
/// let set = IntegerIntervals::parse("8,1-3,2-5").unwrap();
/// assert_eq!(set.to_string(), "1-3,2-5,8");
/// assert_eq!(set.normalize().to_string(), "1-5,8");
/// assert!(set.contains(&4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntegerIntervals {
    ranges: Vec<Range<i64>>,
    lower: Option<i64>,
    upper: Option<i64>,
}

impl IntegerIntervals {
    /// The set holding no values.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from raw ranges, sorting them by start.
    ///
    /// Overlapping or touching ranges are kept as given; the bounds are
    /// still exact. Call [`IntegerIntervals::normalize`] when disjointness
    /// is required.
    pub fn of(mut ranges: Vec<Range<i64>>) -> Self {
        algorithm::sort_by_start(&mut ranges);
        let lower = ranges.first().map(|r| *r.start());
        let upper = ranges.iter().map(|r| *r.end()).max();
        Self {
            ranges,
            lower,
            upper,
        }
    }

    /// Parses a comma separated list of integers and `lo-hi` pairs.
    ///
    /// Whitespace around numbers is ignored and a blank spec is the empty
    /// set. Either bound may be negative, so `"-5--3"` is the range from -5
    /// to -3. Ranges are not merged.
    ///
    /// # Errors
    ///
    /// - [`RangeError::InvalidSpecFormat`] for a token with more than one
    ///   dash, a blank side of a dash, or a non-integer value.
    /// - [`RangeError::InvalidRangeConstruction`] for `lo-hi` with `lo > hi`.
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        let ranges = spec::tokens(spec)
            .map(Self::parse_token)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::of(ranges))
    }

    fn parse_token(token: &str) -> Result<Range<i64>, RangeError> {
        let token = token.trim();
        match Self::separator(token) {
            None => Ok(Range::singleton(Self::parse_value(token, token)?)),
            Some(at) => {
                let (lo, hi) = (token[..at].trim(), token[at + 1..].trim());
                if Self::separator(hi).is_some() {
                    return Err(RangeError::invalid_spec(token, "expected a single dash"));
                }
                if lo.is_empty() || hi.is_empty() {
                    return Err(RangeError::invalid_spec(token, "blank range endpoint"));
                }
                Range::try_new(
                    Self::parse_value(lo, token)?,
                    Self::parse_value(hi, token)?,
                )
            }
        }
    }

    /// Byte offset of the dash separating two bounds. A dash leading `text`
    /// is the sign of the first bound.
    #[inline]
    fn separator(text: &str) -> Option<usize> {
        let sign = usize::from(text.starts_with('-'));
        text[sign..].find('-').map(|at| at + sign)
    }

    #[inline]
    fn parse_value(value: &str, token: &str) -> Result<i64, RangeError> {
        value
            .parse()
            .map_err(|_| RangeError::invalid_spec(token, "not an integer"))
    }

    /// The symmetric difference of two ranges, as a set.
    ///
    /// ```rust
    /// use spanspec_sets::{IntegerIntervals, Range};
    ///
    /// let a = Range::new(3, 4);
    /// let b = Range::new(1, 10);
    /// assert_eq!(IntegerIntervals::diff(&a, &b).to_string(), "1-2,5-10");
    /// assert_eq!(IntegerIntervals::diff(&a, &b), IntegerIntervals::diff(&b, &a));
    /// ```
    pub fn diff(a: &Range<i64>, b: &Range<i64>) -> Self {
        Self::of(a.diff(b).into_vec())
    }

    /// Merges overlapping and adjacent ranges into the minimal equivalent set.
    pub fn normalize(&self) -> Self {
        if self.ranges.is_empty() {
            return self.clone();
        }
        let normalized = Self::of(algorithm::flatten(&self.ranges));
        tracing::trace!(from = %self, to = %normalized, "normalized integer intervals");
        normalized
    }

    /// Returns the value at zero-based `index` of the concatenated ranges.
    ///
    /// An index equal to the length of a range does not move on to the next
    /// range; it resolves to the value just past that range's end. See
    /// [`IndexBoundary::Lenient`].
    ///
    /// # Errors
    ///
    /// [`RangeError::IndexOutOfRange`] if the index lies past every range.
    pub fn at_index(&self, index: usize) -> Result<i64, RangeError> {
        algorithm::nth_value(&self.ranges, index, IndexBoundary::Lenient)
    }
}

impl IntervalSet<i64> for IntegerIntervals {
    #[inline]
    fn ranges(&self) -> &[Range<i64>] {
        &self.ranges
    }

    #[inline]
    fn lower_bound(&self) -> Option<&i64> {
        self.lower.as_ref()
    }

    #[inline]
    fn upper_bound(&self) -> Option<&i64> {
        self.upper.as_ref()
    }
}

impl fmt::Display for IntegerIntervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if range.is_singleton() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}-{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}

impl FromStr for IntegerIntervals {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<Range<i64>>> for IntegerIntervals {
    fn from(ranges: Vec<Range<i64>>) -> Self {
        Self::of(ranges)
    }
}

#[cfg(feature = "serde")]
crate::impl_serde_as_spec!(IntegerIntervals);
