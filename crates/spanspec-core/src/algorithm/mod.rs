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

//! Sweeps over lists of closed ranges.
//!
//! Every function here takes ranges sorted ascending by start, either as a
//! precondition or by sorting them itself, and returns freshly allocated
//! results.

use num_traits::{NumCast, PrimInt};

use crate::{
    error::RangeError,
    math::range::{Range, Scalar},
};

/// Sorts `ranges` ascending by start. The sort is stable, so ranges sharing a
/// start keep their relative order.
#[inline]
pub fn sort_by_start<T>(ranges: &mut [Range<T>])
where
    T: Scalar,
{
    ranges.sort_by(|a, b| a.start().compare(b.start()));
}

/// Checks whether the ranges are sorted ascending by start.
#[inline(always)]
pub fn is_sorted_by_start<T>(ranges: &[Range<T>]) -> bool
where
    T: Scalar,
{
    ranges
        .windows(2)
        .all(|w| w[0].start().compare(w[1].start()).is_le())
}

/// Checks whether the ranges are sorted, pairwise disjoint, and free of
/// touching neighbours, i.e. already in normalized form.
#[inline(always)]
pub fn are_disjoint_and_sorted<T>(ranges: &[Range<T>]) -> bool
where
    T: PrimInt + Scalar,
{
    ranges
        .windows(2)
        .all(|w| w[0].end() < w[1].start() && !w[0].adjacent(&w[1]))
}

/// Merges ranges that overlap or touch into a minimal list of disjoint
/// ranges.
///
/// A single left-to-right sweep: each range is folded into the running
/// accumulator if it intersects or is adjacent to it, otherwise the
/// accumulator is closed out and the range starts a new one.
///
/// # Invariants
///
/// - `ranges` must be sorted by start in ascending order. Unsorted input
///   yields a list that is no longer guaranteed to be disjoint.
///
/// # Examples
///
/// ```rust
/// # use spanspec_core::algorithm::flatten;
/// # use spanspec_core::math::range::Range;
///
/// let merged = flatten(&[Range::new(1, 3), Range::new(2, 5), Range::new(6, 6), Range::new(9, 10)]);
/// assert_eq!(merged, vec![Range::new(1, 6), Range::new(9, 10)]);
/// ```
pub fn flatten<T>(ranges: &[Range<T>]) -> Vec<Range<T>>
where
    T: PrimInt + Scalar,
{
    debug_assert!(
        is_sorted_by_start(ranges),
        "called `flatten` with ranges that are not sorted by start"
    );

    let mut merged = Vec::with_capacity(ranges.len());
    let mut iter = ranges.iter();
    let Some(first) = iter.next() else {
        return merged;
    };

    let mut current = *first;
    for range in iter {
        if current.intersects(range) || current.adjacent(range) {
            current = current.union(range);
        } else {
            merged.push(current);
            current = *range;
        }
    }
    merged.push(current);
    merged
}

/// Removes every value covered by `removals` from `ranges`.
///
/// Neither input needs to be disjoint. The result is sorted and flattened.
///
/// # Examples
///
/// ```rust
/// # use spanspec_core::algorithm::subtract;
/// # use spanspec_core::math::range::Range;
///
/// let kept = subtract(&[Range::new(0, 99)], &[Range::new(10, 19), Range::new(50, 50)]);
/// assert_eq!(kept, vec![Range::new(0, 9), Range::new(20, 49), Range::new(51, 99)]);
/// ```
pub fn subtract<T>(ranges: &[Range<T>], removals: &[Range<T>]) -> Vec<Range<T>>
where
    T: PrimInt + Scalar,
{
    let mut kept: Vec<Range<T>> = ranges.to_vec();
    for removal in removals {
        kept = kept
            .iter()
            .flat_map(|range| range.difference(removal))
            .collect();
        if kept.is_empty() {
            break;
        }
    }
    sort_by_start(&mut kept);
    flatten(&kept)
}

/// How [`nth_value`] decides whether an index lies past the current range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBoundary {
    /// Skip a range while the remaining offset is `>=` its length. Every index
    /// below the covered length resolves to a covered value.
    Strict,
    /// Skip a range only while the remaining offset is `>` its length. An
    /// offset equal to a range's length resolves to the value one past that
    /// range's end.
    Lenient,
}

/// Resolves a zero-based `index` into the virtual sequence formed by
/// concatenating `ranges` in order, without materializing it.
///
/// # Errors
///
/// Returns [`RangeError::IndexOutOfRange`] if the index lies past the last
/// range.
///
/// # Examples
///
/// ```rust
/// # use spanspec_core::algorithm::{nth_value, IndexBoundary};
/// # use spanspec_core::math::range::Range;
///
/// let ranges = [Range::new(10, 12), Range::new(20, 21)];
/// assert_eq!(nth_value(&ranges, 3, IndexBoundary::Strict), Ok(20));
/// assert_eq!(nth_value(&ranges, 3, IndexBoundary::Lenient), Ok(13));
/// assert!(nth_value(&ranges, 5, IndexBoundary::Strict).is_err());
/// ```
pub fn nth_value<T>(
    ranges: &[Range<T>],
    index: usize,
    boundary: IndexBoundary,
) -> Result<T, RangeError>
where
    T: PrimInt + Scalar,
{
    let out_of_range = || RangeError::IndexOutOfRange {
        index,
        len: ranges
            .iter()
            .fold(0usize, |acc, range| acc.saturating_add(range.len())),
    };

    let mut offset = index;
    for range in ranges {
        let len = range.len();
        let skip = match boundary {
            IndexBoundary::Strict => offset >= len,
            IndexBoundary::Lenient => offset > len,
        };
        if skip {
            offset -= len;
        } else {
            return <T as NumCast>::from(offset)
                .and_then(|step| range.start().checked_add(&step))
                .ok_or_else(out_of_range);
        }
    }
    Err(out_of_range())
}
