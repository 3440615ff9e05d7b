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

use num_traits::PrimInt;
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{Ordering, max, min},
    iter::FusedIterator,
};

use crate::error::RangeError;

/// A totally ordered value a [`Range`] can be built over.
///
/// Integers compare by value. Strings that both parse as integers compare by
/// their numeric value as well, so `"9" < "10"` and `"007" == "7"` in range
/// predicates; any other pair of strings compares lexicographically.
pub trait Scalar: Clone {
    /// Compares `self` with `other`.
    fn compare(&self, other: &Self) -> Ordering;

    /// `self <= other` under [`Scalar::compare`].
    #[inline]
    fn at_most(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// `self >= other` under [`Scalar::compare`].
    #[inline]
    fn at_least(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }
}

macro_rules! impl_scalar_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_scalar_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Scalar for String {
    fn compare(&self, other: &Self) -> Ordering {
        match (self.parse::<i128>(), other.parse::<i128>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => self.as_str().cmp(other.as_str()),
        }
    }
}

/// A closed range `[start, end]`, including both of its bounds.
///
/// Predicates such as [`Range::intersects`] and [`Range::is_subset`] are
/// available for every [`Scalar`]. Operations that need a notion of "next
/// value" (adjacency, union, difference, length, iteration) require an
/// integer scalar.
///
/// # Invariants
///
/// `start` must be less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    start: T,
    end: T,
}

impl<T> Range<T>
where
    T: Scalar,
{
    /// Creates a new `Range`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let r = Range::new(3, 7);
    /// assert_eq!(r.len(), 5);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start.at_most(&end),
            "Invalid range: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `Range` if the bounds are ordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// assert!(Range::try_new(0, 10).is_ok());
    /// assert!(Range::try_new(10, 0).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self, RangeError> {
        if start.at_most(&end) {
            Ok(Self { start, end })
        } else {
            Err(RangeError::InvalidRangeConstruction {
                reason: "start must not exceed end",
            })
        }
    }

    /// Creates a new `Range` without checking the bound order in release builds.
    ///
    /// The caller must ensure `start <= end`.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start.at_most(&end),
            "Invalid range: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates the range holding exactly `value`.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self {
            start: value.clone(),
            end: value,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Returns `true` if the range holds a single value.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.start.compare(&self.end) == Ordering::Equal
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let r = Range::new(0, 10);
    /// assert!(r.contains(&0));
    /// assert!(r.contains(&10));
    /// assert!(!r.contains(&11));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.start.at_most(value) && value.at_most(&self.end)
    }

    /// Returns `true` if the two ranges share at least one value.
    ///
    /// Numeric strings are compared by value, never lexicographically:
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let a = Range::new("9".to_string(), "12".to_string());
    /// let b = Range::new("10".to_string(), "20".to_string());
    /// assert!(a.intersects(&b));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start.at_most(&other.end) && other.start.at_most(&self.end)
    }

    /// Returns `true` if every value of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// assert!(Range::new(3, 4).is_subset(&Range::new(1, 10)));
    /// assert!(!Range::new(1, 10).is_subset(&Range::new(3, 4)));
    /// ```
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.start.at_least(&other.start) && self.end.at_most(&other.end)
    }
}

impl<T> Range<T>
where
    T: PrimInt + Scalar,
{
    /// Returns the number of values in the range (`end - start + 1`).
    ///
    /// Saturates at `usize::MAX` for ranges wider than the address space.
    #[inline]
    pub fn len(&self) -> usize {
        self.end
            .checked_sub(&self.start)
            .and_then(|span| span.to_usize())
            .and_then(|span| span.checked_add(1))
            .unwrap_or(usize::MAX)
    }

    /// A closed range always holds at least one value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if the ranges are separated by a gap of exactly one
    /// unit, i.e. they touch without overlapping. The order of the operands
    /// does not matter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let a = Range::new(0, 9);
    /// assert!(a.adjacent(&Range::new(10, 20)));
    /// assert!(Range::new(10, 20).adjacent(&a));
    /// assert!(!a.adjacent(&Range::new(9, 20)));
    /// assert!(!a.adjacent(&Range::new(11, 20)));
    /// ```
    #[inline]
    pub fn adjacent(&self, other: &Self) -> bool {
        if self.end < other.start {
            other.start - self.end == T::one()
        } else if other.end < self.start {
            self.start - other.end == T::one()
        } else {
            false
        }
    }

    /// Returns the smallest range covering both ranges.
    ///
    /// The caller must make sure the ranges intersect or are adjacent first.
    /// For ranges separated by a gap the result silently covers the gap too;
    /// use [`Range::try_union`] to have that case rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let a = Range::new(0, 9);
    /// assert_eq!(a.union(&Range::new(10, 20)), Range::new(0, 20));
    /// ```
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new_unchecked(min(self.start, other.start), max(self.end, other.end))
    }

    /// Returns the union if the ranges intersect or are adjacent, `None` if a
    /// gap separates them.
    #[inline]
    pub fn try_union(&self, other: &Self) -> Option<Self> {
        if self.intersects(other) || self.adjacent(other) {
            Some(self.union(other))
        } else {
            None
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 ranges: if `other` fully covers `self`.
    /// * 1 range: if `other` clips one side of `self` or is disjoint from it.
    /// * 2 ranges: if `other` lies strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let diff = Range::new(0, 9).difference(&Range::new(4, 5));
    /// assert_eq!(diff.as_slice(), &[Range::new(0, 3), Range::new(6, 9)]);
    /// ```
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec![*self];
        }

        let mut result = SmallVec::new();
        if self.start < other.start {
            result.push(Self::new_unchecked(self.start, other.start - T::one()));
        }
        if self.end > other.end {
            result.push(Self::new_unchecked(other.end + T::one(), self.end));
        }
        result
    }

    /// Calculates the symmetric difference of the two ranges: every value in
    /// exactly one of them, as up to two ranges sorted by start.
    ///
    /// * If one range is a subset of the other, the result holds the (up to
    ///   two) slices of the wider range the narrower one leaves uncovered.
    /// * If the ranges overlap otherwise, the result holds the part of each
    ///   range the other does not cover, unless that part is a single value.
    /// * If the ranges are disjoint, the result holds both of them.
    ///
    /// The result does not depend on the order of the operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let a = Range::new(5, 14);
    /// let b = Range::new(1, 10);
    /// assert_eq!(a.diff(&b).as_slice(), &[Range::new(1, 4), Range::new(11, 14)]);
    /// assert_eq!(a.diff(&b), b.diff(&a));
    /// ```
    pub fn diff(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.is_subset(other) {
            return Self::uncovered_slices(other, self);
        }
        if other.is_subset(self) {
            return Self::uncovered_slices(self, other);
        }
        if !self.intersects(other) {
            return if self.start <= other.start {
                smallvec![*self, *other]
            } else {
                smallvec![*other, *self]
            };
        }

        let (low, high) = if self.start < other.start {
            (self, other)
        } else {
            (other, self)
        };
        // Neither is a subset of the other, so `low` starts strictly first
        // and `high` ends strictly last. Single-value remainders are dropped.
        let mut result = SmallVec::new();
        if low.start + T::one() != high.start {
            result.push(Self::new_unchecked(low.start, high.start - T::one()));
        }
        if low.end + T::one() != high.end {
            result.push(Self::new_unchecked(low.end + T::one(), high.end));
        }
        result
    }

    /// The slices of `outer` left uncovered by `inner`, where `inner` is a subset of `outer`.
    #[inline]
    fn uncovered_slices(outer: &Self, inner: &Self) -> SmallVec<[Self; 2]> {
        let mut result = SmallVec::new();
        if outer.start != inner.start {
            result.push(Self::new_unchecked(outer.start, inner.start - T::one()));
        }
        if outer.end != inner.end {
            result.push(Self::new_unchecked(inner.end + T::one(), outer.end));
        }
        result
    }

    /// Creates an iterator over every value in the range, in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanspec_core::math::range::Range;
    ///
    /// let values: Vec<_> = Range::new(1, 4).iter().collect();
    /// assert_eq!(values, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter {
            front: self.start,
            back: self.end,
            exhausted: false,
        }
    }
}

/// An iterator over the values contained within a [`Range`].
///
/// Tracks exhaustion explicitly so a range ending at the scalar's maximum
/// never needs to step past it.
#[derive(Debug, Clone)]
pub struct RangeIter<T> {
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> RangeIter<T>
where
    T: PrimInt,
{
    fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        self.back
            .checked_sub(&self.front)
            .and_then(|span| span.to_usize())
            .and_then(|span| span.checked_add(1))
    }
}

impl<T> Iterator for RangeIter<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.front;
        match value.checked_add(&T::one()) {
            Some(next) if value < self.back => self.front = next,
            _ => self.exhausted = true,
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for RangeIter<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.back;
        match value.checked_sub(&T::one()) {
            Some(prev) if self.front < value => self.back = prev,
            _ => self.exhausted = true,
        }
        Some(value)
    }
}

impl<T> ExactSizeIterator for RangeIter<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        self.remaining()
            .expect("RangeIter: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for RangeIter<T> where T: PrimInt {}

impl<T> std::fmt::Debug for Range<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> IntoIterator for Range<T>
where
    T: PrimInt + Scalar,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Range<T>
where
    T: PrimInt + Scalar,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Range<T>
where
    T: Scalar,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<Range<T>> for std::ops::RangeInclusive<T> {
    #[inline]
    fn from(range: Range<T>) -> Self {
        range.start..=range.end
    }
}
