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
use std::iter::FusedIterator;

use crate::math::range::{Range, RangeIter, Scalar};

/// An ordered list of closed ranges over a scalar `T`, sorted ascending by
/// start.
///
/// Implementors only expose their ranges and bounds; membership,
/// emptiness, cross-set predicates and value iteration are derived here.
///
/// # Invariants
///
/// `ranges()` is sorted by start. The ranges are disjoint and non-adjacent
/// only once the implementor has normalized them; none of the methods below
/// rely on that.
pub trait IntervalSet<T>
where
    T: Scalar,
{
    /// The ranges comprising the set, sorted by start.
    fn ranges(&self) -> &[Range<T>];

    /// The smallest value in the set, `None` for an empty set.
    fn lower_bound(&self) -> Option<&T>;

    /// The largest value in the set, `None` for an empty set.
    fn upper_bound(&self) -> Option<&T>;

    /// Returns `true` if any range holds `value`.
    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.ranges().iter().any(|range| range.contains(value))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.ranges().is_empty()
    }

    #[inline]
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if any range of `self` intersects any range of `other`.
    fn intersects<S>(&self, other: &S) -> bool
    where
        S: IntervalSet<T> + ?Sized,
    {
        self.ranges()
            .iter()
            .any(|range| other.ranges().iter().any(|o| range.intersects(o)))
    }

    /// Returns `true` if every range of `self` lies within a single range of
    /// `other`.
    ///
    /// A range covered only by the union of two ranges of `other` does not
    /// count. An empty set is a subset of every set.
    fn is_subset<S>(&self, other: &S) -> bool
    where
        S: IntervalSet<T> + ?Sized,
    {
        self.ranges()
            .iter()
            .all(|range| other.ranges().iter().any(|o| range.is_subset(o)))
    }

    /// The number of values covered by the ranges, counting overlaps twice
    /// until the set has been normalized.
    fn len(&self) -> usize
    where
        T: PrimInt,
    {
        self.ranges()
            .iter()
            .fold(0usize, |acc, range| acc.saturating_add(range.len()))
    }

    /// Iterates over every covered value in ascending range order.
    ///
    /// The iterator is lazy and borrows the set, so calling this again
    /// restarts from the first value.
    #[inline]
    fn values(&self) -> Values<'_, T>
    where
        T: PrimInt,
    {
        Values::new(self.ranges())
    }
}

/// Iterator over every value of an [`IntervalSet`], range after range.
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    ranges: std::slice::Iter<'a, Range<T>>,
    current: Option<RangeIter<T>>,
}

impl<'a, T> Values<'a, T>
where
    T: PrimInt + Scalar,
{
    #[inline]
    pub fn new(ranges: &'a [Range<T>]) -> Self {
        Self {
            ranges: ranges.iter(),
            current: None,
        }
    }
}

impl<T> Iterator for Values<'_, T>
where
    T: PrimInt + Scalar,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(Iterator::next) {
                return Some(value);
            }
            self.current = Some(self.ranges.next()?.iter());
        }
    }
}

impl<T> FusedIterator for Values<'_, T> where T: PrimInt + Scalar {}
