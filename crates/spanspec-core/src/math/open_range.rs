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

use crate::{
    error::RangeError,
    math::range::{Range, Scalar},
};

/// A range that may be open on one side.
///
/// At least one bound is always present. A missing start reaches back to the
/// smallest representable value and a missing end reaches forward to the
/// largest, so `OpenRange::since(d)` holds every value from `d` on.
///
/// # Examples
///
/// ```rust
/// # use spanspec_core::math::open_range::OpenRange;
///
/// let from_2020 = OpenRange::since(2020);
/// assert!(from_2020.contains(&2024));
/// assert!(!from_2020.contains(&2019));
///
/// assert!(OpenRange::<i32>::try_new(None, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "OpenRangeRepr<T>", bound(deserialize = "T: Scalar + serde::Deserialize<'de>"))
)]
pub struct OpenRange<T> {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    start: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    end: Option<T>,
}

impl<T> OpenRange<T>
where
    T: Scalar,
{
    /// Creates a range from optional bounds.
    ///
    /// Fails with [`RangeError::InvalidRangeConstruction`] if both bounds are
    /// missing or if `start > end`.
    pub fn try_new(start: Option<T>, end: Option<T>) -> Result<Self, RangeError> {
        match (&start, &end) {
            (None, None) => Err(RangeError::InvalidRangeConstruction {
                reason: "either start or end must be present",
            }),
            (Some(s), Some(e)) if s.compare(e).is_gt() => {
                Err(RangeError::InvalidRangeConstruction {
                    reason: "start must not exceed end",
                })
            }
            _ => Ok(Self { start, end }),
        }
    }

    /// Every value from `start` on.
    #[inline]
    pub fn since(start: T) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Every value up to and including `end`.
    #[inline]
    pub fn until(end: T) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    #[inline]
    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    #[inline]
    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }

    /// Returns `true` if `value` lies within the range.
    pub fn contains(&self, value: &T) -> bool {
        let after_start = self.start.as_ref().is_none_or(|s| s.at_most(value));
        let before_end = self.end.as_ref().is_none_or(|e| value.at_most(e));
        after_start && before_end
    }

    /// Closes the open sides with the given sentinels, `floor` for a missing
    /// start and `ceiling` for a missing end.
    ///
    /// Fails if a sentinel lands on the wrong side of the present bound.
    pub fn bounded_by(&self, floor: T, ceiling: T) -> Result<Range<T>, RangeError> {
        let start = self.start.clone().unwrap_or(floor);
        let end = self.end.clone().unwrap_or(ceiling);
        Range::try_new(start, end)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct OpenRangeRepr<T> {
    start: Option<T>,
    end: Option<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<OpenRangeRepr<T>> for OpenRange<T>
where
    T: Scalar,
{
    type Error = RangeError;

    fn try_from(repr: OpenRangeRepr<T>) -> Result<Self, Self::Error> {
        Self::try_new(repr.start, repr.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_requires_a_bound() {
        assert_eq!(
            OpenRange::<i64>::try_new(None, None),
            Err(RangeError::InvalidRangeConstruction {
                reason: "either start or end must be present"
            })
        );
        assert!(OpenRange::try_new(Some(1), None).is_ok());
        assert!(OpenRange::try_new(None, Some(1)).is_ok());
    }

    #[test]
    fn test_try_new_rejects_reversed_bounds() {
        assert!(OpenRange::try_new(Some(5), Some(1)).is_err());
        assert!(OpenRange::try_new(Some(5), Some(5)).is_ok());
    }

    #[test]
    fn test_contains() {
        let since = OpenRange::since(10);
        assert!(since.contains(&10));
        assert!(since.contains(&i64::MAX));
        assert!(!since.contains(&9));

        let until = OpenRange::until(10);
        assert!(until.contains(&10));
        assert!(until.contains(&i64::MIN));
        assert!(!until.contains(&11));

        let both = OpenRange::try_new(Some(1), Some(3)).unwrap();
        assert!(both.contains(&2));
        assert!(!both.contains(&0));
        assert!(!both.contains(&4));
    }

    #[test]
    fn test_contains_numeric_strings() {
        let range = OpenRange::since("20200101".to_string());
        assert!(range.contains(&"20241231".to_string()));
        assert!(!range.contains(&"20191231".to_string()));
    }

    #[test]
    fn test_accessors_and_equality() {
        let a = OpenRange::since(3);
        assert_eq!(a.start(), Some(&3));
        assert_eq!(a.end(), None);
        assert_eq!(a, OpenRange::try_new(Some(3), None).unwrap());
        assert_ne!(a, OpenRange::until(3));
    }

    #[test]
    fn test_bounded_by() {
        let range = OpenRange::until(50u32);
        assert_eq!(range.bounded_by(0, u32::MAX), Ok(Range::new(0, 50)));

        let range = OpenRange::since(50u32);
        assert_eq!(range.bounded_by(0, u32::MAX), Ok(Range::new(50, u32::MAX)));
        assert!(range.bounded_by(0, 10).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_skips_missing_bounds() {
        let json = serde_json::to_string(&OpenRange::since(7)).unwrap();
        assert_eq!(json, r#"{"start":7}"#);

        let back: OpenRange<i32> = serde_json::from_str(r#"{"end":9}"#).unwrap();
        assert_eq!(back, OpenRange::until(9));

        assert!(serde_json::from_str::<OpenRange<i32>>("{}").is_err());

        let both: OpenRange<u32> = serde_json::from_str(r#"{"start":1,"end":3}"#).unwrap();
        assert_eq!(both, OpenRange::try_new(Some(1), Some(3)).unwrap());
        assert!(serde_json::from_str::<OpenRange<u32>>(r#"{"start":3,"end":1}"#).is_err());
    }
}
