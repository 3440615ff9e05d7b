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

//! Postal-code ranges with 3-digit prefix shorthand.
//!
//! Codes are the integers `0..=99999`, written zero-padded to five digits.
//! A spec is a comma separated list of tokens, whitespace ignored:
//!
//! | token         | meaning                                  |
//! |---------------|------------------------------------------|
//! | `685`         | every code from `68500` to `68599`       |
//! | `68516`       | the single code `68516`                  |
//! | `685-686`     | every code from `68500` to `68699`       |
//! | `68516-68528` | every code from `68516` to `68528`       |
//!
//! Normalizing merges the codes and rewrites every run aligned on a
//! `xxx00..=xxx99` block as its 3-digit prefix.

use smallvec::{SmallVec, smallvec};
use spanspec_core::{
    algorithm::{self, IndexBoundary},
    error::RangeError,
    math::{interval_set::IntervalSet, range::Range},
};
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::spec;

/// Codes sharing a 3-digit prefix.
const BLOCK: u32 = 100;

/// An immutable set of postal codes whose canonical form is its spec string.
///
/// The ranges and bounds are derived from the spec. Equality and hashing
/// look at the spec string only, so two specs covering the same codes are
/// equal only once both are normalized.
///
/// # Examples
///
/// ```rust
/// use spanspec_sets::{IntervalSet, PostalRange};
///
/// let codes = PostalRange::parse("68010,68005,68008").unwrap();
/// assert!(codes.contains(&68008));
/// assert_eq!(codes.lower_bound(), Some(&68005));
/// assert_eq!(codes.at_index(1).unwrap(), 68008);
///
/// let collapsed = PostalRange::parse("100-102,10300-10310").unwrap().normalize();
/// assert_eq!(collapsed.spec(), "100-102,10300-10310");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostalRange {
    spec: String,
    ranges: Vec<Range<u32>>,
    lower: Option<u32>,
    upper: Option<u32>,
}

impl PostalRange {
    /// 5-digit codes ending in `00` that must never collapse to their prefix.
    pub const DO_NOT_COLLAPSE: [&'static str; 3] = ["09800", "09600", "20500"];

    /// The set holding no codes.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a spec. The spec is stored verbatim; only the derived ranges
    /// are sorted.
    ///
    /// # Errors
    ///
    /// - [`RangeError::InvalidSpecFormat`] for a token whose length (after
    ///   removing whitespace) is not 3, 5, 7 or 11, or that is not made of
    ///   digits around the expected dash.
    /// - [`RangeError::InvalidRangeConstruction`] for a reversed range such
    ///   as `"68520-68510"`.
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        let ranges = spec::tokens(spec)
            .map(|raw| parse_token(&spec::strip_whitespace(raw)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_parts(spec.to_owned(), ranges))
    }

    fn from_parts(spec: String, mut ranges: Vec<Range<u32>>) -> Self {
        algorithm::sort_by_start(&mut ranges);
        let lower = ranges.first().map(|r| *r.start());
        let upper = ranges.iter().map(|r| *r.end()).max();
        Self {
            spec,
            ranges,
            lower,
            upper,
        }
    }

    /// Builds the set for a single 5-digit code, written as its 3-digit
    /// prefix when the code ends in `00` and is not in
    /// [`PostalRange::DO_NOT_COLLAPSE`].
    ///
    /// ```rust
    /// use spanspec_sets::PostalRange;
    ///
    /// assert_eq!(PostalRange::convert_to_3_digit_if_possible("68500").unwrap().spec(), "685");
    /// assert_eq!(PostalRange::convert_to_3_digit_if_possible("09800").unwrap().spec(), "09800");
    /// assert_eq!(PostalRange::convert_to_3_digit_if_possible("68516").unwrap().spec(), "68516");
    /// ```
    pub fn convert_to_3_digit_if_possible(code: &str) -> Result<Self, RangeError> {
        if code.len() != 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RangeError::invalid_spec(code, "expected a 5-digit code"));
        }
        if code.ends_with("00") && !Self::DO_NOT_COLLAPSE.contains(&code) {
            Self::parse(&code[..3])
        } else {
            Self::parse(code)
        }
    }

    /// The spec this set was built from.
    #[inline]
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Returns `true` if the textual `code` is in the set.
    ///
    /// # Errors
    ///
    /// [`RangeError::InvalidSpecFormat`] if `code` is not a number.
    pub fn contains_code(&self, code: &str) -> Result<bool, RangeError> {
        let code = code.trim();
        let value: u32 = spec::parse_digits(code, code)?;
        Ok(self.contains(&value))
    }

    /// Returns the code at zero-based `index` of the concatenated ranges.
    ///
    /// # Errors
    ///
    /// [`RangeError::IndexOutOfRange`] if `index` is not below the number of
    /// covered codes.
    pub fn at_index(&self, index: usize) -> Result<u32, RangeError> {
        algorithm::nth_value(&self.ranges, index, IndexBoundary::Strict)
    }

    /// Rewrites the spec in canonical form.
    ///
    /// Overlapping and adjacent codes are merged, every merged range wider
    /// than a block is split around its largest block-aligned run, and the
    /// pieces are rendered with 3-digit shorthand where they are aligned.
    ///
    /// ```rust
    /// use spanspec_sets::PostalRange;
    ///
    /// let codes = PostalRange::parse("100, 10600-10999, 00150-00250").unwrap();
    /// assert_eq!(codes.normalize().spec(), "00150-00250,100,106-109");
    /// ```
    pub fn normalize(&self) -> Self {
        if self.ranges.is_empty() {
            return self.clone();
        }

        let mut pieces: Vec<Range<u32>> = algorithm::flatten(&self.ranges)
            .into_iter()
            .flat_map(split_on_blocks)
            .collect();
        algorithm::sort_by_start(&mut pieces);

        let spec = pieces
            .iter()
            .map(render_collapsed)
            .collect::<Vec<_>>()
            .join(",");
        tracing::trace!(from = %self.spec, to = %spec, "normalized postal range");
        Self::from_parts(spec, pieces)
    }

    /// Adds the codes of `other` and normalizes the result.
    ///
    /// # Errors
    ///
    /// Any parse error of `other`.
    pub fn add_spec(&self, other: &str) -> Result<Self, RangeError> {
        if other.trim().is_empty() {
            return Ok(self.normalize());
        }
        tracing::trace!(spec = %self.spec, added = %other, "adding postal spec");
        let combined = if self.spec.trim().is_empty() {
            Self::parse(other)?
        } else {
            Self::parse(&format!("{},{}", self.spec, other))?
        };
        Ok(combined.normalize())
    }

    /// Adds every code of `range` and normalizes the result.
    ///
    /// # Errors
    ///
    /// [`RangeError::InvalidSpecFormat`] if the range reaches past `99999`.
    pub fn add_range(&self, range: &Range<u32>) -> Result<Self, RangeError> {
        self.add_spec(&format!("{:05}-{:05}", range.start(), range.end()))
    }

    /// Removes the codes of `other` and normalizes the result.
    ///
    /// ```rust
    /// use spanspec_sets::PostalRange;
    ///
    /// let codes = PostalRange::parse("000-999").unwrap().remove_spec("68501").unwrap();
    /// assert_eq!(codes.spec(), "000,001-684,68500,68502-68599,686-999");
    /// ```
    ///
    /// # Errors
    ///
    /// Any parse error of `other`.
    pub fn remove_spec(&self, other: &str) -> Result<Self, RangeError> {
        if other.trim().is_empty() {
            return Ok(self.normalize());
        }
        if self.is_empty() {
            return Ok(self.clone());
        }

        let excluded = Self::parse(other)?;
        let kept = algorithm::subtract(&self.ranges, &excluded.ranges);
        let spec = kept
            .iter()
            .map(render_padded)
            .collect::<Vec<_>>()
            .join(",");
        tracing::trace!(spec = %self.spec, removed = %other, "removing postal spec");
        Ok(Self::parse(&spec)?.normalize())
    }
}

/// Decodes one whitespace-free token into the codes it covers.
fn parse_token(token: &str) -> Result<Range<u32>, RangeError> {
    let prefix_start = |digits: &str| spec::parse_digits::<u32>(digits, token).map(|p| p * BLOCK);

    match token.len() {
        3 => {
            let start = prefix_start(token)?;
            Ok(Range::new_unchecked(start, start + BLOCK - 1))
        }
        5 => spec::parse_digits(token, token).map(Range::singleton),
        7 => {
            let (lo, hi) = split_dash(token, 3)?;
            Range::try_new(prefix_start(lo)?, prefix_start(hi)? + BLOCK - 1)
        }
        11 => {
            let (lo, hi) = split_dash(token, 5)?;
            Range::try_new(
                spec::parse_digits(lo, token)?,
                spec::parse_digits(hi, token)?,
            )
        }
        _ => Err(RangeError::invalid_spec(
            token,
            "expected a 3 or 5 digit code or a range of them",
        )),
    }
}

/// Splits `token` around the dash expected at byte `at`.
fn split_dash(token: &str, at: usize) -> Result<(&str, &str), RangeError> {
    match (token.get(..at), token.get(at..=at), token.get(at + 1..)) {
        (Some(lo), Some("-"), Some(hi)) => Ok((lo, hi)),
        _ => Err(RangeError::invalid_spec(token, "expected a dash between the codes")),
    }
}

/// Whether the decimal text of `code`, without padding, ends in `00`.
///
/// Codes below 100 never do, so a range starting at `0` aligns to `100`.
#[inline]
fn ends_in_00(code: u32) -> bool {
    code >= BLOCK && code % BLOCK == 0
}

#[inline]
fn ends_in_99(code: u32) -> bool {
    code % BLOCK == BLOCK - 1
}

/// Splits a merged range wider than a block into the part below its first
/// block boundary, the block-aligned run, and the part above the run.
fn split_on_blocks(range: Range<u32>) -> SmallVec<[Range<u32>; 3]> {
    let (start, end) = (*range.start(), *range.end());
    if ends_in_00(start) && ends_in_99(end) {
        return smallvec![range];
    }
    if (end - start) / BLOCK == 0 {
        return smallvec![range];
    }

    let aligned_start = if start < BLOCK {
        BLOCK
    } else {
        start.div_ceil(BLOCK) * BLOCK
    };
    let aligned_end = if ends_in_99(end) {
        end
    } else {
        end - end % BLOCK - 1
    };
    if aligned_start >= aligned_end {
        return smallvec![range];
    }

    tracing::debug!(
        start,
        end,
        aligned_start,
        aligned_end,
        "splitting postal range on block boundaries"
    );
    let mut pieces = SmallVec::new();
    if start != aligned_start {
        pieces.push(Range::new_unchecked(start, aligned_start - 1));
    }
    pieces.push(Range::new_unchecked(aligned_start, aligned_end));
    if end > aligned_end {
        pieces.push(Range::new_unchecked(aligned_end + 1, end));
    }
    pieces
}

/// Renders a range as canonical spec text: a padded code, a 3-digit prefix
/// or prefix range when block aligned, or a padded code range.
fn render_collapsed(range: &Range<u32>) -> String {
    if range.is_singleton() {
        return format!("{:05}", range.start());
    }
    let start = format!("{:05}", range.start());
    let end = format!("{:05}", range.end());
    if start.ends_with("00") && end.ends_with("99") {
        let (start, end) = (&start[..3], &end[..3]);
        if start == end {
            start.to_owned()
        } else {
            format!("{start}-{end}")
        }
    } else {
        format!("{start}-{end}")
    }
}

/// Renders a range as padded 5-digit text without prefix shorthand.
fn render_padded(range: &Range<u32>) -> String {
    if range.is_singleton() {
        format!("{:05}", range.start())
    } else {
        format!("{:05}-{:05}", range.start(), range.end())
    }
}

impl IntervalSet<u32> for PostalRange {
    #[inline]
    fn ranges(&self) -> &[Range<u32>] {
        &self.ranges
    }

    #[inline]
    fn lower_bound(&self) -> Option<&u32> {
        self.lower.as_ref()
    }

    #[inline]
    fn upper_bound(&self) -> Option<&u32> {
        self.upper.as_ref()
    }
}

impl PartialEq for PostalRange {
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec
    }
}

impl Eq for PostalRange {}

impl Hash for PostalRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spec.hash(state);
    }
}

impl fmt::Display for PostalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

impl FromStr for PostalRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
crate::impl_serde_as_spec!(PostalRange);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn r(s: u32, e: u32) -> Range<u32> {
        Range::new(s, e)
    }

    fn zr(spec: &str) -> PostalRange {
        PostalRange::parse(spec).unwrap()
    }

    #[test]
    fn test_empty_spec() {
        let codes = zr("");
        assert!(codes.is_empty());
        assert_eq!(codes.len(), 0);
        assert_eq!(codes.lower_bound(), None);
        assert_eq!(codes.values().next(), None);
        assert_eq!(codes.normalize(), codes);
    }

    #[test]
    fn test_token_forms() {
        assert_eq!(zr("685").ranges(), &[r(68500, 68599)]);
        assert_eq!(zr("68516").ranges(), &[r(68516, 68516)]);
        assert_eq!(zr("685-686").ranges(), &[r(68500, 68699)]);
        assert_eq!(zr("68516-68528").ranges(), &[r(68516, 68528)]);
        assert_eq!(zr("000").ranges(), &[r(0, 99)]);
        assert_eq!(zr("000-999").ranges(), &[r(0, 99999)]);
    }

    #[test]
    fn test_token_errors() {
        assert_eq!(
            PostalRange::parse("6851"),
            Err(RangeError::invalid_spec(
                "6851",
                "expected a 3 or 5 digit code or a range of them"
            ))
        );
        assert_eq!(
            PostalRange::parse("100,,101"),
            Err(RangeError::invalid_spec(
                "",
                "expected a 3 or 5 digit code or a range of them"
            ))
        );
        assert_eq!(
            PostalRange::parse("685x686"),
            Err(RangeError::invalid_spec("685x686", "expected a dash between the codes"))
        );
        assert_eq!(
            PostalRange::parse("6a516"),
            Err(RangeError::invalid_spec("6a516", "expected only digits"))
        );
        assert!(matches!(
            PostalRange::parse("68520-68510"),
            Err(RangeError::InvalidRangeConstruction { .. })
        ));
        assert!(matches!(
            PostalRange::parse("686-685"),
            Err(RangeError::InvalidRangeConstruction { .. })
        ));
    }

    #[test]
    fn test_inclusive_range_with_code_in_range() {
        let codes = zr("68007-68009");
        assert_eq!(codes.contains_code("68008"), Ok(true));
        assert_eq!(codes.at_index(0), Ok(68007));
        assert_eq!(codes.at_index(1), Ok(68008));
        assert_eq!(codes.at_index(2), Ok(68009));
        assert_eq!(
            codes.at_index(3),
            Err(RangeError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_inclusive_range_with_code_not_in_range() {
        let codes = zr("78007-78009");
        assert_eq!(codes.contains_code("68008"), Ok(false));
        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn test_contains_code_rejects_garbage() {
        assert!(zr("685").contains_code("68a00").is_err());
        assert_eq!(zr("685").contains_code(" 68500 "), Ok(true));
    }

    #[test]
    fn test_non_continuous_range() {
        let codes = zr("68010,68005,68008");
        for (code, expected) in [
            ("68006", false),
            ("68004", false),
            ("68009", false),
            ("68005", true),
            ("68008", true),
            ("68010", true),
        ] {
            assert_eq!(codes.contains_code(code), Ok(expected), "code {code}");
        }
        assert_eq!(codes.lower_bound(), Some(&68005));
        assert_eq!(codes.upper_bound(), Some(&68010));
        assert_eq!(codes.len(), 3);
        assert_eq!(codes.at_index(0), Ok(68005));
        assert_eq!(codes.at_index(1), Ok(68008));
        assert_eq!(codes.at_index(2), Ok(68010));
        // The spec is kept as written
        assert_eq!(codes.spec(), "68010,68005,68008");
    }

    #[test]
    fn test_consecutive_codes_collapse_into_range() {
        let codes = zr("100-102,10300,10301,10302,10303,10304,10305,10306,10307,10308,10309,10310");
        assert_eq!(codes.normalize().spec(), "100-102,10300-10310");
    }

    #[test]
    fn test_ranges_with_gaps() {
        let codes = zr("100,102,103");
        assert_eq!(codes.normalize().spec(), "100,102-103");
        assert_eq!(codes.len(), 300);
        assert_eq!(codes.at_index(0), Ok(10000));
        assert_eq!(codes.at_index(1), Ok(10001));
        assert_eq!(codes.at_index(98), Ok(10098));
        assert_eq!(codes.at_index(99), Ok(10099));
        assert_eq!(codes.at_index(100), Ok(10200));
        assert_eq!(codes.at_index(101), Ok(10201));
    }

    #[test]
    fn test_add_spec_keeps_3_digits() {
        let codes = zr("100").add_spec("006-009").unwrap();
        assert_eq!(codes.spec(), "006-009,100");
    }

    #[test]
    fn test_add_spec_collapses_to_3_digits() {
        let codes = zr("100").add_spec("00699-00901").unwrap();
        assert_eq!(codes.spec(), "00699,007-008,00900-00901,100");
    }

    #[test]
    fn test_add_spec_blank_sides() {
        assert_eq!(zr("68517,68516").add_spec(" ").unwrap().spec(), "68516-68517");
        assert_eq!(zr("").add_spec("685").unwrap().spec(), "685");
        assert!(zr("685").add_spec("68").is_err());
    }

    #[test]
    fn test_add_range() {
        let codes = zr("685").add_range(&r(68600, 68699)).unwrap();
        assert_eq!(codes.spec(), "685-686");
        let codes = zr("").add_range(&r(7, 7)).unwrap();
        assert_eq!(codes.spec(), "00007");
        assert!(zr("685").add_range(&r(99999, 100000)).is_err());
    }

    #[test]
    fn test_wide_range_not_bounded_on_blocks_stays_padded() {
        let codes = zr("100,10600-10999,00150-00250");
        assert_eq!(codes.normalize().spec(), "00150-00250,100,106-109");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let codes = zr("100, 10600-10999, 00150-00250");
        assert_eq!(codes.normalize().spec(), "00150-00250,100,106-109");
    }

    #[test]
    fn test_two_consecutive_5_digit_codes() {
        assert_eq!(zr("68516,68517").normalize().spec(), "68516-68517");
    }

    #[test]
    fn test_remove_spec() {
        let codes = zr("000-999").remove_spec("68501").unwrap();
        assert_eq!(codes.spec(), "000,001-684,68500,68502-68599,686-999");
        assert!(!codes.contains(&68501));
        assert_eq!(codes.len(), 99999);
    }

    #[test]
    fn test_remove_spec_edge_cases() {
        assert_eq!(zr("685").remove_spec("685").unwrap().spec(), "");
        assert_eq!(zr("").remove_spec("685").unwrap(), zr(""));
        assert_eq!(zr("68517,68516").remove_spec("").unwrap().spec(), "68516-68517");
        assert_eq!(zr("685").remove_spec("68500-68549").unwrap().spec(), "68550-68599");
        assert!(zr("685").remove_spec("6850").is_err());
    }

    #[test]
    fn test_remove_spec_matches_per_code_filtering() {
        let codes = zr("006-012,68516-68700,99990");
        let excluded = "00700-00812,686,99990";
        let removed = codes.remove_spec(excluded).unwrap();

        let exclusion = zr(excluded);
        let by_code = codes
            .values()
            .filter(|code| !exclusion.contains(code))
            .map(|code| format!("{code:05}"))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(removed, zr(&by_code).normalize());
    }

    #[test]
    fn test_single_wide_aligned_range_collapses() {
        assert_eq!(zr("00100-99999").normalize().spec(), "001-999");
    }

    #[test]
    fn test_range_from_zero_splits_its_first_block() {
        assert_eq!(zr("000-999").normalize().spec(), "000,001-999");
        assert_eq!(zr("00000-00250").normalize().spec(), "000,001,00200-00250");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for spec in [
            "",
            "685",
            "000-999",
            "68010,68005,68008",
            "100,102,103",
            "00699-00901,100",
            "100, 10600-10999, 00150-00250",
            "00017-00523,09800,09801-09899",
        ] {
            let once = zr(spec).normalize();
            let twice = once.normalize();
            assert_eq!(twice.spec(), once.spec(), "spec {spec:?}");
        }
    }

    #[test]
    fn test_normalized_ranges_are_sorted_pieces_of_the_same_codes() {
        let codes = zr("00017-00523,68516,68517,00600-00650");
        let normalized = codes.normalize();
        assert!(spanspec_core::algorithm::is_sorted_by_start(normalized.ranges()));
        assert_eq!(
            normalized.values().collect::<Vec<_>>(),
            algorithm::flatten(codes.ranges())
                .iter()
                .flat_map(Range::iter)
                .collect::<Vec<_>>()
        );
        assert_eq!(normalized.spec(), "00017-00099,001-004,00500-00523,00600-00650,68516-68517");
    }

    #[test]
    fn test_equality_is_over_the_spec() {
        assert_ne!(zr("685"), zr("68500-68599"));
        assert_eq!(zr("685"), zr("68500-68599").normalize());

        let mut seen = HashSet::new();
        seen.insert(zr("685"));
        assert!(seen.contains(&zr("68500-68599").normalize()));
        assert!(!seen.contains(&zr("68500-68599")));
    }

    #[test]
    fn test_convert_to_3_digit_if_possible() {
        let collapse = |code| PostalRange::convert_to_3_digit_if_possible(code).unwrap();
        assert_eq!(collapse("68500").spec(), "685");
        assert_eq!(collapse("68501").spec(), "68501");
        for code in PostalRange::DO_NOT_COLLAPSE {
            assert_eq!(collapse(code).spec(), code);
        }
        assert!(PostalRange::convert_to_3_digit_if_possible("685").is_err());
        assert!(PostalRange::convert_to_3_digit_if_possible("6850a").is_err());
    }

    #[test]
    fn test_set_predicates() {
        let inner = zr("68516-68520");
        let outer = zr("685,700");
        assert!(inner.is_subset(&outer));
        assert!(inner.intersects(&outer));
        assert!(!outer.is_subset(&inner));
        assert!(!zr("684").intersects(&outer));
    }

    #[test]
    fn test_round_trip_through_text() {
        let codes = zr("100, 102");
        assert_eq!(codes.to_string(), "100, 102");
        assert_eq!(codes.to_string().parse::<PostalRange>().unwrap(), codes);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_emits_the_spec() {
        let codes = zr("100,102-103");
        let json = serde_json::to_string(&codes).unwrap();
        assert_eq!(json, r#""100,102-103""#);
        let back: PostalRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, codes);
        assert_eq!(back.ranges(), codes.ranges());
        assert!(serde_json::from_str::<PostalRange>(r#""1""#).is_err());
    }
}
