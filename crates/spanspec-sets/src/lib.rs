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

//! # Spanspec Sets
//!
//! Concrete interval sets whose sole external form is a compact textual
//! spec: a comma separated list of values and ranges.
//!
//! ## Modules
//!
//! - `integer`: [`IntegerIntervals`], sets of `i64` written as `"1-3,5,8-9"`.
//! - `postal`: [`PostalRange`], sets of 5-digit postal codes written with
//!   3-digit prefix shorthand (`"685"`, `"685-686"`, `"68516-68528"`), with
//!   add/remove set algebra over specs.
//! - `spec`: Token helpers shared by both grammars.
//!
//! Both types implement [`IntervalSet`], `Display` (the spec text) and
//! `FromStr` (parsing). With the `serde` feature they serialize as their spec
//! string.
//!
//! ```rust
//! use spanspec_sets::{IntervalSet, PostalRange};
//!
//! let codes: PostalRange = "100".parse().unwrap();
//! let codes = codes.add_spec("00699-00901").unwrap();
//! assert_eq!(codes.spec(), "00699,007-008,00900-00901,100");
//! assert!(codes.contains(&10042));
//! ```

pub mod integer;
pub mod postal;
pub mod spec;

pub use integer::IntegerIntervals;
pub use postal::PostalRange;
pub use spanspec_core::{
    error::RangeError,
    math::{
        interval_set::IntervalSet,
        range::{Range, Scalar},
    },
};

#[cfg(feature = "serde")]
macro_rules! impl_serde_as_spec {
    ($t:ty) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let spec = <String as serde::Deserialize>::deserialize(deserializer)?;
                spec.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

#[cfg(feature = "serde")]
pub(crate) use impl_serde_as_spec;
