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

//! # Spanspec Core
//!
//! The interval algebra underneath the `spanspec` sets: closed ranges over an
//! ordered scalar, the interval-set contract, and the merge/split sweeps the
//! concrete sets are built from.
//!
//! ## Modules
//!
//! - `math`: The closed `[start, end]` `Range<T>` with its pairwise operations
//!   (intersection, containment, adjacency, union, symmetric difference), the
//!   one- or two-sided `OpenRange<T>`, and the `IntervalSet<T>` contract with
//!   its lazy value iterator.
//! - `algorithm`: Sweeps over sorted range slices: sortedness checks,
//!   flattening (merging overlapping or touching ranges), interval-level
//!   subtraction, and positional lookup across a list of ranges.
//! - `error`: The `RangeError` type shared by every fallible operation.
//!
//! Every value in this crate is immutable once built; transformations return
//! new values.

pub mod algorithm;
pub mod error;
pub mod math;
