/*
Copyright 2024 James Forster

This file is part of dilist.

dilist is free software: you can redistribute it and/or modify it under
the terms of the MIT License. See the LICENSE file at the root of this
repository or <https://opensource.org/licenses/MIT>.

dilist is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE.
*/

//! This crate provides [`DiList`], a Disjoint Interval List: an owned,
//! sorted sequence of closed integer intervals where no two intervals
//! overlap or touch, along with the interval algebra needed to reason about
//! covered and uncovered regions of a coordinate space.
//!
//! The typical use is coverage bookkeeping on large coordinate ranges, for
//! example the regions of a chromosome already covered by some data. Every
//! operation works on the intervals themselves, so the cost depends on the
//! number of intervals and never on the span of coordinates they cover.
//!
//! ## Example
//!
//! ```rust
//! use dilist::DiList;
//!
//! let covered = DiList::from_ranges([(1, 5), (10, 20)]).unwrap();
//! let reads = DiList::from_ranges([(3, 12)]).unwrap();
//!
//! // exact difference
//! let uncovered = covered.subtract(&reads, 0).unwrap();
//! assert_eq!(uncovered.to_pairs(), [(1, 2), (13, 20)]);
//! assert_eq!(uncovered.length(), 10);
//!
//! // fragments shorter than the threshold are dropped
//! let uncovered = covered.subtract(&reads, 5).unwrap();
//! assert_eq!(uncovered.to_pairs(), [(13, 20)]);
//!
//! assert_eq!(covered.intersect(&reads).to_pairs(), [(3, 5), (10, 12)]);
//! assert_eq!(covered.union(&reads).to_pairs(), [(1, 20)]);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Closed Intervals
//!
//! Every interval in this crate is a [`ClosedInterval`], both the `start`
//! and the `end` are included. The length of `[s, e]` is `e - s + 1`, so
//! the single point interval `[4, 4]` has length `1`. This matches the
//! coordinate conventions common in genomics.
//!
//! ### Discrete-ness
//!
//! This crate is designed to work with [`DiscreteFinite`] types, which is
//! implemented for the primitive integers. Because integers are discrete,
//! `[5, 6]` touches `[7, 8]` as no value lies between them, and the two are
//! merged into `[5, 8]` whenever they end up in the same [`DiList`].
//!
//! ### Invalid Intervals
//!
//! An interval is only valid if it contains at least one point, that is
//! if `start <= end`. `[4, 4]` is valid, `[5, 2]` is not.
//!
//! The fallible constructors ([`ClosedInterval::new()`] and
//! [`DiList::from_ranges()`]) return an [`InvalidRangeError`] for invalid
//! intervals. The functions taking already built [`ClosedInterval`]s (whose
//! fields are public) panic instead, as does the [`interval::ii()`]
//! shorthand.
//!
//! ### Normalization
//!
//! A [`DiList`] is normalized when it is built: the intervals are sorted by
//! start and overlapping or touching intervals are merged. Every operation
//! returns a normalized [`DiList`], so two lists are equal if and only if
//! they contain exactly the same points.
//!
//! ### Overlap
//!
//! Two intervals are "overlapping" if there exists a point that is contained
//! within both intervals.
//!
//! ### Touching
//!
//! Two intervals are "touching" if they do not overlap and there exists no
//! value between them. For example, `[2, 4]` and `[5, 6]` are touching but
//! `[2, 4]` and `[6, 8]` are not, neither are `[2, 6]` and `[4, 8]`.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ClosedInterval`], [`DiList`]
//!   and [`SubtractOptions`]. A [`DiList`] is deserialized through the same
//!   validation and normalization as [`DiList::from_ranges()`].
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at the
//! `trace` and `debug` levels and never installs a subscriber.
//!
//! # Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub(crate) mod utils;

pub mod discrete_finite;
pub mod error;
pub mod interval;

pub mod dilist;

pub use crate::dilist::{intersect, length, subtract, DiList, SubtractOptions};
pub use crate::discrete_finite::DiscreteFinite;
pub use crate::error::{InvalidArgumentError, InvalidRangeError};
pub use crate::interval::{ClosedInterval, PointType};
