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

//! A module containing [`DiList`].

use core::fmt;

use itertools::Itertools;

use crate::dilist::scan::difference_scan;
use crate::dilist::Intervals;
use crate::utils::{
	cmp_point_with_interval, invalid_interval_panic, is_normalized, join,
};
use crate::{ClosedInterval, InvalidArgumentError, InvalidRangeError, PointType};

/// An ordered list of disjoint, non-touching closed intervals.
///
/// `I` is the generic type parameter for the point type the intervals are
/// over.
///
/// Any two consecutive intervals `[s1, e1]`, `[s2, e2]` in a [`DiList`]
/// satisfy `s2 > e1 + 1`, so every set of points has exactly one
/// [`DiList`] representation and two lists are equal if and only if they
/// contain the same points.
///
/// A [`DiList`] is never mutated by the set operations, each of them
/// returns a new list.
///
/// # Examples
/// ```
/// use dilist::DiList;
///
/// // A subject's covered regions, given unsorted and overlapping
/// let covered = DiList::from_ranges([(10, 20), (1, 5), (4, 8)]).unwrap();
/// assert_eq!(covered.to_pairs(), [(1, 8), (10, 20)]);
/// assert_eq!(covered.length(), 19);
///
/// // Remove what is already covered elsewhere, keep fragments of length 5+
/// let elsewhere = DiList::from_ranges([(3, 12)]).unwrap();
/// let remaining = covered.subtract(&elsewhere, 5).unwrap();
/// assert_eq!(remaining.to_pairs(), [(13, 20)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiList<I> {
	intervals: Intervals<I>,
}

/// Configuration for [`DiList::subtract_with()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
	feature = "serde",
	derive(::serde::Serialize, ::serde::Deserialize),
	serde(default)
)]
pub struct SubtractOptions {
	/// Fragments shorter than this are dropped from the result, `0` keeps
	/// everything. Must be non-negative.
	pub min_length: i64,
}

impl<I> DiList<I>
where
	I: PointType,
{
	/// Builds a list from raw `(start, end)` pairs which may be unsorted,
	/// overlapping or touching.
	///
	/// Returns [`InvalidRangeError`] for the first pair with
	/// `start > end`, in which case no list is built.
	///
	/// # Examples
	/// ```
	/// use dilist::{DiList, InvalidRangeError};
	///
	/// let list = DiList::from_ranges([(6, 9), (1, 3), (4, 4)]).unwrap();
	/// assert_eq!(list.to_pairs(), [(1, 4), (6, 9)]);
	///
	/// assert_eq!(
	/// 	DiList::from_ranges([(1, 3), (9, 6)]),
	/// 	Err(InvalidRangeError { start: 9, end: 6 })
	/// );
	/// ```
	pub fn from_ranges<T>(ranges: T) -> Result<Self, InvalidRangeError<I>>
	where
		T: IntoIterator<Item = (I, I)>,
	{
		let raw = ranges
			.into_iter()
			.map(|(start, end)| ClosedInterval::new(start, end))
			.collect::<Result<Intervals<I>, _>>()?;

		Ok(DiList::normalize(raw))
	}

	/// Builds a list from intervals which may be unsorted, overlapping or
	/// touching.
	///
	/// # Panics
	///
	/// Panics if any of the given intervals is an invalid interval. See
	/// [`Invalid Intervals`](https://docs.rs/dilist/latest/dilist/index.html#invalid-intervals)
	/// for more details.
	pub fn from_intervals<T>(intervals: T) -> Self
	where
		T: IntoIterator<Item = ClosedInterval<I>>,
	{
		let raw = intervals
			.into_iter()
			.inspect(invalid_interval_panic)
			.collect::<Intervals<I>>();

		DiList::normalize(raw)
	}

	fn normalize(mut raw: Intervals<I>) -> Self {
		let input_count = raw.len();

		raw.sort_unstable();
		let intervals = raw.into_iter().coalesce(join).collect::<Intervals<I>>();

		tracing::trace!(
			input = input_count,
			output = intervals.len(),
			"normalized intervals"
		);

		DiList { intervals }
	}

	fn from_normalized(intervals: Intervals<I>) -> Self {
		debug_assert!(is_normalized(&intervals));

		DiList { intervals }
	}

	/// The total number of points covered by the list, the sum of
	/// `end - start + 1` over every interval.
	///
	/// # Examples
	/// ```
	/// use dilist::DiList;
	///
	/// let list = DiList::from_ranges([(1, 2), (6, 10)]).unwrap();
	/// assert_eq!(list.length(), 7);
	/// assert_eq!(DiList::<i32>::new().length(), 0);
	/// ```
	pub fn length(&self) -> u128 {
		self.intervals.iter().map(ClosedInterval::len).sum()
	}

	/// Returns `true` if one of the intervals in the list contains
	/// `point`.
	pub fn contains_point(&self, point: I) -> bool {
		self.intervals
			.binary_search_by(|interval| {
				cmp_point_with_interval(point, interval).reverse()
			})
			.is_ok()
	}

	/// The points contained in `self`, `other` or both.
	///
	/// # Examples
	/// ```
	/// use dilist::DiList;
	///
	/// let a = DiList::from_ranges([(1, 3), (10, 12)]).unwrap();
	/// let b = DiList::from_ranges([(4, 6), (20, 22)]).unwrap();
	///
	/// assert_eq!(a.union(&b).to_pairs(), [(1, 6), (10, 12), (20, 22)]);
	/// ```
	pub fn union(&self, other: &Self) -> Self {
		let intervals = self
			.intervals
			.iter()
			.merge_by(
				other.intervals.iter(),
				|x: &&ClosedInterval<I>, y: &&ClosedInterval<I>| x.start <= y.start,
			)
			.copied()
			.coalesce(join)
			.collect::<Intervals<I>>();

		DiList::from_normalized(intervals)
	}

	/// The points contained in both `self` and `other`.
	///
	/// Runs in time proportional to the number of intervals in both lists.
	///
	/// # Examples
	/// ```
	/// use dilist::DiList;
	///
	/// let a = DiList::from_ranges([(1, 5), (10, 20)]).unwrap();
	/// let b = DiList::from_ranges([(3, 12)]).unwrap();
	///
	/// assert_eq!(a.intersect(&b).to_pairs(), [(3, 5), (10, 12)]);
	/// ```
	pub fn intersect(&self, other: &Self) -> Self {
		let mut intervals = Intervals::new();
		let mut self_index = 0;
		let mut other_index = 0;

		while self_index < self.intervals.len()
			&& other_index < other.intervals.len()
		{
			let x = &self.intervals[self_index];
			let y = &other.intervals[other_index];

			intervals.extend(x.intersection(y));

			if x.end < y.end {
				self_index += 1;
			} else {
				other_index += 1;
			}
		}

		DiList::from_normalized(intervals)
	}

	/// The points contained in `self` but not in `other`, without any
	/// length filtering.
	///
	/// Runs in time proportional to the number of intervals in both lists,
	/// independent of the span of coordinates they cover.
	///
	/// # Examples
	/// ```
	/// use dilist::DiList;
	///
	/// let a = DiList::from_ranges([(1, 10)]).unwrap();
	/// let b = DiList::from_ranges([(3, 5)]).unwrap();
	///
	/// assert_eq!(a.difference(&b).to_pairs(), [(1, 2), (6, 10)]);
	/// ```
	pub fn difference(&self, other: &Self) -> Self {
		let cut = self.intersect(other);

		DiList::normalize(difference_scan(&self.intervals, &cut.intervals))
	}

	/// The points contained in `self` but not in `other`, with every
	/// resulting interval shorter than `min_length` removed.
	///
	/// A `min_length` of `0` keeps every interval. Returns
	/// [`InvalidArgumentError`] if `min_length` is negative.
	///
	/// # Examples
	/// ```
	/// use dilist::{DiList, InvalidArgumentError};
	///
	/// let a = DiList::from_ranges([(1, 100)]).unwrap();
	/// let b = DiList::from_ranges([(40, 45)]).unwrap();
	///
	/// assert_eq!(a.subtract(&b, 10).unwrap().to_pairs(), [(1, 39), (46, 100)]);
	/// assert_eq!(a.subtract(&b, 45).unwrap().to_pairs(), [(46, 100)]);
	/// assert_eq!(
	/// 	a.subtract(&b, -1),
	/// 	Err(InvalidArgumentError { min_length: -1 })
	/// );
	/// ```
	pub fn subtract(
		&self,
		other: &Self,
		min_length: i64,
	) -> Result<Self, InvalidArgumentError> {
		let threshold = u128::try_from(min_length)
			.map_err(|_| InvalidArgumentError { min_length })?;

		tracing::debug!(
			a = self.len(),
			b = other.len(),
			min_length,
			"subtracting interval lists"
		);

		let difference = self.difference(other);
		let fragments = difference.len();
		let kept = difference.retain_min_length(threshold);

		tracing::debug!(
			fragments,
			kept = kept.len(),
			length = %kept.length(),
			"subtracted interval lists"
		);

		Ok(kept)
	}

	/// See [`DiList::subtract()`] for more details.
	pub fn subtract_with(
		&self,
		other: &Self,
		options: &SubtractOptions,
	) -> Result<Self, InvalidArgumentError> {
		self.subtract(other, options.min_length)
	}

	/// Removes every interval whose length is less than `min_length`.
	///
	/// # Examples
	/// ```
	/// use dilist::DiList;
	///
	/// let list = DiList::from_ranges([(1, 2), (6, 10), (20, 20)]).unwrap();
	///
	/// assert_eq!(list.clone().retain_min_length(0), list);
	/// assert_eq!(list.retain_min_length(3).to_pairs(), [(6, 10)]);
	/// ```
	pub fn retain_min_length(mut self, min_length: u128) -> Self {
		self.intervals.retain(|interval| interval.len() >= min_length);
		self
	}

	/// The intervals of the list as `(start, end)` pairs in ascending
	/// order.
	pub fn to_pairs(&self) -> Vec<(I, I)> {
		self.intervals
			.iter()
			.map(|interval| (interval.start, interval.end))
			.collect()
	}
}

impl<I> DiList<I> {
	/// Makes a new, empty [`DiList`].
	pub fn new() -> Self {
		DiList {
			intervals: Intervals::new(),
		}
	}
	/// The number of intervals in the list.
	pub fn len(&self) -> usize {
		self.intervals.len()
	}
	/// Returns `true` if the list contains no intervals.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}
	/// An iterator over the intervals in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ClosedInterval<I>> {
		self.intervals.iter()
	}
	/// The intervals in ascending order.
	pub fn as_slice(&self) -> &[ClosedInterval<I>] {
		&self.intervals
	}
	/// The first interval in the list, if any.
	pub fn first(&self) -> Option<&ClosedInterval<I>> {
		self.intervals.first()
	}
	/// The last interval in the list, if any.
	pub fn last(&self) -> Option<&ClosedInterval<I>> {
		self.intervals.last()
	}
}

// Trait Impls ==========================

impl<I> Default for DiList<I> {
	fn default() -> Self {
		DiList::new()
	}
}

impl<I> FromIterator<ClosedInterval<I>> for DiList<I>
where
	I: PointType,
{
	/// See [`DiList::from_intervals()`] for more details.
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = ClosedInterval<I>>,
	{
		DiList::from_intervals(iter)
	}
}

impl<I> IntoIterator for DiList<I> {
	type Item = ClosedInterval<I>;
	type IntoIter = IntoIter<I>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.intervals.into_iter(),
		}
	}
}
/// An owning iterator over the intervals of a [`DiList`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`DiList`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I> {
	inner: smallvec::IntoIter<[ClosedInterval<I>; 4]>,
}
impl<I> Iterator for IntoIter<I> {
	type Item = ClosedInterval<I>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}

impl<'a, I> IntoIterator for &'a DiList<I> {
	type Item = &'a ClosedInterval<I>;
	type IntoIter = core::slice::Iter<'a, ClosedInterval<I>>;
	fn into_iter(self) -> Self::IntoIter {
		self.intervals.iter()
	}
}

impl<I> fmt::Display for DiList<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.intervals.iter().format(", "))
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::dilist::Intervals;
	use crate::{ClosedInterval, DiList, PointType};

	impl<I> Serialize for DiList<I>
	where
		I: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for interval in self.iter() {
				seq.serialize_element(interval)?;
			}
			seq.end()
		}
	}

	impl<'de, I> Deserialize<'de> for DiList<I>
	where
		I: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(DiListVisitor { i: PhantomData })
		}
	}

	struct DiListVisitor<I> {
		i: PhantomData<I>,
	}

	impl<'de, I> Visitor<'de> for DiListVisitor<I>
	where
		I: PointType + Deserialize<'de>,
	{
		type Value = DiList<I>;

		fn expecting(
			&self,
			formatter: &mut core::fmt::Formatter,
		) -> core::fmt::Result {
			formatter.write_str("a DiList")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut raw = Intervals::new();
			while let Some(interval) = access.next_element::<ClosedInterval<I>>()? {
				if !interval.is_valid() {
					return Err(serde::de::Error::custom(
						"interval start is greater than its end",
					));
				}
				raw.push(interval);
			}
			Ok(DiList::normalize(raw))
		}
	}
}
