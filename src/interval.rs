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

//! A module containing [`ClosedInterval`] and it's constructor functions.

use core::cmp::{max, min};
use core::fmt;

use crate::{DiscreteFinite, InvalidRangeError};

/// The marker trait for valid point types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouldn't need to implement this yourself.
pub trait PointType: Ord + Copy + DiscreteFinite {}
impl<I> PointType for I where I: Ord + Copy + DiscreteFinite {}

/// A closed interval, both `start` and `end` are included.
///
/// A `ClosedInterval` obtained from [`ClosedInterval::new()`] always
/// satisfies `start <= end`, so it always contains at least one point.
///
/// # Examples
/// ```
/// use dilist::ClosedInterval;
///
/// let interval = ClosedInterval::new(3, 5).unwrap();
///
/// assert_eq!(interval.len(), 3);
/// assert!(interval.contains_point(5));
/// assert!(ClosedInterval::new(5, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedInterval<I> {
	/// The start of the interval, inclusive.
	pub start: I,
	/// The end of the interval, inclusive.
	pub end: I,
}

// a valid interval is never empty
#[allow(clippy::len_without_is_empty)]
impl<I> ClosedInterval<I>
where
	I: PointType,
{
	/// Makes a new interval from `start..=end`.
	///
	/// Returns [`InvalidRangeError`] if `start > end`.
	pub fn new(start: I, end: I) -> Result<Self, InvalidRangeError<I>> {
		if start > end {
			return Err(InvalidRangeError { start, end });
		}
		Ok(ClosedInterval { start, end })
	}

	/// Makes the interval containing only `point`.
	pub fn singleton(point: I) -> Self {
		ClosedInterval {
			start: point,
			end: point,
		}
	}

	/// Returns `true` if `start <= end`.
	pub fn is_valid(&self) -> bool {
		self.start <= self.end
	}

	/// The number of points in the interval, `end - start + 1`.
	pub fn len(&self) -> u128 {
		I::width(self.start, self.end)
	}

	/// Returns `true` if `point` lies within the interval.
	pub fn contains_point(&self, point: I) -> bool {
		point >= self.start && point <= self.end
	}

	/// Returns `true` if the two intervals share at least one point.
	pub fn overlaps(&self, other: &Self) -> bool {
		self.start <= other.end && other.start <= self.end
	}

	/// Returns `true` if `other` starts directly after `self` ends.
	///
	/// Requires that `self` comes before `other` and they don't overlap.
	pub fn touches_ordered(&self, other: &Self) -> bool {
		self.end.up() == Some(other.start)
	}

	/// Returns `true` if `self` and `other` overlap or touch, that is if
	/// their union is a single interval.
	///
	/// Requires that `self.start <= other.start`.
	pub fn joinable_ordered(&self, other: &Self) -> bool {
		match self.end.up() {
			Some(next) => other.start <= next,
			None => true,
		}
	}

	/// The points contained in both intervals, or `None` if they don't
	/// overlap.
	pub fn intersection(&self, other: &Self) -> Option<Self> {
		let intersect_start = max(self.start, other.start);
		let intersect_end = min(self.end, other.end);
		if intersect_start <= intersect_end {
			Some(ClosedInterval {
				start: intersect_start,
				end: intersect_end,
			})
		} else {
			None
		}
	}

	/// The smallest interval containing both `self` and `other`.
	pub fn hull(&self, other: &Self) -> Self {
		ClosedInterval {
			start: min(self.start, other.start),
			end: max(self.end, other.end),
		}
	}

	/// The part of `self` strictly before `cut.start`, if any.
	pub(crate) fn before(&self, cut: &Self) -> Option<Self> {
		if cut.start <= self.start {
			return None;
		}
		cut.start.down().map(|end| ClosedInterval {
			start: self.start,
			end: min(end, self.end),
		})
	}

	/// The part of `self` strictly after `cut.end`, if any.
	pub(crate) fn after(&self, cut: &Self) -> Option<Self> {
		if cut.end >= self.end {
			return None;
		}
		cut.end.up().map(|start| ClosedInterval {
			start: max(start, self.start),
			end: self.end,
		})
	}
}

impl<I> From<(I, I)> for ClosedInterval<I> {
	fn from((start, end): (I, I)) -> Self {
		ClosedInterval { start, end }
	}
}

impl<I> fmt::Display for ClosedInterval<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.start, self.end)
	}
}

/// An included-included interval
///
/// # Panics
///
/// Panics if `x1 > x2`, use [`ClosedInterval::new()`] for a fallible
/// constructor.
pub fn ii<I>(x1: I, x2: I) -> ClosedInterval<I>
where
	I: PointType,
{
	assert!(x1 <= x2, "ii() called with start greater than end");
	ClosedInterval { start: x1, end: x2 }
}

/// A single point interval
pub fn pt<I>(x: I) -> ClosedInterval<I>
where
	I: PointType,
{
	ClosedInterval::singleton(x)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	//go a bit around on either side of the test intervals
	const NUMBERS_DOMAIN: &[i8] =
		&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
	const NUMBERS: &[i8] = &[1, 2, 4, 6, 8, 10];

	#[test]
	fn new_rejects_inverted_bounds() {
		assert_eq!(ClosedInterval::new(2, 7), Ok(ii(2, 7)));
		assert_eq!(ClosedInterval::new(7, 7), Ok(pt(7)));
		assert_eq!(
			ClosedInterval::new(7, 2),
			Err(InvalidRangeError { start: 7, end: 2 })
		);
	}

	#[test]
	#[should_panic]
	fn ii_panics_on_inverted_bounds() {
		ii(3, 1);
	}

	#[test]
	fn len_tests() {
		assert_eq!(ii(1, 10).len(), 10);
		assert_eq!(pt(4).len(), 1);
		assert_eq!(ii(i8::MIN, i8::MAX).len(), 256);
	}

	#[test]
	fn test_intersection() {
		let input = ii(5, 10);
		assert_eq!(input.intersection(&ii(8, 13)), Some(ii(8, 10)));
		assert_eq!(input.intersection(&ii(10, 13)), Some(pt(10)));
		assert_eq!(input.intersection(&ii(11, 13)), None);
		assert_eq!(input.intersection(&ii(6, 7)), Some(ii(6, 7)));
	}

	#[test]
	fn touches_and_joinable_tests() {
		assert!(ii(1, 4).touches_ordered(&ii(5, 8)));
		assert!(!ii(1, 4).touches_ordered(&ii(6, 8)));
		assert!(ii(1, 4).joinable_ordered(&ii(5, 8)));
		assert!(ii(1, 4).joinable_ordered(&ii(3, 8)));
		assert!(!ii(1, 4).joinable_ordered(&ii(6, 8)));
		assert!(ii(1, i8::MAX).joinable_ordered(&pt(i8::MAX)));
	}

	#[test]
	fn overlaps_tests() {
		for a in all_valid_test_intervals() {
			for b in all_valid_test_intervals() {
				let our_answer = a.overlaps(&b);
				let mathematical_definition_of_overlap = NUMBERS_DOMAIN
					.iter()
					.any(|x| a.contains_point(*x) && b.contains_point(*x));

				if our_answer != mathematical_definition_of_overlap {
					dbg!(a, b);
					dbg!(mathematical_definition_of_overlap, our_answer);
					panic!("Discrepancy in overlaps() detected!");
				}
			}
		}
	}

	#[test]
	fn before_after_tests() {
		for base in all_valid_test_intervals() {
			for cut in all_valid_test_intervals() {
				let before = base.before(&cut);
				let after = base.after(&cut);

				for x in NUMBERS_DOMAIN {
					let expected_before = base.contains_point(*x) && *x < cut.start;
					let expected_after = base.contains_point(*x) && *x > cut.end;

					if con(before, x) != expected_before
						|| con(after, x) != expected_after
					{
						dbg!(base, cut, before, after, x);
						panic!("Invariant Broken!");
					}
				}
				for part in [before, after].into_iter().flatten() {
					assert!(part.is_valid());
				}
			}
		}
	}

	#[test]
	fn display_tests() {
		assert_eq!(ii(3, 12).to_string(), "[3, 12]");
		assert_eq!(ClosedInterval::from((-4, -1)).to_string(), "[-4, -1]");
	}

	fn con(x: Option<ClosedInterval<i8>>, point: &i8) -> bool {
		match x {
			Some(y) => y.contains_point(*point),
			None => false,
		}
	}

	fn all_valid_test_intervals() -> Vec<ClosedInterval<i8>> {
		let mut output = Vec::new();
		for i in NUMBERS {
			for j in NUMBERS {
				if i <= j {
					output.push(ii(*i, *j));
				}
			}
		}
		output
	}
}
