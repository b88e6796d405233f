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

use core::cmp::Ordering;

use crate::{ClosedInterval, PointType};

pub(crate) fn cmp_point_with_interval<I>(
	point: I,
	interval: &ClosedInterval<I>,
) -> Ordering
where
	I: PointType,
{
	if point < interval.start {
		Ordering::Less
	} else if point > interval.end {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

/// How a cut interval covers a working interval it overlaps, seen from the
/// working interval's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Containment {
	Both,
	StartOnly,
	EndOnly,
	Neither,
}
///requires that `working` and `cut` overlap
pub(crate) fn containment<I>(
	working: &ClosedInterval<I>,
	cut: &ClosedInterval<I>,
) -> Containment
where
	I: PointType,
{
	match (cut.start <= working.start, cut.end >= working.end) {
		(true, true) => Containment::Both,
		(true, false) => Containment::StartOnly,
		(false, true) => Containment::EndOnly,
		(false, false) => Containment::Neither,
	}
}

///merges two intervals if they overlap or touch, for use with
///[`Itertools::coalesce()`](itertools::Itertools::coalesce) over intervals
///sorted by start
pub(crate) fn join<I>(
	x: ClosedInterval<I>,
	y: ClosedInterval<I>,
) -> Result<ClosedInterval<I>, (ClosedInterval<I>, ClosedInterval<I>)>
where
	I: PointType,
{
	if x.joinable_ordered(&y) {
		Ok(x.hull(&y))
	} else {
		Err((x, y))
	}
}

pub(crate) fn invalid_interval_panic<I>(interval: &ClosedInterval<I>)
where
	I: PointType,
{
	if !interval.is_valid() {
		panic!(
			"invalid interval given to function, see here: https://docs.rs/dilist/latest/dilist/index.html#invalid-intervals"
		);
	}
}

///sorted by start, non-overlapping and non-touching
pub(crate) fn is_normalized<I>(intervals: &[ClosedInterval<I>]) -> bool
where
	I: PointType,
{
	intervals.iter().all(ClosedInterval::is_valid)
		&& intervals
			.windows(2)
			.all(|pair| pair[0].end < pair[1].start && !pair[0].touches_ordered(&pair[1]))
}
