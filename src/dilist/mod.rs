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

//! A module containing the `dilist` data-structure.
//!
//! `dilist` stands for Disjoint Interval List.
//!
//! A [`DiList`] is an owned, sorted sequence of closed intervals where no two
//! intervals overlap or touch. Every operation takes its operands by
//! reference and returns a new [`DiList`], so a list can be shared freely
//! between threads without any locking.
//!
//! Alongside the methods on [`DiList`] this module provides free-function
//! forms of the core operations: [`length()`], [`intersect()`] and
//! [`subtract()`].

use smallvec::SmallVec;

use crate::{ClosedInterval, InvalidArgumentError, PointType};

pub(crate) mod scan;
pub mod set;

pub use set::{DiList, IntoIter, SubtractOptions};

/// Inline storage for the intervals of a [`DiList`], most coverage lists
/// only hold a handful of intervals.
pub(crate) type Intervals<I> = SmallVec<[ClosedInterval<I>; 4]>;

/// See [`DiList::length()`] for more details.
pub fn length<I>(set: &DiList<I>) -> u128
where
	I: PointType,
{
	set.length()
}

/// See [`DiList::intersect()`] for more details.
pub fn intersect<I>(a: &DiList<I>, b: &DiList<I>) -> DiList<I>
where
	I: PointType,
{
	a.intersect(b)
}

/// See [`DiList::subtract()`] for more details.
pub fn subtract<I>(
	a: &DiList<I>,
	b: &DiList<I>,
	min_length: i64,
) -> Result<DiList<I>, InvalidArgumentError>
where
	I: PointType,
{
	a.subtract(b, min_length)
}
