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

//! A module containing the error types returned by this crate.

use core::fmt;

/// The error returned when building an interval whose `start` is greater
/// than its `end`. Contains the offending bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError<I> {
	/// The start of the rejected range.
	pub start: I,
	/// The end of the rejected range.
	pub end: I,
}

impl<I> fmt::Display for InvalidRangeError<I>
where
	I: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"invalid range: start {:?} is greater than end {:?}",
			self.start, self.end
		)
	}
}

impl<I> std::error::Error for InvalidRangeError<I> where I: fmt::Debug {}

/// The error returned when a negative minimum length is passed to
/// [`DiList::subtract()`](crate::DiList::subtract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgumentError {
	/// The rejected minimum length.
	pub min_length: i64,
}

impl fmt::Display for InvalidArgumentError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"invalid argument: min_length must be non-negative, got {}",
			self.min_length
		)
	}
}

impl std::error::Error for InvalidArgumentError {}
