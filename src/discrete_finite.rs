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

//! A module containing the [`DiscreteFinite`] trait and trait impls for the
//! primitive integer datatypes.

/// A trait for things which are both discrete and finite datatypes. See the
/// top-level module documentation for more detailed descriptions on
/// discrete-ness and finite-ness.
pub trait DiscreteFinite {
	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>
	where
		Self: Sized;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>
	where
		Self: Sized;

	/// The number of values contained in `start..=end`.
	///
	/// Requires `start <= end`. The result is a `u128` so that even the
	/// full domain of a 64-bit type is representable.
	fn width(start: Self, end: Self) -> u128
	where
		Self: Sized;
}

macro_rules! foo {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl DiscreteFinite for $ident {
			fn up(self) -> Option<Self> {
				self.checked_add(1)
			}
			fn down(self) -> Option<Self> {
				self.checked_sub(1)
			}
			fn width(start: Self, end: Self) -> u128 {
				(end as i128 - start as i128) as u128 + 1
			}
		}

		foo!($($t)*);
	};
}

foo!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize,);

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn up_down_saturate_at_the_domain_edges() {
		assert_eq!(4_u8.up(), Some(5));
		assert_eq!(u8::MAX.up(), None);
		assert_eq!(0_u8.down(), None);
		assert_eq!(i8::MIN.down(), None);
		assert_eq!((-3_i8).down(), Some(-4));
	}

	#[test]
	fn width_tests() {
		assert_eq!(i32::width(1, 10), 10);
		assert_eq!(i32::width(7, 7), 1);
		assert_eq!(i8::width(-5, 5), 11);
		assert_eq!(u8::width(u8::MIN, u8::MAX), 256);
		assert_eq!(i64::width(i64::MIN, i64::MAX), 1_u128 << 64);
		assert_eq!(u64::width(0, u64::MAX), 1_u128 << 64);
	}
}
