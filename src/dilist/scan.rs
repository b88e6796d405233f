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

//! The synchronized two-pointer scan behind [`DiList::difference()`].
//!
//! The scan walks the ranges of `A` alongside the ranges of a cut list
//! (`A ∩ B`) and is driven by [`step()`], a pure transition function over a
//! two-state [`ScanState`]: either the next range of `A` is loaded fresh, or
//! a tail left over from the previous cut is still being worked on.
//!
//! [`DiList::difference()`]: crate::DiList::difference

use crate::dilist::Intervals;
use crate::utils::{containment, Containment};
use crate::{ClosedInterval, PointType};

/// The working range of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState<I> {
	/// The working range is the range of `A` under the `A` pointer.
	FreshRange,
	/// The working range is what remains of the range under the `A`
	/// pointer after an earlier cut removed its front.
	ShrunkRange(ClosedInterval<I>),
}

impl<I> ScanState<I>
where
	I: PointType,
{
	fn working(self, next_a: ClosedInterval<I>) -> ClosedInterval<I> {
		match self {
			ScanState::FreshRange => next_a,
			ScanState::ShrunkRange(remaining) => remaining,
		}
	}
}

/// Which pointer(s) a [`Transition`] moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
	A,
	Cut,
	Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition<I> {
	pub(crate) emit: Option<ClosedInterval<I>>,
	pub(crate) state: ScanState<I>,
	pub(crate) advance: Advance,
}

/// One step of the scan given the current state, the range under the `A`
/// pointer and the range under the cut pointer.
pub(crate) fn step<I>(
	state: ScanState<I>,
	next_a: ClosedInterval<I>,
	cut: ClosedInterval<I>,
) -> Transition<I>
where
	I: PointType,
{
	let working = state.working(next_a);

	if working.end < cut.start {
		return Transition {
			emit: Some(working),
			state: ScanState::FreshRange,
			advance: Advance::A,
		};
	}
	if working.start > cut.end {
		return Transition {
			emit: None,
			state,
			advance: Advance::Cut,
		};
	}

	match containment(&working, &cut) {
		Containment::Both => Transition {
			emit: None,
			state: ScanState::FreshRange,
			// a cut running past the working range may still cover the
			// next range of `A`
			advance: if cut.end == working.end {
				Advance::Both
			} else {
				Advance::A
			},
		},
		Containment::StartOnly => shrink(working, cut, None),
		Containment::EndOnly => Transition {
			emit: working.before(&cut),
			state: ScanState::FreshRange,
			advance: Advance::A,
		},
		Containment::Neither => shrink(working, cut, working.before(&cut)),
	}
}

fn shrink<I>(
	working: ClosedInterval<I>,
	cut: ClosedInterval<I>,
	emit: Option<ClosedInterval<I>>,
) -> Transition<I>
where
	I: PointType,
{
	match working.after(&cut) {
		Some(tail) => Transition {
			emit,
			state: ScanState::ShrunkRange(tail),
			advance: Advance::Cut,
		},
		None => Transition {
			emit,
			state: ScanState::FreshRange,
			advance: Advance::Both,
		},
	}
}

/// Every point of `a` not covered by `cut`, in ascending order.
///
/// `cut` is expected to be `a ∩ b` for some `b`, both sides normalized.
pub(crate) fn difference_scan<I>(
	a: &[ClosedInterval<I>],
	cut: &[ClosedInterval<I>],
) -> Intervals<I>
where
	I: PointType,
{
	let mut output = Intervals::new();
	let mut state = ScanState::FreshRange;
	let mut a_index = 0;
	let mut cut_index = 0;

	while a_index < a.len() && cut_index < cut.len() {
		let transition = step(state, a[a_index], cut[cut_index]);

		output.extend(transition.emit);
		state = transition.state;
		match transition.advance {
			Advance::A => a_index += 1,
			Advance::Cut => cut_index += 1,
			Advance::Both => {
				a_index += 1;
				cut_index += 1;
			}
		}
	}

	if let ScanState::ShrunkRange(tail) = state {
		output.push(tail);
		a_index += 1;
	}

	debug_assert!(
		a_index < a.len()
			|| remaining_cuts_consumed(
				&cut[cut_index..],
				output.last(),
				a.last()
			),
		"cut ranges left over after the last range of A"
	);

	output.extend(a[a_index..].iter().copied());

	output
}

/// Cut ranges still unvisited once `A` has run out must lie after the last
/// emitted point and within the last range of `A`, so they have nothing left
/// to remove.
fn remaining_cuts_consumed<I>(
	remaining: &[ClosedInterval<I>],
	last_emitted: Option<&ClosedInterval<I>>,
	last_a: Option<&ClosedInterval<I>>,
) -> bool
where
	I: PointType,
{
	remaining.iter().all(|cut| {
		last_emitted.map_or(true, |emitted| cut.start > emitted.end)
			&& last_a.map_or(false, |a| cut.end <= a.end)
	})
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ii, pt};

	const NUMBERS_DOMAIN: &[i8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

	#[test]
	fn step_emits_ranges_ending_before_the_cut() {
		assert_eq!(
			step(ScanState::FreshRange, ii(1, 3), ii(6, 8)),
			Transition {
				emit: Some(ii(1, 3)),
				state: ScanState::FreshRange,
				advance: Advance::A,
			}
		);
		assert_eq!(
			step(ScanState::ShrunkRange(ii(4, 5)), ii(1, 5), ii(7, 8)),
			Transition {
				emit: Some(ii(4, 5)),
				state: ScanState::FreshRange,
				advance: Advance::A,
			}
		);
	}

	#[test]
	fn step_skips_cuts_behind_the_working_range() {
		assert_eq!(
			step(ScanState::FreshRange, ii(6, 8), ii(1, 3)),
			Transition {
				emit: None,
				state: ScanState::FreshRange,
				advance: Advance::Cut,
			}
		);
		// the shrunk range survives the skip
		assert_eq!(
			step(ScanState::ShrunkRange(ii(6, 8)), ii(1, 8), ii(1, 3)),
			Transition {
				emit: None,
				state: ScanState::ShrunkRange(ii(6, 8)),
				advance: Advance::Cut,
			}
		);
	}

	#[test]
	fn step_overlap_cases() {
		// both ends covered
		assert_eq!(
			step(ScanState::FreshRange, ii(3, 5), ii(3, 5)),
			Transition {
				emit: None,
				state: ScanState::FreshRange,
				advance: Advance::Both,
			}
		);
		// start covered only
		assert_eq!(
			step(ScanState::FreshRange, ii(1, 10), ii(1, 4)),
			Transition {
				emit: None,
				state: ScanState::ShrunkRange(ii(5, 10)),
				advance: Advance::Cut,
			}
		);
		// end covered only
		assert_eq!(
			step(ScanState::FreshRange, ii(1, 10), ii(7, 10)),
			Transition {
				emit: Some(ii(1, 6)),
				state: ScanState::FreshRange,
				advance: Advance::A,
			}
		);
		// neither end covered
		assert_eq!(
			step(ScanState::FreshRange, ii(1, 10), ii(3, 5)),
			Transition {
				emit: Some(ii(1, 2)),
				state: ScanState::ShrunkRange(ii(6, 10)),
				advance: Advance::Cut,
			}
		);
		// neither end covered, working on a shrunk range
		assert_eq!(
			step(ScanState::ShrunkRange(ii(6, 10)), ii(1, 10), pt(8)),
			Transition {
				emit: Some(ii(6, 7)),
				state: ScanState::ShrunkRange(ii(9, 10)),
				advance: Advance::Cut,
			}
		);
	}

	#[test]
	fn difference_scan_tests() {
		assert_eq!(
			difference_scan(&[ii(1, 10)], &[ii(3, 5)]).as_slice(),
			[ii(1, 2), ii(6, 10)]
		);
		assert!(difference_scan(&[ii(1, 10)], &[ii(1, 10)]).is_empty());
		assert_eq!(
			difference_scan(&[ii(1, 5), ii(10, 20)], &[ii(3, 5), ii(10, 12)])
				.as_slice(),
			[ii(1, 2), ii(13, 20)]
		);
		assert_eq!(
			difference_scan(&[ii(1, 10), ii(20, 30)], &[]).as_slice(),
			[ii(1, 10), ii(20, 30)]
		);
		assert_eq!(
			difference_scan(&[ii(1, 20)], &[pt(2), ii(5, 6), ii(19, 20)])
				.as_slice(),
			[pt(1), ii(3, 4), ii(7, 18)]
		);
		assert_eq!(
			difference_scan(&[ii(1, 3), ii(6, 9), ii(12, 14)], &[ii(7, 8)])
				.as_slice(),
			[ii(1, 3), pt(6), pt(9), ii(12, 14)]
		);
	}

	#[test]
	fn difference_scan_matches_point_model() {
		let lists = all_small_lists();
		for a in lists.iter() {
			for b in lists.iter() {
				let cut = intersect_model(a, b);
				let output = difference_scan(a, &cut);

				for x in NUMBERS_DOMAIN {
					let expected = contains(a, *x) && !contains(b, *x);
					if contains(&output, *x) != expected {
						dbg!(a, b, &cut, &output, x);
						panic!("Discrepancy in difference_scan() detected!");
					}
				}
				assert!(output.windows(2).all(|pair| pair[0].end < pair[1].start));
			}
		}
	}

	// Test Helper Functions
	//======================
	fn contains(intervals: &[ClosedInterval<i8>], point: i8) -> bool {
		intervals.iter().any(|interval| interval.contains_point(point))
	}

	fn intersect_model(
		a: &[ClosedInterval<i8>],
		b: &[ClosedInterval<i8>],
	) -> Vec<ClosedInterval<i8>> {
		let mut output = Vec::new();
		for x in a {
			for y in b {
				output.extend(x.intersection(y));
			}
		}
		output.sort();
		output
	}

	//every normalized list of up to three intervals over 1..=11
	fn all_small_lists() -> Vec<Vec<ClosedInterval<i8>>> {
		let mut singles = Vec::new();
		for start in [1, 3, 4, 7, 9] {
			for end in [1, 2, 3, 5, 6, 8, 11] {
				if start <= end {
					singles.push(ii(start, end));
				}
			}
		}

		let mut output = vec![Vec::new()];
		for x in singles.iter() {
			output.push(vec![*x]);
			for y in singles.iter().filter(|y| y.start > x.end + 1) {
				output.push(vec![*x, *y]);
				for z in singles.iter().filter(|z| z.start > y.end + 1) {
					output.push(vec![*x, *y, *z]);
				}
			}
		}
		output
	}
}
