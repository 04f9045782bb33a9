//! A module containing [`Traversal`], the lazy cursor returned by
//! [`Interval::ascending()`] and friends, along with the [`Step`] strategies
//! that drive it.
//!
//! A traversal never buffers: each call to [`Iterator::next()`] computes at
//! most one new value. It also never mutates the interval it walks, so any
//! number of traversals can run over the same interval at once, and calling
//! [`Interval::ascending()`] again simply starts over from the near endpoint.
//!
//! # Termination
//!
//! A traversal ends the first time the candidate value falls outside the far
//! endpoint, or when a [`Checked`] step returns [`None`]. If the step never
//! moves the cursor toward the far endpoint the traversal never ends; keeping
//! the step convergent is up to the caller.

use core::iter::FusedIterator;
use core::mem;

use crate::{DiscreteFinite, EndpointType, Interval};

/// The direction a [`Traversal`] walks its interval in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// From `min` toward `max`.
	Ascending,
	/// From `max` toward `min`.
	Descending,
}

/// A strategy for computing the next value of a [`Traversal`] from the
/// current one.
pub trait Step<T> {
	/// Returns the value after `current`, or [`None`] if there isn't one.
	fn step(&mut self, current: &T) -> Option<T>;
}

/// A [`Step`] wrapping a plain `FnMut(&T) -> T`, which always has a next
/// value.
#[derive(Debug, Clone, Copy)]
pub struct Unchecked<F>(pub F);

impl<T, F> Step<T> for Unchecked<F>
where
	F: FnMut(&T) -> T,
{
	fn step(&mut self, current: &T) -> Option<T> {
		Some((self.0)(current))
	}
}

/// A [`Step`] wrapping an `FnMut(&T) -> Option<T>`, where [`None`] ends the
/// traversal.
#[derive(Debug, Clone, Copy)]
pub struct Checked<F>(pub F);

impl<T, F> Step<T> for Checked<F>
where
	F: FnMut(&T) -> Option<T>,
{
	fn step(&mut self, current: &T) -> Option<T> {
		(self.0)(current)
	}
}

/// A [`Step`] moving to the next greater value of a [`DiscreteFinite`] type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Up;

impl<T> Step<T> for Up
where
	T: DiscreteFinite + Clone,
{
	fn step(&mut self, current: &T) -> Option<T> {
		current.clone().up()
	}
}

/// A [`Step`] moving to the next smaller value of a [`DiscreteFinite`] type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Down;

impl<T> Step<T> for Down
where
	T: DiscreteFinite + Clone,
{
	fn step(&mut self, current: &T) -> Option<T> {
		current.clone().down()
	}
}

#[derive(Debug, Clone)]
enum Cursor<T> {
	Start,
	At(T),
	Done,
}

/// A lazy iterator over the values of an [`Interval`] produced by repeatedly
/// applying a [`Step`].
///
/// Created by [`Interval::ascending()`], [`Interval::descending()`],
/// [`Interval::ascending_checked()`], [`Interval::descending_checked()`],
/// [`Interval::values()`] and [`Interval::values_rev()`].
///
/// # Examples
/// ```
/// use ival::Interval;
///
/// let interval = Interval::with_inclusion(false, 3, 7, false).unwrap();
///
/// let mut traversal = interval.ascending(|x| x + 1);
/// assert_eq!(traversal.next(), Some(4));
///
/// // a clone carries on from the same cursor position
/// let rest = traversal.clone();
/// assert_eq!(traversal.collect::<Vec<_>>(), [5, 6]);
/// assert_eq!(rest.collect::<Vec<_>>(), [5, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct Traversal<'a, T, S> {
	interval: &'a Interval<T>,
	step: S,
	direction: Direction,
	cursor: Cursor<T>,
}

impl<'a, T, S> Traversal<'a, T, S>
where
	T: EndpointType + Clone,
	S: Step<T>,
{
	pub(crate) fn new(
		interval: &'a Interval<T>,
		step: S,
		direction: Direction,
	) -> Self {
		Traversal {
			interval,
			step,
			direction,
			cursor: Cursor::Start,
		}
	}

	/// Returns the direction this traversal walks in.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	fn first(&mut self) -> Option<T> {
		let interval = self.interval;
		match self.direction {
			Direction::Ascending => match interval.min_included() {
				true => Some(interval.min().clone()),
				false => self.step.step(interval.min()),
			},
			Direction::Descending => match interval.max_included() {
				true => Some(interval.max().clone()),
				false => self.step.step(interval.max()),
			},
		}
	}

	//only the far endpoint is checked
	fn continues(&self, candidate: &T) -> bool {
		let interval = self.interval;
		match self.direction {
			Direction::Ascending => match interval.max_included() {
				true => candidate <= interval.max(),
				false => candidate < interval.max(),
			},
			Direction::Descending => match interval.min_included() {
				true => candidate >= interval.min(),
				false => candidate > interval.min(),
			},
		}
	}
}

impl<T, S> Iterator for Traversal<'_, T, S>
where
	T: EndpointType + Clone,
	S: Step<T>,
{
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		let candidate = match mem::replace(&mut self.cursor, Cursor::Done) {
			Cursor::Start => self.first(),
			Cursor::At(current) => self.step.step(&current),
			Cursor::Done => None,
		}?;

		if !self.continues(&candidate) {
			return None;
		}

		self.cursor = Cursor::At(candidate.clone());
		Some(candidate)
	}
}

impl<T, S> FusedIterator for Traversal<'_, T, S>
where
	T: EndpointType + Clone,
	S: Step<T>,
{
}
