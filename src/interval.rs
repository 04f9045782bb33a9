//! A module containing [`Interval`], [`IntervalError`] and the helper
//! constructors [`ii`], [`ie`], [`ei`] and [`ee`].

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Bound, Range, RangeBounds, RangeInclusive};

use crate::traversal::{Checked, Direction, Down, Traversal, Unchecked, Up};
use crate::{DiscreteFinite, HashCode, HashItem};

/// The marker trait for valid endpoint types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouln't need to implement this yourself.
pub trait EndpointType: Ord {}
impl<T> EndpointType for T where T: Ord {}

/// The error returned when an [`Interval`] cannot be constructed from the
/// given endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
	/// A required endpoint was absent, either a [`None`] passed to
	/// [`Interval::from_options()`] or a [`Bound::Unbounded`] passed to
	/// [`Interval::from_bounds()`].
	NullArgument {
		/// The name of the absent argument, `"min"` or `"max"`.
		argument: &'static str,
	},
	/// The `max` endpoint compared less than the `min` endpoint.
	InvalidRange,
}

impl fmt::Display for IntervalError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IntervalError::NullArgument { argument } => {
				write!(f, "argument `{argument}` must not be absent")
			}
			IntervalError::InvalidRange => {
				f.write_str("interval max must not be less than min")
			}
		}
	}
}

impl core::error::Error for IntervalError {}

/// A mathematical interval between two endpoints, each of which may or may
/// not be included in the interval.
///
/// `T` is the generic type parameter for the [`Ord`] type the interval is
/// over.
///
/// An [`Interval`] is an immutable value: it is validated once on
/// construction (`max` may never be less than `min`) and never changes
/// afterwards. Equality is structural, so `(3, 4)` and `(5, 5)` are not
/// equal even though both contain no integers.
///
/// # Examples
/// ```
/// use ival::{Interval, IntervalError};
///
/// let interval = Interval::with_inclusion(false, 3, 7, true).unwrap();
///
/// assert_eq!(interval.to_string(), "(3, 7]");
/// assert!(interval.is_half_open());
/// assert!(interval.contains(&7));
/// assert!(!interval.contains(&3));
///
/// assert_eq!(interval.ascending(|x| x + 1).collect::<Vec<_>>(), [4, 5, 6, 7]);
///
/// assert_eq!(Interval::new(7, 3), Err(IntervalError::InvalidRange));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T> {
	min_included: bool,
	min: T,
	max: T,
	max_included: bool,
}

impl<T> Interval<T>
where
	T: EndpointType,
{
	/// Makes a new closed [`Interval`] containing both of its endpoints.
	///
	/// Returns [`IntervalError::InvalidRange`] if `max < min`.
	///
	/// # Examples
	/// ```
	/// use ival::{Interval, IntervalError};
	///
	/// let interval = Interval::new(3, 7).unwrap();
	/// assert!(interval.is_closed());
	///
	/// assert_eq!(Interval::new(3, 2), Err(IntervalError::InvalidRange));
	/// ```
	pub fn new(min: T, max: T) -> Result<Self, IntervalError> {
		Interval::with_inclusion(true, min, max, true)
	}

	/// Makes a new [`Interval`] with explicit endpoint inclusion.
	///
	/// Returns [`IntervalError::InvalidRange`] if `max < min`, whatever the
	/// inclusion flags.
	///
	/// # Examples
	/// ```
	/// use ival::Interval;
	///
	/// let interval = Interval::with_inclusion(true, 3, 3, false).unwrap();
	/// assert!(interval.is_half_open());
	/// assert!(interval.is_empty());
	/// ```
	pub fn with_inclusion(
		min_included: bool,
		min: T,
		max: T,
		max_included: bool,
	) -> Result<Self, IntervalError> {
		if max < min {
			return Err(IntervalError::InvalidRange);
		}

		Ok(Interval {
			min_included,
			min,
			max,
			max_included,
		})
	}

	/// Makes a new [`Interval`] from endpoints which may be absent.
	///
	/// Returns [`IntervalError::NullArgument`] naming the first absent
	/// endpoint (`min` is checked before `max`), otherwise behaves like
	/// [`Interval::with_inclusion()`].
	///
	/// # Examples
	/// ```
	/// use ival::{Interval, IntervalError};
	///
	/// assert_eq!(
	/// 	Interval::from_options(true, Some("abc"), None, true),
	/// 	Err(IntervalError::NullArgument { argument: "max" })
	/// );
	/// assert!(Interval::from_options(true, Some("abc"), Some("def"), true).is_ok());
	/// ```
	pub fn from_options(
		min_included: bool,
		min: Option<T>,
		max: Option<T>,
		max_included: bool,
	) -> Result<Self, IntervalError> {
		let min = min.ok_or(IntervalError::NullArgument { argument: "min" })?;
		let max = max.ok_or(IntervalError::NullArgument { argument: "max" })?;

		Interval::with_inclusion(min_included, min, max, max_included)
	}

	/// Makes a new [`Interval`] from a pair of [`Bound`]s.
	///
	/// Unbounded intervals are not supported, so a [`Bound::Unbounded`] is
	/// treated as an absent endpoint and returns
	/// [`IntervalError::NullArgument`].
	///
	/// # Examples
	/// ```
	/// use std::ops::Bound;
	///
	/// use ival::{Interval, IntervalError};
	///
	/// let interval =
	/// 	Interval::from_bounds(Bound::Excluded(3), Bound::Included(7)).unwrap();
	/// assert_eq!(interval.to_string(), "(3, 7]");
	///
	/// assert_eq!(
	/// 	Interval::from_bounds(Bound::Unbounded, Bound::Included(7)),
	/// 	Err(IntervalError::NullArgument { argument: "min" })
	/// );
	/// ```
	pub fn from_bounds(
		start: Bound<T>,
		end: Bound<T>,
	) -> Result<Self, IntervalError> {
		let (min_included, min) = split_bound(start);
		let (max_included, max) = split_bound(end);

		Interval::from_options(min_included, min, max, max_included)
	}

	/// Returns the minimum (left) endpoint.
	pub fn min(&self) -> &T {
		&self.min
	}

	/// Returns the maximum (right) endpoint.
	pub fn max(&self) -> &T {
		&self.max
	}

	/// Returns `true` if the `min` endpoint is part of the interval.
	pub fn min_included(&self) -> bool {
		self.min_included
	}

	/// Returns `true` if the `max` endpoint is part of the interval.
	pub fn max_included(&self) -> bool {
		self.max_included
	}

	/// Returns `true` if neither endpoint is included.
	pub fn is_open(&self) -> bool {
		!self.min_included && !self.max_included
	}

	/// Returns `true` if exactly one endpoint is included.
	pub fn is_half_open(&self) -> bool {
		self.min_included ^ self.max_included
	}

	/// Returns `true` if both endpoints are included.
	pub fn is_closed(&self) -> bool {
		self.min_included && self.max_included
	}

	/// Returns `true` if the interval contains no values at all.
	///
	/// # Examples
	/// ```
	/// use ival::interval::{ee, ie, ii};
	///
	/// assert!(ee(3, 3).unwrap().is_empty());
	/// assert!(ie(3, 3).unwrap().is_empty());
	/// assert!(!ii(3, 3).unwrap().is_empty());
	/// assert!(!ee(3, 4).unwrap().is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		self.min > self.max || (self.min == self.max && !self.is_closed())
	}

	/// Returns `true` if the interval contains exactly one value, that is it
	/// is closed and both endpoints are equal.
	pub fn is_degenerate(&self) -> bool {
		self.min == self.max && self.is_closed()
	}

	/// Returns `true` if `min < max`, that is the interval is neither empty
	/// nor degenerate and potentially has infinitely many values.
	///
	/// Note that this only looks at the endpoints, so for a discrete type
	/// `(3, 4)` is proper despite containing no values.
	pub fn is_proper(&self) -> bool {
		self.min < self.max
	}

	/// Returns `true` if the given point lies within the interval,
	/// respecting the inclusion of each endpoint.
	///
	/// # Examples
	/// ```
	/// use ival::interval::ie;
	///
	/// let interval = ie(3, 7).unwrap();
	///
	/// assert!(interval.contains(&3));
	/// assert!(interval.contains(&6));
	/// assert!(!interval.contains(&7));
	/// ```
	pub fn contains(&self, point: &T) -> bool {
		let above_min = match self.min_included {
			true => *point >= self.min,
			false => *point > self.min,
		};
		let below_max = match self.max_included {
			true => *point <= self.max,
			false => *point < self.max,
		};

		above_min && below_max
	}

	/// Returns the structural [`HashCode`] of the interval, folding
	/// `min_included`, `min`, `max` and `max_included` in that order.
	///
	/// This is also the value fed to the [`Hasher`] by the [`Hash`] impl, so
	/// equal intervals always hash equally.
	///
	/// # Examples
	/// ```
	/// use ival::{HashCode, Interval};
	///
	/// let interval = Interval::with_inclusion(false, 3, 7, false).unwrap();
	///
	/// assert_eq!(
	/// 	interval.hash_code(),
	/// 	HashCode::of(&false).and(&3).and(&7).and(&false)
	/// );
	/// ```
	pub fn hash_code(&self) -> HashCode
	where
		T: HashItem,
	{
		HashCode::of(&self.min_included)
			.and(&self.min)
			.and(&self.max)
			.and(&self.max_included)
	}

	/// Returns a lazy iterator over the interval in increasing order,
	/// starting at `min` (or `step(min)` if `min` is excluded) and applying
	/// `step` until the value passes `max`.
	///
	/// `step` must move values toward `max`, otherwise the iterator never
	/// ends.
	///
	/// # Examples
	/// ```
	/// use ival::interval::{ee, ii};
	///
	/// assert_eq!(ii(3, 7).unwrap().ascending(|x| x + 1).collect::<Vec<_>>(), [3, 4, 5, 6, 7]);
	/// assert_eq!(ee(3, 7).unwrap().ascending(|x| x + 1).collect::<Vec<_>>(), [4, 5, 6]);
	/// ```
	pub fn ascending<F>(&self, step: F) -> Traversal<'_, T, Unchecked<F>>
	where
		T: Clone,
		F: FnMut(&T) -> T,
	{
		Traversal::new(self, Unchecked(step), Direction::Ascending)
	}

	/// Returns a lazy iterator over the interval in decreasing order,
	/// starting at `max` (or `step(max)` if `max` is excluded) and applying
	/// `step` until the value passes `min`.
	///
	/// `step` must move values toward `min`, otherwise the iterator never
	/// ends.
	///
	/// # Examples
	/// ```
	/// use ival::interval::ii;
	///
	/// assert_eq!(ii(3, 7).unwrap().descending(|x| x - 1).collect::<Vec<_>>(), [7, 6, 5, 4, 3]);
	/// ```
	pub fn descending<F>(&self, step: F) -> Traversal<'_, T, Unchecked<F>>
	where
		T: Clone,
		F: FnMut(&T) -> T,
	{
		Traversal::new(self, Unchecked(step), Direction::Descending)
	}

	/// The same as [`Interval::ascending()`] except the traversal also ends
	/// when `step` returns [`None`].
	///
	/// # Examples
	/// ```
	/// use ival::interval::ii;
	///
	/// let interval = ii(253_u8, 255).unwrap();
	///
	/// assert_eq!(
	/// 	interval.ascending_checked(|x| x.checked_add(1)).collect::<Vec<_>>(),
	/// 	[253, 254, 255]
	/// );
	/// ```
	pub fn ascending_checked<F>(&self, step: F) -> Traversal<'_, T, Checked<F>>
	where
		T: Clone,
		F: FnMut(&T) -> Option<T>,
	{
		Traversal::new(self, Checked(step), Direction::Ascending)
	}

	/// The same as [`Interval::descending()`] except the traversal also ends
	/// when `step` returns [`None`].
	pub fn descending_checked<F>(
		&self,
		step: F,
	) -> Traversal<'_, T, Checked<F>>
	where
		T: Clone,
		F: FnMut(&T) -> Option<T>,
	{
		Traversal::new(self, Checked(step), Direction::Descending)
	}

	/// Returns every value of a [`DiscreteFinite`] interval in increasing
	/// order.
	///
	/// # Examples
	/// ```
	/// use ival::interval::ei;
	///
	/// assert_eq!(ei(125_i8, 127).unwrap().values().collect::<Vec<_>>(), [126, 127]);
	/// ```
	pub fn values(&self) -> Traversal<'_, T, Up>
	where
		T: DiscreteFinite + Clone,
	{
		Traversal::new(self, Up, Direction::Ascending)
	}

	/// Returns every value of a [`DiscreteFinite`] interval in decreasing
	/// order.
	pub fn values_rev(&self) -> Traversal<'_, T, Down>
	where
		T: DiscreteFinite + Clone,
	{
		Traversal::new(self, Down, Direction::Descending)
	}
}

fn split_bound<T>(bound: Bound<T>) -> (bool, Option<T>) {
	match bound {
		Bound::Included(point) => (true, Some(point)),
		Bound::Excluded(point) => (false, Some(point)),
		Bound::Unbounded => (false, None),
	}
}

impl<T> Hash for Interval<T>
where
	T: EndpointType + HashItem,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_i32(self.hash_code().value());
	}
}

impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = if self.min_included { '[' } else { '(' };
		let close = if self.max_included { ']' } else { ')' };

		write!(f, "{open}{}, {}{close}", self.min, self.max)
	}
}

impl<T> RangeBounds<T> for Interval<T> {
	fn start_bound(&self) -> Bound<&T> {
		match self.min_included {
			true => Bound::Included(&self.min),
			false => Bound::Excluded(&self.min),
		}
	}

	fn end_bound(&self) -> Bound<&T> {
		match self.max_included {
			true => Bound::Included(&self.max),
			false => Bound::Excluded(&self.max),
		}
	}
}

impl<T> From<Interval<T>> for (Bound<T>, Bound<T>) {
	fn from(interval: Interval<T>) -> Self {
		let start = match interval.min_included {
			true => Bound::Included(interval.min),
			false => Bound::Excluded(interval.min),
		};
		let end = match interval.max_included {
			true => Bound::Included(interval.max),
			false => Bound::Excluded(interval.max),
		};

		(start, end)
	}
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
	T: EndpointType,
{
	type Error = IntervalError;

	fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
		Interval::with_inclusion(true, range.start, range.end, false)
	}
}

impl<T> TryFrom<RangeInclusive<T>> for Interval<T>
where
	T: EndpointType,
{
	type Error = IntervalError;

	fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
		let (min, max) = range.into_inner();
		Interval::new(min, max)
	}
}

impl<'a, T> IntoIterator for &'a Interval<T>
where
	T: EndpointType + DiscreteFinite + Clone,
{
	type Item = T;
	type IntoIter = Traversal<'a, T, Up>;

	fn into_iter(self) -> Self::IntoIter {
		self.values()
	}
}

/// An included-included interval
pub fn ii<T>(min: T, max: T) -> Result<Interval<T>, IntervalError>
where
	T: EndpointType,
{
	Interval::with_inclusion(true, min, max, true)
}
/// An included-excluded interval
pub fn ie<T>(min: T, max: T) -> Result<Interval<T>, IntervalError>
where
	T: EndpointType,
{
	Interval::with_inclusion(true, min, max, false)
}
/// An excluded-included interval
pub fn ei<T>(min: T, max: T) -> Result<Interval<T>, IntervalError>
where
	T: EndpointType,
{
	Interval::with_inclusion(false, min, max, true)
}
/// An excluded-excluded interval
pub fn ee<T>(min: T, max: T) -> Result<Interval<T>, IntervalError>
where
	T: EndpointType,
{
	Interval::with_inclusion(false, min, max, false)
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use serde::de::{Error, SeqAccess, Visitor};
	use serde::ser::SerializeTuple;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{EndpointType, Interval};

	impl<T> Serialize for Interval<T>
	where
		T: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut tuple = serializer.serialize_tuple(4)?;
			tuple.serialize_element(&self.min_included)?;
			//endpoints are read back as options
			tuple.serialize_element(&Some(&self.min))?;
			tuple.serialize_element(&Some(&self.max))?;
			tuple.serialize_element(&self.max_included)?;
			tuple.end()
		}
	}

	impl<'de, T> Deserialize<'de> for Interval<T>
	where
		T: EndpointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_tuple(4, IntervalVisitor { t: PhantomData })
		}
	}

	struct IntervalVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for IntervalVisitor<T>
	where
		T: EndpointType + Deserialize<'de>,
	{
		type Value = Interval<T>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("an Interval as [min_included, min, max, max_included]")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let min_included = access
				.next_element::<bool>()?
				.ok_or_else(|| A::Error::invalid_length(0, &self))?;
			let min = access
				.next_element::<Option<T>>()?
				.ok_or_else(|| A::Error::invalid_length(1, &self))?;
			let max = access
				.next_element::<Option<T>>()?
				.ok_or_else(|| A::Error::invalid_length(2, &self))?;
			let max_included = access
				.next_element::<bool>()?
				.ok_or_else(|| A::Error::invalid_length(3, &self))?;

			Interval::from_options(min_included, min, max, max_included)
				.map_err(A::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::collections::BTreeMap;
	use alloc::string::ToString;
	use alloc::vec::Vec;

	use itertools::Itertools;
	use pretty_assertions::{assert_eq, assert_ne};

	use super::*;

	const FLAGS: [bool; 2] = [false, true];

	fn all_inclusions(min: i32, max: i32) -> Vec<Interval<i32>> {
		FLAGS
			.into_iter()
			.cartesian_product(FLAGS)
			.map(|(min_included, max_included)| {
				Interval::with_inclusion(min_included, min, max, max_included)
					.unwrap()
			})
			.collect()
	}

	#[test]
	fn new_tests() {
		for (min, max) in [(3, 3), (3, 4), (3, 7)] {
			let interval = Interval::new(min, max).unwrap();
			assert!(interval.min_included());
			assert_eq!(*interval.min(), min);
			assert_eq!(*interval.max(), max);
			assert!(interval.max_included());
		}

		assert_eq!(Interval::new(3, 2), Err(IntervalError::InvalidRange));
	}

	#[test]
	fn with_inclusion_tests() {
		for (min_included, max_included) in
			FLAGS.into_iter().cartesian_product(FLAGS)
		{
			for (min, max) in [(3, 3), (3, 7)] {
				let interval = Interval::with_inclusion(
					min_included,
					min,
					max,
					max_included,
				)
				.unwrap();
				assert_eq!(interval.min_included(), min_included);
				assert_eq!(*interval.min(), min);
				assert_eq!(*interval.max(), max);
				assert_eq!(interval.max_included(), max_included);
			}

			assert_eq!(
				Interval::with_inclusion(min_included, 3, 2, max_included),
				Err(IntervalError::InvalidRange)
			);
		}
	}

	#[test]
	fn null_argument_tests() {
		for (has_min, has_max) in [(false, false), (false, true), (true, false)] {
			let min = has_min.then_some("ABC");
			let max = has_max.then_some("DEF");

			let expected = match has_min {
				false => "min",
				true => "max",
			};

			assert_eq!(
				Interval::from_options(true, min, max, true),
				Err(IntervalError::NullArgument { argument: expected })
			);
			assert_eq!(
				Interval::from_options(false, min, max, false),
				Err(IntervalError::NullArgument { argument: expected })
			);
		}

		assert_eq!(
			Interval::from_bounds(Bound::Included(1), Bound::Unbounded),
			Err(IntervalError::NullArgument { argument: "max" })
		);
		assert_eq!(
			Interval::from_options(true, Some(5), Some(1), true),
			Err(IntervalError::InvalidRange)
		);
	}

	#[test]
	fn error_display_tests() {
		assert_eq!(
			IntervalError::NullArgument { argument: "min" }.to_string(),
			"argument `min` must not be absent"
		);
		assert_eq!(
			IntervalError::InvalidRange.to_string(),
			"interval max must not be less than min"
		);
	}

	#[test]
	fn equality_tests() {
		let left = ee(3, 7).unwrap();

		assert_eq!(left, ee(3, 7).unwrap());
		assert_ne!(left, ei(3, 7).unwrap());
		assert_ne!(left, ee(3, 6).unwrap());
		assert_ne!(left, ee(4, 7).unwrap());
		assert_ne!(left, ie(3, 7).unwrap());

		//no normalisation of equivalent empty intervals
		assert_ne!(ee(3, 3).unwrap(), ie(4, 4).unwrap());
	}

	#[test]
	fn hash_code_tests() {
		let subjects = [
			ee(3, 7).unwrap(),
			ei(3, 7).unwrap(),
			ee(3, 6).unwrap(),
			ee(4, 7).unwrap(),
			ie(3, 7).unwrap(),
		];

		for subject in subjects.iter() {
			assert_ne!(subject.hash_code().value(), 0);
		}
		for (a, b) in subjects.iter().tuple_combinations() {
			assert_ne!(a.hash_code(), b.hash_code());
		}

		assert_eq!(ee(3, 7).unwrap().hash_code().value(), 3300);
		assert_eq!(ee(3, 7).unwrap().hash_code(), ee(3, 7).unwrap().hash_code());
		assert_eq!(
			ee(3, 7).unwrap().item_hash(),
			ee(3, 7).unwrap().hash_code().value()
		);
	}

	#[test]
	fn display_tests() {
		assert_eq!(ee(3, 7).unwrap().to_string(), "(3, 7)");
		assert_eq!(ei(3, 7).unwrap().to_string(), "(3, 7]");
		assert_eq!(ie(3, 7).unwrap().to_string(), "[3, 7)");
		assert_eq!(ii(3, 7).unwrap().to_string(), "[3, 7]");
		assert_eq!(ii("a", "b").unwrap().to_string(), "[a, b]");

		let interval = ie(3, 7).unwrap();
		assert_eq!(interval.to_string(), interval.to_string());
	}

	#[test]
	fn classification_tests() {
		assert!(ee(3, 7).unwrap().is_open());
		assert!(ie(3, 7).unwrap().is_half_open());
		assert!(ei(3, 7).unwrap().is_half_open());
		assert!(ii(3, 7).unwrap().is_closed());

		for interval in all_inclusions(3, 3) {
			assert!(!interval.is_proper());
			assert_eq!(interval.is_degenerate(), interval.is_closed());
			assert_eq!(interval.is_empty(), !interval.is_closed());
		}
		for interval in all_inclusions(3, 7) {
			assert!(interval.is_proper());
			assert!(!interval.is_empty());
			assert!(!interval.is_degenerate());
		}
		for interval in all_inclusions(3, 7).into_iter().chain(all_inclusions(3, 3))
		{
			let kinds = [interval.is_open(), interval.is_half_open(), interval.is_closed()];
			assert_eq!(kinds.into_iter().filter(|x| *x).count(), 1);
			assert!(!(interval.is_empty() && interval.is_degenerate()));
		}
	}

	#[test]
	fn contains_tests() {
		for interval in all_inclusions(3, 7) {
			assert_eq!(interval.contains(&3), interval.min_included());
			assert_eq!(interval.contains(&7), interval.max_included());
			assert!(interval.contains(&5));
			assert!(!interval.contains(&2));
			assert!(!interval.contains(&8));
		}

		assert!(ii(3, 3).unwrap().contains(&3));
		assert!(!ie(3, 3).unwrap().contains(&3));
	}

	#[test]
	fn conversion_tests() {
		assert_eq!(Interval::try_from(3..7), ie(3, 7));
		assert_eq!(Interval::try_from(3..=7), ii(3, 7));
		#[allow(clippy::reversed_empty_ranges)]
		let reversed = 7..3;
		assert_eq!(Interval::try_from(reversed), Err(IntervalError::InvalidRange));

		assert_eq!(
			<(Bound<i32>, Bound<i32>)>::from(ei(3, 7).unwrap()),
			(Bound::Excluded(3), Bound::Included(7))
		);
		assert_eq!(
			Interval::from_bounds(Bound::Excluded(3), Bound::Included(7)),
			ei(3, 7)
		);
	}

	#[test]
	fn range_bounds_tests() {
		let map = BTreeMap::from([(1, 'a'), (3, 'b'), (5, 'c'), (7, 'd'), (9, 'e')]);

		let values = |interval: Interval<i32>| {
			map.range(interval).map(|(_, v)| *v).collect::<Vec<_>>()
		};

		assert_eq!(values(ii(3, 7).unwrap()), ['b', 'c', 'd']);
		assert_eq!(values(ee(3, 7).unwrap()), ['c']);
		assert_eq!(values(ie(3, 7).unwrap()), ['b', 'c']);
		assert_eq!(values(ei(3, 7).unwrap()), ['c', 'd']);
	}
}
