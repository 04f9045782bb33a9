//! A module containing [`HashCode`], the [`HashItem`] trait and the [`combine`]
//! mixing function.
//!
//! A [`HashCode`] is built fluently from the fields of a composite value in a
//! fixed order, and every fold step is order-sensitive:
//!
//! ```
//! use ival::HashCode;
//!
//! let ab = HashCode::of(&'a').and(&'b');
//! let ba = HashCode::of(&'b').and(&'a');
//!
//! assert_ne!(ab, ba);
//! assert_eq!(ab.value(), i32::from(ab));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::{EndpointType, Interval};

/// Mixes the item hash `h2` into the accumulator `h1`.
///
/// Computes `((h1 << 5) + h1) ^ h2` with wrapping 32-bit arithmetic, so the
/// result is never an overflow fault.
///
/// # Examples
/// ```
/// use ival::hash_code::combine;
///
/// assert_eq!(combine(0, 7), 7);
/// assert_eq!(combine(3, 7), 100);
/// assert_ne!(combine(combine(0, 1), 2), combine(combine(0, 2), 1));
/// ```
#[inline]
pub const fn combine(h1: i32, h2: i32) -> i32 {
	(h1 << 5).wrapping_add(h1) ^ h2
}

/// An accumulated structural hash.
///
/// The wrapped value is only reachable through [`HashCode::value()`] (or the
/// equivalent `From<HashCode> for i32`) so finalizing is always explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HashCode(i32);

impl HashCode {
	/// The empty accumulator, also the hash of an absent item.
	pub const ZERO: HashCode = HashCode(0);

	/// Makes a [`HashCode`] from the intrinsic hash of a single item.
	///
	/// # Examples
	/// ```
	/// use ival::HashCode;
	///
	/// assert_eq!(HashCode::of(&3_i32).value(), 3);
	/// assert_eq!(HashCode::of(&None::<i32>).value(), 0);
	/// ```
	pub fn of<H>(item: &H) -> HashCode
	where
		H: HashItem + ?Sized,
	{
		HashCode(item.item_hash())
	}

	/// Folds every item of `items`, in iteration order, into an empty
	/// accumulator.
	///
	/// # Examples
	/// ```
	/// use ival::HashCode;
	///
	/// let one = HashCode::of_each(['a']);
	/// let two = HashCode::of_each(['a', 'b']);
	///
	/// assert_eq!(one, HashCode::of(&'a'));
	/// assert_ne!(one, two);
	/// ```
	pub fn of_each<I>(items: I) -> HashCode
	where
		I: IntoIterator,
		I::Item: HashItem,
	{
		HashCode::ZERO.and_each(items)
	}

	/// Folds the hash of `item` into this accumulator.
	#[must_use]
	pub fn and<H>(self, item: &H) -> HashCode
	where
		H: HashItem + ?Sized,
	{
		HashCode(combine(self.0, item.item_hash()))
	}

	/// Folds every item of `items`, in iteration order, into this
	/// accumulator.
	///
	/// An empty iterator (which is also how an absent sequence is passed,
	/// e.g. `Option::<Vec<_>>::None.into_iter().flatten()`) leaves the
	/// accumulator unchanged.
	///
	/// # Examples
	/// ```
	/// use ival::HashCode;
	///
	/// let seed = HashCode::of(&'a');
	///
	/// assert_eq!(seed.and_each(Vec::<char>::new()), seed);
	/// assert_eq!(seed.and_each(['b', 'c']), seed.and(&'b').and(&'c'));
	/// ```
	#[must_use]
	pub fn and_each<I>(self, items: I) -> HashCode
	where
		I: IntoIterator,
		I::Item: HashItem,
	{
		items.into_iter().fold(self, |acc, item| acc.and(&item))
	}

	/// Returns the finalized integer hash.
	pub const fn value(self) -> i32 {
		self.0
	}
}

impl From<HashCode> for i32 {
	fn from(hash_code: HashCode) -> Self {
		hash_code.value()
	}
}

/// The intrinsic hash of a single item, as consumed by [`HashCode`].
///
/// Implementations must be deterministic: equal items give equal hashes on
/// every run and every platform.
pub trait HashItem {
	/// Returns the item's own hash value.
	fn item_hash(&self) -> i32;
}

macro_rules! widening {
	($($t:ty),* $(,)?) => {
		$(
			impl HashItem for $t {
				fn item_hash(&self) -> i32 {
					i32::from(*self)
				}
			}
		)*
	};
}

macro_rules! folding {
	($($t:ty => $bits:ty),* $(,)?) => {
		$(
			impl HashItem for $t {
				fn item_hash(&self) -> i32 {
					let mut bits = *self as $bits;
					let mut hash = 0_u32;
					while bits != 0 {
						hash ^= bits as u32;
						bits >>= 32;
					}
					hash as i32
				}
			}
		)*
	};
}

widening!(i8, i16, i32, u8, u16);
folding!(
	i64 => u64,
	u64 => u64,
	isize => u64,
	usize => u64,
	i128 => u128,
	u128 => u128,
);

impl HashItem for u32 {
	fn item_hash(&self) -> i32 {
		*self as i32
	}
}

impl HashItem for bool {
	fn item_hash(&self) -> i32 {
		i32::from(*self)
	}
}

impl HashItem for char {
	fn item_hash(&self) -> i32 {
		let c = u32::from(*self);
		(c | (c << 16)) as i32
	}
}

impl HashItem for () {
	fn item_hash(&self) -> i32 {
		0
	}
}

impl HashItem for str {
	fn item_hash(&self) -> i32 {
		HashCode::of_each(self.chars()).value()
	}
}

impl HashItem for String {
	fn item_hash(&self) -> i32 {
		self.as_str().item_hash()
	}
}

impl<T> HashItem for [T]
where
	T: HashItem,
{
	fn item_hash(&self) -> i32 {
		HashCode::of_each(self).value()
	}
}

impl<T> HashItem for Vec<T>
where
	T: HashItem,
{
	fn item_hash(&self) -> i32 {
		self.as_slice().item_hash()
	}
}

impl<T> HashItem for Option<T>
where
	T: HashItem,
{
	fn item_hash(&self) -> i32 {
		match self {
			Some(item) => item.item_hash(),
			None => 0,
		}
	}
}

impl<T> HashItem for &T
where
	T: HashItem + ?Sized,
{
	fn item_hash(&self) -> i32 {
		(**self).item_hash()
	}
}

impl<T> HashItem for Interval<T>
where
	T: EndpointType + HashItem,
{
	fn item_hash(&self) -> i32 {
		self.hash_code().value()
	}
}
