//! A module containing the [`DiscreteFinite`] trait and trait impls for the
//! primitive integer datatypes and [`char`].

/// A trait for endpoint types which are both discrete and finite, so every
/// value has a well-defined successor and predecessor unless it sits at one
/// of the type's limits.
///
/// This is what lets [`Interval::values()`](crate::Interval::values) walk an
/// interval one value at a time without the caller supplying a step, and
/// without overflowing at `MAX` or `MIN`.
pub trait DiscreteFinite {
	/// The minimum value of the type.
	const MIN: Self;
	/// The maximum value of the type.
	const MAX: Self;

	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>
	where
		Self: Sized;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>
	where
		Self: Sized;
}

macro_rules! integers {
	($($t:ident),* $(,)?) => {
		$(
			impl DiscreteFinite for $t {
				const MIN: Self = $t::MIN;
				const MAX: Self = $t::MAX;

				fn up(self) -> Option<Self> {
					self.checked_add(1)
				}
				fn down(self) -> Option<Self> {
					self.checked_sub(1)
				}
			}
		)*
	};
}

integers!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

//the surrogate block is skipped in both directions
impl DiscreteFinite for char {
	const MIN: Self = '\0';
	const MAX: Self = char::MAX;

	fn up(self) -> Option<Self> {
		match self {
			'\u{D7FF}' => Some('\u{E000}'),
			_ => char::from_u32(u32::from(self).checked_add(1)?),
		}
	}
	fn down(self) -> Option<Self> {
		match self {
			'\u{E000}' => Some('\u{D7FF}'),
			_ => char::from_u32(u32::from(self).checked_sub(1)?),
		}
	}
}
