//! This crate provides [`Interval`], a generic mathematical interval value
//! type whose endpoints may each be included or excluded, along with lazy
//! step-driven traversal of the values it contains and [`HashCode`], the
//! deterministic order-sensitive hash combiner used to hash it.
//!
//! ## Example using an open interval
//!
//! ```rust
//! use ival::interval::ee;
//! use ival::Interval;
//!
//! let interval = ee(3, 7).unwrap();
//!
//! assert_eq!(interval.to_string(), "(3, 7)");
//! assert_eq!(interval.is_open(), true);
//! assert_eq!(interval.contains(&3), false);
//! assert_eq!(interval.ascending(|x| x + 1).collect::<Vec<_>>(), [4, 5, 6]);
//! assert_eq!(interval.descending(|x| x - 1).collect::<Vec<_>>(), [6, 5, 4]);
//! ```
//!
//! ## Example using intervals as keys
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use ival::{Interval, IntervalError};
//!
//! let mut bookings = HashMap::new();
//!
//! bookings.insert(Interval::with_inclusion(true, 9, 12, false)?, "Ferris");
//! bookings.insert(Interval::with_inclusion(true, 12, 17, false)?, "Corro");
//!
//! assert_eq!(bookings[&Interval::with_inclusion(true, 9, 12, false)?], "Ferris");
//! assert_eq!(bookings.get(&Interval::new(9, 12)?), None);
//! # Ok::<(), IntervalError>(())
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Endpoints
//!
//! Every [`Interval`] has exactly two endpoints, `min` and `max`, and a flag
//! for each saying whether it is part of the interval. Both endpoints are
//! always present: this crate does not support unbounded intervals, so a
//! missing endpoint is an [`IntervalError::NullArgument`].
//!
//! The only ordering requirement on the endpoint type is [`Ord`], expressed
//! through the [`EndpointType`] marker trait.
//!
//! ### Invalid Intervals
//!
//! An interval whose `max` is less than its `min`, such as `[5, 2]`, can not
//! be constructed and gives an [`IntervalError::InvalidRange`] instead.
//! Every constructor returns a [`Result`] and nothing is fixed up silently.
//!
//! ### Classification
//!
//! Here are a few examples of intervals over integers and how they are
//! classified:
//!
//! | interval | open/half-open/closed | empty | degenerate | proper |
//! | -------- | --------------------- | ----- | ---------- | ------ |
//! | `(3, 3)` | open                  | YES   | NO         | NO     |
//! | `[3, 3)` | half-open             | YES   | NO         | NO     |
//! | `[3, 3]` | closed                | NO    | YES        | NO     |
//! | `(3, 4)` | open                  | NO    | NO         | YES    |
//! | `[3, 7]` | closed                | NO    | NO         | YES    |
//!
//! Note that `(3, 4)` is proper despite containing no integers: the
//! classification only looks at the endpoints and their flags, it knows
//! nothing about discrete-ness.
//!
//! ### Equality and Hashing
//!
//! Equality is structural, two intervals are equal only if both endpoints
//! and both flags are equal. `(3, 3)` and `(4, 4)` are both empty but they
//! are not equal.
//!
//! Hashing goes through [`HashCode`], which folds `min_included`, `min`,
//! `max` and `max_included` in that order using the classic `h * 33 ^ x`
//! tuple mixer. The resulting hash is deterministic across runs and
//! platforms, unlike std's randomly seeded `DefaultHasher`, provided the
//! endpoint type implements [`HashItem`].
//!
//! ### Traversal
//!
//! This crate never does arithmetic on endpoints, so walking an interval
//! needs a caller-supplied step function, see [`Interval::ascending()`] and
//! [`Interval::descending()`]. Traversals are lazy and restartable. For
//! [`DiscreteFinite`] types the unit step is built in, see
//! [`Interval::values()`].
//!
//! A step that does not move toward the far endpoint gives a traversal that
//! never ends.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Interval`] as
//!   the tuple `[min_included, min, max, max_included]`. A `null` endpoint or
//!   a reversed interval is rejected on deserialization.

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

pub mod discrete_finite;
pub mod hash_code;
pub mod interval;
pub mod traversal;

pub use crate::discrete_finite::DiscreteFinite;
pub use crate::hash_code::{HashCode, HashItem};
pub use crate::interval::{EndpointType, Interval, IntervalError};
pub use crate::traversal::{Direction, Step, Traversal};
