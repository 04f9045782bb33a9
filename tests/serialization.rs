//! Serialization tests for the `serde` feature.

#![cfg(feature = "serde")]

use ival::interval::{ee, ii};
use ival::Interval;
use pretty_assertions::assert_eq;

#[test]
fn serialize_as_tuple() {
	assert_eq!(
		serde_json::to_string(&ee(3, 7).unwrap()).unwrap(),
		"[false,3,7,false]"
	);
	assert_eq!(
		serde_json::to_string(&ii("a", "b").unwrap()).unwrap(),
		r#"[true,"a","b",true]"#
	);
}

#[test]
fn deserialize_valid() {
	let interval: Interval<i32> =
		serde_json::from_str("[true,3,7,false]").unwrap();

	assert_eq!(interval.to_string(), "[3, 7)");

	let round_trip: Interval<i32> =
		serde_json::from_str(&serde_json::to_string(&interval).unwrap())
			.unwrap();
	assert_eq!(round_trip, interval);
}

#[test]
fn deserialize_rejects_null_endpoints() {
	let error = serde_json::from_str::<Interval<i32>>("[true,null,7,true]")
		.unwrap_err()
		.to_string();
	assert!(error.contains("argument `min` must not be absent"), "{error}");

	let error = serde_json::from_str::<Interval<i32>>("[true,3,null,true]")
		.unwrap_err()
		.to_string();
	assert!(error.contains("argument `max` must not be absent"), "{error}");
}

#[test]
fn deserialize_rejects_reversed() {
	let error = serde_json::from_str::<Interval<i32>>("[true,7,3,true]")
		.unwrap_err()
		.to_string();
	assert!(error.contains("interval max must not be less than min"), "{error}");
}

#[test]
fn deserialize_rejects_short_tuples() {
	assert!(serde_json::from_str::<Interval<i32>>("[true,3,7]").is_err());
}

#[test]
fn binary_round_trip() {
	for interval in [ee(3_i32, 7).unwrap(), ii(-5, -5).unwrap()] {
		let bytes = bincode::serialize(&interval).unwrap();
		let decoded: Interval<i32> = bincode::deserialize(&bytes).unwrap();

		assert_eq!(decoded, interval);
	}

	let strings = ii(String::from("apple"), String::from("banana")).unwrap();
	let bytes = bincode::serialize(&strings).unwrap();
	assert_eq!(bincode::deserialize::<Interval<String>>(&bytes).unwrap(), strings);
}

#[test]
fn binary_rejects_absent_endpoint() {
	let bytes =
		bincode::serialize(&(true, None::<i32>, Some(7_i32), true)).unwrap();

	let error = bincode::deserialize::<Interval<i32>>(&bytes)
		.unwrap_err()
		.to_string();
	assert!(error.contains("argument `min` must not be absent"), "{error}");
}
