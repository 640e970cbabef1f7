// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::float_cmp)]
//! JSON encoding of vectors and tolerances (requires the `serde` feature).

use echo_vec2::{Tolerance, Vector};
use proptest::prelude::*;

mod common;
use common::vectors;

#[test]
fn serializes_as_keyed_object() {
    let json = serde_json::to_string(&Vector::new(3.0, -4.5)).expect("serialize");
    assert_eq!(json, r#"{"x":3.0,"y":-4.5}"#);
}

#[test]
fn deserializes_keyed_and_pair_forms() {
    let keyed: Vector = serde_json::from_str(r#"{"y": 2, "x": 1}"#).expect("keyed form");
    assert_eq!(keyed, Vector::new(1.0, 2.0));
    let pair: Vector = serde_json::from_str("[1.5, -2]").expect("pair form");
    assert_eq!(pair, Vector::new(1.5, -2.0));
}

#[test]
fn rejects_malformed_input() {
    for bad in [
        r#"{"x": 1, "y": 2, "z": 3}"#,
        r#"{"x": 1}"#,
        "[1, 2, 3]",
        "[1]",
        r#"["1", 2]"#,
        "3.0",
    ] {
        assert!(serde_json::from_str::<Vector>(bad).is_err(), "{bad} should not parse");
    }
}

#[test]
fn tolerance_fields_default_individually() {
    let t: Tolerance = serde_json::from_str(r#"{"abs_tol": 0.5}"#).expect("partial tolerance");
    assert_eq!(t, Tolerance::DEFAULT.with_abs_tol(0.5));
    let t: Tolerance = serde_json::from_str("{}").expect("empty tolerance");
    assert_eq!(t, Tolerance::DEFAULT);
    let json = serde_json::to_string(&Tolerance::DEFAULT).expect("serialize");
    assert_eq!(json, r#"{"abs_tol":1e-9,"rel_tol":1e-9}"#);
}

proptest! {
    #[test]
    fn json_round_trip_is_lossless(v in vectors()) {
        let json = serde_json::to_string(&v).expect("serialize");
        let back: Vector = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back.x().to_bits(), v.x().to_bits());
        prop_assert_eq!(back.y().to_bits(), v.y().to_bits());
    }
}
