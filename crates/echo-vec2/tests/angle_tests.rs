// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::float_cmp)]
use echo_vec2::Vector;
use proptest::prelude::*;

mod common;
use common::{angle_isclose, floats, vectors};

const EPSILON: f64 = 6.5e-5;

#[test]
fn angle_table() {
    let cases = [
        ((1.0, 1.0), (0.0, -1.0), -135.0),
        ((1.0, 1.0), (-1.0, 0.0), 135.0),
        ((0.0, 1.0), (0.0, -1.0), 180.0),
        ((-1.0, -1.0), (1.0, 0.0), 135.0),
        ((-1.0, -1.0), (-1.0, 0.0), -45.0),
        ((1.0, 0.0), (0.0, 1.0), 90.0),
        ((1.0, 0.0), (1.0, 0.0), 0.0),
    ];
    for (left, right, expected) in cases {
        let (l, r) = (Vector::from(left), Vector::from(right));
        assert!(angle_isclose(l.angle(r), expected, EPSILON), "{l}.angle({r})");
        assert!(angle_isclose(r.angle(l), -expected, EPSILON), "{r}.angle({l})");
    }
}

#[test]
fn half_turn_is_positive_both_ways() {
    let up = Vector::UNIT_Y;
    let down = Vector::new(0.0, -1.0);
    assert_eq!(up.angle(down), 180.0);
    assert_eq!(down.angle(up), 180.0);
}

#[test]
fn accepts_pairs() {
    assert_eq!(Vector::UNIT_X.angle([0.0, -1.0]), -90.0);
    assert_eq!(Vector::UNIT_X.angle((-1.0, 0.0)), 180.0);
}

proptest! {
    #[test]
    fn angle_is_in_range_and_antisymmetric(left in vectors(), right in vectors()) {
        let lr = left.angle(right);
        let rl = right.angle(left);
        prop_assert!(-180.0 < lr && lr <= 180.0, "{lr}");
        prop_assert!(-180.0 < rl && rl <= 180.0, "{rl}");
        prop_assert!(angle_isclose(lr, -rl, EPSILON), "{lr} vs {rl}");
    }

    #[test]
    fn angle_is_additive(left in vectors(), middle in vectors(), right in vectors()) {
        let lm = left.angle(middle);
        let mr = middle.angle(right);
        let lr = left.angle(right);
        prop_assert!(angle_isclose(lm + mr, lr, EPSILON), "{lm} + {mr} vs {lr}");
    }

    #[test]
    fn scaled_vectors_are_aligned(x in vectors(), scalar in floats(1e75)) {
        let y = scalar * x;
        prop_assume!(x.length() > 1e-150 && y.length() > 1e-150);
        let expected = if scalar > 0.0 { 0.0 } else { 180.0 };
        prop_assert!(angle_isclose(x.angle(y), expected, EPSILON));
    }
}
