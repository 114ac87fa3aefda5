//! Debug-only sanity checks for values flowing through the sky model.
//!
//! Every check compiles down to nothing in release builds.

use crate::core::types::{Colour, Number, Point2, Vector3};
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

/// Ray directions must be finite and normalised, degenerate vectors are a caller bug
#[inline(always)]
#[track_caller]
pub fn direction(d: impl Borrow<Vector3>) {
    debug_assert_only!();
    let d = d.borrow();
    vector3(d);
    assert!(
        d.is_normalized(),
        "should be normalised; vec: {d:?}, len: {:?}",
        d.length()
    );
}

#[inline(always)]
#[track_caller]
pub fn colour(c: impl Borrow<Colour>) {
    debug_assert_only!();
    let c = c.borrow();
    assert!(
        c.0.iter().all(|&chan| chan >= 0.0),
        "channels should be >= 0; col: {c:?}"
    )
}

#[inline(always)]
#[track_caller]
pub fn uv(uv: impl Borrow<Point2>) {
    debug_assert_only!();
    let uv = uv.borrow();
    assert!(!uv.is_nan(), "should not be nan; uvs: {uv:?}");
    assert!(
        (0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y),
        "uv coordinates should be `0..=1`; uv: {uv:?}"
    )
}
