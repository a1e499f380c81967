//! 2D angular utilities around a fixed center.
//!
//! Angles follow `atan2` conventions: measured counter-clockwise from the
//! positive x-axis, in `(-π, π]`.

use std::cmp::Ordering;

use super::{to_real, Point, Point2f};

/// Returns the polar angle of `p` as seen from `center`.
#[must_use]
pub fn polar_angle(p: &Point, center: &Point2f) -> f64 {
    let d = to_real(p) - *center;
    d.y.atan2(d.x)
}

/// Compares two angles, descending when `reverse` is set.
///
/// Uses a total order so NaN never aborts a sort; equal angles compare
/// `Equal` in both directions, so a stable sort keeps their input order.
#[must_use]
pub fn compare_angles(a: f64, b: f64, reverse: bool) -> Ordering {
    if reverse {
        b.total_cmp(&a)
    } else {
        a.total_cmp(&b)
    }
}
