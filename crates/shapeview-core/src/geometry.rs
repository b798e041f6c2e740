//! Numeric helpers shared by the measurement and rotation code.

use kurbo::{Point, Vec2};
use std::f64::consts::{PI, TAU};

/// Convert radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Round to 3 decimal places for display.
///
/// Every measurement passes through this before it is formatted, so the
/// rendered text never carries floating-point noise past the third decimal.
pub fn round_to_3(num: f64) -> f64 {
    (num * 1000.0).round() / 1000.0
}

/// Normalize an angle in radians into `[0, 2π)`.
pub fn normalize_angle(radians: f64) -> f64 {
    let angle = radians.rem_euclid(TAU);
    // rem_euclid can land exactly on TAU for tiny negative inputs, and
    // keeps the sign of -0.0
    if angle >= TAU { 0.0 } else { angle + 0.0 }
}

/// Undirected angle between two vectors, in `[0, π]`.
///
/// Returns 0 when either vector is degenerate.
pub fn included_angle(a: Vec2, b: Vec2) -> f64 {
    if a.hypot2() < f64::EPSILON || b.hypot2() < f64::EPSILON {
        return 0.0;
    }
    a.cross(b).abs().atan2(a.dot(b))
}

/// Directed sweep from `a` to `b`, in `[0, 2π)`.
///
/// Returns 0 when either vector is degenerate.
pub fn sweep_angle(a: Vec2, b: Vec2) -> f64 {
    if a.hypot2() < f64::EPSILON || b.hypot2() < f64::EPSILON {
        return 0.0;
    }
    normalize_angle(b.atan2() - a.atan2())
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    (point - (a + seg * t)).hypot()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
///
/// A single point is treated as a degenerate segment; an empty slice is
/// infinitely far away.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => point.distance(*only),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}
