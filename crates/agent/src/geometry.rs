//! Angle and coordinate helpers.
//!
//! All bearings are measured clockwise from north (+y), so a bearing `b`
//! points along `(sin b, cos b)`.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Shortest signed rotation equivalent to `angle`, in (-180, 180].
pub fn normalize_relative_angle_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// Radian analogue of [`normalize_relative_angle_degrees`], in (-PI, PI].
pub fn normalize_relative_angle_radians(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Unit vector for a compass bearing in degrees.
pub fn bearing_vector(bearing: f64) -> DVec2 {
    let (sin, cos) = bearing.to_radians().sin_cos();
    DVec2::new(sin, cos)
}

/// Point `distance` away from `origin` along an absolute bearing.
pub fn to_absolute_coordinate(origin: DVec2, bearing: f64, distance: f64) -> DVec2 {
    origin + bearing_vector(bearing) * distance
}

/// Absolute compass bearing from `origin` to `target`, in degrees.
pub fn absolute_bearing_to(origin: DVec2, target: DVec2) -> f64 {
    let d = target - origin;
    f64::atan2(d.x, d.y).to_degrees()
}

/// Clamp a point so it stays `margin` away from every wall of an arena
/// spanning `[0, arena.x] x [0, arena.y]`.
pub fn clamp_to_arena(point: DVec2, arena: DVec2, margin: f64) -> DVec2 {
    let lo = DVec2::splat(margin);
    // max() keeps arenas narrower than two margins from inverting the bounds.
    let hi = (arena - lo).max(lo);
    point.clamp(lo, hi)
}

/// Whether `point` lies strictly inside the arena shrunk by `margin`.
pub fn inside_margin(point: DVec2, arena: DVec2, margin: f64) -> bool {
    point.x > margin
        && point.x < arena.x - margin
        && point.y > margin
        && point.y < arena.y - margin
}
