//! Spiral layouts, polar conversion, and CSS transform strings
//!
//! Layout helpers for positioning marks and annotations. The transform
//! builders are pure string interpolation with no bounds checking; the
//! spiral generator reproduces a specific accumulating recurrence, so
//! point `i` depends on every angle increment before it.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Builds a 2-D translation style, e.g. `transform: translate(4px, 2.5px)`.
///
/// With `unitless` set the coordinates carry no `px` suffix, the form SVG
/// transform attributes expect.
pub fn translate(x: f64, y: f64, unitless: bool) -> String {
    if unitless {
        format!("transform: translate({x}, {y})")
    } else {
        format!("transform: translate({x}px, {y}px)")
    }
}

/// Like [`translate`], but offset by -50% of the element's own size on both
/// axes so the element is centered on `(x, y)`.
pub fn translate_centered(x: f64, y: f64) -> String {
    format!("transform: translate(calc(-50% + {x}px), calc(-50% + {y}px))")
}

/// Like [`translate`], but offset by -50%/-100% of the element's own size
/// so it hangs centered above the anchor point, tooltip-style.
pub fn translate_tooltip(x: f64, y: f64) -> String {
    format!("transform: translate(calc(-50% + {x}px), calc(-100% + {y}px))")
}

/// Shape parameters for [`spiral_positions`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiralConfig {
    /// Radius of a single mark, in pixels.
    pub point_radius: f64,
    /// Angular spacing factor between consecutive marks.
    pub angle_diff: f64,
    /// Radial expansion factor per mark.
    pub distance: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            point_radius: 5.0,
            angle_diff: 2.0,
            distance: 1.5,
        }
    }
}

/// A point on the spiral: Cartesian position plus the accumulated angle
/// (radians, wrapped into `[0, 2π)`) it was placed at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpiralPoint {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

/// Places `n` points on an expanding spiral.
///
/// For 0-based index `i`, the radius is `sqrt(i + 0.3) * point_radius *
/// distance` and the angle advances by `asin(1 / radius) * point_radius *
/// angle_diff`, wrapped into `[0, 2π)`. The accumulation is sequential:
/// each point's angle folds in every previous increment.
///
/// Degenerate configs where `1 / radius` leaves `[-1, 1]` produce NaN
/// coordinates rather than an error, matching the no-validation posture of
/// the rest of the layout helpers.
pub fn spiral_positions(n: usize, config: SpiralConfig) -> Vec<SpiralPoint> {
    let mut angle = 0.0_f64;
    (0..n)
        .map(|i| {
            let radius = (i as f64 + 0.3).sqrt() * config.point_radius * config.distance;
            angle += (1.0 / radius).asin() * config.point_radius * config.angle_diff;
            angle %= TAU;
            SpiralPoint {
                x: angle.cos() * radius,
                y: angle.sin() * radius,
                angle,
            }
        })
        .collect()
}

/// A Cartesian point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Polar-to-Cartesian conversion; `angle_degrees` is converted to radians
/// internally.
pub fn point_from_angle_distance(angle_degrees: f64, distance: f64) -> Point {
    let radians = angle_degrees.to_radians();
    Point {
        x: radians.cos() * distance,
        y: radians.sin() * distance,
    }
}

/// Euclidean norm of a 2-D vector.
pub fn vector_magnitude(v: [f64; 2]) -> f64 {
    (v[0] * v[0] + v[1] * v[1]).sqrt()
}
