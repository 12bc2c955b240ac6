//! Geometric helpers: distances, bearings, toroidal wrapping, and the
//! shared turn/thrust steering integrator.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

use super::params::Params;

/// Euclidean distance between two 2D positions.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Angle of the vector from `from` to `to`, in radians.
pub fn bearing(from: &Array1<f32>, to: &Array1<f32>) -> f32 {
    (to[1] - from[1]).atan2(to[0] - from[0])
}

/// Wraps a position vector around the arena boundaries (toroidal topology).
///
/// The result is always inside [0, width) x [0, height).
pub fn wrap_around_mut(v: &mut Array1<f32>, box_width: f32, box_height: f32) {
    // rem_euclid of a tiny negative value can round up to the modulus
    // itself; the second remainder folds that back to zero.
    v[0] = v[0].rem_euclid(box_width) % box_width;
    v[1] = v[1].rem_euclid(box_height) % box_height;
}

/// Applies one tick of brain-driven movement to a heading and position.
///
/// `turn` adjusts the heading by `turn_rate` radians per unit; `thrust` is
/// clamped to non-negative and scaled by `max_speed`. The resulting position
/// is wrapped back into the arena. Both species use this integrator; only
/// their energy costs differ.
pub fn steer_mut(pos: &mut Array1<f32>, angle: &mut f32, turn: f32, thrust: f32, params: &Params) {
    *angle += turn * params.turn_rate;
    let speed = thrust.max(0.0) * params.max_speed;
    pos[0] += angle.cos() * speed;
    pos[1] += angle.sin() * speed;
    wrap_around_mut(pos, params.box_width, params.box_height);
}
