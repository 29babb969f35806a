//! Frame-rate independent easing helpers shared by the camera and animator.

use std::f32::consts::{PI, TAU};

/// Fraction of the remaining distance to cover this frame: `delta * rate`
/// clamped to [0, 1] so a long frame lands on the target instead of
/// overshooting it.
#[inline]
pub fn ease_factor(delta: f32, rate: f32) -> f32 {
    let k = delta * rate;
    if k.is_finite() {
        k.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Signed shortest rotation from `from` to `to`, in (-pi, pi].
#[inline]
pub fn shortest_angle_diff(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(TAU);
    if d > PI {
        d - TAU
    } else {
        d
    }
}

/// Position of `v` inside `[lo, hi]` as a clamped 0..1 fraction.
#[inline]
pub fn remap_clamped(v: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((v - lo) / span).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
