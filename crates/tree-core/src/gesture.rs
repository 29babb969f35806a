//! Hand-tracking signal as the scene sees it.
//!
//! The tracker delivers normalized palm position plus a spread/closeness
//! scale at whatever rate it manages. Everything here is clamping and
//! latching; no filtering beyond what the camera easing already does.

use crate::constants::{
    GESTURE_STALE_AFTER_SEC, HAND_SCALE_MAX, HAND_SCALE_MIN, HAND_SCALE_NEUTRAL,
};
use crate::ease::{lerp, remap_clamped};

/// Instantaneous gesture position in [0,1]².
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandSample {
    pub x: f32,
    pub y: f32,
    pub detected: bool,
}

impl HandSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            detected: true,
        }
    }

    /// A sample reporting no hand; the coordinates are ignored downstream.
    pub fn lost() -> Self {
        Self::default()
    }

    /// Coordinates clamped into [0,1]. NaN on either axis drops detection.
    pub fn sanitized(self) -> Self {
        if self.x.is_nan() || self.y.is_nan() {
            return Self {
                detected: false,
                ..Self::default()
            };
        }
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
            detected: self.detected,
        }
    }
}

/// Perceived hand spread, clamped to [`HAND_SCALE_MIN`, `HAND_SCALE_MAX`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandScale(f32);

impl HandScale {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(HAND_SCALE_MIN, HAND_SCALE_MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Position inside the clamped range, 0 at the smallest scale.
    pub fn unit(self) -> f32 {
        remap_clamped(self.0, HAND_SCALE_MIN, HAND_SCALE_MAX)
    }

    /// Affine map of [`HandScale::unit`] onto `from..to`. Passing a
    /// descending pair inverts the relationship.
    pub fn map_to(self, from: f32, to: f32) -> f32 {
        lerp(from, to, self.unit())
    }
}

impl Default for HandScale {
    fn default() -> Self {
        Self(HAND_SCALE_NEUTRAL)
    }
}

impl From<f32> for HandScale {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Holds the most recent tracker output between frames.
///
/// Samples arrive on the tracker's schedule; the frame loop asks for
/// [`GestureLatch::current`] once per tick. A latch that has not heard from
/// the tracker for longer than the stale window reports no detection.
#[derive(Clone, Debug)]
pub struct GestureLatch {
    sample: HandSample,
    scale: HandScale,
    received_at: Option<f64>,
    stale_after: f64,
    was_detected: bool,
}

impl Default for GestureLatch {
    fn default() -> Self {
        Self::new(GESTURE_STALE_AFTER_SEC)
    }
}

impl GestureLatch {
    pub fn new(stale_after_sec: f64) -> Self {
        Self {
            sample: HandSample::lost(),
            scale: HandScale::default(),
            received_at: None,
            stale_after: stale_after_sec,
            was_detected: false,
        }
    }

    pub fn push(&mut self, sample: HandSample, scale: HandScale, now_sec: f64) {
        self.sample = sample.sanitized();
        self.scale = scale;
        self.received_at = Some(now_sec);
    }

    /// Latest sample and scale as seen at `now_sec`.
    pub fn current(&mut self, now_sec: f64) -> (HandSample, HandScale) {
        let fresh = self
            .received_at
            .map(|t| now_sec - t <= self.stale_after)
            .unwrap_or(false);
        let sample = if fresh {
            self.sample
        } else {
            HandSample {
                detected: false,
                ..self.sample
            }
        };
        if sample.detected != self.was_detected {
            if sample.detected {
                log::info!("[gesture] hand detected");
            } else if fresh {
                log::info!("[gesture] hand lost");
            } else {
                log::info!("[gesture] tracker silent for {:.2}s", self.stale_after);
            }
            self.was_detected = sample.detected;
        }
        (sample, self.scale)
    }
}
