//! Gesture-driven orbit camera.
//!
//! Hand x drives azimuth, hand y drives polar angle, and hand scale drives
//! distance (a wider hand pulls the camera in). Targets are clamped before
//! easing, and easing never overshoots, so the state stays inside its
//! configured ranges whatever the tracker reports.

use crate::config::OrbitTuning;
use crate::constants::{CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::ease::{ease_factor, lerp, shortest_angle_diff};
use crate::gesture::{HandSample, HandScale};
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Where the camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    /// World-to-view transform (right-handed).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Perspective parameters; the aspect comes from the surface each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Lens {
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
    }
}

/// Spherical camera coordinates around the focal point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    /// Radians, unbounded; compared through the shortest difference.
    pub azimuth: f32,
    /// Radians from the +Y axis.
    pub polar: f32,
    pub distance: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    tuning: OrbitTuning,
    state: OrbitState,
    pose: CameraPose,
}

impl OrbitCamera {
    pub fn new(tuning: OrbitTuning) -> Self {
        let state = OrbitState {
            azimuth: 0.0,
            polar: 0.5 * (tuning.polar_min + tuning.polar_max),
            distance: tuning.distance_default,
        };
        let pose = pose_from(&tuning, &state);
        Self {
            tuning,
            state,
            pose,
        }
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn focal_point(&self) -> Vec3 {
        Vec3::new(0.0, self.tuning.focal_height, 0.0)
    }

    /// Jump straight to `state` (clamped), e.g. when the host resets the view.
    pub fn snap_to(&mut self, state: OrbitState) {
        self.state = OrbitState {
            azimuth: state.azimuth,
            polar: state.polar.clamp(self.tuning.polar_min, self.tuning.polar_max),
            distance: state
                .distance
                .clamp(self.tuning.distance_min, self.tuning.distance_max),
        };
        self.pose = pose_from(&self.tuning, &self.state);
    }

    /// Azimuth the hand x position asks for.
    pub fn target_azimuth(&self, x: f32) -> f32 {
        (x - 0.5) * PI * self.tuning.azimuth_multiplier
    }

    /// Polar angle the hand y position asks for, inside the clamped range.
    pub fn target_polar(&self, y: f32) -> f32 {
        let t = ((y - self.tuning.polar_offset) * self.tuning.polar_sensitivity).clamp(0.0, 1.0);
        lerp(self.tuning.polar_min, self.tuning.polar_max, t)
    }

    /// Distance the hand scale asks for: the widest hand gives the closest view.
    pub fn target_distance(&self, scale: HandScale) -> f32 {
        scale.map_to(self.tuning.distance_max, self.tuning.distance_min)
    }

    /// Advance one frame. Without a detected hand the pose is left exactly
    /// as it was; there is no drift back to a neutral view.
    pub fn update(&mut self, delta: f32, sample: HandSample, scale: HandScale) -> CameraPose {
        let sample = sample.sanitized();
        if !sample.detected {
            return self.pose;
        }

        let angle_k = ease_factor(delta, self.tuning.angle_lerp_speed);
        let distance_k = ease_factor(delta, self.tuning.distance_lerp_speed);

        let target_az = self.target_azimuth(sample.x);
        let target_polar = self.target_polar(sample.y);
        let target_distance = self.target_distance(scale);

        let s = &mut self.state;
        s.azimuth += shortest_angle_diff(s.azimuth, target_az) * angle_k;
        s.polar += (target_polar - s.polar) * angle_k;
        s.distance += (target_distance - s.distance) * distance_k;
        // Rounding can leave the convex step a hair outside the range.
        s.polar = s.polar.clamp(self.tuning.polar_min, self.tuning.polar_max);
        s.distance = s
            .distance
            .clamp(self.tuning.distance_min, self.tuning.distance_max);

        self.pose = pose_from(&self.tuning, &self.state);
        self.pose
    }
}

fn pose_from(tuning: &OrbitTuning, s: &OrbitState) -> CameraPose {
    let target = Vec3::new(0.0, tuning.focal_height, 0.0);
    let offset = Vec3::new(
        s.distance * s.polar.sin() * s.azimuth.sin(),
        s.distance * s.polar.cos(),
        s.distance * s.polar.sin() * s.azimuth.cos(),
    );
    CameraPose {
        eye: target + offset,
        target,
        up: Vec3::Y,
    }
}
