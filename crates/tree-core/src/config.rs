//! Scene tunables grouped per component.
//!
//! `Default` builds every group from `constants.rs`. [`crate::Scene::new`]
//! runs [`SceneConfig::validate`]; the per-frame code assumes the ranges are
//! well formed.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name}: min {min} must be below max {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} = {value} lies outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Formed (cone) arrangement.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLayout {
    pub height: f32,
    pub base_y: f32,
    pub max_radius: f32,
    pub radius_offset: f32,
    pub height_min: f32,
    pub height_span: f32,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            height: TREE_HEIGHT,
            base_y: TREE_BASE_Y,
            max_radius: TREE_MAX_RADIUS,
            radius_offset: TREE_RADIUS_OFFSET,
            height_min: FORMED_HEIGHT_MIN,
            height_span: FORMED_HEIGHT_SPAN,
        }
    }
}

/// Chaos (scattered) arrangement and per-object speed draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ChaosLayout {
    pub radius_min: f32,
    pub radius_max: f32,
    pub height_jitter: f32,
    pub center_y: f32,
    pub x_stretch: f32,
    pub speed_min: f32,
    pub speed_max: f32,
}

impl Default for ChaosLayout {
    fn default() -> Self {
        Self {
            radius_min: CHAOS_RADIUS_MIN,
            radius_max: CHAOS_RADIUS_MAX,
            height_jitter: CHAOS_HEIGHT_JITTER,
            center_y: CHAOS_CENTER_Y,
            x_stretch: CHAOS_X_STRETCH,
            speed_min: OBJECT_SPEED_MIN,
            speed_max: OBJECT_SPEED_MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitTuning {
    pub focal_height: f32,
    pub azimuth_multiplier: f32,
    pub polar_min: f32,
    pub polar_max: f32,
    pub polar_offset: f32,
    pub polar_sensitivity: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    pub distance_default: f32,
    pub angle_lerp_speed: f32,
    pub distance_lerp_speed: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            focal_height: FOCAL_HEIGHT,
            azimuth_multiplier: AZIMUTH_RANGE_MULTIPLIER,
            polar_min: POLAR_MIN,
            polar_max: POLAR_MAX,
            polar_offset: POLAR_INPUT_OFFSET,
            polar_sensitivity: POLAR_INPUT_SENSITIVITY,
            distance_min: DISTANCE_MIN,
            distance_max: DISTANCE_MAX,
            distance_default: DISTANCE_DEFAULT,
            angle_lerp_speed: ANGLE_LERP_SPEED,
            distance_lerp_speed: DISTANCE_LERP_SPEED,
        }
    }
}

/// A sinusoid `amplitude * sin(time * frequency + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub amplitude: f32,
    pub frequency: f32,
}

impl Oscillation {
    #[inline]
    pub fn sample(&self, time: f32, phase: f32) -> f32 {
        self.amplitude * (time * self.frequency + phase).sin()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorTuning {
    pub scale_min: f32,
    pub scale_max: f32,
    pub facing_rate_formed: f32,
    pub facing_rate_chaos: f32,
    pub sway_tilt: Oscillation,
    pub sway_nod: Oscillation,
    pub wobble_pitch: Oscillation,
    pub wobble_yaw: Oscillation,
}

impl Default for AnimatorTuning {
    fn default() -> Self {
        Self {
            scale_min: OBJECT_SCALE_MIN,
            scale_max: OBJECT_SCALE_MAX,
            facing_rate_formed: FACING_SLERP_FORMED,
            facing_rate_chaos: FACING_SLERP_CHAOS,
            sway_tilt: Oscillation {
                amplitude: SWAY_TILT_AMPLITUDE,
                frequency: SWAY_TILT_FREQUENCY,
            },
            sway_nod: Oscillation {
                amplitude: SWAY_NOD_AMPLITUDE,
                frequency: SWAY_NOD_FREQUENCY,
            },
            wobble_pitch: Oscillation {
                amplitude: WOBBLE_PITCH_AMPLITUDE,
                frequency: WOBBLE_PITCH_FREQUENCY,
            },
            wobble_yaw: Oscillation {
                amplitude: WOBBLE_YAW_AMPLITUDE,
                frequency: WOBBLE_YAW_FREQUENCY,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub tree: TreeLayout,
    pub chaos: ChaosLayout,
    pub orbit: OrbitTuning,
    pub animator: AnimatorTuning,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tree;
        positive("tree.height", t.height)?;
        non_negative("tree.max_radius", t.max_radius)?;
        non_negative("tree.radius_offset", t.radius_offset)?;
        non_negative("tree.height_min", t.height_min)?;
        non_negative("tree.height_span", t.height_span)?;

        let c = &self.chaos;
        range("chaos.radius", c.radius_min, c.radius_max)?;
        non_negative("chaos.height_jitter", c.height_jitter)?;
        positive("chaos.x_stretch", c.x_stretch)?;
        positive("chaos.speed_min", c.speed_min)?;
        range("chaos.speed", c.speed_min, c.speed_max)?;

        let o = &self.orbit;
        range("orbit.polar", o.polar_min, o.polar_max)?;
        range("orbit.distance", o.distance_min, o.distance_max)?;
        positive("orbit.polar_sensitivity", o.polar_sensitivity)?;
        positive("orbit.angle_lerp_speed", o.angle_lerp_speed)?;
        positive("orbit.distance_lerp_speed", o.distance_lerp_speed)?;
        if !(o.distance_min..=o.distance_max).contains(&o.distance_default) {
            return Err(ConfigError::OutOfRange {
                name: "orbit.distance_default",
                value: o.distance_default,
                min: o.distance_min,
                max: o.distance_max,
            });
        }

        let a = &self.animator;
        positive("animator.scale_min", a.scale_min)?;
        range("animator.scale", a.scale_min, a.scale_max)?;
        positive("animator.facing_rate_formed", a.facing_rate_formed)?;
        positive("animator.facing_rate_chaos", a.facing_rate_chaos)?;
        Ok(())
    }
}

fn range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { name, min, max })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
