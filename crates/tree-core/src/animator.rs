//! Per-placard motion: ease toward the mode's target, turn to face the
//! camera, and layer a mode-specific sway on top.

use crate::config::AnimatorTuning;
use crate::ease::ease_factor;
use crate::gesture::HandScale;
use crate::mode::Mode;
use crate::placement::SceneObject;
use glam::{EulerRot, Mat3, Quat, Vec3};

/// What the renderer draws for one placard this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Rotation that turns local +Z toward `dir`, keeping +Y roughly up.
/// Returns `None` when `dir` is degenerate.
pub fn facing_rotation(dir: Vec3) -> Option<Quat> {
    let forward = dir.try_normalize()?;
    let right = Vec3::Y
        .cross(forward)
        .try_normalize()
        .unwrap_or(Vec3::X);
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}

/// Owns the rendered transform of one placard; the targets stay in the
/// shared [`SceneObject`].
#[derive(Clone, Debug)]
pub struct ObjectAnimator {
    object: SceneObject,
    position: Vec3,
    /// Smoothed billboard orientation, before secondary motion.
    facing: Quat,
    transform: ObjectTransform,
}

impl ObjectAnimator {
    /// Starts at the chaos target so the first formed frame visibly gathers.
    pub fn new(object: SceneObject) -> Self {
        let position = object.chaos_position;
        Self {
            object,
            position,
            facing: Quat::IDENTITY,
            transform: ObjectTransform {
                position,
                ..ObjectTransform::default()
            },
        }
    }

    /// Swap in new targets for a placard that survived a source change.
    /// The rendered position and facing carry over, so the placard eases
    /// toward its new targets instead of jumping.
    pub fn retarget(&mut self, object: SceneObject) {
        self.object = object;
    }

    pub fn object(&self) -> &SceneObject {
        &self.object
    }

    pub fn transform(&self) -> ObjectTransform {
        self.transform
    }

    pub fn target(&self, mode: Mode) -> Vec3 {
        match mode {
            Mode::Formed => self.object.formed_position,
            Mode::Chaos => self.object.chaos_position,
        }
    }

    /// Advance one frame. `time` is total elapsed seconds and drives the
    /// secondary sinusoids; `delta` drives every easing.
    pub fn update(
        &mut self,
        tuning: &AnimatorTuning,
        delta: f32,
        time: f32,
        mode: Mode,
        camera_eye: Vec3,
        scale: HandScale,
    ) -> ObjectTransform {
        let target = self.target(mode);
        self.position += (target - self.position) * ease_factor(delta, self.object.speed);

        let facing_rate = match mode {
            Mode::Formed => tuning.facing_rate_formed,
            Mode::Chaos => tuning.facing_rate_chaos,
        };
        if let Some(desired) = facing_rotation(camera_eye - self.position) {
            self.facing = self
                .facing
                .slerp(desired, ease_factor(delta, facing_rate))
                .normalize();
        }

        let phase = self.object.phase;
        let offset = match mode {
            Mode::Formed => Quat::from_euler(
                EulerRot::XYZ,
                tuning.sway_nod.sample(time, phase),
                0.0,
                tuning.sway_tilt.sample(time, phase),
            ),
            Mode::Chaos => Quat::from_euler(
                EulerRot::XYZ,
                tuning.wobble_pitch.sample(time, phase),
                tuning.wobble_yaw.sample(time, phase),
                0.0,
            ),
        };

        self.transform = ObjectTransform {
            position: self.position,
            rotation: self.facing * offset,
            scale: scale.map_to(tuning.scale_min, tuning.scale_max),
        };
        self.transform
    }
}
