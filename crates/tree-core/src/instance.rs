//! GPU-ready records handed to whatever renderer draws the scene.

use crate::animator::ObjectTransform;
use crate::camera::{CameraPose, Lens};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
}

impl From<&ObjectTransform> for InstanceRaw {
    fn from(t: &ObjectTransform) -> Self {
        let model =
            Mat4::from_scale_rotation_translation(Vec3::splat(t.scale), t.rotation, t.position);
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    // w unused; keeps 16-byte alignment for uniform buffers
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub fn new(pose: &CameraPose, lens: &Lens, aspect: f32) -> Self {
        let view_proj = lens.projection_matrix(aspect) * pose.view_matrix();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            eye: pose.eye.extend(1.0).to_array(),
        }
    }
}

pub fn build_instances(transforms: &[ObjectTransform]) -> Vec<InstanceRaw> {
    transforms.iter().map(InstanceRaw::from).collect()
}
