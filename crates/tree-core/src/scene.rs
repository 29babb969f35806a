//! Everything that changes per frame, wired together in update order.

use crate::animator::{ObjectAnimator, ObjectTransform};
use crate::camera::{CameraPose, OrbitCamera};
use crate::config::{ConfigError, SceneConfig};
use crate::gesture::{HandSample, HandScale};
use crate::mode::Mode;
use crate::placard::{AssetError, PlacardTextures, TextureSlot};
use crate::placement::PlacementCache;
use fnv::FnvHashMap;
use rand::prelude::*;

/// Renderer-side handle for a loaded placard texture.
pub type TextureId = u32;

/// Poses produced by one [`Scene::step`].
#[derive(Debug)]
pub struct FrameOutput<'a> {
    pub camera: CameraPose,
    pub objects: &'a [ObjectTransform],
}

pub struct Scene {
    config: SceneConfig,
    mode: Mode,
    camera: OrbitCamera,
    placements: PlacementCache,
    animators: Vec<ObjectAnimator>,
    transforms: Vec<ObjectTransform>,
    textures: PlacardTextures<TextureId>,
    built_generation: u64,
    elapsed: f32,
    rng: StdRng,
}

impl Scene {
    /// Fails when `config` has an inverted range or a bad rate; nothing
    /// downstream re-checks it.
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = OrbitCamera::new(config.orbit.clone());
        Ok(Self {
            config,
            mode: Mode::default(),
            camera,
            placements: PlacementCache::new(),
            animators: Vec::new(),
            transforms: Vec::new(),
            textures: PlacardTextures::new(),
            built_generation: 0,
            elapsed: 0.0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::info!("[scene] mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn animators(&self) -> &[ObjectAnimator] {
        &self.animators
    }

    pub fn textures(&self) -> &PlacardTextures<TextureId> {
        &self.textures
    }

    /// Point the scene at a set of photo sources. Placements, animators and
    /// texture slots are rebuilt only when the identity list changed.
    /// Placards present before and after keep their rendered transform.
    /// Returns the ids whose textures still need fetching.
    pub fn set_sources(&mut self, sources: &[u64]) -> Vec<u64> {
        self.placements
            .get_or_generate(sources, &self.config, &mut self.rng);
        if self.placements.generation() == self.built_generation {
            return Vec::new();
        }
        let mut previous: FnvHashMap<u64, ObjectAnimator> = self
            .animators
            .drain(..)
            .map(|a| (a.object().id, a))
            .collect();
        self.animators = self
            .placements
            .objects()
            .iter()
            .cloned()
            .map(|object| match previous.remove(&object.id) {
                Some(mut animator) => {
                    animator.retarget(object);
                    animator
                }
                None => ObjectAnimator::new(object),
            })
            .collect();
        self.transforms = self.animators.iter().map(|a| a.transform()).collect();
        self.built_generation = self.placements.generation();
        log::info!(
            "[scene] placed {} placards (generation {})",
            self.animators.len(),
            self.built_generation
        );

        self.textures.retain_ids(sources);
        sources
            .iter()
            .copied()
            .filter(|id| self.textures.request(*id))
            .collect()
    }

    /// Completion callback for a placard texture fetch.
    pub fn resolve_texture(&mut self, id: u64, result: Result<TextureId, AssetError>) {
        self.textures.resolve(id, result);
    }

    pub fn texture(&self, id: u64) -> Option<&TextureSlot<TextureId>> {
        self.textures.slot(id)
    }

    /// Advance the camera, then every placard against the new camera eye.
    pub fn step(&mut self, delta: f32, sample: HandSample, scale: HandScale) -> FrameOutput<'_> {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;

        let camera = self.camera.update(delta, sample, scale);
        for (animator, out) in self.animators.iter_mut().zip(self.transforms.iter_mut()) {
            *out = animator.update(
                &self.config.animator,
                delta,
                self.elapsed,
                self.mode,
                camera.eye,
                scale,
            );
        }

        FrameOutput {
            camera,
            objects: &self.transforms,
        }
    }
}
