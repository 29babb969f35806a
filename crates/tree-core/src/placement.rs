//! Target positions for the placards: a golden-angle cone ("formed") and a
//! scattered ring around the viewpoint ("chaos").

use crate::config::{ChaosLayout, SceneConfig, TreeLayout};
use crate::constants::GOLDEN_ANGLE;
use fnv::FnvHasher;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;
use std::hash::{Hash, Hasher};

/// One placard's immutable targets and motion parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub id: u64,
    pub chaos_position: Vec3,
    pub formed_position: Vec3,
    /// Convergence rate, per second.
    pub speed: f32,
    /// Offset for the secondary-motion sinusoids, radians.
    pub phase: f32,
}

/// Position `index` of `count` on the cone.
///
/// Height climbs linearly from `height_min` and the radius tapers with it;
/// the angle advances by the golden angle so no two placards line up.
pub fn formed_position(index: usize, count: usize, tree: &TreeLayout) -> Vec3 {
    let h = tree.height_min + (index as f32 / count.max(1) as f32) * tree.height_span;
    let radius = tree.max_radius * (1.0 - h) + tree.radius_offset;
    let theta = index as f32 * GOLDEN_ANGLE;
    Vec3::new(
        radius * theta.cos(),
        tree.base_y + h * tree.height,
        radius * theta.sin(),
    )
}

/// Evenly spaced angle with a random radius and height.
pub fn chaos_position<R: Rng + ?Sized>(
    index: usize,
    count: usize,
    chaos: &ChaosLayout,
    rng: &mut R,
) -> Vec3 {
    let angle = (index as f32 / count.max(1) as f32) * TAU;
    let radius = rng.gen_range(chaos.radius_min..=chaos.radius_max);
    let dy = if chaos.height_jitter > 0.0 {
        rng.gen_range(-chaos.height_jitter..=chaos.height_jitter)
    } else {
        0.0
    };
    Vec3::new(
        angle.cos() * radius * chaos.x_stretch,
        chaos.center_y + dy,
        angle.sin() * radius,
    )
}

/// Build `count` objects with ids `0..count`. Zero yields an empty vec.
pub fn generate_placements<R: Rng + ?Sized>(
    count: usize,
    config: &SceneConfig,
    rng: &mut R,
) -> Vec<SceneObject> {
    (0..count)
        .map(|i| SceneObject {
            id: i as u64,
            chaos_position: chaos_position(i, count, &config.chaos, rng),
            formed_position: formed_position(i, count, &config.tree),
            speed: rng.gen_range(config.chaos.speed_min..=config.chaos.speed_max),
            phase: rng.gen_range(0.0..TAU),
        })
        .collect()
}

/// Keeps the last placement set until the source identity changes.
///
/// Re-randomizing the chaos targets every frame would keep the placards
/// from ever settling, so hosts call [`PlacementCache::get_or_generate`]
/// every frame and only pay for generation when the sources differ.
#[derive(Clone, Debug, Default)]
pub struct PlacementCache {
    key: Option<u64>,
    sources: Vec<u64>,
    objects: Vec<SceneObject>,
    generation: u64,
}

impl PlacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate<R: Rng + ?Sized>(
        &mut self,
        sources: &[u64],
        config: &SceneConfig,
        rng: &mut R,
    ) -> &[SceneObject] {
        let key = source_key(sources);
        // The hash only short-circuits; equal hashes still compare the ids.
        if self.key != Some(key) || self.sources != sources {
            let mut objects = generate_placements(sources.len(), config, rng);
            for (obj, id) in objects.iter_mut().zip(sources) {
                obj.id = *id;
            }
            self.objects = objects;
            self.key = Some(key);
            self.sources = sources.to_vec();
            self.generation += 1;
            log::debug!(
                "[placement] generated {} objects (generation {})",
                self.objects.len(),
                self.generation
            );
        }
        &self.objects
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// The id list the current objects were generated for.
    pub fn sources(&self) -> &[u64] {
        &self.sources
    }

    /// Bumped every time the set is regenerated.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn source_key(sources: &[u64]) -> u64 {
    let mut h = FnvHasher::default();
    sources.len().hash(&mut h);
    sources.hash(&mut h);
    h.finish()
}
