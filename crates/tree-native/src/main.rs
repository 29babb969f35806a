//! Headless driver: plays a synthetic hand-tracking stream into a `Scene`
//! at a fixed frame rate and logs what a renderer would receive.

use anyhow::Context;
use glam::Vec3;
use instant::Instant;
use std::f32::consts::TAU;
use tree_core::{
    build_instances, AssetError, CameraUniform, GestureLatch, HandSample, HandScale, Lens, Scene,
    SceneConfig, TextureSlot,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const TRACKER_DT: f32 = 1.0 / 24.0; // trackers rarely keep up with the display
const MODE_TOGGLE_EVERY_SEC: f32 = 6.0;
const DROPOUT_EVERY_SEC: f32 = 9.0;
const DROPOUT_LENGTH_SEC: f32 = 1.5;
const ASPECT: f32 = 16.0 / 9.0;

struct RunOptions {
    photo_count: usize,
    seed: u64,
    frames: u32,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name}={raw:?} is not valid")),
        Err(_) => Ok(default),
    }
}

fn read_options() -> anyhow::Result<RunOptions> {
    Ok(RunOptions {
        photo_count: env_or("TREE_PHOTO_COUNT", 24)?,
        seed: env_or("TREE_SEED", 42)?,
        frames: env_or("TREE_FRAMES", 60 * 30)?,
    })
}

/// Lissajous sweep over the frame with a periodic dropout.
fn synthetic_hand(t: f32) -> (HandSample, HandScale) {
    let scale = HandScale::new(1.4 + 1.1 * (t * 0.35).sin());
    if t % DROPOUT_EVERY_SEC > DROPOUT_EVERY_SEC - DROPOUT_LENGTH_SEC {
        return (HandSample::lost(), scale);
    }
    let x = 0.5 + 0.45 * (t * 0.21 * TAU).sin();
    let y = 0.5 + 0.35 * (t * 0.13 * TAU + 1.0).cos();
    (HandSample::new(x, y), scale)
}

/// Texture loads finish a few frames later; every seventh placard fails.
fn fake_fetch(id: u64) -> Result<u32, AssetError> {
    if id % 7 == 6 {
        Err(AssetError::NotFound(format!("photos/{id}.jpg")))
    } else {
        Ok(id as u32)
    }
}

fn mean_target_error(scene: &Scene) -> f32 {
    let animators = scene.animators();
    if animators.is_empty() {
        return 0.0;
    }
    let total: f32 = animators
        .iter()
        .map(|a| a.transform().position.distance(a.target(scene.mode())))
        .sum();
    total / animators.len() as f32
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let opts = read_options()?;
    let mut scene =
        Scene::new(SceneConfig::default(), opts.seed).context("default scene config")?;
    let sources: Vec<u64> = (0..opts.photo_count as u64).collect();
    let mut to_fetch = scene.set_sources(&sources);
    log::info!(
        "tree-native starting: {} placards, seed {}, {} frames",
        opts.photo_count,
        opts.seed,
        opts.frames
    );

    let lens = Lens::default();
    let mut latch = GestureLatch::default();
    let started = Instant::now();
    let mut next_sample = 0.0_f32;
    let mut next_toggle = MODE_TOGGLE_EVERY_SEC;
    let mut instance_bytes = 0usize;
    let mut last_eye = Vec3::ZERO;

    for frame in 0..opts.frames {
        let t = frame as f32 * FRAME_DT;

        if t >= next_sample {
            let (sample, scale) = synthetic_hand(t);
            latch.push(sample, scale, t as f64);
            next_sample += TRACKER_DT;
        }
        if t >= next_toggle {
            scene.toggle_mode();
            next_toggle += MODE_TOGGLE_EVERY_SEC;
        }
        if frame == 10 {
            for id in to_fetch.drain(..) {
                scene.resolve_texture(id, fake_fetch(id));
            }
        }

        let (sample, scale) = latch.current(t as f64);
        let out = scene.step(FRAME_DT, sample, scale);
        let uniform = CameraUniform::new(&out.camera, &lens, ASPECT);
        let instances = build_instances(out.objects);
        instance_bytes = bytemuck::cast_slice::<_, u8>(&instances).len()
            + bytemuck::bytes_of(&uniform).len();
        last_eye = out.camera.eye;

        if frame % 60 == 0 {
            let orbit = scene.camera().state();
            log::info!(
                "t={:5.1}s mode={} az={:+.2} polar={:.2} dist={:5.2} err={:.3}",
                t,
                scene.mode(),
                orbit.azimuth,
                orbit.polar,
                orbit.distance,
                mean_target_error(&scene)
            );
        }
    }

    let failed = sources
        .iter()
        .filter(|id| matches!(scene.texture(**id), Some(TextureSlot::Failed(_))))
        .count();
    log::info!(
        "done in {:?}: final eye=({:.2},{:.2},{:.2}) mode={} err={:.3} upload={}B failed_textures={}",
        started.elapsed(),
        last_eye.x,
        last_eye.y,
        last_eye.z,
        scene.mode(),
        mean_target_error(&scene),
        instance_bytes,
        failed
    );
    Ok(())
}
