use glam::{Quat, Vec3};
use tree_core::animator::facing_rotation;
use tree_core::config::{AnimatorTuning, Oscillation};
use tree_core::{HandScale, Mode, ObjectAnimator, SceneObject};

const DT: f32 = 1.0 / 60.0;

fn object(speed: f32) -> SceneObject {
    SceneObject {
        id: 0,
        chaos_position: Vec3::new(-6.0, 9.0, 2.0),
        formed_position: Vec3::new(3.0, 4.0, -1.0),
        speed,
        phase: 0.4,
    }
}

fn still_tuning() -> AnimatorTuning {
    let still = Oscillation {
        amplitude: 0.0,
        frequency: 1.0,
    };
    AnimatorTuning {
        sway_tilt: still,
        sway_nod: still,
        wobble_pitch: still,
        wobble_yaw: still,
        ..AnimatorTuning::default()
    }
}

fn run(
    animator: &mut ObjectAnimator,
    tuning: &AnimatorTuning,
    mode: Mode,
    eye: Vec3,
    frames: u32,
) {
    for i in 0..frames {
        animator.update(tuning, DT, i as f32 * DT, mode, eye, HandScale::default());
    }
}

#[test]
fn starts_at_the_chaos_target() {
    let animator = ObjectAnimator::new(object(1.0));
    assert_eq!(animator.transform().position, Vec3::new(-6.0, 9.0, 2.0));
}

#[test]
fn converges_to_the_mode_target_from_anywhere() {
    let tuning = AnimatorTuning::default();
    let eye = Vec3::new(0.0, 6.0, 20.0);
    for speed in [0.8_f32, 1.5, 2.3] {
        let mut animator = ObjectAnimator::new(object(speed));
        run(&mut animator, &tuning, Mode::Formed, eye, 2400);
        let p = animator.transform().position;
        assert!(p.distance(animator.target(Mode::Formed)) < 1e-3, "speed {speed}: {p}");

        run(&mut animator, &tuning, Mode::Chaos, eye, 2400);
        let p = animator.transform().position;
        assert!(p.distance(animator.target(Mode::Chaos)) < 1e-3, "speed {speed}: {p}");
    }
}

#[test]
fn faster_objects_close_the_gap_sooner() {
    let tuning = AnimatorTuning::default();
    let eye = Vec3::new(0.0, 6.0, 20.0);
    let mut slow = ObjectAnimator::new(object(0.8));
    let mut fast = ObjectAnimator::new(object(2.3));
    run(&mut slow, &tuning, Mode::Formed, eye, 30);
    run(&mut fast, &tuning, Mode::Formed, eye, 30);
    let target = slow.target(Mode::Formed);
    assert!(fast.transform().position.distance(target) < slow.transform().position.distance(target));
}

#[test]
fn huge_delta_lands_on_target_without_overshoot() {
    let tuning = AnimatorTuning::default();
    let mut animator = ObjectAnimator::new(object(2.0));
    let t = animator.update(&tuning, 10.0, 0.0, Mode::Formed, Vec3::Z * 20.0, HandScale::default());
    assert!(t.position.distance(animator.target(Mode::Formed)) < 1e-5);
}

#[test]
fn settles_facing_the_camera() {
    let tuning = AnimatorTuning::default();
    let eye = Vec3::new(12.0, 8.0, 15.0);
    let mut animator = ObjectAnimator::new(object(1.2));
    run(&mut animator, &tuning, Mode::Formed, eye, 1800);
    let t = animator.transform();
    let to_camera = (eye - t.position).normalize();
    let front = t.rotation * Vec3::Z;
    // Sway keeps it a few hundredths of a radian off.
    assert!(front.dot(to_camera) > 0.99, "dot = {}", front.dot(to_camera));
}

#[test]
fn chaos_reorients_faster_than_formed() {
    let tuning = still_tuning();
    let mut obj = object(1.0);
    obj.formed_position = obj.chaos_position;
    let eye = Vec3::new(30.0, 9.0, 2.0);
    let desired = facing_rotation(eye - obj.chaos_position).unwrap();

    let mut formed = ObjectAnimator::new(obj.clone());
    let mut chaos = ObjectAnimator::new(obj);
    let f = formed.update(&tuning, 0.05, 0.0, Mode::Formed, eye, HandScale::default());
    let c = chaos.update(&tuning, 0.05, 0.0, Mode::Chaos, eye, HandScale::default());

    assert!(c.rotation.angle_between(desired) < f.rotation.angle_between(desired));
}

#[test]
fn secondary_motion_differs_by_mode_and_stays_small() {
    let tuning = AnimatorTuning::default();
    let mut obj = object(1.0);
    obj.formed_position = obj.chaos_position;
    let eye = Vec3::new(0.0, 9.0, 30.0);
    let mut formed = ObjectAnimator::new(obj.clone());
    let mut chaos = ObjectAnimator::new(obj);
    run(&mut formed, &tuning, Mode::Formed, eye, 600);
    run(&mut chaos, &tuning, Mode::Chaos, eye, 600);

    let desired = facing_rotation(eye - formed.transform().position).unwrap();
    let sway = formed.transform().rotation.angle_between(desired);
    let wobble = chaos.transform().rotation.angle_between(desired);
    let sway_max = tuning.sway_tilt.amplitude + tuning.sway_nod.amplitude;
    let wobble_max = tuning.wobble_pitch.amplitude + tuning.wobble_yaw.amplitude;
    assert!(sway <= sway_max + 1e-3, "sway {sway}");
    assert!(wobble <= wobble_max + 1e-3, "wobble {wobble}");
    assert_ne!(formed.transform().rotation, chaos.transform().rotation);
}

#[test]
fn object_scale_follows_hand_scale() {
    let tuning = AnimatorTuning::default();
    let eye = Vec3::new(0.0, 6.0, 20.0);
    let mut animator = ObjectAnimator::new(object(1.0));
    let mut prev = 0.0;
    for i in 0..=30 {
        let scale = HandScale::new(-1.0 + 0.15 * i as f32);
        let t = animator.update(&tuning, DT, 0.0, Mode::Formed, eye, scale);
        assert!(t.scale >= tuning.scale_min && t.scale <= tuning.scale_max);
        assert!(t.scale >= prev);
        prev = t.scale;
    }
    assert!((prev - tuning.scale_max).abs() < 1e-5);
}

#[test]
fn facing_rotation_handles_edge_directions() {
    let q = facing_rotation(Vec3::Z).unwrap();
    assert!(q.angle_between(Quat::IDENTITY) < 1e-5);

    assert!(facing_rotation(Vec3::ZERO).is_none());

    let up = facing_rotation(Vec3::Y).unwrap();
    assert!((up * Vec3::Z).distance(Vec3::Y) < 1e-5);

    let side = facing_rotation(Vec3::new(-4.0, 0.0, 0.0)).unwrap();
    assert!((side * Vec3::Z).distance(-Vec3::X) < 1e-5);
    assert!((side * Vec3::Y).distance(Vec3::Y) < 1e-5);
}
