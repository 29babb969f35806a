// Shared layout/motion tuning constants used by the core and the native driver.

// Tree layout (formed arrangement)
pub const TREE_HEIGHT: f32 = 12.0; // vertical extent H of the formed cone
pub const TREE_BASE_Y: f32 = 0.0; // world-space Y of the cone base
pub const TREE_MAX_RADIUS: f32 = 4.5; // cone radius at the base (Rmax)
pub const TREE_RADIUS_OFFSET: f32 = 1.0; // outward offset r0 so placards sit outside the foliage
pub const FORMED_HEIGHT_MIN: f32 = 0.2; // normalized height of the first object
pub const FORMED_HEIGHT_SPAN: f32 = 0.6; // normalized height range covered by all objects
pub const GOLDEN_ANGLE: f32 = 2.399_963_2; // pi * (3 - sqrt(5))

// Chaos arrangement
pub const CHAOS_RADIUS_MIN: f32 = 3.0;
pub const CHAOS_RADIUS_MAX: f32 = 7.0;
pub const CHAOS_HEIGHT_JITTER: f32 = 4.0; // symmetric band around CHAOS_CENTER_Y
pub const CHAOS_CENTER_Y: f32 = 6.0; // reference height near the viewpoint
pub const CHAOS_X_STRETCH: f32 = 1.5; // widens the X spread relative to Z

// Per-object convergence speed range
pub const OBJECT_SPEED_MIN: f32 = 0.8;
pub const OBJECT_SPEED_MAX: f32 = 2.3;

// Gesture signal
pub const HAND_SCALE_MIN: f32 = 0.3;
pub const HAND_SCALE_MAX: f32 = 2.5;
pub const HAND_SCALE_NEUTRAL: f32 = 1.0;
pub const GESTURE_STALE_AFTER_SEC: f64 = 0.5; // samples older than this read as undetected

// Orbit camera
pub const FOCAL_HEIGHT: f32 = 6.0; // look-at Y; constant target height
pub const AZIMUTH_RANGE_MULTIPLIER: f32 = 3.0; // K_az: full x sweep covers 3*pi
pub const POLAR_MIN: f32 = std::f32::consts::FRAC_PI_4;
pub const POLAR_MAX: f32 = std::f32::consts::PI / 1.8;
pub const POLAR_INPUT_OFFSET: f32 = 0.2; // y below this pins the camera to POLAR_MIN
pub const POLAR_INPUT_SENSITIVITY: f32 = 1.6; // y in [0.2, 0.825] spans the full polar range
pub const DISTANCE_MIN: f32 = 8.0;
pub const DISTANCE_MAX: f32 = 30.0;
pub const DISTANCE_DEFAULT: f32 = 20.0;
pub const ANGLE_LERP_SPEED: f32 = 4.0; // per second
pub const DISTANCE_LERP_SPEED: f32 = 2.0; // per second, slower than angles

// Lens
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Object animation
pub const OBJECT_SCALE_MIN: f32 = 0.6;
pub const OBJECT_SCALE_MAX: f32 = 1.6;
pub const FACING_SLERP_FORMED: f32 = 2.0; // per second
pub const FACING_SLERP_CHAOS: f32 = 6.0; // per second, reorient faster while scattered

// Secondary motion, formed: gentle sway/tilt
pub const SWAY_TILT_AMPLITUDE: f32 = 0.05; // radians about local Z
pub const SWAY_TILT_FREQUENCY: f32 = 1.1; // radians per second
pub const SWAY_NOD_AMPLITUDE: f32 = 0.03; // radians about local X
pub const SWAY_NOD_FREQUENCY: f32 = 0.7;

// Secondary motion, chaos: stronger wobble
pub const WOBBLE_PITCH_AMPLITUDE: f32 = 0.18; // radians about local X
pub const WOBBLE_PITCH_FREQUENCY: f32 = 2.3;
pub const WOBBLE_YAW_AMPLITUDE: f32 = 0.12; // radians about local Y
pub const WOBBLE_YAW_FREQUENCY: f32 = 1.7;
