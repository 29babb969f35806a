pub mod animator;
pub mod camera;
pub mod config;
pub mod constants;
pub mod ease;
pub mod gesture;
pub mod instance;
pub mod mode;
pub mod placard;
pub mod placement;
pub mod scene;

pub use animator::{ObjectAnimator, ObjectTransform};
pub use camera::{CameraPose, Lens, OrbitCamera, OrbitState};
pub use config::{ConfigError, SceneConfig};
pub use constants::*;
pub use gesture::{GestureLatch, HandSample, HandScale};
pub use instance::{build_instances, CameraUniform, InstanceRaw};
pub use mode::Mode;
pub use placard::{AssetError, PlacardTextures, TextureSlot};
pub use placement::{generate_placements, PlacementCache, SceneObject};
pub use scene::{FrameOutput, Scene, TextureId};
