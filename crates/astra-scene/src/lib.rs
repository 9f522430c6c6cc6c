//! Scene state and camera-mode control for the planetary-system viewer.
//!
//! [`SceneSession`] sits between the catalog and the rendering shell: it
//! owns the renderable-body set, the visibility filter, label state,
//! selection, and the camera pose for the active navigation mode. The
//! shell feeds it user intents and a per-frame input snapshot, and reads
//! back the visible bodies and camera pose each frame.

pub mod body;
pub mod camera;
pub mod filter;
pub mod session;

pub use body::{AU_KM, BODY_SIZE_FACTOR, MIN_SCALED_RADIUS, RenderableBody};
pub use camera::{CameraMode, CameraPose, PoseStore};
pub use filter::{DWARF_PLANETS, GAS_GIANTS, PLANETS, VisibilityFilter};
pub use session::{GlossaryEntry, SceneSession};
