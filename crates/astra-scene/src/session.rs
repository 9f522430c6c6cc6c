//! The scene session: renderable set, filters, selection, and camera state.

use astra_catalog::{BodyCategory, BodyRecord, classify};
use astra_input::PanInput;
use glam::{DVec3, Vec2};
use tracing::debug;

use crate::body::RenderableBody;
use crate::camera::{CameraMode, CameraPose, PoseStore};
use crate::filter::VisibilityFilter;

/// Pan speed in scene units per tick at the reference camera distance.
const BASE_PAN_SPEED: f64 = 0.5;

/// Camera distance at which the pan speed equals [`BASE_PAN_SPEED`].
const PAN_REFERENCE_DISTANCE: f64 = 30.0;

/// Multiple of a body's display radius the camera backs off to on focus.
const FOCUS_DISTANCE_FACTOR: f64 = 5.0;

/// One glossary line: a body's name and its classifier-assigned category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// Catalog name.
    pub name: String,
    /// Classifier-assigned category.
    pub category: BodyCategory,
}

/// Owns the live scene state between the catalog and the rendering shell.
///
/// The session is pull-based: every mutating operation leaves the
/// renderable set consistent with the latest catalog, filter, and label
/// inputs before returning, so the shell can read [`bodies`](Self::bodies)
/// and [`pose`](Self::pose) at any point in the frame. No operation
/// errors; unknown names and unrecognized values degrade to no-ops or
/// defaults.
#[derive(Clone, Debug)]
pub struct SceneSession {
    bodies: Vec<RenderableBody>,
    glossary: Vec<GlossaryEntry>,
    filter: VisibilityFilter,
    labels_visible: bool,
    selected: Option<String>,
    mode: CameraMode,
    pose: CameraPose,
    saved_poses: PoseStore,
}

impl Default for SceneSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneSession {
    /// Create an empty session in planar mode at the planar default pose.
    pub fn new() -> Self {
        let mode = CameraMode::default();
        Self {
            bodies: Vec::new(),
            glossary: Vec::new(),
            filter: VisibilityFilter::All,
            labels_visible: true,
            selected: None,
            mode,
            pose: mode.default_pose(),
            saved_poses: PoseStore::default(),
        }
    }

    /// Replace the renderable set from a fresh catalog.
    ///
    /// Classification is re-run per record; records without a full 3D
    /// position are excluded from the scene but stay in the glossary.
    /// Filter, label flag, selection, camera mode, live pose, and saved
    /// poses all persist across reloads.
    pub fn load_catalog(&mut self, records: &[BodyRecord]) {
        self.glossary = records
            .iter()
            .map(|record| GlossaryEntry {
                name: record.name.clone(),
                category: classify(record),
            })
            .collect();
        self.bodies = records.iter().filter_map(RenderableBody::from_record).collect();
        self.recompute();
        debug!(
            total = records.len(),
            renderable = self.bodies.len(),
            "catalog loaded"
        );
    }

    /// Set which bodies are drawn. Persists until changed again.
    pub fn set_visibility_filter(&mut self, filter: VisibilityFilter) {
        self.filter = filter;
        self.recompute();
    }

    /// Toggle name labels on every body. Mesh visibility is unaffected.
    pub fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
        self.recompute();
    }

    /// Focus a body by name, or clear focus with `None`.
    ///
    /// Focusing recenters the look target on the body and backs the
    /// camera off along +X by five times the body's display radius. An
    /// unknown name clears focus without error.
    pub fn select_body(&mut self, name: Option<&str>) {
        let Some(name) = name else {
            self.selected = None;
            return;
        };
        match self.bodies.iter().find(|b| b.name == name) {
            Some(body) => {
                self.pose.target = body.position;
                self.pose.position =
                    body.position + DVec3::X * (FOCUS_DISTANCE_FACTOR * body.scaled_radius);
                self.selected = Some(name.to_string());
            }
            None => self.selected = None,
        }
    }

    /// Switch between the planar and free cameras.
    ///
    /// The live pose is snapshotted under the outgoing mode; the incoming
    /// mode resumes from its own snapshot, or from its default vantage
    /// the first time it is entered.
    pub fn toggle_camera_mode(&mut self) {
        self.saved_poses.save(self.mode, self.pose);
        self.mode = self.mode.toggled();
        self.pose = self.saved_poses.restore_or_default(self.mode);
        debug!(mode = ?self.mode, "camera mode switched");
    }

    /// Per-frame update, driven by the rendering shell once per display
    /// frame.
    ///
    /// In planar mode the held directional keys translate both the camera
    /// and its look target in the viewing plane, scaled by the camera's
    /// distance from the origin so perceived speed stays constant across
    /// zoom. The free camera ignores keyboard pan; the shell's orbit
    /// controls own it there.
    pub fn tick(&mut self, input: &PanInput) {
        if self.mode != CameraMode::Planar {
            return;
        }
        let axis = input.axis();
        if axis == Vec2::ZERO {
            return;
        }
        let speed = BASE_PAN_SPEED * self.pose.position.length() / PAN_REFERENCE_DISTANCE;
        let movement = DVec3::new(axis.x as f64, axis.y as f64, 0.0) * speed;
        self.pose.position += movement;
        self.pose.target += movement;
    }

    /// Overwrite the live pose.
    ///
    /// The rendering shell calls this when its orbit controls move the
    /// camera, keeping the session authoritative for mode switches and
    /// focus.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    /// Name + category view over the full catalog, filtered by a
    /// case-insensitive substring of the body name. An empty search
    /// matches everything.
    pub fn glossary(&self, search: &str) -> Vec<&GlossaryEntry> {
        let needle = search.to_lowercase();
        self.glossary
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// All renderable bodies, visible or not.
    pub fn bodies(&self) -> &[RenderableBody] {
        &self.bodies
    }

    /// The bodies the shell should draw this frame.
    pub fn visible_bodies(&self) -> impl Iterator<Item = &RenderableBody> {
        self.bodies.iter().filter(|b| b.visible)
    }

    /// The current camera pose.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// The active camera mode.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// The focused body's name, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The active visibility filter.
    pub fn visibility_filter(&self) -> VisibilityFilter {
        self.filter
    }

    /// Whether name labels are enabled.
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// Re-derive per-body visibility from the filter and label flag.
    ///
    /// Star-category bodies are always drawn regardless of filter; a
    /// label is drawn only on a visible body.
    fn recompute(&mut self) {
        for body in &mut self.bodies {
            body.visible =
                body.category == BodyCategory::Star || self.filter.matches(&body.name);
            body.label_visible = body.visible && self.labels_visible;
        }
    }
}
