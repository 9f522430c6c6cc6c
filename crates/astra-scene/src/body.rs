//! Renderable bodies derived from catalog records.

use astra_catalog::{BodyCategory, BodyRecord, classify};
use glam::DVec3;

/// 1 AU in km; the catalog's native length unit maps to one scene unit.
pub const AU_KM: f64 = 149_597_870.7;

/// Exaggeration factor applied to physical radii so bodies stay visible
/// at system scale.
pub const BODY_SIZE_FACTOR: f64 = 50_000.0;

/// Floor for the displayed radius, in scene units.
pub const MIN_SCALED_RADIUS: f64 = 0.01;

/// A catalog record enriched with display state for the scene.
///
/// Instances live for one catalog load; `load_catalog` discards and
/// rebuilds the whole set, re-deriving the category from the record
/// rather than carrying one over.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableBody {
    /// Catalog name (unique key).
    pub name: String,
    /// Classifier-assigned category.
    pub category: BodyCategory,
    /// Display color in linear RGB, derived from the category.
    pub color: [f32; 3],
    /// Position in scene units.
    pub position: DVec3,
    /// Exaggerated display radius in scene units.
    pub scaled_radius: f64,
    /// Whether the mesh is drawn this frame.
    pub visible: bool,
    /// Whether the name label is drawn this frame.
    pub label_visible: bool,
}

impl RenderableBody {
    /// Build a renderable body from a record, or `None` when the record
    /// has no spatial position.
    pub fn from_record(record: &BodyRecord) -> Option<Self> {
        let position = record.position()?;
        let category = classify(record);
        let radius_km = record.vol_mean_radius_km.unwrap_or(0.0);
        let scaled_radius = (radius_km * BODY_SIZE_FACTOR / AU_KM).max(MIN_SCALED_RADIUS);
        Some(Self {
            name: record.name.clone(),
            category,
            color: category.color(),
            position,
            scaled_radius,
            visible: true,
            label_visible: true,
        })
    }
}
