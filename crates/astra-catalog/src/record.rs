//! Catalog records and JSON ingest.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One catalog entry describing a physical object's orbital and physical
/// parameters.
///
/// Every numeric field is optional: catalog dumps are sparse, and a record
/// missing the fields a classification rule reads simply fails that rule's
/// predicate instead of erroring. `name` is the unique key within a catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyRecord {
    /// Unique human-readable name (e.g., "Earth", "Ceres", "Halley").
    pub name: String,
    /// Name of the parent body this object orbits. Absent for the central
    /// star and for heliocentric small bodies.
    pub target_primary: Option<String>,
    /// Mass in kg.
    pub mass_kg: Option<f64>,
    /// Volume mean radius in km.
    pub vol_mean_radius_km: Option<f64>,
    /// Mass of the atmosphere in kg.
    pub atmosphere_mass_kg: Option<f64>,
    /// Semi-major axis in AU.
    pub semi_major_axis_au: Option<f64>,
    /// Orbital eccentricity (0 = circular).
    pub eccentricity: Option<f64>,
    /// Inclination to the ecliptic in degrees.
    pub inclination_deg: Option<f64>,
    /// Orbital period in days.
    pub orbital_period_days: Option<f64>,
    /// X component of the position, in catalog-native length units.
    pub x: Option<f64>,
    /// Y component of the position.
    pub y: Option<f64>,
    /// Z component of the position.
    pub z: Option<f64>,
}

impl BodyRecord {
    /// The record's 3D position, if all three components are present.
    ///
    /// Records without a full position are excluded from the renderable
    /// scene but remain available to catalog search.
    pub fn position(&self) -> Option<DVec3> {
        match (self.x, self.y, self.z) {
            (Some(x), Some(y), Some(z)) => Some(DVec3::new(x, y, z)),
            _ => None,
        }
    }

    /// Whether this record's parent is the central star.
    pub fn orbits_star(&self) -> bool {
        self.target_primary
            .as_deref()
            .is_some_and(|p| p.eq_ignore_ascii_case("sun"))
    }

    /// Whether this record orbits a body other than the central star.
    pub fn orbits_non_star(&self) -> bool {
        self.target_primary
            .as_deref()
            .is_some_and(|p| !p.eq_ignore_ascii_case("sun"))
    }

    /// Whether this record orbits nothing it names as a parent.
    pub fn is_parentless(&self) -> bool {
        self.target_primary.is_none()
    }
}

/// An ordered collection of body records, as delivered by the catalog
/// service collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Records in catalog order.
    pub bodies: Vec<BodyRecord>,
}

impl Catalog {
    /// Parse a catalog from a JSON document.
    ///
    /// Accepts either a bare array of records or an object with a `bodies`
    /// array, since catalog endpoints serve both shapes.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        if let Ok(bodies) = serde_json::from_str::<Vec<BodyRecord>>(json) {
            return Ok(Self { bodies });
        }
        serde_json::from_str(json).map_err(CatalogError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_requires_all_components() {
        let mut record = BodyRecord {
            x: Some(1.0),
            y: Some(2.0),
            ..Default::default()
        };
        assert!(record.position().is_none());

        record.z = Some(3.0);
        assert_eq!(record.position(), Some(DVec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_parent_star_match_is_case_insensitive() {
        for parent in ["sun", "Sun", "SUN"] {
            let record = BodyRecord {
                target_primary: Some(parent.to_string()),
                ..Default::default()
            };
            assert!(record.orbits_star(), "parent {parent:?} should match the star");
            assert!(!record.orbits_non_star());
        }
    }

    #[test]
    fn test_parentless_record() {
        let record = BodyRecord::default();
        assert!(record.is_parentless());
        assert!(!record.orbits_star());
        assert!(!record.orbits_non_star());
    }

    #[test]
    fn test_sparse_json_parses() {
        let json = r#"[{"name": "Vesta", "vol_mean_radius_km": 262.7}]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.bodies.len(), 1);
        assert_eq!(catalog.bodies[0].name, "Vesta");
        assert!(catalog.bodies[0].mass_kg.is_none());
        assert!(catalog.bodies[0].position().is_none());
    }

    #[test]
    fn test_object_form_parses() {
        let json = r#"{"bodies": [{"name": "Sun"}, {"name": "Earth", "target_primary": "Sun"}]}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.bodies.len(), 2);
        assert!(catalog.bodies[1].orbits_star());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Catalog::from_json_str("not json").is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"[{"name": "Eros", "albedo": 0.25, "discovered": "1898"}]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.bodies[0].name, "Eros");
    }
}
