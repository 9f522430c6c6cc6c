//! Procedural terrain for the body detail view.
//!
//! Synthesizes a layered-noise heightfield and displaces a UV-sphere mesh
//! by it, keeping the raw elevation as a per-vertex attribute for the
//! shell's topographic contour shader. Generation is synchronous and
//! CPU-bound in `O(resolution²)`; callers cap the resolution to stay
//! inside a frame budget. The resulting buffers are plain memory; the
//! shell owns their GPU lifetime and simply drops them when the detail
//! view closes.

pub mod banding;
pub mod heightfield;
pub mod sphere;

pub use banding::{BandingParams, DetailSpin};
pub use heightfield::HeightGrid;
pub use sphere::{TerrainMesh, TerrainVertex};

use rand::Rng;

/// Errors for invalid generation parameters.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// Radius must be a positive, finite length.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    /// The sphere tessellation and the sample grid both derive from the
    /// resolution, which must be a positive even integer.
    #[error("resolution must be a positive even integer, got {0}")]
    InvalidResolution(u32),
}

/// Generate a displaced-sphere heightfield for a body surface.
///
/// `resolution` sets both the heightfield grid side and the sphere
/// tessellation (`resolution / 2` segments per axis). Passing `None` for
/// the seed draws a fresh one, so repeated opens of the same body show
/// different terrain; pass an explicit seed for reproducible output.
pub fn generate(
    radius: f32,
    resolution: u32,
    seed: Option<u32>,
) -> Result<TerrainMesh, TerrainError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(TerrainError::InvalidRadius(radius));
    }
    if resolution == 0 || resolution % 2 != 0 {
        return Err(TerrainError::InvalidResolution(resolution));
    }
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let grid = HeightGrid::generate(resolution, seed);
    Ok(TerrainMesh::build(radius, resolution / 2, &grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = generate(radius, 64, Some(1));
            assert!(
                matches!(result, Err(TerrainError::InvalidRadius(_))),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_bad_resolution() {
        for resolution in [0, 1, 63] {
            let result = generate(1.0, resolution, Some(1));
            assert!(
                matches!(result, Err(TerrainError::InvalidResolution(_))),
                "resolution {resolution} should be rejected"
            );
        }
    }

    #[test]
    fn test_vertex_count_matches_tessellation() {
        // resolution/2 segments per axis -> (segments + 1)^2 vertices.
        let mesh = generate(1.0, 64, Some(7)).unwrap();
        assert_eq!(mesh.vertex_count(), 33 * 33);
    }

    #[test]
    fn test_displaced_radii_within_ten_percent() {
        let mesh = generate(1.0, 64, Some(42)).unwrap();
        for pos in &mesh.positions {
            let r = pos.length();
            assert!(
                (0.9..=1.1).contains(&r),
                "displaced radius {r} outside [0.9, 1.1]"
            );
        }
    }

    #[test]
    fn test_no_non_finite_output() {
        let mesh = generate(2.5, 128, Some(3)).unwrap();
        assert!(mesh.positions.iter().all(|p| p.is_finite()));
        assert!(mesh.normals.iter().all(|n| n.is_finite()));
        assert!(mesh.heights.iter().all(|h| h.is_finite()));
    }

    #[test]
    fn test_same_seed_reproduces_heights() {
        let a = generate(1.0, 32, Some(99)).unwrap();
        let b = generate(1.0, 32, Some(99)).unwrap();
        assert_eq!(a.heights, b.heights);

        let c = generate(1.0, 32, Some(100)).unwrap();
        assert_ne!(a.heights, c.heights);
    }

    #[test]
    fn test_unseeded_generation_is_valid() {
        let mesh = generate(1.0, 16, None).unwrap();
        assert_eq!(mesh.vertex_count(), 9 * 9);
        assert!(mesh.positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_radius_scales_output() {
        let small = generate(1.0, 32, Some(5)).unwrap();
        let large = generate(10.0, 32, Some(5)).unwrap();
        for (s, l) in small.positions.iter().zip(&large.positions) {
            assert!(((l.length() / s.length()) - 10.0).abs() < 1e-3);
        }
    }
}
