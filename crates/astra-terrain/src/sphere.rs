//! Displaced UV-sphere mesh for the body detail view.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::heightfield::HeightGrid;

/// Fraction of the radius the terrain may raise or lower the surface.
const DISPLACEMENT_SCALE: f32 = 0.1;

/// Interleaved vertex for the shell renderer's upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    /// Displaced position.
    pub position: [f32; 3],
    /// Normal recomputed after displacement.
    pub normal: [f32; 3],
    /// Raw elevation sample, for topographic shading.
    pub height: f32,
}

/// A displaced-sphere heightfield mesh with a per-vertex height attribute.
///
/// The elevation that displaced each vertex is retained in `heights` so
/// the shell's contour shader can band the surface without re-deriving it
/// from positions.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    /// Displaced vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, computed after displacement.
    pub normals: Vec<Vec3>,
    /// UV coordinates used for the heightfield lookup.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices.
    pub indices: Vec<u32>,
    /// Per-vertex elevation, one entry per position.
    pub heights: Vec<f32>,
}

impl TerrainMesh {
    /// Tessellate a UV sphere with `segments × segments` patches and
    /// displace each vertex by the grid elevation at its UV coordinate.
    ///
    /// Vertices are laid out in `segments + 1` rings of `segments + 1`
    /// columns; pole rows skip their degenerate triangle per quad.
    pub(crate) fn build(radius: f32, segments: u32, grid: &HeightGrid) -> Self {
        let ring = segments + 1;
        let vertex_count = (ring * ring) as usize;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        let mut heights = Vec::with_capacity(vertex_count);

        for iy in 0..=segments {
            let v = iy as f32 / segments as f32;
            let theta = v * std::f32::consts::PI;
            for ix in 0..=segments {
                let u = ix as f32 / segments as f32;
                let phi = u * std::f32::consts::TAU;
                // Unit-length by construction; poles sit at v = 0 and v = 1.
                let dir = Vec3::new(
                    theta.sin() * phi.cos(),
                    theta.cos(),
                    theta.sin() * phi.sin(),
                );
                let height = grid.sample_uv(u, v);
                positions.push(dir * radius * (1.0 + height * DISPLACEMENT_SCALE));
                uvs.push([u, v]);
                heights.push(height);
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = iy * ring + ix;
                let b = a + 1;
                let c = a + ring;
                let d = c + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != segments - 1 {
                    indices.extend_from_slice(&[a, d, c]);
                }
            }
        }

        let normals = compute_vertex_normals(&positions, &indices);

        Self {
            positions,
            normals,
            uvs,
            indices,
            heights,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave the buffers for GPU upload.
    pub fn vertices(&self) -> Vec<TerrainVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.heights)
            .map(|((position, normal), &height)| TerrainVertex {
                position: position.to_array(),
                normal: normal.to_array(),
                height,
            })
            .collect()
    }
}

/// Area-weighted vertex normals from the displaced triangles.
///
/// Accumulating the unnormalized cross products weights each face by its
/// area, then one normalize per vertex smooths the result.
fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    for normal in &mut normals {
        *normal = normal.normalize_or(Vec3::Y);
    }
    normals
}
