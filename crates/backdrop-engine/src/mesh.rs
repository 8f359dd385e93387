//! Procedural primitive meshes
//!
//! The three backdrop solids are generated, not loaded: a UV sphere, a
//! box, and a torus at the backdrop's reference dimensions. All
//! generators return CCW-wound triangle lists.

use crate::bodies::BodyKind;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mesh {
    /// `[x, y, z]` vertices
    pub positions: Vec<[f32; 3]>,
    /// Triangle list (CCW winding)
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SphereOptions {
    pub radius: f32,
    pub stacks: u32,
    pub slices: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 0.8,
            stacks: 64,
            slices: 64,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BoxOptions {
    pub size: f32,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self { size: 1.2 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TorusOptions {
    pub radius: f32,
    pub tube_radius: f32,
    /// Segments around the tube cross-section
    pub tube_segments: u32,
    /// Segments around the main ring
    pub ring_segments: u32,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            tube_radius: 0.4,
            tube_segments: 32,
            ring_segments: 64,
        }
    }
}

/// Mesh for a body kind at the backdrop's reference dimensions
pub fn primitive_mesh(kind: BodyKind) -> Mesh {
    match kind {
        BodyKind::Sphere => generate_uv_sphere(SphereOptions::default()),
        BodyKind::Box => generate_box(BoxOptions::default()),
        BodyKind::Torus => generate_torus(TorusOptions::default()),
    }
}

/// Generate a UV sphere.
pub fn generate_uv_sphere(opts: SphereOptions) -> Mesh {
    let stacks = opts.stacks.max(2);
    let slices = opts.slices.max(3);

    let mut positions = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let phi = v * std::f32::consts::PI;

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let theta = u * (2.0 * std::f32::consts::PI);

            positions.push([
                opts.radius * sin_phi * theta.cos(),
                opts.radius * cos_phi,
                opts.radius * sin_phi * theta.sin(),
            ]);
        }
    }

    let ring = slices + 1;
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);

    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * ring + slice;
            let i1 = i0 + 1;
            let i2 = (stack + 1) * ring + slice;
            let i3 = i2 + 1;

            // Two triangles per quad (CCW)
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    Mesh { positions, indices }
}

/// Generate an axis-aligned cube centered at the origin.
pub fn generate_box(opts: BoxOptions) -> Mesh {
    let h = opts.size * 0.5;

    // 4 vertices per face so each face can carry its own normal later.
    let faces: [[[f32; 3]; 4]; 6] = [
        [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],     // +z
        [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]], // -z
        [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],     // +x
        [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]], // -x
        [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],     // +y
        [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]], // -y
    ];

    let mut positions = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for face in faces {
        let base = positions.len() as u32;
        positions.extend_from_slice(&face);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { positions, indices }
}

/// Generate a torus in the xy plane.
pub fn generate_torus(opts: TorusOptions) -> Mesh {
    let ring_segments = opts.ring_segments.max(3);
    let tube_segments = opts.tube_segments.max(3);

    let mut positions =
        Vec::with_capacity(((ring_segments + 1) * (tube_segments + 1)) as usize);

    for ring in 0..=ring_segments {
        let u = ring as f32 / ring_segments as f32;
        let theta = u * (2.0 * std::f32::consts::PI);

        for tube in 0..=tube_segments {
            let v = tube as f32 / tube_segments as f32;
            let phi = v * (2.0 * std::f32::consts::PI);

            let r = opts.radius + opts.tube_radius * phi.cos();
            positions.push([
                r * theta.cos(),
                r * theta.sin(),
                opts.tube_radius * phi.sin(),
            ]);
        }
    }

    let ring = tube_segments + 1;
    let mut indices = Vec::with_capacity((ring_segments * tube_segments * 6) as usize);

    for seg in 0..ring_segments {
        for tube in 0..tube_segments {
            let i0 = seg * ring + tube;
            let i1 = i0 + 1;
            let i2 = (seg + 1) * ring + tube;
            let i3 = i2 + 1;

            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    Mesh { positions, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_vertex_count() {
        let mesh = generate_uv_sphere(SphereOptions::default());
        // (stacks+1) * (slices+1) vertices, stacks*slices quads
        assert_eq!(mesh.vertex_count(), 65 * 65);
        assert_eq!(mesh.triangle_count(), 64 * 64 * 2);
    }

    #[test]
    fn test_sphere_vertices_on_radius() {
        let mesh = generate_uv_sphere(SphereOptions::default());
        for [x, y, z] in &mesh.positions {
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - 0.8).abs() < 1e-5);
        }
    }

    #[test]
    fn test_box_counts() {
        let mesh = generate_box(BoxOptions::default());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        for [x, y, z] in &mesh.positions {
            assert!(x.abs() <= 0.6 + 1e-6);
            assert!(y.abs() <= 0.6 + 1e-6);
            assert!(z.abs() <= 0.6 + 1e-6);
        }
    }

    #[test]
    fn test_torus_counts_and_bounds() {
        let opts = TorusOptions::default();
        let mesh = generate_torus(opts);
        assert_eq!(mesh.vertex_count(), (65 * 33) as usize);
        assert_eq!(mesh.triangle_count(), (64 * 32 * 2) as usize);

        for [x, y, z] in &mesh.positions {
            let ring_dist = (x * x + y * y).sqrt();
            assert!(ring_dist <= opts.radius + opts.tube_radius + 1e-5);
            assert!(ring_dist >= opts.radius - opts.tube_radius - 1e-5);
            assert!(z.abs() <= opts.tube_radius + 1e-5);
        }
    }

    #[test]
    fn test_indices_in_range() {
        for kind in BodyKind::all() {
            let mesh = primitive_mesh(*kind);
            let count = mesh.vertex_count() as u32;
            assert!(mesh.indices.iter().all(|&i| i < count));
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }
}
