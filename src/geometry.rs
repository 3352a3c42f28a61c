use std::f32::consts::TAU;

use glam::{vec3, Vec3};

use crate::types::GeometryKind;

/// Mesh vertex data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// An indexed triangle mesh in local space
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Tessellate a primitive with the dimensions the scene uses
    pub fn from_kind(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Octahedron => octahedron(1.0),
            GeometryKind::Cone => cone(1.0, 2.0, 32),
            GeometryKind::Sphere => sphere(1.0, 32, 16),
            GeometryKind::Torus => torus(1.0, 0.4, 16, 60),
            GeometryKind::Cuboid => cuboid(1.0, 1.0, 1.0),
        }
    }
}

/// Octahedron with flat-shaded faces (vertices duplicated per face)
pub fn octahedron(radius: f32) -> MeshData {
    let tips = [
        vec3(radius, 0.0, 0.0),
        vec3(-radius, 0.0, 0.0),
        vec3(0.0, radius, 0.0),
        vec3(0.0, -radius, 0.0),
        vec3(0.0, 0.0, radius),
        vec3(0.0, 0.0, -radius),
    ];

    // One face per (x, y, z) sign combination, wound counter-clockwise
    let faces: [[Vec3; 3]; 8] = [
        [tips[0], tips[2], tips[4]],
        [tips[2], tips[1], tips[4]],
        [tips[1], tips[3], tips[4]],
        [tips[3], tips[0], tips[4]],
        [tips[2], tips[0], tips[5]],
        [tips[1], tips[2], tips[5]],
        [tips[3], tips[1], tips[5]],
        [tips[0], tips[3], tips[5]],
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(24);

    for face in faces {
        let normal = (face[1] - face[0]).cross(face[2] - face[0]).normalize();
        for corner in face {
            indices.push(vertices.len() as u32);
            vertices.push(Vertex::new(corner, normal));
        }
    }

    MeshData { vertices, indices }
}

/// Cone centered at the origin, apex up, with a base cap
pub fn cone(radius: f32, height: f32, segments: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let half = height * 0.5;

    // Side: a base ring plus one apex vertex per segment so the seam
    // normal interpolates cleanly
    for seg in 0..=segments {
        let theta = TAU * seg as f32 / segments as f32;
        let normal = vec3(height * theta.cos(), radius, height * theta.sin()).normalize();
        vertices.push(Vertex::new(
            vec3(radius * theta.cos(), -half, radius * theta.sin()),
            normal,
        ));
    }
    for seg in 0..segments {
        let theta = TAU * (seg as f32 + 0.5) / segments as f32;
        let normal = vec3(height * theta.cos(), radius, height * theta.sin()).normalize();
        vertices.push(Vertex::new(vec3(0.0, half, 0.0), normal));
    }
    for seg in 0..segments {
        indices.push(seg);
        indices.push(segments + 1 + seg);
        indices.push(seg + 1);
    }

    // Base cap fan, facing down
    let base = vertices.len() as u32;
    vertices.push(Vertex::new(vec3(0.0, -half, 0.0), Vec3::NEG_Y));
    for seg in 0..=segments {
        let theta = TAU * seg as f32 / segments as f32;
        vertices.push(Vertex::new(
            vec3(radius * theta.cos(), -half, radius * theta.sin()),
            Vec3::NEG_Y,
        ));
    }
    for seg in 0..segments {
        indices.push(base);
        indices.push(base + 1 + seg);
        indices.push(base + 2 + seg);
    }

    MeshData { vertices, indices }
}

/// UV sphere generated by latitude/longitude subdivision
pub fn sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let normal = vec3(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            vertices.push(Vertex::new(normal * radius, normal));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    MeshData { vertices, indices }
}

/// Torus in the XY plane, matching the original scene's orientation
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for j in 0..=radial_segments {
        let v = TAU * j as f32 / radial_segments as f32;

        for i in 0..=tubular_segments {
            let u = TAU * i as f32 / tubular_segments as f32;

            let center = vec3(radius * u.cos(), radius * u.sin(), 0.0);
            let position = vec3(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );

            vertices.push(Vertex::new(position, (position - center).normalize()));
        }
    }

    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let current = j * (tubular_segments + 1) + i;
            let next = current + tubular_segments + 1;

            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    MeshData { vertices, indices }
}

/// Axis-aligned box with flat face normals
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);

    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Z,
            [
                vec3(-x, -y, z),
                vec3(x, -y, z),
                vec3(x, y, z),
                vec3(-x, y, z),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                vec3(x, -y, -z),
                vec3(-x, -y, -z),
                vec3(-x, y, -z),
                vec3(x, y, -z),
            ],
        ),
        (
            Vec3::Y,
            [
                vec3(-x, y, z),
                vec3(x, y, z),
                vec3(x, y, -z),
                vec3(-x, y, -z),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                vec3(-x, -y, -z),
                vec3(x, -y, -z),
                vec3(x, -y, z),
                vec3(-x, -y, z),
            ],
        ),
        (
            Vec3::X,
            [
                vec3(x, -y, z),
                vec3(x, -y, -z),
                vec3(x, y, -z),
                vec3(x, y, z),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                vec3(-x, -y, -z),
                vec3(-x, -y, z),
                vec3(-x, y, z),
                vec3(-x, y, -z),
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for corner in corners {
            vertices.push(Vertex::new(corner, normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    MeshData { vertices, indices }
}
