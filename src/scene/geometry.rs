use glam::Vec3;

/// Vertex format shared by every primitive
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

/// Indexed triangle mesh data
///
/// Geometries are immutable once built and may be shared across meshes
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Axis-aligned box centered at the origin, four vertices per face
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

        // (normal, four corners counter-clockwise seen from outside)
        let faces: [(Vec3, [Vec3; 4]); 6] = [
            (
                Vec3::X,
                [
                    Vec3::new(hw, -hh, -hd),
                    Vec3::new(hw, hh, -hd),
                    Vec3::new(hw, hh, hd),
                    Vec3::new(hw, -hh, hd),
                ],
            ),
            (
                Vec3::NEG_X,
                [
                    Vec3::new(-hw, -hh, hd),
                    Vec3::new(-hw, hh, hd),
                    Vec3::new(-hw, hh, -hd),
                    Vec3::new(-hw, -hh, -hd),
                ],
            ),
            (
                Vec3::Y,
                [
                    Vec3::new(-hw, hh, -hd),
                    Vec3::new(-hw, hh, hd),
                    Vec3::new(hw, hh, hd),
                    Vec3::new(hw, hh, -hd),
                ],
            ),
            (
                Vec3::NEG_Y,
                [
                    Vec3::new(-hw, -hh, hd),
                    Vec3::new(-hw, -hh, -hd),
                    Vec3::new(hw, -hh, -hd),
                    Vec3::new(hw, -hh, hd),
                ],
            ),
            (
                Vec3::Z,
                [
                    Vec3::new(-hw, -hh, hd),
                    Vec3::new(hw, -hh, hd),
                    Vec3::new(hw, hh, hd),
                    Vec3::new(-hw, hh, hd),
                ],
            ),
            (
                Vec3::NEG_Z,
                [
                    Vec3::new(hw, -hh, -hd),
                    Vec3::new(-hw, -hh, -hd),
                    Vec3::new(-hw, hh, -hd),
                    Vec3::new(hw, hh, -hd),
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
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }

    /// UV sphere centered at the origin
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);

        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for row in 0..=height_segments {
            let v = row as f32 / height_segments as f32;
            let phi = v * std::f32::consts::PI;

            for col in 0..=width_segments {
                let u = col as f32 / width_segments as f32;
                let theta = u * std::f32::consts::TAU;

                let normal = Vec3::new(
                    phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                );
                vertices.push(Vertex::new(normal * radius, normal));
            }
        }

        let cols = width_segments + 1;
        for row in 0..height_segments {
            for col in 0..width_segments {
                let a = row * cols + col;
                let b = (row + 1) * cols + col;
                let c = (row + 1) * cols + col + 1;
                let d = row * cols + col + 1;

                // Skip the degenerate triangles at the poles
                if row != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if row != height_segments - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Open-angle cylinder with optional differing radii and flat caps
    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        let radial_segments = radial_segments.max(3);
        let half_height = height * 0.5;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        // Side wall: two rings with slant-corrected normals
        let slope = (radius_bottom - radius_top) / height;
        for seg in 0..=radial_segments {
            let theta = seg as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            let normal = Vec3::new(cos, slope, sin).normalize();

            vertices.push(Vertex::new(
                Vec3::new(radius_top * cos, half_height, radius_top * sin),
                normal,
            ));
            vertices.push(Vertex::new(
                Vec3::new(radius_bottom * cos, -half_height, radius_bottom * sin),
                normal,
            ));
        }

        for seg in 0..radial_segments {
            let top = seg * 2;
            let bottom = top + 1;
            let next_top = top + 2;
            let next_bottom = top + 3;

            if radius_top > 0.0 {
                indices.extend_from_slice(&[top, next_top, bottom]);
            }
            indices.extend_from_slice(&[next_top, next_bottom, bottom]);
        }

        // Caps: center vertex plus a fan over a dedicated ring
        let cap = |radius: f32, y: f32, normal: Vec3, vertices: &mut Vec<Vertex>, indices: &mut Vec<u32>| {
            if radius <= 0.0 {
                return;
            }
            let center = vertices.len() as u32;
            vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));

            for seg in 0..=radial_segments {
                let theta = seg as f32 / radial_segments as f32 * std::f32::consts::TAU;
                let (sin, cos) = theta.sin_cos();
                vertices.push(Vertex::new(Vec3::new(radius * cos, y, radius * sin), normal));
            }

            for seg in 0..radial_segments {
                let a = center + 1 + seg;
                let b = center + 2 + seg;
                if normal.y > 0.0 {
                    indices.extend_from_slice(&[center, b, a]);
                } else {
                    indices.extend_from_slice(&[center, a, b]);
                }
            }
        };

        cap(radius_top, half_height, Vec3::Y, &mut vertices, &mut indices);
        cap(radius_bottom, -half_height, Vec3::NEG_Y, &mut vertices, &mut indices);

        Self { vertices, indices }
    }

    /// Cone: a cylinder whose top ring collapses to the apex
    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self::cylinder(0.0, radius, height, radial_segments)
    }

    /// Regular octahedron, flat shaded
    pub fn octahedron(radius: f32) -> Self {
        let px = Vec3::new(radius, 0.0, 0.0);
        let nx = Vec3::new(-radius, 0.0, 0.0);
        let py = Vec3::new(0.0, radius, 0.0);
        let ny = Vec3::new(0.0, -radius, 0.0);
        let pz = Vec3::new(0.0, 0.0, radius);
        let nz = Vec3::new(0.0, 0.0, -radius);

        let faces = [
            [py, pz, px],
            [py, px, nz],
            [py, nz, nx],
            [py, nx, pz],
            [ny, px, pz],
            [ny, nz, px],
            [ny, nx, nz],
            [ny, pz, nx],
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(24);

        for [a, b, c] in faces {
            let normal = (b - a).cross(c - a).normalize();
            let base = vertices.len() as u32;
            vertices.push(Vertex::new(a, normal));
            vertices.push(Vertex::new(b, normal));
            vertices.push(Vertex::new(c, normal));
            indices.extend_from_slice(&[base, base + 1, base + 2]);
        }

        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}
