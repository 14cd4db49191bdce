//! Shape generation for scene primitives
//!
//! Everything renders through one triangle-list pipeline, so shapes are
//! emitted as flat vertex vectors.

use glam::Vec3;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Direction the fixed scene light shines from
const LIGHT_DIR: Vec3 = Vec3::new(0.4, 0.7, 0.6);
const AMBIENT: f32 = 0.25;

/// Generate a flat quad with one color per corner, interpolated across
/// the face. Corner order: (+w,+h), (+w,-h), (-w,-h), (-w,+h).
pub fn quad(
    center_x: f32,
    center_y: f32,
    z: f32,
    half_w: f32,
    half_h: f32,
    corner_colors: [[f32; 4]; 4],
) -> Vec<Vertex> {
    let c0 = Vertex::new(center_x + half_w, center_y + half_h, z, corner_colors[0]);
    let c1 = Vertex::new(center_x + half_w, center_y - half_h, z, corner_colors[1]);
    let c2 = Vertex::new(center_x - half_w, center_y - half_h, z, corner_colors[2]);
    let c3 = Vertex::new(center_x - half_w, center_y + half_h, z, corner_colors[3]);

    vec![c0, c1, c2, c0, c2, c3]
}

/// Lambert-shade a base color for a surface normal
fn shade(base: [f32; 4], normal: Vec3) -> [f32; 4] {
    let light = LIGHT_DIR.normalize();
    let diffuse = normal.dot(light).max(0.0);
    let intensity = AMBIENT + (1.0 - AMBIENT) * diffuse;
    [
        base[0] * intensity,
        base[1] * intensity,
        base[2] * intensity,
        base[3],
    ]
}

/// Generate a lat/long-tessellated sphere with per-vertex shading
pub fn sphere(center: Vec3, radius: f32, base: [f32; 4], slices: u32, stacks: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((slices * stacks * 6) as usize);

    let point = |stack: u32, slice: u32| -> (Vec3, Vec3) {
        let phi = -PI / 2.0 + PI * stack as f32 / stacks as f32;
        let theta = 2.0 * PI * slice as f32 / slices as f32;
        let normal = Vec3::new(
            phi.cos() * theta.cos(),
            phi.sin(),
            phi.cos() * theta.sin(),
        );
        (center + normal * radius, normal)
    };

    for stack in 0..stacks {
        for slice in 0..slices {
            let (p00, n00) = point(stack, slice);
            let (p01, n01) = point(stack, slice + 1);
            let (p10, n10) = point(stack + 1, slice);
            let (p11, n11) = point(stack + 1, slice + 1);

            let v00 = Vertex::new(p00.x, p00.y, p00.z, shade(base, n00));
            let v01 = Vertex::new(p01.x, p01.y, p01.z, shade(base, n01));
            let v10 = Vertex::new(p10.x, p10.y, p10.z, shade(base, n10));
            let v11 = Vertex::new(p11.x, p11.y, p11.z, shade(base, n11));

            vertices.push(v00);
            vertices.push(v10);
            vertices.push(v11);

            vertices.push(v00);
            vertices.push(v11);
            vertices.push(v01);
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_is_two_triangles() {
        let colors = [[1.0, 0.0, 0.0, 1.0]; 4];
        let verts = quad(0.0, 0.0, -30.0, 3.0, 1.0, colors);
        assert_eq!(verts.len(), 6);
        // All corners at the requested depth
        assert!(verts.iter().all(|v| v.position[2] == -30.0));
    }

    #[test]
    fn test_quad_corner_extents() {
        let colors = [[1.0; 4]; 4];
        let verts = quad(2.0, -11.0, -30.0, 3.0, 1.0, colors);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 5.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), -12.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), -10.0);
    }

    #[test]
    fn test_sphere_vertex_count_and_radius() {
        let center = Vec3::new(1.0, 2.0, -30.0);
        let verts = sphere(center, 0.5, [0.8, 0.0, 0.1, 1.0], 20, 20);
        assert_eq!(verts.len(), 20 * 20 * 6);
        for v in &verts {
            let p = Vec3::from(v.position);
            assert!(((p - center).length() - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_shading_stays_in_gamut() {
        let verts = sphere(Vec3::ZERO, 1.0, [0.8, 0.0, 0.1, 1.0], 8, 8);
        for v in &verts {
            for c in v.color {
                assert!((0.0..=1.0).contains(&c));
            }
            assert_eq!(v.color[3], 1.0);
        }
    }
}
