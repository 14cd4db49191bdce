//! Fixed perspective camera
//!
//! The camera sits at the origin looking down -Z; the whole scene lives at
//! a fixed depth in front of it. Only the aspect ratio ever changes, on
//! window resize.

use glam::{Mat4, Vec3};

use crate::consts::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

pub struct Camera {
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,

    // Cached matrices
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Camera for a surface of the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Recompute the projection for a resized surface. Both dimensions are
    /// floored at 1 so a minimized window cannot divide by zero.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        self.aspect = width as f32 / height as f32;
        self.update_matrices();
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Combined view-projection matrix for the camera uniform
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    fn update_matrices(&mut self) {
        self.view_matrix = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// Project a world point to normalized device coordinates
    pub fn world_to_ndc(&self, world_pos: Vec3) -> Vec3 {
        let clip = self.view_projection_matrix() * world_pos.extend(1.0);
        Vec3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCENE_DEPTH;

    #[test]
    fn test_aspect_from_viewport() {
        let camera = Camera::new(640, 480);
        assert!((camera.aspect() - 640.0 / 480.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_viewport_is_floored() {
        let mut camera = Camera::new(640, 480);
        camera.set_viewport(0, 0);
        assert!((camera.aspect() - 1.0).abs() < 1e-6);
        assert!(camera.view_projection_matrix().is_finite());
    }

    #[test]
    fn test_scene_center_projects_to_screen_center() {
        let camera = Camera::new(640, 480);
        let ndc = camera.world_to_ndc(Vec3::new(0.0, 0.0, SCENE_DEPTH));
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        // In front of the camera, inside the depth range
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_arena_fits_in_view() {
        let camera = Camera::new(640, 480);
        // Top of the playfield at scene depth stays on screen
        let ndc = camera.world_to_ndc(Vec3::new(0.0, 9.5, SCENE_DEPTH));
        assert!(ndc.y > 0.0 && ndc.y < 1.0);
    }
}
