use glam::{Mat4, Vec3};

use crate::types::{CameraUniform, Viewport};

pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 6.0;

/// Perspective camera looking down -Z at the object column
pub struct Camera {
    pub position: Vec3,
    pub fov_y_degrees: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            fov_y_degrees: CAMERA_FOV_DEGREES,
            aspect_ratio,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    /// Map scroll position to vertical travel: one viewport height of scroll
    /// moves the camera down one object slot
    pub fn follow_scroll(&mut self, scroll_offset: f32, viewport: Viewport, spacing: f32) {
        self.position.y = -scroll_offset / viewport.height * spacing;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn view_proj(&self) -> Mat4 {
        let projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        );
        let view = Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y);
        projection * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        // The camera never rolls or orbits, so billboard axes are the world axes
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            right: Vec3::X.to_array(),
            _pad1: 0.0,
            up: Vec3::Y.to_array(),
            _pad2: 0.0,
            position: self.position.to_array(),
            _pad3: 0.0,
        }
    }
}
