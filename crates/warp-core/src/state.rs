//! Camera description shared with the frontends.
//!
//! These types avoid platform-specific APIs; the native spiral scene uses
//! them to project block anchors from a rig [`Pose`].

use crate::constants::{CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::pose::Pose;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at the pose's position looking down its rotated -Z axis.
    pub fn from_pose(pose: &Pose, aspect: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.position + pose.forward(),
            up: pose.rotation * Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to pixel coordinates (origin top-left).
    ///
    /// Returns the pixel position and the view-space depth, or `None` when
    /// the point is behind the camera.
    pub fn world_to_screen(&self, world: Vec3, viewport: Vec2) -> Option<(Vec2, f32)> {
        let clip = self.view_proj() * Vec4::from((world, 1.0));
        if clip.w <= self.znear {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let px = Vec2::new(
            (ndc.x * 0.5 + 0.5) * viewport.x,
            (1.0 - (ndc.y * 0.5 + 0.5)) * viewport.y,
        );
        Some((px, clip.w))
    }
}
