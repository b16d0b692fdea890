use glam::{Mat4, Vec2, Vec3};

use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Unit vector from the eye toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Unit vector pointing to the right of the view.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Ray from the eye through the point at `ndc` (x right, y up, both in
    /// `[-1, 1]`).
    #[must_use]
    pub fn pointer_ray(&self, ndc: Vec2) -> Ray {
        let inverse = self.build_matrix().inverse();
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.eye, far - self.eye)
    }

    /// Project a world point to NDC. `None` if it is behind the eye.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.build_matrix() * world.extend(1.0);
        if clip.w <= 1.0e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        ndc.is_finite().then_some(ndc.truncate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.5,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn center_ray_points_at_target() {
        let ray = camera().pointer_ray(Vec2::ZERO);
        assert!((ray.origin - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn pointer_ray_hits_projected_point() {
        let cam = camera();
        let world = Vec3::new(1.5, -2.0, 1.0);
        let ndc = cam.project(world).unwrap();
        let ray = cam.pointer_ray(ndc);
        let to_point = (world - ray.origin).normalize();
        assert!((to_point - ray.direction).length() < 1e-3);
    }

    #[test]
    fn right_vector_is_positive_x_looking_down_negative_z() {
        assert!((camera().right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn points_behind_eye_do_not_project() {
        assert!(camera().project(Vec3::new(0.0, 0.0, 20.0)).is_none());
    }
}
