use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Smallest polar angle from +Y, keeps the view from flipping over the
/// poles.
const POLAR_EPSILON: f32 = 1.0e-3;

/// Orbit camera around a target point, with damped rotate/pan and
/// immediate zoom.
///
/// Input only accumulates pending motion; [`update`](Self::update), called
/// once per tick, applies a `damping` fraction of it.
#[derive(Debug, Clone)]
pub struct OrbitController {
    /// The controlled camera.
    pub camera: Camera,
    radius: f32,
    /// Angle around +Y, measured from +Z toward +X.
    azimuth: f32,
    /// Angle from +Y.
    polar: f32,
    pending_rotation: Vec2,
    pending_pan: Vec3,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    damping: f32,
}

impl OrbitController {
    /// Controller whose camera starts at the configured eye and target.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let eye = Vec3::from(options.eye);
        let target = Vec3::from(options.target);
        let offset = eye - target;
        let radius = offset.length().max(options.znear);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);

        let mut controller = Self {
            camera: Camera {
                eye,
                target,
                up: Vec3::Y,
                aspect,
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
            },
            radius,
            azimuth,
            polar: polar.clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON),
            pending_rotation: Vec2::ZERO,
            pending_pan: Vec3::ZERO,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            damping: options.damping.clamp(0.0, 1.0),
        };
        controller.update_camera_pos();
        controller
    }

    fn update_camera_pos(&mut self) {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let dir = Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az);
        self.camera.eye = self.camera.target + dir * self.radius;
    }

    /// Current eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Whether rotate or pan motion is still being applied.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending_rotation != Vec2::ZERO || self.pending_pan != Vec3::ZERO
    }

    /// Queue an orbit by `delta` pixels of pointer drag.
    pub fn rotate(&mut self, delta: Vec2) {
        self.pending_rotation += delta * self.rotate_speed;
    }

    /// Queue a pan by `delta` pixels of pointer drag.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.camera.right();
        let up = right.cross(self.camera.forward());
        let scale = self.pan_speed * self.radius;
        self.pending_pan += (right * -delta.x + up * delta.y) * scale;
    }

    /// Zoom by a scroll amount (positive = closer).
    pub fn zoom(&mut self, delta: f32) {
        self.radius *= 1.0 - delta * self.zoom_speed;
        self.radius = self
            .radius
            .clamp(self.camera.znear * 2.0, self.camera.zfar * 0.5);
        self.update_camera_pos();
    }

    /// Set the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Apply one tick of the pending motion. Returns `true` if the camera
    /// moved.
    pub fn update(&mut self) -> bool {
        if !self.is_settling() {
            return false;
        }
        let step = self.damping;
        let rotation = self.pending_rotation * step;
        let pan = self.pending_pan * step;

        self.azimuth -= rotation.x;
        self.polar = (self.polar - rotation.y)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
        self.camera.target += pan;

        self.pending_rotation -= rotation;
        self.pending_pan -= pan;
        if self.pending_rotation.length_squared() < 1.0e-12 {
            self.pending_rotation = Vec2::ZERO;
        }
        if self.pending_pan.length_squared() < 1.0e-12 {
            self.pending_pan = Vec3::ZERO;
        }

        self.update_camera_pos();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undamped() -> OrbitController {
        let options = CameraOptions {
            damping: 1.0,
            ..CameraOptions::default()
        };
        OrbitController::new(&options, 1.0)
    }

    #[test]
    fn starts_at_configured_eye() {
        let controller = OrbitController::new(&CameraOptions::default(), 1.0);
        assert!((controller.camera.eye - Vec3::splat(5.0)).length() < 1e-4);
        assert!((controller.distance() - 75.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn rotation_keeps_distance() {
        let mut controller = undamped();
        controller.rotate(Vec2::new(40.0, -15.0));
        assert!(controller.update());
        let distance = (controller.camera.eye - controller.camera.target).length();
        assert!((distance - controller.distance()).abs() < 1e-4);
        assert!((controller.camera.eye - Vec3::splat(5.0)).length() > 0.1);
        assert!(!controller.update());
    }

    #[test]
    fn damping_spreads_motion_over_ticks() {
        let mut controller = OrbitController::new(&CameraOptions::default(), 1.0);
        controller.rotate(Vec2::new(100.0, 0.0));
        assert!(controller.update());
        assert!(controller.is_settling());

        let mut reference = undamped();
        reference.rotate(Vec2::new(100.0, 0.0));
        let _ = reference.update();

        for _ in 0..2000 {
            let _ = controller.update();
        }
        assert!(!controller.is_settling());
        assert!((controller.camera.eye - reference.camera.eye).length() < 1e-3);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut controller = undamped();
        let offset = controller.camera.eye - controller.camera.target;
        controller.pan(Vec2::new(10.0, 0.0));
        let _ = controller.update();
        assert!(controller.camera.target.length() > 0.0);
        let new_offset = controller.camera.eye - controller.camera.target;
        assert!((new_offset - offset).length() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut controller = undamped();
        let before = controller.distance();
        controller.zoom(1.0);
        assert!(controller.distance() < before);
        for _ in 0..500 {
            controller.zoom(10.0);
        }
        assert!((controller.distance() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn resize_sets_aspect() {
        let mut controller = undamped();
        controller.resize(800, 400);
        assert_eq!(controller.camera.aspect, 2.0);
        controller.resize(0, 400);
        assert_eq!(controller.camera.aspect, 2.0);
    }
}
