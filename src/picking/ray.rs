use glam::Vec3;

/// A half-line in world space with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction (zero if constructed from a zero vector).
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the first point where the ray meets the sphere, if any.
    ///
    /// When the origin is inside the sphere this is the exit point.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_sphere_in_front() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        let t = ray.intersect_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-6);
        assert!((ray.at(t) - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-6);
    }

    #[test]
    fn misses_sphere_off_axis_or_behind() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(ray.intersect_sphere(Vec3::new(2.0, 0.0, -5.0), 1.0).is_none());
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_sphere(Vec3::ZERO, 0.5).unwrap();
        assert!((t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_direction_never_hits_outside_spheres() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(ray.intersect_sphere(Vec3::X * 3.0, 1.0).is_none());
    }
}
