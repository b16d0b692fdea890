//! Static scene furniture: axis arrows and grid planes.
//!
//! Only the geometry description lives here; the backend turns it into
//! meshes. Scaffolding does not depend on the node feed and is handed to a
//! viewport as soon as it is created.

use glam::{Quat, Vec3};

use crate::options::hex_rgb;

/// An arrow from `start` to `end`: a cylinder shaft capped by a cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisArrow {
    /// Tail of the shaft.
    pub start: Vec3,
    /// Tip of the cone.
    pub end: Vec3,
    /// RGB color of shaft and tip.
    pub color: [f32; 3],
    /// Shaft cylinder radius.
    pub shaft_radius: f32,
    /// Cone base radius.
    pub tip_radius: f32,
    /// Cone height.
    pub tip_height: f32,
}

impl AxisArrow {
    fn new(end: Vec3, color: [f32; 3]) -> Self {
        Self {
            start: Vec3::ZERO,
            end,
            color,
            shaft_radius: 0.02,
            tip_radius: 0.05,
            tip_height: 0.2,
        }
    }

    /// Unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Length of the cylinder part (total length minus the cone).
    #[must_use]
    pub fn shaft_length(&self) -> f32 {
        (self.end - self.start).length() - self.tip_height
    }

    /// Center of the shaft cylinder.
    #[must_use]
    pub fn shaft_center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
            - self.direction() * (self.tip_height / 2.0)
    }

    /// Center of the tip cone.
    #[must_use]
    pub fn tip_center(&self) -> Vec3 {
        self.end - self.direction() * (self.tip_height / 2.0)
    }

    /// Rotation taking the +Y mesh axis onto the arrow direction.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Y, self.direction())
    }
}

/// A square grid of lines centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlane {
    /// Plane normal.
    pub normal: Vec3,
    /// Edge length.
    pub size: f32,
    /// Number of cells along each edge.
    pub divisions: u32,
    /// Line opacity.
    pub opacity: f32,
}

impl GridPlane {
    /// Rotation taking a Y-up grid onto this plane.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Y, self.normal.normalize_or_zero())
    }
}

/// Axes and grids shared by every viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaffold {
    /// X (red), Y (green) and Z (blue) arrows.
    pub axes: [AxisArrow; 3],
    /// XY, YZ and ZX grid planes.
    pub grids: [GridPlane; 3],
}

impl Scaffold {
    /// Axes of the given lengths and square grids of `grid_size` with
    /// `divisions` cells.
    #[must_use]
    pub fn new(limits: Vec3, grid_size: f32, divisions: u32) -> Self {
        let grid = |normal| GridPlane {
            normal,
            size: grid_size,
            divisions,
            opacity: 0.9,
        };
        Self {
            axes: [
                AxisArrow::new(Vec3::X * limits.x, hex_rgb(0xff_00_00)),
                AxisArrow::new(Vec3::Y * limits.y, hex_rgb(0x00_ff_00)),
                AxisArrow::new(Vec3::Z * limits.z, hex_rgb(0x00_00_ff)),
            ],
            grids: [grid(Vec3::Z), grid(Vec3::X), grid(Vec3::Y)],
        }
    }
}

impl Default for Scaffold {
    fn default() -> Self {
        Self::new(Vec3::splat(5.0), 10.0, 10)
    }
}
