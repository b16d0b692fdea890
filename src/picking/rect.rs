use glam::Vec2;

/// A viewport's region of the window, in window pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl ViewportRect {
    /// Rectangle with the given origin and size.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Width over height, or 1 for empty rectangles.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Whether the window pixel lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        !self.is_empty()
            && px >= self.x
            && px < self.x + self.width
            && py >= self.y
            && py < self.y + self.height
    }

    /// Normalize a window pixel against this rectangle.
    ///
    /// Returns NDC with x to the right and y up, both in `[-1, 1]`, or
    /// `None` if the pixel is outside the rectangle.
    #[must_use]
    pub fn to_ndc(&self, px: f32, py: f32) -> Option<Vec2> {
        if !self.contains(px, py) {
            return None;
        }
        let nx = (px - self.x) / self.width * 2.0 - 1.0;
        let ny = -((py - self.y) / self.height * 2.0 - 1.0);
        Some(Vec2::new(nx, ny))
    }
}
