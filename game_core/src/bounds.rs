use glam::Vec2;

/// Axis-aligned box described by its center and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center: Vec2,
    pub size: Vec2,
}

impl BoundingBox {
    /// Box of the given size centered on the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Strict overlap test: boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
