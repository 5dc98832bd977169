use crate::wad::types::Point;

/// Axis-aligned extent of a level's vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Extent containing nothing; the first expanded point replaces both
    /// corners.
    pub fn empty() -> Self {
        Self {
            min: Point::new(i16::MAX, i16::MAX),
            max: Point::new(i16::MIN, i16::MIN),
        }
    }

    pub fn expand(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Translation that moves `min` onto the origin. Widened to `i32`
    /// because negating `i16::MIN` does not fit in `i16`.
    pub fn shift(&self) -> (i32, i32) {
        (-i32::from(self.min.x), -i32::from(self.min.y))
    }
}
