use crate::math::Vec2;

/// Axis-aligned bounding box in local drawable space.
///
/// The zero box `(0,0)-(0,0)` is a sentinel meaning "no geometry"; consumers
/// that offset against a box treat it as a degenerate point at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Aabb2 { min, max }
    }

    pub fn zero() -> Self {
        Aabb2::new(Vec2::ZERO, Vec2::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    pub fn from_points(points: &[Vec2]) -> Self {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return Self::zero();
        };
        let mut min = *first;
        let mut max = *first;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Aabb2::new(min, max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }
}
