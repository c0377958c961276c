//! Integer geometry for figure extents

/// A 2D point in solver coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box given by its lower and upper corners
///
/// The corners are not validated: a box whose `lower` exceeds its `upper`
/// reports a negative width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub lower: Point,
    pub upper: Point,
}

impl BoundingBox {
    pub fn new(lower: Point, upper: Point) -> Self {
        Self { lower, upper }
    }

    /// A zero-sized box at the origin, the seed of a canvas
    pub fn zero() -> Self {
        Self::new(Point::new(0, 0), Point::new(0, 0))
    }

    /// Grow this box to the smallest box containing both `self` and `other`
    pub fn include(&mut self, other: &BoundingBox) {
        self.lower.x = self.lower.x.min(other.lower.x);
        self.lower.y = self.lower.y.min(other.lower.y);
        self.upper.x = self.upper.x.max(other.upper.x);
        self.upper.y = self.upper.y.max(other.upper.y);
    }

    pub fn width(&self) -> i64 {
        self.upper.x - self.lower.x
    }

    pub fn height(&self) -> i64 {
        self.upper.y - self.lower.y
    }

    /// Value for an SVG `viewBox` attribute: `min-x min-y width height`
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.lower.x,
            self.lower.y,
            self.width(),
            self.height()
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x0: i64, y0: i64, x1: i64, y1: i64) -> BoundingBox {
        BoundingBox::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn test_view_box() {
        assert_eq!(bbox(2, 2, 8, 8).view_box(), "2 2 6 6");
        assert_eq!(bbox(-3, -4, 1, 1).view_box(), "-3 -4 4 5");
    }

    #[test]
    fn test_inverted_box_is_not_clamped() {
        let b = bbox(5, 5, 1, 2);
        assert_eq!(b.width(), -4);
        assert_eq!(b.height(), -3);
        assert_eq!(b.view_box(), "5 5 -4 -3");
    }

    #[test]
    fn test_include_is_union() {
        let mut acc = bbox(0, 0, 1, 1);
        acc.include(&bbox(-2, 3, 4, 5));
        assert_eq!(acc, bbox(-2, 0, 4, 5));
    }

    #[test]
    fn test_include_contained_is_idempotent() {
        let mut acc = bbox(0, 0, 10, 10);
        acc.include(&bbox(2, 2, 3, 3));
        assert_eq!(acc, bbox(0, 0, 10, 10));
        acc.include(&bbox(2, 2, 3, 3));
        assert_eq!(acc, bbox(0, 0, 10, 10));
    }

    #[test]
    fn test_include_order_independent() {
        let boxes = [
            bbox(1, 1, 2, 2),
            bbox(-5, 0, 0, 7),
            bbox(3, -2, 9, 1),
            bbox(0, 0, 0, 0),
        ];
        let mut forward = BoundingBox::zero();
        for b in &boxes {
            forward.include(b);
        }
        let mut backward = BoundingBox::zero();
        for b in boxes.iter().rev() {
            backward.include(b);
        }
        // (a ∪ b) ∪ c == a ∪ (b ∪ c)
        let mut grouped = boxes[1];
        grouped.include(&boxes[2]);
        let mut nested = boxes[0];
        nested.include(&grouped);
        nested.include(&boxes[3]);

        assert_eq!(forward, backward);
        assert_eq!(forward, nested);
        assert_eq!(forward, bbox(-5, -2, 9, 7));
    }

    #[test]
    fn test_zero_seed_keeps_origin() {
        let mut canvas = BoundingBox::zero();
        canvas.include(&bbox(2, 2, 8, 8));
        assert_eq!(canvas.view_box(), "0 0 8 8");
    }
}
