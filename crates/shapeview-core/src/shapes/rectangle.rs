//! Rectangle and square geometry.

use super::ShapeGeometry;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Size};

/// An axis-aligned box drawn from an anchor corner to a drag corner.
///
/// In square mode the drag corner is pushed out so both sides equal the
/// larger of the two drag extents.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// First corner placed.
    pub anchor: Option<Point>,
    /// Corner the user dragged to.
    pub corner: Option<Point>,
    /// Constrain to equal sides.
    pub square: bool,
}

impl Frame {
    pub fn rectangle() -> Self {
        Self::default()
    }

    pub fn square() -> Self {
        Self {
            square: true,
            ..Self::default()
        }
    }

    /// Opposite corner after the square constraint is applied.
    fn effective_corner(&self) -> Option<Point> {
        let anchor = self.anchor?;
        let corner = self.corner.unwrap_or(anchor);
        if !self.square {
            return Some(corner);
        }
        let dx = corner.x - anchor.x;
        let dy = corner.y - anchor.y;
        let side = dx.abs().max(dy.abs());
        Some(Point::new(
            anchor.x + side.copysign(dx),
            anchor.y + side.copysign(dy),
        ))
    }

    /// The box as a kurbo Rect (`Rect::ZERO` before the first point).
    pub fn as_rect(&self) -> Rect {
        match (self.anchor, self.effective_corner()) {
            (Some(anchor), Some(corner)) => Rect::from_points(anchor, corner),
            _ => Rect::ZERO,
        }
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        self.as_rect().size()
    }
}

impl ShapeGeometry for Frame {
    fn push_point(&mut self, point: Point) {
        if self.anchor.is_none() {
            self.anchor = Some(point);
        } else {
            self.corner = Some(point);
        }
    }

    fn point_count(&self) -> usize {
        usize::from(self.anchor.is_some()) + usize::from(self.corner.is_some())
    }

    fn control_points(&self) -> Vec<Point> {
        self.anchor.into_iter().chain(self.corner).collect()
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.anchor.is_none() {
            return false;
        }
        // Outline only: hit on the border
        let rect = self.as_rect();
        let outer = rect.inflate(tolerance, tolerance);
        let inner = rect.inflate(-tolerance, -tolerance);
        let inside_inner = inner.width() > 0.0 && inner.height() > 0.0 && inner.contains(point);
        outer.contains(point) && !inside_inner
    }

    fn to_path(&self) -> BezPath {
        if self.anchor.is_none() {
            return BezPath::new();
        }
        self.as_rect().to_path(0.1)
    }
}
