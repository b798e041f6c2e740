//! Circle geometry.

use super::ShapeGeometry;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};

/// A circle drawn from its center out to a rim point.
#[derive(Debug, Clone, Default)]
pub struct Circle {
    /// Center point.
    pub center: Option<Point>,
    /// A point on the circumference.
    pub rim: Option<Point>,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(&self) -> f64 {
        match (self.center, self.rim) {
            (Some(center), Some(rim)) => center.distance(rim),
            _ => 0.0,
        }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> Option<KurboCircle> {
        self.center.map(|c| KurboCircle::new(c, self.radius()))
    }
}

impl ShapeGeometry for Circle {
    fn push_point(&mut self, point: Point) {
        if self.center.is_none() {
            self.center = Some(point);
        } else {
            self.rim = Some(point);
        }
    }

    fn point_count(&self) -> usize {
        usize::from(self.center.is_some()) + usize::from(self.rim.is_some())
    }

    fn control_points(&self) -> Vec<Point> {
        self.center.into_iter().chain(self.rim).collect()
    }

    fn bounds(&self) -> Rect {
        self.as_kurbo()
            .map(|c| c.bounding_box())
            .unwrap_or(Rect::ZERO)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let Some(center) = self.center else {
            return false;
        };
        (point.distance(center) - self.radius()).abs() <= tolerance
    }

    fn to_path(&self) -> BezPath {
        match self.as_kurbo() {
            Some(c) if c.radius > 0.0 => c.to_path(0.1),
            _ => BezPath::new(),
        }
    }
}
