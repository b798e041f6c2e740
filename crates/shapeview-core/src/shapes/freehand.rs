//! Freehand pencil stroke.

use super::line::{points_bounds, polyline_path};
use super::ShapeGeometry;
use crate::geometry::point_to_polyline_dist;
use kurbo::{BezPath, Point, Rect};

/// A freehand stroke (series of points). Reports no measurement.
#[derive(Debug, Clone, Default)]
pub struct Freehand {
    /// Points in the stroke.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Create a new empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the stroke is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ShapeGeometry for Freehand {
    fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn control_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_polyline_dist(point, &self.points) <= tolerance
    }

    fn to_path(&self) -> BezPath {
        polyline_path(&self.points)
    }
}
