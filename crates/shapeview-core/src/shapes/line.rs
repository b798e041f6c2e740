//! Line and polyline geometry.

use super::ShapeGeometry;
use crate::geometry::{point_to_polyline_dist, point_to_segment_dist};
use kurbo::{BezPath, Point, Rect};

/// Bounding box of a set of points (`Rect::ZERO` when empty).
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let Some((first, rest)) = points.split_first() else {
        return Rect::ZERO;
    };
    rest.iter()
        .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
}

/// Open path through a set of points.
pub(crate) fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

/// A single segment drawn with two points.
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// Start point.
    pub start: Option<Point>,
    /// End point.
    pub end: Option<Point>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the segment. A missing end coincides with the start.
    pub fn length(&self) -> f64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.distance(end),
            _ => 0.0,
        }
    }
}

impl ShapeGeometry for Line {
    fn push_point(&mut self, point: Point) {
        if self.start.is_none() {
            self.start = Some(point);
        } else {
            self.end = Some(point);
        }
    }

    fn point_count(&self) -> usize {
        usize::from(self.start.is_some()) + usize::from(self.end.is_some())
    }

    fn control_points(&self) -> Vec<Point> {
        self.start.into_iter().chain(self.end).collect()
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.control_points())
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => point_to_segment_dist(point, start, end) <= tolerance,
            (Some(start), None) => point.distance(start) <= tolerance,
            _ => false,
        }
    }

    fn to_path(&self) -> BezPath {
        polyline_path(&self.control_points())
    }
}

/// An open chain of segments that grows until finished.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// Vertices in the order they were placed.
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of each segment in creation order.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .collect()
    }

    /// Total length of the chain.
    pub fn total_length(&self) -> f64 {
        self.segment_lengths().iter().sum()
    }
}

impl ShapeGeometry for Polyline {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let mut line = Line::new();
        assert_eq!(line.length(), 0.0);
        line.push_point(Point::new(0.0, 0.0));
        assert_eq!(line.length(), 0.0);
        line.push_point(Point::new(3.0, 4.0));
        assert!((line.length() - 5.0).abs() < f64::EPSILON);
        assert_eq!(line.point_count(), 2);
    }

    #[test]
    fn test_line_hit_test() {
        let mut line = Line::new();
        line.push_point(Point::new(0.0, 0.0));
        line.push_point(Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 2.0), 5.0));
        assert!(!line.hit_test(Point::new(50.0, 20.0), 5.0));
        assert!(line.hit_test(Point::new(100.0, 0.0), 1.0));
    }

    #[test]
    fn test_polyline_segments() {
        let mut polyline = Polyline::new();
        for p in [(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)] {
            polyline.push_point(Point::new(p.0, p.1));
        }
        assert_eq!(polyline.segment_lengths(), vec![5.0, 6.0]);
        assert!((polyline.total_length() - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_polyline() {
        let polyline = Polyline::new();
        assert!(polyline.segment_lengths().is_empty());
        assert_eq!(polyline.bounds(), Rect::ZERO);
        assert!(polyline.to_path().elements().is_empty());
        assert!(!polyline.hit_test(Point::ZERO, 10.0));
    }

    #[test]
    fn test_bounds() {
        let mut polyline = Polyline::new();
        for p in [(10.0, 20.0), (50.0, 80.0), (30.0, 5.0)] {
            polyline.push_point(Point::new(p.0, p.1));
        }
        let bounds = polyline.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }
}
