//! Protractor geometry: a vertex with two arms, or two free arms.

use super::line::{points_bounds, polyline_path};
use super::ShapeGeometry;
use crate::geometry::{included_angle, point_to_polyline_dist, sweep_angle};
use kurbo::{Arc, BezPath, Point, Rect, Shape as KurboShape, Vec2};
use std::f64::consts::PI;

/// Fraction of the shorter arm used as the radius of the angle marker.
const MARKER_RADIUS_RATIO: f64 = 0.25;

/// Two arms joined at a vertex.
///
/// The plain protractor reads the included angle in `[0, π]`. The extended
/// one reads the directed sweep from the first arm to the second in
/// `[0, 2π)`, so it can report reflex angles.
#[derive(Debug, Clone, Default)]
pub struct Protractor {
    /// Vertex, first arm end, second arm end.
    pub points: Vec<Point>,
    /// Measure the directed sweep instead of the included angle.
    pub extended: bool,
}

impl Protractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extended() -> Self {
        Self {
            extended: true,
            ..Self::default()
        }
    }

    pub fn vertex(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Arm vectors from the vertex. Missing arm ends coincide with the last
    /// supplied point.
    fn arms(&self) -> Option<(Vec2, Vec2)> {
        let vertex = self.vertex()?;
        let last = *self.points.last()?;
        let first = self.points.get(1).copied().unwrap_or(last);
        let second = self.points.get(2).copied().unwrap_or(last);
        Some((first - vertex, second - vertex))
    }

    /// The measured angle in radians.
    pub fn angle(&self) -> f64 {
        match self.arms() {
            Some((a, b)) if self.extended => sweep_angle(a, b),
            Some((a, b)) => included_angle(a, b),
            None => 0.0,
        }
    }

    /// First arm end, vertex, second arm end.
    fn arm_chain(&self) -> Vec<Point> {
        let mut chain: Vec<Point> = Vec::with_capacity(3);
        chain.extend(self.points.get(1));
        chain.extend(self.points.first());
        chain.extend(self.points.get(2));
        chain
    }

    /// Arc marking the measured angle at the vertex.
    fn marker(&self) -> Option<Arc> {
        let vertex = self.vertex()?;
        let (a, b) = self.arms()?;
        let radius = a.hypot().min(b.hypot()) * MARKER_RADIUS_RATIO;
        if radius <= 0.0 {
            return None;
        }
        let sweep = if self.extended {
            self.angle()
        } else {
            a.cross(b).atan2(a.dot(b))
        };
        Some(Arc {
            center: vertex,
            radii: Vec2::new(radius, radius),
            start_angle: a.atan2(),
            sweep_angle: sweep,
            x_rotation: 0.0,
        })
    }
}

impl ShapeGeometry for Protractor {
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
        point_to_polyline_dist(point, &self.arm_chain()) <= tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = polyline_path(&self.arm_chain());
        if let Some(arc) = self.marker() {
            path.extend(arc.path_elements(0.1));
        }
        path
    }
}

/// Two independent arms whose crossing angle is measured.
///
/// Reports the acute angle between the arm lines and its supplement.
#[derive(Debug, Clone, Default)]
pub struct GnProtractor {
    /// First arm start/end, then second arm start/end.
    pub points: Vec<Point>,
}

impl GnProtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn arm(&self, index: usize) -> Option<Vec2> {
        let start = *self.points.get(index * 2)?;
        let end = self.points.get(index * 2 + 1)?;
        Some(*end - start)
    }

    /// `(acute, obtuse)` in radians. Until both arms exist the arms are
    /// treated as parallel.
    pub fn angles(&self) -> (f64, f64) {
        let theta = match (self.arm(0), self.arm(1)) {
            (Some(a), Some(b)) => included_angle(a, b),
            _ => 0.0,
        };
        let acute = theta.min(PI - theta);
        (acute, PI - acute)
    }
}

impl ShapeGeometry for GnProtractor {
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
        self.points
            .chunks(2)
            .any(|arm| point_to_polyline_dist(point, arm) <= tolerance)
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for arm in self.points.chunks(2) {
            path.extend(polyline_path(arm).elements().iter().copied());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn protractor(extended: bool, pts: &[(f64, f64)]) -> Protractor {
        let mut p = if extended { Protractor::extended() } else { Protractor::new() };
        for &(x, y) in pts {
            p.push_point(Point::new(x, y));
        }
        p
    }

    #[test]
    fn test_right_angle() {
        let p = protractor(false, &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!((p.angle() - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_included_angle_is_undirected() {
        let p = protractor(false, &[(0.0, 0.0), (10.0, 0.0), (0.0, -10.0)]);
        assert!((p.angle() - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_extended_reads_reflex() {
        let p = protractor(true, &[(0.0, 0.0), (10.0, 0.0), (0.0, -10.0)]);
        assert!((p.angle() - 1.5 * PI).abs() < EPS);
    }

    #[test]
    fn test_partial_protractor() {
        let p = protractor(false, &[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(p.angle(), 0.0);
        assert_eq!(Protractor::new().angle(), 0.0);
    }

    #[test]
    fn test_protractor_hit_test() {
        let p = protractor(false, &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(p.hit_test(Point::new(5.0, 0.5), 1.0));
        assert!(p.hit_test(Point::new(0.5, 5.0), 1.0));
        assert!(!p.hit_test(Point::new(5.0, 5.0), 1.0));
    }

    #[test]
    fn test_gn_angles() {
        let mut g = GnProtractor::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 0.0), (-10.0, 10.0)] {
            g.push_point(Point::new(x, y));
        }
        let (acute, obtuse) = g.angles();
        assert!((acute - PI / 4.0).abs() < EPS);
        assert!((obtuse - 3.0 * PI / 4.0).abs() < EPS);
        assert!((acute + obtuse - PI).abs() < EPS);
    }

    #[test]
    fn test_gn_single_arm_is_parallel() {
        let mut g = GnProtractor::new();
        g.push_point(Point::new(0.0, 0.0));
        g.push_point(Point::new(10.0, 0.0));
        g.push_point(Point::new(0.0, 5.0));
        assert_eq!(g.angles(), (0.0, PI));
    }
}
