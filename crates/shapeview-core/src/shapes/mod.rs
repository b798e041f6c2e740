//! Shape items placed on the canvas.

mod circle;
mod freehand;
mod line;
mod protractor;
mod rectangle;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::{Line, Polyline};
pub use protractor::{GnProtractor, Protractor};
pub use rectangle::Frame;

use crate::geometry::normalize_angle;
use crate::measure::{Capability, Measurement};
use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tint color of a shape (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TintColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TintColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Format as `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Default for TintColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for TintColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<TintColor> for Color {
    fn from(tint: TintColor) -> Self {
        Color::from_rgba8(tint.r, tint.g, tint.b, tint.a)
    }
}

/// The kinds of shape the canvas can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Polyline,
    Rectangle,
    Square,
    Circle,
    Protractor,
    ExtendedProtractor,
    GeneralizedProtractor,
    Pencil,
}

impl ShapeKind {
    /// Every kind, in picker order.
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Line,
        ShapeKind::Polyline,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Protractor,
        ShapeKind::ExtendedProtractor,
        ShapeKind::GeneralizedProtractor,
        ShapeKind::Pencil,
    ];

    /// Number of control points that completes a shape of this kind.
    /// `None` for kinds that only finish on request.
    pub fn arity(self) -> Option<usize> {
        match self {
            ShapeKind::Line
            | ShapeKind::Rectangle
            | ShapeKind::Square
            | ShapeKind::Circle => Some(2),
            ShapeKind::Protractor | ShapeKind::ExtendedProtractor => Some(3),
            ShapeKind::GeneralizedProtractor => Some(4),
            ShapeKind::Polyline | ShapeKind::Pencil => None,
        }
    }

    /// Whether the kind grows until explicitly finished.
    pub fn is_unbounded(self) -> bool {
        self.arity().is_none()
    }

    /// The measurement this kind reports, if any.
    pub fn capability(self) -> Option<Capability> {
        match self {
            ShapeKind::Line | ShapeKind::Polyline => Some(Capability::Distance),
            ShapeKind::Circle => Some(Capability::Circular),
            ShapeKind::Rectangle | ShapeKind::Square => Some(Capability::Rect),
            ShapeKind::Protractor | ShapeKind::ExtendedProtractor => Some(Capability::Angle),
            ShapeKind::GeneralizedProtractor => Some(Capability::GeneralizedAngle),
            ShapeKind::Pencil => None,
        }
    }
}

/// Drawing progress of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawState {
    /// Still receiving control points.
    #[default]
    Drawing,
    /// Geometry is complete; only rotation and tint may change.
    Finished,
}

/// Unique identifier for shape items.
pub type ItemId = Uuid;

/// Behaviour shared by every geometry family.
pub trait ShapeGeometry {
    /// Append a control point.
    fn push_point(&mut self, point: Point);

    /// Number of control points supplied so far.
    fn point_count(&self) -> usize;

    /// Control points in the order they were supplied.
    fn control_points(&self) -> Vec<Point>;

    /// Bounding box in the unrotated frame.
    fn bounds(&self) -> Rect;

    /// Check if a point (unrotated frame) hits the outline.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Outline for rendering, unrotated.
    fn to_path(&self) -> BezPath;
}

/// Kind-specific geometry of an item.
#[derive(Debug, Clone)]
pub enum Geometry {
    Line(Line),
    Polyline(Polyline),
    Frame(Frame),
    Circle(Circle),
    Protractor(Protractor),
    GnProtractor(GnProtractor),
    Freehand(Freehand),
}

impl Geometry {
    /// Empty geometry for a kind.
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Line => Geometry::Line(Line::new()),
            ShapeKind::Polyline => Geometry::Polyline(Polyline::new()),
            ShapeKind::Rectangle => Geometry::Frame(Frame::rectangle()),
            ShapeKind::Square => Geometry::Frame(Frame::square()),
            ShapeKind::Circle => Geometry::Circle(Circle::new()),
            ShapeKind::Protractor => Geometry::Protractor(Protractor::new()),
            ShapeKind::ExtendedProtractor => Geometry::Protractor(Protractor::extended()),
            ShapeKind::GeneralizedProtractor => Geometry::GnProtractor(GnProtractor::new()),
            ShapeKind::Pencil => Geometry::Freehand(Freehand::new()),
        }
    }

    fn as_dyn(&self) -> &dyn ShapeGeometry {
        match self {
            Geometry::Line(g) => g,
            Geometry::Polyline(g) => g,
            Geometry::Frame(g) => g,
            Geometry::Circle(g) => g,
            Geometry::Protractor(g) => g,
            Geometry::GnProtractor(g) => g,
            Geometry::Freehand(g) => g,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn ShapeGeometry {
        match self {
            Geometry::Line(g) => g,
            Geometry::Polyline(g) => g,
            Geometry::Frame(g) => g,
            Geometry::Circle(g) => g,
            Geometry::Protractor(g) => g,
            Geometry::GnProtractor(g) => g,
            Geometry::Freehand(g) => g,
        }
    }

    /// Read the measurement this geometry supports.
    pub fn measurement(&self) -> Option<Measurement> {
        match self {
            Geometry::Line(l) => Some(Measurement::Distance(vec![l.length()])),
            Geometry::Polyline(p) => Some(Measurement::Distance(p.segment_lengths())),
            Geometry::Frame(f) => Some(Measurement::Rect(f.size())),
            Geometry::Circle(c) => Some(Measurement::Circular { radius: c.radius() }),
            Geometry::Protractor(p) => Some(Measurement::Angle(p.angle())),
            Geometry::GnProtractor(g) => {
                let (acute, obtuse) = g.angles();
                Some(Measurement::GeneralizedAngle { acute, obtuse })
            }
            Geometry::Freehand(_) => None,
        }
    }
}

/// One shape placed on (or being drawn onto) the canvas.
#[derive(Debug, Clone)]
pub struct ShapeItem {
    pub(crate) id: ItemId,
    kind: ShapeKind,
    geometry: Geometry,
    /// Rotation in radians, normalized into `[0, 2π)`.
    rotation_angle: f64,
    tint: TintColor,
    state: DrawState,
}

impl ShapeItem {
    /// Create an empty item of `kind` in the drawing state.
    pub fn new(kind: ShapeKind, tint: TintColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            geometry: Geometry::for_kind(kind),
            rotation_angle: 0.0,
            tint,
            state: DrawState::Drawing,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn tint(&self) -> TintColor {
        self.tint
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == DrawState::Finished
    }

    /// The capability this item exposes, fixed by its kind.
    pub fn capability(&self) -> Option<Capability> {
        self.kind.capability()
    }

    /// Current measurement, if the item is measurable.
    pub fn measurement(&self) -> Option<Measurement> {
        self.geometry.measurement()
    }

    /// Number of control points supplied so far.
    pub fn point_count(&self) -> usize {
        self.geometry.as_dyn().point_count()
    }

    /// Whether the item has all the points its kind needs.
    pub fn is_complete(&self) -> bool {
        self.kind
            .arity()
            .is_some_and(|arity| self.point_count() >= arity)
    }

    pub fn control_points(&self) -> Vec<Point> {
        self.geometry.as_dyn().control_points()
    }

    /// Bounding box in the unrotated frame.
    pub fn bounds(&self) -> Rect {
        self.geometry.as_dyn().bounds()
    }

    /// Outline in the unrotated frame.
    pub fn to_path(&self) -> BezPath {
        self.geometry.as_dyn().to_path()
    }

    /// Transform from the unrotated frame to the view, rotating about the
    /// bounds center.
    pub fn placement(&self) -> Affine {
        Affine::rotate_about(self.rotation_angle, self.bounds().center())
    }

    /// Outline as placed in the view.
    pub fn placed_path(&self) -> BezPath {
        self.placement() * self.to_path()
    }

    /// Check if a view point hits this item.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let local = self.placement().inverse() * point;
        self.geometry.as_dyn().hit_test(local, tolerance)
    }

    pub(crate) fn push_point(&mut self, point: Point) {
        self.geometry.as_dyn_mut().push_point(point);
    }

    pub(crate) fn finish(&mut self) {
        self.state = DrawState::Finished;
    }

    pub(crate) fn set_rotation_angle(&mut self, angle: f64) {
        self.rotation_angle = normalize_angle(angle);
    }

    pub(crate) fn set_tint(&mut self, tint: TintColor) {
        self.tint = tint;
    }
}

impl PartialEq for ShapeItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn item_with(kind: ShapeKind, points: &[(f64, f64)]) -> ShapeItem {
        let mut item = ShapeItem::new(kind, TintColor::black());
        for &(x, y) in points {
            item.push_point(Point::new(x, y));
        }
        item
    }

    #[test]
    fn test_measurement_matches_capability() {
        for kind in ShapeKind::ALL {
            let item = ShapeItem::new(kind, TintColor::black());
            assert_eq!(
                item.measurement().map(|m| m.capability()),
                kind.capability(),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn test_pencil_has_no_capability() {
        let item = item_with(ShapeKind::Pencil, &[(0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(item.capability(), None);
        assert_eq!(item.measurement(), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(ShapeKind::Line.arity(), Some(2));
        assert_eq!(ShapeKind::Protractor.arity(), Some(3));
        assert_eq!(ShapeKind::GeneralizedProtractor.arity(), Some(4));
        assert!(ShapeKind::Polyline.is_unbounded());
        assert!(ShapeKind::Pencil.is_unbounded());
    }

    #[test]
    fn test_is_complete() {
        let mut item = item_with(ShapeKind::Circle, &[(0.0, 0.0)]);
        assert!(!item.is_complete());
        item.push_point(Point::new(3.0, 4.0));
        assert!(item.is_complete());
        assert_eq!(item.measurement(), Some(Measurement::Circular { radius: 5.0 }));

        let polyline = item_with(ShapeKind::Polyline, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(!polyline.is_complete());
    }

    #[test]
    fn test_rotation_is_normalized() {
        let mut item = ShapeItem::new(ShapeKind::Line, TintColor::black());
        item.set_rotation_angle(-0.1);
        assert!((item.rotation_angle() - (TAU - 0.1)).abs() < 1e-12);
        item.set_rotation_angle(3.0 * PI);
        assert!((item.rotation_angle() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_hit_test_follows_rotation() {
        let mut item = item_with(ShapeKind::Line, &[(0.0, 0.0), (100.0, 0.0)]);
        assert!(item.hit_test(Point::new(50.0, 0.0), 1.0));
        assert!(!item.hit_test(Point::new(50.0, 40.0), 1.0));

        // Quarter turn about the midpoint (50, 0)
        item.set_rotation_angle(PI / 2.0);
        assert!(item.hit_test(Point::new(50.0, 40.0), 1.0));
        assert!(!item.hit_test(Point::new(90.0, 0.0), 1.0));
    }

    #[test]
    fn test_placed_path_bounds() {
        let mut item = item_with(ShapeKind::Rectangle, &[(0.0, 0.0), (100.0, 20.0)]);
        item.set_rotation_angle(PI / 2.0);
        let placed = kurbo::Shape::bounding_box(&item.placed_path());
        assert!((placed.width() - 20.0).abs() < 1e-6);
        assert!((placed.height() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_tint_color_conversion() {
        let tint = TintColor::new(10, 20, 30, 255);
        let color: Color = tint.into();
        assert_eq!(TintColor::from(color), tint);
        assert_eq!(tint.to_hex(), "#0a141eff");
    }
}
