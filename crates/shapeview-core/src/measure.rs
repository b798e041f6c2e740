//! Measurable capabilities a shape item can expose.
//!
//! Each shape kind exposes at most one capability, fixed by its kind. The
//! measurement itself is a closed enum so the formatter can match on it.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// The kind of measurement a shape reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Ordered segment lengths.
    Distance,
    /// A single radius.
    Circular,
    /// Width and height.
    Rect,
    /// A single included angle.
    Angle,
    /// An acute/obtuse angle pair.
    GeneralizedAngle,
}

/// A concrete measurement read from a shape item.
///
/// Angles are in radians; lengths are in view units.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    /// Segment lengths in creation order.
    Distance(Vec<f64>),
    Circular { radius: f64 },
    Rect(Size),
    Angle(f64),
    GeneralizedAngle { acute: f64, obtuse: f64 },
}

impl Measurement {
    /// The capability this measurement belongs to.
    pub fn capability(&self) -> Capability {
        match self {
            Measurement::Distance(_) => Capability::Distance,
            Measurement::Circular { .. } => Capability::Circular,
            Measurement::Rect(_) => Capability::Rect,
            Measurement::Angle(_) => Capability::Angle,
            Measurement::GeneralizedAngle { .. } => Capability::GeneralizedAngle,
        }
    }
}
