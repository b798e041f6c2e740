//! Human-readable measurement text.

use crate::geometry::{round_to_3, to_degrees};
use crate::measure::Measurement;
use crate::shapes::ShapeItem;

/// Render a number rounded to 3 decimals.
///
/// Whole numbers keep a trailing `.0` and no exponent is used in the
/// ranges a view produces.
pub fn format_number(num: f64) -> String {
    format!("{:?}", round_to_3(num))
}

/// Render an angle in radians as rounded degrees.
pub fn format_degrees(radians: f64) -> String {
    format_number(to_degrees(radians))
}

/// Measurement text for an item; empty when the item is not measurable.
pub fn describe(item: &ShapeItem) -> String {
    item.measurement()
        .map(|m| describe_measurement(&m))
        .unwrap_or_default()
}

/// Measurement text for a measurement.
pub fn describe_measurement(measurement: &Measurement) -> String {
    match measurement {
        Measurement::Distance(distances) => distances
            .iter()
            .enumerate()
            .map(|(i, d)| format!("[{:2}] {}\n", i + 1, format_number(*d)))
            .collect(),
        Measurement::Circular { radius } => format!("Radius: {}", format_number(*radius)),
        Measurement::Rect(size) => format!(
            "Width : {}\nHeight: {}",
            format_number(size.width),
            format_number(size.height)
        ),
        Measurement::Angle(angle) => format!("Angle: {}", format_degrees(*angle)),
        Measurement::GeneralizedAngle { acute, obtuse } => format!(
            "Acute Angle : {}\nObtuse Angle: {}",
            format_degrees(*acute),
            format_degrees(*obtuse)
        ),
    }
}
