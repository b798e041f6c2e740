//! Catalogue of drawable shapes shown in the shape picker.

use crate::shapes::ShapeKind;

/// A picker entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeEntry {
    pub name: &'static str,
    pub kind: ShapeKind,
}

impl ShapeEntry {
    pub const fn new(name: &'static str, kind: ShapeKind) -> Self {
        Self { name, kind }
    }
}

/// Display names for every kind, in picker order.
const STANDARD_SHAPES: [ShapeEntry; 9] = [
    ShapeEntry::new("Line", ShapeKind::Line),
    ShapeEntry::new("Polyline", ShapeKind::Polyline),
    ShapeEntry::new("Rectangle", ShapeKind::Rectangle),
    ShapeEntry::new("Square", ShapeKind::Square),
    ShapeEntry::new("Circle", ShapeKind::Circle),
    ShapeEntry::new("Protractor", ShapeKind::Protractor),
    ShapeEntry::new("ExProtractor", ShapeKind::ExtendedProtractor),
    ShapeEntry::new("GnProtractor", ShapeKind::GeneralizedProtractor),
    ShapeEntry::new("Pencil", ShapeKind::Pencil),
];

/// Ordered mapping from display name to shape kind.
///
/// Built once at startup; iteration order is presentation order.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    entries: Vec<ShapeEntry>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every built-in shape.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_SHAPES.to_vec(),
        }
    }

    /// Append an entry. Registering an existing name replaces its kind in place.
    pub fn register(&mut self, name: &'static str, kind: ShapeKind) -> &mut Self {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.kind = kind,
            None => self.entries.push(ShapeEntry::new(name, kind)),
        }
        self
    }

    /// All entries in presentation order.
    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    /// Kind of the entry at `index`.
    pub fn kind_for(&self, index: usize) -> Option<ShapeKind> {
        self.entries.get(index).map(|e| e.kind)
    }

    /// Kind registered under `name`.
    pub fn kind_named(&self, name: &str) -> Option<ShapeKind> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.kind)
    }

    /// Display names in presentation order.
    pub fn all_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
