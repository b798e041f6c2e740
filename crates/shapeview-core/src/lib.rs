//! ShapeView Core Library
//!
//! Platform-agnostic shape editing engine: shape items and their
//! measurements, the canvas state machine, and measurement text.

pub mod canvas;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod geometry;
pub mod measure;
pub mod registry;
pub mod shapes;

pub use canvas::{Canvas, TintTarget};
pub use config::{CanvasConfig, RotationPolicy};
pub use error::{CanvasError, CanvasResult, ConfigError};
pub use events::{CanvasEvent, CanvasObserver};
pub use format::describe;
pub use measure::{Capability, Measurement};
pub use registry::{ShapeEntry, ShapeRegistry};
pub use shapes::{DrawState, ItemId, ShapeItem, ShapeKind, TintColor};
