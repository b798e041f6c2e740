//! ShapeView Application
//!
//! Headless shell around the core canvas: the screen widget model, the
//! command script that drives it, and application configuration.

mod app;
mod screen;
mod script;

pub use app::{App, AppConfig, AppError};
pub use screen::{RotationDial, Screen, ScreenAction, ScreenError, ScreenFlavor, ScreenModel};
pub use script::{parse_line, ScriptError};
