//! Application shell: configuration and the script runner.

use crate::screen::{Screen, ScreenError, ScreenFlavor, ScreenModel};
use crate::script::{parse_line, ScriptError};
use serde::{Deserialize, Serialize};
use shapeview_core::{Canvas, CanvasConfig, ConfigError, ShapeRegistry};
use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// Application configuration.
///
/// A desktop flavor without an explicit `rotation_policy` gets the
/// rotate-tool gated policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AppConfigFile")]
pub struct AppConfig {
    pub flavor: ScreenFlavor,
    pub canvas: CanvasConfig,
}

/// On-disk shape of [`AppConfig`]; `canvas` stays raw until the flavor is known.
#[derive(Deserialize, Default)]
#[serde(default)]
struct AppConfigFile {
    flavor: ScreenFlavor,
    canvas: serde_json::Value,
}

impl TryFrom<AppConfigFile> for AppConfig {
    type Error = serde_json::Error;

    fn try_from(file: AppConfigFile) -> Result<Self, Self::Error> {
        let mut config = Self::for_flavor(file.flavor);
        if file.canvas.is_null() {
            return Ok(config);
        }
        let policy_given = file.canvas.get("rotation_policy").is_some();
        let preset = config.canvas.rotation_policy;
        config.canvas = serde_json::from_value(file.canvas)?;
        if !policy_given {
            config.canvas.rotation_policy = preset;
        }
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_flavor(ScreenFlavor::default())
    }
}

impl AppConfig {
    /// Configuration preset for a flavor. The desktop layout gates rotation
    /// behind its rotate tool checkbox.
    pub fn for_flavor(flavor: ScreenFlavor) -> Self {
        let mut canvas = CanvasConfig::default();
        if flavor == ScreenFlavor::Desktop {
            canvas.rotation_policy = shapeview_core::RotationPolicy::RotateToolGated;
        }
        Self { flavor, canvas }
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("line {line}: {source}")]
    Screen { line: usize, source: ScreenError },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A screen driven by command scripts.
pub struct App {
    screen: Screen,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        log::info!("Creating {:?} screen", config.flavor);
        let canvas = Canvas::with_config(config.canvas);
        Self {
            screen: Screen::new(canvas, ShapeRegistry::standard(), config.flavor),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Run every command in `input`, writing the info panel to `output`
    /// whenever its text or dial changes.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<(), AppError> {
        let registry = ShapeRegistry::standard();
        let mut shown = self.screen.model();
        for (index, text) in input.lines().enumerate() {
            let line = index + 1;
            let text = text?;
            let Some(action) = parse_line(&registry, line, &text)? else {
                continue;
            };
            self.screen
                .handle(action)
                .map_err(|source| AppError::Screen { line, source })?;

            let model = self.screen.model();
            if model.info_text != shown.info_text || model.rotation != shown.rotation {
                write_panel(&mut output, &model)?;
            }
            shown = model;
        }
        log::info!("Script done, {} item(s) on canvas", self.screen.canvas().len());
        Ok(())
    }
}

fn write_panel(output: &mut impl Write, model: &ScreenModel) -> std::io::Result<()> {
    writeln!(output, "{}", model.info_text.trim_end())?;
    if model.rotation.enabled {
        writeln!(output, "  dial: {:.1}", model.rotation.degrees)?;
    }
    writeln!(output, "---")
}
